pub mod list;
pub mod roll;
pub mod skills;
pub mod stats;
pub mod table;

use ficha_mechanics::Skill;

/// Parse a `NAME=BONUS` skill argument.
fn parse_skill_arg(arg: &str) -> Result<(Skill, i32), String> {
    let (name, bonus) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=BONUS, got '{arg}'"))?;
    let skill = Skill::parse(name).map_err(|e| e.to_string())?;
    let bonus = bonus
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("invalid bonus for {skill}: '{}'", bonus.trim()))?;
    Ok((skill, bonus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_skill_args() {
        assert_eq!(parse_skill_arg("stealth=2").unwrap(), (Skill::Stealth, 2));
        assert_eq!(
            parse_skill_arg("Sleight of Hand = 4").unwrap(),
            (Skill::SleightOfHand, 4)
        );
    }

    #[test]
    fn rejects_bad_skill_args() {
        assert!(parse_skill_arg("stealth").unwrap_err().contains("NAME=BONUS"));
        assert!(parse_skill_arg("cooking=1").unwrap_err().contains("unknown skill"));
        assert!(parse_skill_arg("stealth=lots").unwrap_err().contains("invalid bonus"));
    }
}
