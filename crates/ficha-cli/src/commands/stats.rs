use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ficha_mechanics::stats::{format_modifier, point_buy_cost};
use ficha_mechanics::{AbilityScores, POINT_BUY_BUDGET, Skill, SkillBonuses, proficiency_bonus};

pub struct StatsInput {
    /// Scores in canonical order (STR, DEX, CON, INT, WIS, CHA).
    pub scores: [i32; 6],
    pub level: i32,
    /// Raw `NAME=BONUS` arguments.
    pub skills: Vec<String>,
    pub json: bool,
}

pub fn run(input: &StatsInput) -> Result<(), String> {
    let scores = AbilityScores::from_array(input.scores);
    let mut bonuses = SkillBonuses::new();
    for arg in &input.skills {
        let (skill, bonus) = super::parse_skill_arg(arg)?;
        let stored = bonuses.set(skill, bonus);
        if stored != bonus {
            tracing::warn!(%skill, requested = bonus, stored, "skill bonus clamped");
        }
    }

    let derived = ficha_mechanics::DerivedStats::compute(&scores, input.level, &bonuses);

    if input.json {
        let json = serde_json::to_string_pretty(&derived).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let mut attributes = Table::new();
    attributes.set_content_arrangement(ContentArrangement::Dynamic);
    attributes.set_header(vec!["Attribute", "Score", "Modifier", "Cost"]);
    for (attribute, score) in scores.iter() {
        attributes.add_row(vec![
            attribute.abbreviation().to_string(),
            score.to_string(),
            format_modifier(derived.modifier(attribute)),
            point_buy_cost(score).to_string(),
        ]);
    }
    println!("{attributes}");
    println!();
    println!(
        "  {} {}   {} {}",
        "Level".bold(),
        input.level,
        "Proficiency".bold(),
        format_modifier(proficiency_bonus(input.level))
    );
    println!(
        "  {} {}/{}",
        "Point buy".bold(),
        derived.points_used,
        POINT_BUY_BUDGET
    );
    println!();

    let mut skills = Table::new();
    skills.set_content_arrangement(ContentArrangement::Dynamic);
    skills.set_header(vec!["Skill", "Attribute", "Bonus", "Total"]);
    for skill in Skill::ALL {
        skills.add_row(vec![
            skill.name().to_string(),
            skill.attribute().abbreviation().to_string(),
            bonuses.get(skill).to_string(),
            format_modifier(derived.skill(skill)),
        ]);
    }
    println!("{skills}");

    let summary = bonuses.summary(derived.proficiency_bonus);
    println!(
        "  {} proficient, {} at or above proficiency, total +{}",
        summary.proficient, summary.expertise, summary.total
    );

    Ok(())
}
