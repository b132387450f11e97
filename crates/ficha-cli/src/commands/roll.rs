use colored::Colorize;
use ficha_mechanics::stats::{format_modifier, points_remaining, total_points_used};
use ficha_mechanics::{CharacterSheet, EditSession, GenerationMethod, ability_modifier};

pub fn run(method: &str, seed: Option<u64>) -> Result<(), String> {
    let method = GenerationMethod::parse(method).map_err(|e| e.to_string())?;
    let sheet = CharacterSheet::default();
    let mut session = match seed {
        Some(seed) => EditSession::with_seed(sheet, seed),
        None => EditSession::new(sheet),
    };
    let scores = session.generate_attributes(method);

    let label = match method {
        GenerationMethod::Roll => "Rolled (4d6 drop lowest)",
        GenerationMethod::StandardArray => "Standard array",
        GenerationMethod::Reset => "Reset",
    };
    println!("  {}", label.bold());
    for (attribute, score) in scores.iter() {
        println!(
            "  {}  {:>2}  ({})",
            attribute.abbreviation(),
            score,
            format_modifier(ability_modifier(score))
        );
    }
    println!(
        "  {} {} used, {} remaining",
        "Point buy".dimmed(),
        total_points_used(&scores),
        points_remaining(&scores)
    );
    Ok(())
}
