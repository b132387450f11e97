use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ficha_mechanics::stats::format_modifier;
use ficha_mechanics::{Attribute, Edition, Roster};

pub fn run(search: Option<&str>, edition: Option<&str>, class: Option<&str>) -> Result<(), String> {
    let roster = Roster::sample();

    let mut query = roster.query();
    if let Some(term) = search {
        query = query.search(term);
    }
    if let Some(edition) = edition {
        query = query.edition(Edition::parse(edition).map_err(|e| e.to_string())?);
    }
    if let Some(class) = class {
        query = query.class(class);
    }
    let results = query.execute();

    println!(
        "  {} characters: {} {}, {} {}, average level {}",
        roster.len(),
        roster.count_edition(Edition::Dnd5e),
        Edition::Dnd5e,
        roster.count_edition(Edition::Dnd35),
        Edition::Dnd35,
        roster.average_level()
    );
    println!("  Classes: {}", roster.unique_classes().join(", "));
    println!();

    if results.is_empty() {
        match search {
            Some(term) if !term.trim().is_empty() => {
                println!("  No characters match \"{term}\".");
            }
            _ => println!("  No characters found."),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name", "Player", "Edition", "Race", "Class", "Lvl", "HP", "AC", "STR", "DEX", "CON",
    ]);

    for entry in &results {
        let sheet = &entry.sheet;
        let mut row = vec![
            sheet.display_name().to_string(),
            sheet.display_player().to_string(),
            sheet.edition.to_string(),
            sheet.race.clone(),
            sheet.class.clone(),
            sheet.level.to_string(),
            sheet.combat.hit_points.to_string(),
            sheet.combat.armor_class.to_string(),
        ];
        for attribute in [Attribute::Strength, Attribute::Dexterity, Attribute::Constitution] {
            row.push(format_modifier(sheet.modifier(attribute)));
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} shown", results.len().to_string().bold());
    Ok(())
}
