use comfy_table::{ContentArrangement, Table};
use ficha_mechanics::skills::SKILLS;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Attribute", "Description"]);
    for info in &SKILLS {
        table.add_row(vec![info.name, info.attribute.name(), info.description]);
    }
    println!("{table}");
    Ok(())
}
