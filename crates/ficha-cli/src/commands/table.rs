use colored::Colorize;
use ficha_tables::{TableRoller, TablesConfig};

pub fn run(name: &str, times: u32, seed: u64) -> Result<(), String> {
    let mut roller = TableRoller::new(TablesConfig::default().with_seed(seed));
    if roller.table(name).is_none() {
        let known: Vec<&str> = roller.tables().iter().map(|t| t.key.as_str()).collect();
        return Err(format!("unknown table '{name}' (available: {})", known.join(", ")));
    }

    for _ in 0..times.max(1) {
        let roll = roller.roll(name).map_err(|e| e.to_string())?;
        let die = format!("[{}]", roll.roll);
        println!("  {} {die:>4}  {}", roll.table.dimmed(), roll.result.bold());
    }
    Ok(())
}
