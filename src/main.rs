use anyhow::{bail, Result};
use std::env;
use std::path::Path;

use branch_scope::{
    load_records_json, load_registry_csv, load_roster_csv, MappingTables, RecordFilter,
    ALL_SCOPES,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 5 {
        eprintln!("Usage: branch-scope <roster.csv> <registry.csv> <records.json> <selection>");
        eprintln!();
        eprintln!("  <selection>  an area name, a town name, or {ALL_SCOPES} for no filtering");
        bail!("expected 4 arguments, got {}", args.len() - 1);
    }

    let roster_path = Path::new(&args[1]);
    let registry_path = Path::new(&args[2]);
    let records_path = Path::new(&args[3]);
    let selection = &args[4];

    // 1. Load sources
    println!("📂 Loading sources...");
    let roster = load_roster_csv(roster_path)?;
    let registry = load_registry_csv(registry_path)?;
    let records = load_records_json(records_path)?;
    println!(
        "✓ Loaded {} roster rows, {} registry rows, {} records",
        roster.len(),
        registry.len(),
        records.len()
    );

    // 2. Build mapping tables
    println!("\n🗺️  Building mappings...");
    let tables = MappingTables::build(&roster, &registry);
    println!("✓ {}", tables.summary());

    // 3. Resolve the selected scope
    println!("\n🎯 Resolving scope...");
    let closure = tables.resolve(selection);
    println!("✓ {}", closure.describe());

    // 4. Filter records
    let filter = RecordFilter::new();
    let total = records.len();
    let filtered = filter.filter(records, &closure);
    println!(
        "\n🚦 {} of {} records in scope for \"{}\"",
        filtered.len(),
        total,
        selection
    );

    println!("{}", serde_json::to_string_pretty(&filtered)?);

    Ok(())
}
