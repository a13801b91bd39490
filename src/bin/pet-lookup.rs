// Pet Lookup CLI Tool
// Command-line interface for pet value queries

use clap::Parser;
use pet_lookup::{Catalog, FieldOutcome, LookupConfig, PetLookup, ValueKey, ValueResult};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pet Lookup Tool - Find pet values from free-text queries
#[derive(Parser, Debug)]
#[command(name = "pet-lookup")]
#[command(about = "Look up pet values by name and modifiers, tolerating typos", long_about = None)]
#[command(version)]
struct Args {
    /// Query words, e.g. "shadow dragon neon fly"
    /// - Non-modifier words form the pet name
    /// - Modifiers: regular, ride, fly, neon, mega, rare
    #[arg(value_name = "QUERY", required_unless_present = "batch")]
    query: Vec<String>,

    /// JSON catalog file (defaults to the embedded sample)
    #[arg(short, long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Maximum edit distance for a name to match
    #[arg(short = 'd', long, default_value_t = pet_lookup::config::DEFAULT_MAX_DISTANCE)]
    max_distance: usize,

    /// Print only the autocomplete suggestion for the name
    #[arg(short, long)]
    suggest: bool,

    /// Resolve one query per line from a file
    #[arg(short, long, value_name = "PATH")]
    batch: Option<PathBuf>,

    /// Print results as JSON
    #[arg(short, long)]
    json: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::sample()?,
    };

    let config = LookupConfig::default().with_max_distance(args.max_distance);
    let lookup = PetLookup::new(catalog, config);

    if args.verbose {
        let (pets, keys) = lookup.stats();
        println!("Catalog loaded: {} pets, {} value fields in use\n", pets, keys);
    }

    if let Some(path) = &args.batch {
        let text = std::fs::read_to_string(path)?;
        let queries: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let results = lookup.lookup_batch(&queries);

        for (query, result) in queries.iter().zip(&results) {
            if args.json {
                println!("{}", serde_json::to_string(result)?);
            } else {
                println!("> {}", query);
                println!("{}", render(result));
            }
        }
        return Ok(());
    }

    let query = args.query.join(" ");

    if args.suggest {
        match lookup.suggest(&query) {
            Some(name) => println!("{}", name),
            None => println!(),
        }
        return Ok(());
    }

    let result = lookup.lookup(&query);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render(&result));
    }

    Ok(())
}

/// Install a stderr subscriber honoring `RUST_LOG`
fn init_tracing(verbose: bool) {
    let default = if verbose { "pet_lookup=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Human-readable rendering of a lookup result
fn render(result: &ValueResult) -> String {
    match result {
        ValueResult::NotFound { name, .. } => {
            format!("No pet found matching \"{}\" (even with corrections).", name)
        }
        ValueResult::AllValues {
            name,
            rarity,
            values,
        } => {
            let mut out = header(name, rarity);
            out.push_str("\nValues:");
            for key in ValueKey::ALL {
                let value = values
                    .get(&key)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "Not Available".to_string());
                out.push_str(&format!("\n  {}: {}", key.label(), value));
            }
            out
        }
        ValueResult::SingleValue {
            name,
            rarity,
            key,
            value,
        } => format!("{}\n{}: {}", header(name, rarity), key.label(), value),
        ValueResult::PartialValues {
            name,
            rarity,
            fields,
        } => {
            let mut out = header(name, rarity);
            for field in fields {
                let label = field.key.map(|k| k.label()).unwrap_or_else(|| field.modifier.as_str());
                match &field.outcome {
                    FieldOutcome::Available(value) => {
                        out.push_str(&format!("\n{}: {}", label, value))
                    }
                    FieldOutcome::Unavailable => {
                        out.push_str(&format!("\n{}: Invalid or unavailable for \"{}\".", label, name))
                    }
                }
            }
            out
        }
    }
}

fn header(name: &str, rarity: &str) -> String {
    format!("Pet Name: {}\nRarity: {}", name, rarity)
}
