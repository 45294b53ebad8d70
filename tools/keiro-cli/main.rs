use clap::Parser;
use keiro::prelude::*;
use std::fs;
use std::time::Instant;

/// A structural validation CLI for keiro flow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow document JSON file
    flow_path: String,
    /// Optional path to a JSON array of known integration ids
    integrations_path: Option<String>,

    /// Print the canonical form of a valid flow to stdout
    #[arg(short = 'c', long)]
    canonical: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let flow_json = fs::read_to_string(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read flow file '{}': {}",
            &cli.flow_path, e
        ))
    });

    let catalog = match &cli.integrations_path {
        Some(path) => load_catalog(path),
        None => {
            println!("No integrations file provided. Using an empty catalog.");
            IntegrationCatalog::new()
        }
    };

    // --- 2. Parsing ---
    let flow: Flow = serde_json::from_str(&flow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)));

    let flow_name = flow.name.clone();
    let node_count = flow.nodes.len();
    let edge_count = flow.edges.len();

    // --- 3. Validation ---
    let validate_start = Instant::now();
    let result = validate_structure(flow, &catalog);
    let validate_duration = validate_start.elapsed();

    match result {
        Ok(validated) => {
            println!(
                "'{}' is structurally valid ({} nodes, {} edges, version {})",
                flow_name, node_count, edge_count, validated.version
            );
            println!("Validation took {:?}", validate_duration);
            println!("Total: {:?}", total_start.elapsed());

            if cli.canonical {
                let canonical = serde_json::to_string_pretty(validated.as_flow())
                    .unwrap_or_else(|e| {
                        exit_with_error(&format!("Failed to serialize canonical form: {}", e))
                    });
                println!("{}", canonical);
            }
        }
        Err(errors) => {
            eprintln!(
                "'{}' failed validation with {} error(s):",
                flow_name,
                errors.len()
            );
            for error in &errors {
                eprintln!("  [{}] {}", error.kind(), error);
            }
            std::process::exit(1);
        }
    }
}

/// Loads the integration catalog from a JSON array of id strings.
fn load_catalog(path: &str) -> IntegrationCatalog {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read integrations file '{}': {}", path, e))
    });
    let ids: Vec<String> = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse integrations JSON: {}", e)));
    ids.into_iter().collect()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
