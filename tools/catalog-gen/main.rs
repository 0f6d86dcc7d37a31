use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate synthetic signature catalogs for load testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON catalog to
    #[arg(short, long, default_value = "generated_catalog.json")]
    output: String,

    /// Number of algorithm entries to generate
    #[arg(long, default_value_t = 1000)]
    count: usize,

    /// The maximum number of parameters per algorithm
    #[arg(long, default_value_t = 8)]
    max_params: usize,

    /// Fraction of entries flagged as hidden
    #[arg(long, default_value_t = 0.05)]
    hidden_ratio: f64,
}

const NAMESPACES: &[&str] = &[
    "Image",
    "ImageCollection",
    "Feature",
    "FeatureCollection",
    "Geometry",
    "Reducer",
    "Classifier",
    "Kernel",
    "Array",
    "Filter",
];

const VERBS: &[&str] = &[
    "select", "reduce", "map", "filter", "clip", "buffer", "sample", "combine", "convolve",
    "resample",
];

const TYPES: &[&str] = &[
    "Image", "Float", "Integer", "String", "List", "Dictionary", "Reducer", "Geometry",
    "Boolean", "Object",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.hidden_ratio) {
        eprintln!(
            "Error: --hidden-ratio ({}) must be between 0 and 1",
            cli.hidden_ratio
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} catalog entries (up to {} parameters each)...",
        cli.count, cli.max_params
    );

    let entries: Vec<Value> = (0..cli.count)
        .map(|index| generate_entry(&mut rng, index, cli.max_params, cli.hidden_ratio))
        .collect();
    let hidden = entries
        .iter()
        .filter(|e| e["hidden"].as_bool().unwrap_or(false))
        .count();

    let json_output = serde_json::to_string_pretty(&entries)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} entries ({} hidden) and saved them to '{}'",
        entries.len(),
        hidden,
        cli.output
    );

    Ok(())
}

/// Generates one entry. The index suffix keeps names unique across the catalog.
fn generate_entry(rng: &mut ThreadRng, index: usize, max_params: usize, hidden_ratio: f64) -> Value {
    let namespace = NAMESPACES[rng.random_range(0..NAMESPACES.len())];
    let verb = VERBS[rng.random_range(0..VERBS.len())];
    let param_count = rng.random_range(0..=max_params);

    // Required parameters first, as the real tables do.
    let required_count = rng.random_range(0..=param_count);
    let args: Vec<Value> = (0..param_count)
        .map(|position| generate_argument(rng, position, position >= required_count))
        .collect();

    json!({
        "name": format!("{}.{}{}", namespace, verb, index),
        "description": format!("Synthetic {} operation #{}", verb, index),
        "returns": namespace,
        "hidden": rng.random_bool(hidden_ratio),
        "args": args,
    })
}

fn generate_argument(rng: &mut ThreadRng, position: usize, optional: bool) -> Value {
    let type_name = TYPES[rng.random_range(0..TYPES.len())];
    let mut arg = json!({
        "name": format!("arg{}", position),
        "type": type_name,
    });
    if optional {
        arg["optional"] = json!(true);
        arg["default"] = generate_default(rng, type_name);
    }
    arg
}

fn generate_default(rng: &mut ThreadRng, type_name: &str) -> Value {
    match type_name {
        "Float" => json!(rng.random_range(0.0..100.0)),
        "Integer" => json!(rng.random_range(0..1000)),
        "Boolean" => json!(rng.random_bool(0.5)),
        "String" => json!("pixels"),
        "List" => json!([]),
        "Dictionary" => json!({"type": "ErrorMargin", "value": rng.random_range(1..10)}),
        _ => Value::Null,
    }
}
