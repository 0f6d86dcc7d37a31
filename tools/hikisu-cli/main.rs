use ahash::AHashMap;
use clap::{Parser, Subcommand};
use hikisu::prelude::*;
use std::time::Instant;

/// Inspect a signature catalog and validate calls against it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the catalog: a JSON definition table, or a `.bin` registry snapshot
    #[arg(short, long, default_value = "data/algorithms.json")]
    catalog: String,

    /// Optional path to a TOML settings file
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List algorithm names in registration order
    List {
        /// Include internal-only algorithms
        #[arg(long)]
        hidden: bool,
    },
    /// Show the full signature of one algorithm
    Describe { name: String },
    /// Bind a call and print the canonical argument map as JSON
    Bind {
        name: String,
        /// Positional argument as JSON (repeatable, in order)
        #[arg(short, long = "arg")]
        args: Vec<String>,
        /// Named argument as KEY=JSON (repeatable)
        #[arg(short, long = "named")]
        named: Vec<String>,
    },
    /// Validate the catalog and write a binary snapshot for fast startup
    Snapshot { output: String },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => BinderSettings::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load settings: {}", e))),
        None => BinderSettings::default(),
    };

    let load_start = Instant::now();
    let registry = load_registry(&cli.catalog, &settings);
    log::info!(
        "Loaded {} signatures from '{}' in {:?}",
        registry.len(),
        cli.catalog,
        load_start.elapsed()
    );

    match cli.command {
        Command::List { hidden } => {
            for name in registry.list(hidden || settings.include_hidden) {
                println!("{}", name);
            }
        }
        Command::Describe { name } => {
            let signature = registry
                .get(&name)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", CallFormatter::describe(signature));
        }
        Command::Bind { name, args, named } => {
            run_bind(&registry, &settings, &name, &args, &named);
        }
        Command::Snapshot { output } => {
            RegistrySnapshot::from_registry(&registry)
                .save(&output)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!(
                "Wrote snapshot of {} signatures to '{}'",
                registry.len(),
                output
            );
        }
    }
}

fn load_registry(path: &str, settings: &BinderSettings) -> SignatureRegistry {
    if path.ends_with(".bin") {
        return RegistrySnapshot::from_file(path)
            .and_then(RegistrySnapshot::into_registry)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load snapshot: {}", e)));
    }

    let builder = SignatureRegistry::builder().with_duplicate_policy(settings.duplicate_policy);
    Catalog::from_file(path)
        .and_then(|catalog| catalog.into_registry(builder))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
}

fn run_bind(
    registry: &SignatureRegistry,
    settings: &BinderSettings,
    name: &str,
    raw_args: &[String],
    raw_named: &[String],
) {
    let positional: Vec<Value> = raw_args.iter().map(|raw| parse_value(raw)).collect();

    let mut named = AHashMap::new();
    for raw in raw_named {
        let (key, raw_value) = raw.split_once('=').unwrap_or_else(|| {
            exit_with_error(&format!("Named argument '{}' must be KEY=JSON", raw))
        });
        if named
            .insert(key.to_string(), parse_value(raw_value))
            .is_some()
        {
            exit_with_error(&format!("Named argument '{}' given more than once", key));
        }
    }

    let binder = ArgumentBinder::from_settings(settings);
    let call = binder
        .bind_call(registry, name, &positional, &named)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    log::info!("{}", CallFormatter::format_verbose(&call));
    let json = serde_json::to_string_pretty(&call)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize call: {}", e)));
    println!("{}", json);
}

/// Parses a command-line value as JSON, treating anything that is not valid JSON as a bare string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
