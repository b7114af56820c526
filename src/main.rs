//! Balustrade configurator - command line entry point
//!
//! Reads a calculation request (or an array of them) as JSON and prints the
//! calculation result as JSON.

use balustrade_core::calculation::{CalculationInput, CalculationResult, Calculator};
use balustrade_core::compliance::{SpacingTable, SpacingTables};
use balustrade_core::core::error::{BalustradeError, Result};
use balustrade_core::core::types::HardwareFamily;
use balustrade_core::core::SolverConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Frameless glass balustrade calculator
#[derive(Parser, Debug)]
#[command(name = "balustrade")]
#[command(about = "Solve panel layouts and derive the hardware order for a balustrade")]
struct Args {
    /// Calculation input JSON file
    input: PathBuf,

    /// Input file holds an array of requests
    #[arg(long)]
    batch: bool,

    /// Solver config TOML (missing keys keep defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replace a family's PS1 table, e.g. `spigot=tables/spigot.toml`
    #[arg(long = "table", value_name = "FAMILY=FILE")]
    tables: Vec<String>,

    /// Print only `{code, quantity}` order lines
    #[arg(long)]
    order_only: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("balustrade_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    let tables = load_tables(&args.tables)?;
    let calculator = Calculator::new(&tables, &config);

    let content = std::fs::read_to_string(&args.input)?;
    let output = if args.batch {
        let inputs: Vec<CalculationInput> = serde_json::from_str(&content)?;
        tracing::info!("Calculating {} requests", inputs.len());
        let results = calculator
            .calculate_batch(&inputs)
            .into_iter()
            .map(|r| match r {
                Ok(result) => render(&result, args.order_only),
                Err(e) => Ok(serde_json::json!({ "error": e.to_string() })),
            })
            .collect::<Result<Vec<_>>>()?;
        serde_json::Value::Array(results)
    } else {
        let input: CalculationInput = serde_json::from_str(&content)?;
        let result = calculator.calculate(&input)?;
        render(&result, args.order_only)?
    };

    let text = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);
    Ok(())
}

fn load_tables(overrides: &[String]) -> Result<SpacingTables> {
    let mut tables = SpacingTables::builtin().clone();
    for spec in overrides {
        let (family, path) = spec
            .split_once('=')
            .ok_or_else(|| BalustradeError::InvalidConfig(format!("expected FAMILY=FILE, got {}", spec)))?;
        let family: HardwareFamily = family.parse()?;
        let table = SpacingTable::load_from_toml(family, std::path::Path::new(path))?;
        tracing::info!("Loaded {} {:?} rows from {}", table.len(), family, path);
        tables.insert(table);
    }
    Ok(tables)
}

fn render(result: &CalculationResult, order_only: bool) -> Result<serde_json::Value> {
    let value = if order_only {
        let lines: Vec<_> = result
            .order_items
            .iter()
            .map(|item| item.submission_line())
            .collect();
        serde_json::to_value(lines)?
    } else {
        serde_json::to_value(result)?
    };
    Ok(value)
}
