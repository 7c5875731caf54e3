use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use houseplace::input::parse_text;
use houseplace::place::place;
use houseplace::render::render_positions;
use houseplace::types::{DuplicatePolicy, PlacementParams, ScanMode};

/// Place houses on a weighted grid so residents end up as happy as a
/// greedy search can make them.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input path ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Read a JSON request and write a JSON result instead of the text format
    #[arg(long)]
    json: bool,

    /// Seed for the random fallback (default: taken from the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Scan the grid on one thread
    #[arg(long)]
    serial: bool,

    /// Random fallback only checks the slot being filled, so houses may share a cell
    #[arg(long)]
    legacy_duplicates: bool,

    /// Stop placing houses once this many milliseconds have passed
    #[arg(long, value_name = "MS")]
    time_budget_ms: Option<u64>,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_source(path: &str) -> Result<String> {
    let mut text = String::new();
    if path == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .context("Unable to read input.")?;
    } else {
        text = fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {path}"))?;
    }
    Ok(text)
}

fn run(args: &Args) -> Result<String> {
    let source = read_source(&args.input)?;

    if args.json {
        let mut request: serde_json::Value =
            serde_json::from_str(&source).context("failed to parse input JSON")?;
        // Command-line flags override the request's own settings.
        if let Some(obj) = request.as_object_mut() {
            if let Some(seed) = args.seed {
                obj.insert("seed".into(), seed.into());
            }
            if args.serial {
                obj.insert("scan".into(), "serial".into());
            }
            if args.legacy_duplicates {
                obj.insert("duplicates".into(), "legacy_slot".into());
            }
            if let Some(ms) = args.time_budget_ms {
                obj.insert("time_budget_ms".into(), ms.into());
            }
        }
        let mut out = houseplace::place_json(&request.to_string())?;
        out.push('\n');
        return Ok(out);
    }

    let parsed = parse_text(&source)?;
    let params = PlacementParams {
        num_houses: parsed.num_houses,
        seed: args.seed,
        scan: if args.serial {
            ScanMode::Serial
        } else {
            ScanMode::Parallel
        },
        duplicates: if args.legacy_duplicates {
            DuplicatePolicy::LegacySlot
        } else {
            DuplicatePolicy::Distinct
        },
        time_budget_ms: args.time_budget_ms,
    };
    let result = place(&parsed.grid, &params);
    Ok(render_positions(&result.positions))
}

fn main() {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(out.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
