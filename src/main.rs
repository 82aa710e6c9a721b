//! csvmask CLI - mask sensitive columns in delimited files
//!
//! # Main Command
//!
//! ```bash
//! csvmask encode customers.csv masked.csv    # Mask Name/Email, average Billing
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! csvmask parse customers.csv                # Just parse CSV to JSON
//! csvmask stats customers.csv Billing        # Show column statistics
//! csvmask modes                              # Show registered masking modes
//! ```

use clap::{Parser, Subcommand};
use csvmask::{
    available_modes, compute_stats, encode_with_options, is_numeric_value, load_csv,
    load_csv_auto, EncodeOptions, MaskConfig,
};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csvmask")]
#[command(about = "Mask sensitive columns in delimited files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mask a CSV file and write the result
    Encode {
        /// Input CSV file
        input: PathBuf,

        /// Output CSV file
        output: PathBuf,

        /// Masking mode
        #[arg(short, long, default_value = "character_matching")]
        mode: String,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,

        /// Masking configuration JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Parse a CSV file and output records as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display statistics for a numeric column
    Stats {
        /// Input CSV file
        input: PathBuf,

        /// Column to aggregate
        column: String,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },

    /// Show registered masking modes
    Modes,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            mode,
            delimiter,
            config,
        } => cmd_encode(&input, &output, mode, delimiter, config.as_deref()),

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),

        Commands::Stats {
            input,
            column,
            delimiter,
        } => cmd_stats(&input, &column, delimiter),

        Commands::Modes => cmd_modes(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_encode(
    input: &Path,
    output: &Path,
    mode: String,
    delimiter: char,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Masking: {}", input.display());

    let mask = match config {
        Some(path) => MaskConfig::from_json(&fs::read_to_string(path)?)?,
        None => MaskConfig::default(),
    };

    let options = EncodeOptions {
        delimiter,
        mode,
        mask,
    };
    let summary = encode_with_options(input, output, &options)?;

    eprintln!("   Rows: {}", summary.row_count);
    eprintln!("   Columns: {}", summary.headers.join(", "));
    eprintln!("\n✨ Done!");
    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = load_csv_auto(input, delimiter)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(result.delimiter),
        if delimiter.is_none() {
            " (auto-detected)"
        } else {
            ""
        }
    );
    eprintln!("   Columns: {}", result.table.headers().join(", "));
    eprintln!("✅ Parsed {} records", result.table.row_count());

    let records: Vec<Value> = result
        .table
        .records()
        .iter()
        .map(|record| {
            let mut obj = Map::new();
            for header in result.table.headers() {
                let value = record.get(header).unwrap_or("");
                obj.insert(header.clone(), Value::String(value.to_string()));
            }
            Value::Object(obj)
        })
        .collect();

    let json = serde_json::to_string_pretty(&records)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_stats(
    input: &Path,
    column: &str,
    delimiter: char,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📊 Column statistics: {}", input.display());

    let table = load_csv(input, delimiter)?;
    if !table.headers().iter().any(|h| h == column) {
        return Err(format!("Column not found: {}", column).into());
    }

    let values: Vec<f64> = table
        .records()
        .iter()
        .filter_map(|record| record.get(column))
        .filter(|value| is_numeric_value(value))
        .filter_map(|value| value.parse::<f64>().ok())
        .collect();

    eprintln!("   {} of {} rows numeric", values.len(), table.row_count());
    compute_stats(column, &values);

    Ok(())
}

fn cmd_modes() -> Result<(), Box<dyn std::error::Error>> {
    println!("Registered masking modes:");
    for mode in available_modes() {
        println!("  {}", mode);
    }
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
