mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "invex",
    version,
    about = "Extract structured data from vendor invoice documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one invoice (PDF or plain text) into a structured record
    Extract {
        /// Path to a .pdf or .txt file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Relative discrepancy tolerance before flagging (default 0.05)
        #[arg(short, long, value_name = "RATIO")]
        tolerance: Option<Decimal>,
    },
    /// Extract every invoice (.pdf or .txt) in a directory
    Batch {
        /// Directory containing invoice files
        dir: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the batch result to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Relative discrepancy tolerance before flagging (default 0.05)
        #[arg(short, long, value_name = "RATIO")]
        tolerance: Option<Decimal>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            tolerance,
        } => commands::extract::run(input_file, &output, out, tolerance),
        Commands::Batch {
            dir,
            output,
            out,
            tolerance,
        } => commands::batch::run(dir, &output, out, tolerance),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
