mod commands;
mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "swimstd",
    version,
    about = "Convert swim time-standards tables into structured JSON"
)]
struct Cli {
    /// Log debug detail (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract time standards from a PDF, spreadsheet or pre-extracted tables dump
    Extract {
        /// Path to a .pdf, .xlsx or tables-dump .json file
        input_file: PathBuf,

        /// Document title, e.g. the link text it was published under
        #[arg(short, long)]
        title: String,

        /// Where the document was retrieved from (defaults to the input path)
        #[arg(long)]
        source_url: Option<String>,

        /// Date recorded as generatedOn (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        generated_on: Option<NaiveDate>,

        /// Custom JSON column layout
        #[arg(long, value_name = "FILE")]
        layout: Option<PathBuf>,

        /// Program that prints a tables dump for a PDF given as last argument
        #[arg(long, env = "SWIMSTD_EXTRACTOR", value_name = "PROGRAM")]
        extractor_cmd: Option<String>,

        /// Extra argument passed to the extraction program (repeatable)
        #[arg(long = "extractor-arg", value_name = "ARG", allow_hyphen_values = true)]
        extractor_args: Vec<String>,

        /// Output format: json (default) or summary
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Write the JSON document to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the default column layout as JSON
    Layout,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            title,
            source_url,
            generated_on,
            layout,
            extractor_cmd,
            extractor_args,
            output,
            out,
        } => commands::extract::run(commands::extract::ExtractArgs {
            input_file,
            title,
            source_url,
            generated_on,
            layout,
            extractor_cmd,
            extractor_args,
            output_format: output,
            output_file: out,
        }),
        Commands::Layout => commands::layout::print_default(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
