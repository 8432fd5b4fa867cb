//! Autobucket command-line interface

use autobucket::cli::{check, output, rewrite};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Autobucket command-line tool
#[derive(Parser)]
#[command(name = "autobucket")]
#[command(author, version, about = "Day bucketing for structured analytical queries", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Field catalog (JSON array of field entries)
    #[arg(short, long, global = true, env = "AUTOBUCKET_CATALOG")]
    catalog: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a query, bucketing unqualified date fields by day
    Rewrite {
        /// Query file (JSON)
        file: PathBuf,

        /// Output format (json, pretty)
        #[arg(short = 'f', long)]
        format: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report which fields in each query rely on implicit day bucketing
    Check {
        /// Query files (JSON)
        files: Vec<PathBuf>,

        /// Fail if any query would be rewritten
        #[arg(short, long)]
        strict: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Rewrite {
            file,
            format,
            output: output_file,
        } => {
            let config = rewrite::RewriteConfig {
                file,
                catalog: cli.catalog,
                verbose: cli.verbose,
                output_format: format,
                output_file,
            };
            rewrite::rewrite(config)
        }

        Commands::Check { files, strict } => {
            let config = check::CheckConfig {
                files,
                catalog: cli.catalog,
                strict,
                verbose: cli.verbose,
            };
            check::check(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
