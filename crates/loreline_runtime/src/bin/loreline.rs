//! Loreline CLI entry point.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use loreline_loader::{Loader, LoaderConfig};
use loreline_runtime::{DataFile, Repl, ReplConfig, RollReport, RuntimeError, Schema};
use tracing::{Level, info};

/// Check, dump, and explore directive-based data files.
#[derive(Debug, Parser)]
#[command(name = "loreline", version, about)]
struct Cli {
    #[command(flatten)]
    dirs: DirArgs,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct DirArgs {
    /// Directory of standard data files.
    #[arg(short = 'd', long, default_value = ".", global = true)]
    gamedata: PathBuf,

    /// Directory of user overrides, searched first.
    #[arg(short = 'u', long, global = true)]
    user: Option<PathBuf>,

    /// Data file extension.
    #[arg(long, default_value = "txt", global = true)]
    extension: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse data files and report the first error in each.
    Check {
        /// Schema file name.
        schema: String,
        /// Data file names.
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Parse a data file and print its records as JSON.
    Dump {
        /// Schema file name.
        schema: String,
        /// Data file name.
        file: String,
        /// Print compact JSON.
        #[arg(long)]
        compact: bool,
    },
    /// Check lines interactively against a schema.
    Repl {
        /// Schema file name.
        schema: String,
        /// Print `.dump` output as compact JSON.
        #[arg(long)]
        compact: bool,
    },
    /// Show the range of a random value and roll it.
    Roll {
        /// Random value, such as `2d6` or `5+3d20M1`.
        #[arg(allow_hyphen_values = true)]
        expr: String,
        /// Level for the magic bonus.
        #[arg(short, long, default_value_t = 0)]
        level: i32,
        /// Number of rolls.
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// Random seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn loader(dirs: DirArgs) -> Loader {
    let mut config = LoaderConfig::new(dirs.gamedata).with_extension(dirs.extension);
    if let Some(user) = dirs.user {
        config = config.with_user_dir(user);
    }
    Loader::new(config)
}

fn run(cli: Cli) -> Result<ExitCode, RuntimeError> {
    let loader = loader(cli.dirs);

    match cli.command {
        Command::Check { schema, files } => {
            let schema = Schema::load(&loader, &schema)?;
            let mut failed = false;
            for name in &files {
                match loader.run_parser(&DataFile {
                    schema: &schema,
                    name,
                }) {
                    Ok(document) => println!(
                        "{name}: ok ({} records, {} entries)",
                        document.records.len(),
                        document.entry_count()
                    ),
                    Err(e) => {
                        println!("{name}: {e}");
                        failed = true;
                    }
                }
            }
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Dump {
            schema,
            file,
            compact,
        } => {
            let schema = Schema::load(&loader, &schema)?;
            let document = loader.run_parser(&DataFile {
                schema: &schema,
                name: &file,
            })?;
            let mut out = io::stdout().lock();
            writeln!(out, "{}", document.to_json(!compact)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Repl { schema, compact } => {
            let schema = Schema::load(&loader, &schema)?;
            info!(schema = schema.name(), "starting repl");
            Repl::new(schema)?
                .with_config(ReplConfig::default().with_pretty_json(!compact))
                .run()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Roll {
            expr,
            level,
            count,
            seed,
        } => match RollReport::new(&expr, level, count, seed) {
            Some(report) => {
                print!("{report}");
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("'{expr}' is not a random value");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
