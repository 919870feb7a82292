mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::{debug, error};
use savefile_core::kernel::constants::{APP_NAME, APP_VERSION};
use savefile_core::storage::LocalStorageProvider;
use savefile_core::{Result, SaveManager, StoreConfig};

use crate::cli::InputFormat;

/// Savefile: persist tables, arrays, JSON, text and blobs into a directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Load settings from a .json, .toml or .yaml file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save input under NAME and print the final path
    Save {
        /// Target file name; the extension is inferred when omitted
        name: String,
        /// Read the value from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// How to interpret the input
        #[arg(long = "as", value_enum, default_value_t = InputFormat::Text)]
        format: InputFormat,
        /// Directory to save into (defaults to the configured directory)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Wrap the saved file into a zip archive
        #[arg(long)]
        zip: bool,
    },
    /// List the files in a directory
    List {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Delete a file from a directory
    Delete {
        name: String,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show accepted extensions per kind
    Formats,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: Option<&Path>) -> Result<StoreConfig> {
    let config = match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            StoreConfig::load(&LocalStorageProvider::default(), path)?
        }
        None => StoreConfig::default(),
    };
    Ok(config.with_env_override())
}

fn run(args: CliArgs) -> Result<()> {
    if let Commands::Formats = args.command {
        print!("{}", savefile_core::usage());
        return Ok(());
    }

    let manager = SaveManager::new(load_config(args.config.as_deref())?)?;
    debug!("Using {:?}", manager);

    match args.command {
        Commands::Save { name, input, format, dir, zip } => {
            let value = cli::parse_value(cli::read_input(input.as_deref())?, format)?;
            let dir = dir.unwrap_or_else(|| manager.base_dir().to_path_buf());
            let compress = zip || manager.config().compress;
            let path = manager.save_in(value, &name, &dir, compress)?;
            println!("{}", path.display());
        }
        Commands::List { dir } => {
            let names = match dir {
                Some(dir) => manager.list_entries_in(&dir)?,
                None => manager.list_entries()?,
            };
            for name in names {
                println!("{}", name);
            }
        }
        Commands::Delete { name, dir } => {
            let outcome = match dir {
                Some(dir) => manager.delete_entry_in(&name, &dir)?,
                None => manager.delete_entry(&name)?,
            };
            println!("{}", outcome);
        }
        Commands::Formats => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    debug!("{} {} starting", APP_NAME, APP_VERSION);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
