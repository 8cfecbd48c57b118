//! Open Binaural Renderer CLI
//!
//! Usage:
//!   obr inspect --input-type 3OA [--filter-type Direct] [--json]
//!   obr export --input-type 2OA --out-dir /tmp/filters
//!   obr lookup 3OAAmbientR
//!   obr list [--json]
//!
//! Audio decoding and rendering happen elsewhere; this tool validates input
//! flags and reports the element layout and the filters a renderer would load.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use obr_core::{AudioElementConfig, AudioElementType, BinauralFilterProfile};
use obr_filters::BinauralFilterRegistry;

use report::{ElementReport, FilterReport};

#[derive(Parser)]
#[command(name = "obr", about = "Open Binaural Renderer element and filter inspection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the channel layout and binaural filters of an input
    Inspect {
        #[command(flatten)]
        input: InputArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the binaural filters of an input to a directory
    Export {
        #[command(flatten)]
        input: InputArgs,
        /// Destination directory (created if missing)
        #[arg(short, long)]
        out_dir: PathBuf,
    },
    /// Resolve a single filter key such as `3OAAmbientR`
    Lookup {
        key: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every compiled-in binaural filter
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Type of input: `1OA`..`4OA`, `Mono`, `Stereo`, `3.1.2`, `5.1`, `5.1.2`,
    /// `5.1.4`, `7.1`, `7.1.2`, `7.1.4`, `9.1.6` or `OBA`
    #[arg(long)]
    input_type: AudioElementType,

    /// Binaural filter type: Direct, Ambient, or Reverberant
    #[arg(long, default_value_t = BinauralFilterProfile::Ambient)]
    filter_type: BinauralFilterProfile,

    /// Processing buffer size; i.e., number of samples per channel per frame
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    buffer_size: u32,
}

impl InputArgs {
    fn config(&self) -> Result<AudioElementConfig> {
        AudioElementConfig::with_profile(self.input_type, self.filter_type)
            .with_context(|| format!("Cannot configure input type {}", self.input_type))
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inspect { input, json } => {
            let config = input.config()?;
            let report = ElementReport::build(&config, input.buffer_size)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }
        Commands::Export { input, out_dir } => {
            let config = input.config()?;
            let written = report::export_filters(&config, &out_dir)?;
            if written.is_empty() {
                log::warn!(
                    "{} input has no Ambisonic binaural filters; nothing written",
                    config.element_type()
                );
            }
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::Lookup { key, json } => {
            let asset = report::lookup_filter(&key)?;
            let report = FilterReport::from_asset(asset, None)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }
        Commands::List { json } => {
            let reports = BinauralFilterRegistry::global()
                .iter()
                .map(|asset| FilterReport::from_asset(asset, None))
                .collect::<Result<Vec<_>, _>>()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    report.print();
                }
            }
        }
    }

    Ok(())
}
