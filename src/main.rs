mod analysis;
mod catalog;
mod manager;
mod stats;
mod table;

use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Overview {
        #[arg(long)]
        indicator: String,

        #[arg(long)]
        entity: Option<String>,

        #[arg(long, value_delimiter = ',')]
        regions: Option<Vec<String>>,
    },

    Regional {
        #[arg(long)]
        indicator: String,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long, value_delimiter = ',')]
        regions: Option<Vec<String>>,
    },

    Correlate {
        #[arg(long)]
        first: String,

        #[arg(long)]
        second: String,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long, value_delimiter = ',')]
        regions: Option<Vec<String>>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mgr = Manager::new(&args.data_dir).context("failed to construct mgr")?;

    match args.command {
        Command::Overview {
            indicator,
            entity,
            regions,
        } => {
            let report = mgr.overview(&indicator, entity, region_set(regions).as_ref())?;
            print_report(&report)?;
        }
        Command::Regional {
            indicator,
            year,
            regions,
        } => {
            let report = mgr.regional(&indicator, year, region_set(regions).as_ref())?;
            print_report(&report)?;
        }
        Command::Correlate {
            first,
            second,
            year,
            regions,
        } => {
            let report = mgr.correlate(&first, &second, year, region_set(regions).as_ref())?;
            print_report(&report)?;
        }
    }

    Ok(())
}

fn region_set(regions: Option<Vec<String>>) -> Option<BTreeSet<String>> {
    regions.map(|names| names.into_iter().collect())
}

fn print_report<T: Serialize>(report: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout().lock(), report)
        .context("failed to write report")?;
    println!();
    Ok(())
}
