use std::path::PathBuf;

use bedquery::prelude::*;
use clap::Args;
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        help = "Path to the tab-separated annotation file (chrom, start, end, \
                feature name, strand; no header)"
    )]
    pub file: PathBuf,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v debug, -vv trace)"
    )]
    pub verbose: u8,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .try_init()?;
        Ok(())
    }

    /// Loads and validates the annotation table. Any invalid field aborts
    /// with the validation error.
    pub fn load(&self) -> anyhow::Result<RecordSet> {
        open_bed(&self.file)
    }
}

/// Prints a record subset the same way for every search command.
pub(crate) fn print_records(records: &RecordSet) {
    for record in records {
        println!("{record}");
    }
}

/// Canonical no-match rendering: an explicit line, exit code stays 0.
pub(crate) fn print_no_match() {
    println!("{}", console::style("no matching records").yellow());
}
