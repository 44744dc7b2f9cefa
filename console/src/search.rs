use bedquery::prelude::*;
use clap::Args;

use crate::utils::{
    print_no_match,
    print_records,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct SearchArgs {
    #[arg(help = "Chromosome to search, e.g. 'chr6'")]
    chrom: String,

    #[arg(
        help = "Optional positions; exactly two define an inclusive \
                containment range unless --points is given"
    )]
    positions: Vec<String>,

    #[arg(
        long,
        help = "Treat two positions as independent point queries instead of \
                a range"
    )]
    points: bool,
}

impl SearchArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let records = utils.load()?;
        let mode = if self.points {
            SearchMode::Points
        }
        else {
            SearchMode::Range
        };

        match records.query_positions(&self.chrom, &self.positions, mode)? {
            Some(found) => print_records(&found),
            None => print_no_match(),
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct FeatureArgs {
    #[arg(help = "Exact feature name to look up")]
    name: String,
}

impl FeatureArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let records = utils.load()?;

        match records.query_feature(&self.name) {
            Some(found) => print_records(&found),
            None => print_no_match(),
        }
        Ok(())
    }
}
