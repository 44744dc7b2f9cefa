use clap::Args;
use console::style;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct SummaryArgs {
    #[arg(long, help = "Emit the summary as JSON instead of a table")]
    json: bool,
}

impl SummaryArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let records = utils.load()?;
        let summary = records.summarize();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        println!(
            "{}",
            style(format!(
                "{:<6} {:>8} {:>6} {:>6} {:>12} {:>12} {:>14}",
                "chrom", "records", "+", "-", "min_len", "max_len", "mean_len"
            ))
            .bold()
        );
        for chrom_summary in &summary {
            println!(
                "chr{:<3} {:>8} {:>6} {:>6} {:>12} {:>12} {:>14.2}",
                chrom_summary.chrom,
                chrom_summary.count,
                chrom_summary.fwd_count,
                chrom_summary.rev_count,
                chrom_summary.length_min,
                chrom_summary.length_max,
                chrom_summary.length_mean,
            );
        }
        Ok(())
    }
}
