use clap::Args;
use console::style;

use crate::utils::{
    print_records,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ParseArgs {
    #[arg(long, help = "Only report the number of validated records")]
    count: bool,
}

impl ParseArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let records = utils.load()?;

        if !self.count {
            print_records(&records);
        }
        println!(
            "[{}] {} records validated",
            style("V").green(),
            style(records.len()).green()
        );
        Ok(())
    }
}
