mod parse;
mod search;
mod summary;
mod utils;

use clap::{
    Parser,
    Subcommand,
};
use parse::ParseArgs;
use search::{
    FeatureArgs,
    SearchArgs,
};
use summary::SummaryArgs;
use utils::UtilsArgs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Load, validate and print the annotation table
    Parse {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ParseArgs,
    },

    /// Search records by chromosome and optional positions
    Search {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  SearchArgs,
    },

    /// Search records by exact feature name
    Feature {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  FeatureArgs,
    },

    /// Report per-chromosome summary statistics
    Summary {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  SummaryArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        MainMenu::Parse { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Search { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Feature { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Summary { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
