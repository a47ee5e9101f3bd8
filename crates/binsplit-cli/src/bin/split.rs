use clap::Parser;

use binsplit_cli::commands::split::{self, SplitCli};

fn main() -> anyhow::Result<()> {
    binsplit_cli::logging::init();
    split::run(SplitCli::parse())
}
