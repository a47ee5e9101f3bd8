use clap::Parser;

use binsplit_cli::commands::join::{self, JoinCli};

fn main() -> anyhow::Result<()> {
    binsplit_cli::logging::init();
    join::run(JoinCli::parse())
}
