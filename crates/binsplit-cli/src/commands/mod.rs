pub mod join;
pub mod split;

use clap::Args;

/// Output options shared by both commands.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not show a progress bar
    #[arg(long, short)]
    pub quiet: bool,
}
