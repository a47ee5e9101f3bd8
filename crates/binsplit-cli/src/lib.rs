//! Command-line front end shared by the `split` and `join` binaries.

pub mod commands;
pub mod logging;
mod output;
mod progress;

use clap::CommandFactory;

/// Print the usage line for `C` on stdout.
///
/// Missing positional arguments are answered with usage and a clean exit,
/// so scripts written against the original tools keep working.
pub fn print_usage<C: CommandFactory>() {
    let mut cmd = C::command();
    println!("{}", cmd.render_usage());
}
