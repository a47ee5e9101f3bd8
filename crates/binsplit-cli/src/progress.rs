use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Byte progress bar on stderr. Falls back to a spinner when the total is unknown.
pub(crate) fn bytes_bar(total: Option<u64>, quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let pb = match total {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")?
                    .progress_chars("=>-"),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {bytes} {msg}")?);
            pb
        }
    };
    Ok(pb)
}
