use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use binsplit_core::{ChunkRecord, join_file_with};

use super::OutputArgs;
use crate::{output, progress};

#[derive(Debug, Parser)]
#[command(name = "join")]
#[command(about = "Reassemble a file from its numbered chunks")]
#[command(version)]
pub struct JoinCli {
    /// Path the chunk set is named after; chunks are read from `<path>.0`, `<path>.1`, ...
    pub src_file_path: Option<PathBuf>,

    /// Existing directory to write the reassembled file into
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(cli: JoinCli) -> Result<()> {
    let (Some(src), Some(out_dir)) = (cli.src_file_path.as_deref(), cli.out_dir.as_deref()) else {
        crate::print_usage::<JoinCli>();
        return Ok(());
    };

    let pb = progress::bytes_bar(None, cli.output.quiet)?;
    let summary = join_file_with(src, out_dir, |record: &ChunkRecord| {
        pb.inc(record.len);
        pb.set_message(format!("chunk {}", record.index));
    })
    .with_context(|| format!("failed to join chunks of {}", src.display()))?;

    pb.finish_and_clear();
    output::print_join(&summary, cli.output.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn missing_args_parse_and_exit_cleanly() {
        let cli = JoinCli::try_parse_from(["join"]).unwrap();
        assert!(cli.src_file_path.is_none());
        run(cli).unwrap();
    }

    #[test]
    fn run_reassembles_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("doc.txt.0"), b"split ").unwrap();
        std::fs::write(tmp.path().join("doc.txt.1"), b"and joined").unwrap();
        let out = tmp.path().join("restored");
        std::fs::create_dir(&out).unwrap();
        let src = tmp.path().join("doc.txt");

        let cli = JoinCli::try_parse_from([
            OsStr::new("join"),
            src.as_os_str(),
            out.as_os_str(),
            OsStr::new("--quiet"),
        ])
        .unwrap();
        run(cli).unwrap();

        assert_eq!(
            std::fs::read(out.join("doc.txt")).unwrap(),
            b"split and joined"
        );
    }

    #[test]
    fn run_fails_without_out_dir() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("doc.txt");
        let out = tmp.path().join("missing");

        let cli = JoinCli::try_parse_from([
            OsStr::new("join"),
            src.as_os_str(),
            out.as_os_str(),
            OsStr::new("-q"),
        ])
        .unwrap();

        assert!(run(cli).is_err());
    }
}
