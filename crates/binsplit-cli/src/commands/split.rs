use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use binsplit_core::config::BinsplitConfig;
use binsplit_core::{ChunkRecord, DEFAULT_CHUNK_SIZE, SplitSummary, Splitter};

use super::OutputArgs;
use crate::{output, progress};

/// Source path meaning "read from stdin".
const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "split")]
#[command(about = "Split a file into numbered fixed-size chunks")]
#[command(version)]
pub struct SplitCli {
    /// File to split, or `-` to read from stdin
    pub src_file_path: Option<PathBuf>,

    /// Directory to write `<name>.<index>` chunks into (created if missing)
    pub out_dir: Option<PathBuf>,

    /// Maximum chunk size in bytes (default: 50 MiB)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub chunk_size: Option<u64>,

    /// File name used for chunk names when reading from stdin
    #[arg(long)]
    pub name: Option<OsString>,

    /// Directory holding a binsplit.toml to take the chunk size from
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(cli: SplitCli) -> Result<()> {
    let (Some(src), Some(out_dir)) = (cli.src_file_path.as_deref(), cli.out_dir.as_deref()) else {
        crate::print_usage::<SplitCli>();
        return Ok(());
    };

    let chunk_size = resolve_chunk_size(cli.chunk_size, cli.config_dir.as_deref())?;
    let splitter = Splitter::new(chunk_size)?;
    debug!(chunk_size, "resolved chunk size");

    let total = if src == Path::new(STDIN_PATH) {
        None
    } else {
        std::fs::metadata(src).ok().map(|m| m.len())
    };

    let pb = progress::bytes_bar(total, cli.output.quiet)?;
    let summary = split_input(
        &splitter,
        src,
        cli.name.as_deref(),
        std::io::stdin(),
        out_dir,
        |record| {
            pb.inc(record.len);
            pb.set_message(format!("chunk {}", record.index));
        },
    )?;

    pb.finish_and_clear();
    output::print_split(&summary, cli.output.json)
}

/// Split `src`, or `stdin` under `name` when `src` is `-`.
fn split_input<R: Read>(
    splitter: &Splitter,
    src: &Path,
    name: Option<&OsStr>,
    stdin: R,
    out_dir: &Path,
    on_chunk: impl FnMut(&ChunkRecord),
) -> Result<SplitSummary> {
    if src == Path::new(STDIN_PATH) {
        let name = name.context("--name is required when reading from stdin")?;
        splitter
            .split_stream_with(stdin, name, out_dir, on_chunk)
            .context("failed to split stdin")
    } else {
        splitter
            .split_file_with(src, out_dir, on_chunk)
            .with_context(|| format!("failed to split {}", src.display()))
    }
}

/// `--chunk-size` wins, then a config file the user pointed at with
/// `--config-dir`, then the 50 MiB default.
fn resolve_chunk_size(cli_value: Option<u64>, config_dir: Option<&Path>) -> Result<u64> {
    if let Some(size) = cli_value {
        return Ok(size);
    }

    match config_dir {
        Some(dir) => {
            let config = BinsplitConfig::load(&BinsplitConfig::default_path(dir))?;
            Ok(config.binsplit.chunk_size)
        }
        None => Ok(DEFAULT_CHUNK_SIZE),
    }
}
