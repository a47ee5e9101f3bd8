use crate::chunk::ChunkName;
use crate::error::{BinsplitError, Result};
use crate::types::{ChunkRecord, SplitSummary};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Default chunk size used by the `split` command: 50 MiB.
pub const DEFAULT_CHUNK_SIZE: u64 = 50 * 1024 * 1024;

/// Upper bound on the bytes held in memory per chunk; the rest is streamed.
const MAX_BUFFER: u64 = 8 * 1024 * 1024;

/// Fixed-size file splitter.
#[derive(Debug, Clone)]
pub struct Splitter {
    chunk_size: u64,
}

impl Splitter {
    pub fn new(chunk_size: u64) -> Result<Self> {
        if chunk_size == 0 {
            return Err(BinsplitError::InvalidChunkSize(chunk_size));
        }
        Ok(Self { chunk_size })
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Split `src` into `<file name>.<i>` chunks inside `out_dir`.
    pub fn split_file(&self, src: &Path, out_dir: &Path) -> Result<SplitSummary> {
        self.split_file_with(src, out_dir, |_| {})
    }

    /// Like [`Splitter::split_file`], calling `on_chunk` after each chunk is written.
    pub fn split_file_with(
        &self,
        src: &Path,
        out_dir: &Path,
        on_chunk: impl FnMut(&ChunkRecord),
    ) -> Result<SplitSummary> {
        let name = src
            .file_name()
            .ok_or_else(|| BinsplitError::MissingFileName(src.to_path_buf()))?;
        let file = File::open(src).map_err(|source| BinsplitError::Open {
            path: src.to_path_buf(),
            source,
        })?;

        self.split_stream_with(file, name, out_dir, on_chunk)
    }

    /// Split an arbitrary byte stream, naming the chunks after `source_name`.
    pub fn split_stream<R: Read>(
        &self,
        reader: R,
        source_name: &OsStr,
        out_dir: &Path,
    ) -> Result<SplitSummary> {
        self.split_stream_with(reader, source_name, out_dir, |_| {})
    }

    /// Like [`Splitter::split_stream`], calling `on_chunk` after each chunk is written.
    pub fn split_stream_with<R: Read>(
        &self,
        mut reader: R,
        source_name: &OsStr,
        out_dir: &Path,
        mut on_chunk: impl FnMut(&ChunkRecord),
    ) -> Result<SplitSummary> {
        ensure_out_dir(out_dir)?;

        let mut chunks = Vec::new();
        let mut total_bytes = 0u64;
        let head_size = self.chunk_size.min(MAX_BUFFER);
        let mut head = Vec::with_capacity(head_size as usize);

        loop {
            // Read the head first so a stream ending on a chunk boundary
            // never produces an empty chunk file.
            head.clear();
            (&mut reader).take(head_size).read_to_end(&mut head)?;
            if head.is_empty() {
                break;
            }

            let name = ChunkName::new(source_name, chunks.len() as u64);
            let path = out_dir.join(name.to_os_string());
            let rest = (&mut reader).take(self.chunk_size - head.len() as u64);
            let len = write_chunk(&path, &head, rest)?;

            let record = ChunkRecord {
                index: name.index(),
                path,
                len,
            };
            debug!(chunk = %name, bytes = len, "wrote chunk");
            on_chunk(&record);

            total_bytes += len;
            chunks.push(record);
        }

        info!(
            source = %source_name.to_string_lossy(),
            out_dir = %out_dir.display(),
            chunks = chunks.len(),
            bytes = total_bytes,
            "split complete"
        );

        Ok(SplitSummary {
            source_name: source_name.to_string_lossy().into_owned(),
            out_dir: out_dir.to_path_buf(),
            chunk_size: self.chunk_size(),
            chunks,
            total_bytes,
        })
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Create the final path segment of `out_dir` if it is missing.
/// Parents are expected to exist already.
fn ensure_out_dir(out_dir: &Path) -> Result<()> {
    if !out_dir.exists() {
        std::fs::create_dir(out_dir).map_err(|source| BinsplitError::Create {
            path: out_dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write `head` followed by everything left in `rest`. Returns the chunk length.
fn write_chunk<R: Read>(path: &Path, head: &[u8], mut rest: R) -> Result<u64> {
    let mut file = File::create(path).map_err(|source| BinsplitError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(head)?;
    let streamed = std::io::copy(&mut rest, &mut file)?;
    file.flush()?;
    Ok(head.len() as u64 + streamed)
}
