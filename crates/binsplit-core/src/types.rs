use serde::Serialize;
use std::path::PathBuf;

/// One chunk file, as written by the splitter or read by the joiner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    pub index: u64,
    pub path: PathBuf,
    pub len: u64,
}

/// Outcome of a split run.
#[derive(Debug, Clone, Serialize)]
pub struct SplitSummary {
    /// Logical file name the chunk names are derived from.
    pub source_name: String,
    pub out_dir: PathBuf,
    pub chunk_size: u64,
    pub chunks: Vec<ChunkRecord>,
    pub total_bytes: u64,
}

impl SplitSummary {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// Outcome of a join run.
#[derive(Debug, Clone, Serialize)]
pub struct JoinSummary {
    pub output: PathBuf,
    pub chunks: Vec<ChunkRecord>,
    pub total_bytes: u64,
    /// Chunk files found past the first missing index. Never read.
    pub stray_chunks: Vec<PathBuf>,
}

impl JoinSummary {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// True when every chunk present on disk made it into the output.
    pub fn is_contiguous(&self) -> bool {
        self.stray_chunks.is_empty()
    }
}
