//! Split files into numbered fixed-size chunks and join them back.
//!
//! Chunks are named `<file name>.<index>` with a zero-based, gap-free index.
//! That naming is the entire on-disk format.

pub mod chunk;
pub mod config;
pub mod error;
pub mod join;
pub mod split;
pub mod types;

pub use error::{BinsplitError, Result};
pub use join::{join_file, join_file_with};
pub use split::{DEFAULT_CHUNK_SIZE, Splitter};
pub use types::{ChunkRecord, JoinSummary, SplitSummary};
