//! Chunk file naming: `<base>.<index>`, index in base 10 with no padding.
//!
//! The naming convention is the whole on-disk format. There is no manifest,
//! so anything that reads chunks back relies on these helpers alone.

use crate::error::Result;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of a single chunk file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkName {
    base: OsString,
    index: u64,
}

impl ChunkName {
    pub fn new(base: impl Into<OsString>, index: u64) -> Self {
        Self {
            base: base.into(),
            index,
        }
    }

    pub fn base(&self) -> &OsStr {
        &self.base
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    /// File name on disk, e.g. `disk.img.3`.
    pub fn to_os_string(&self) -> OsString {
        let mut name = self.base.clone();
        name.push(format!(".{}", self.index));
        name
    }

    /// Parse a file name produced by [`ChunkName::to_os_string`] for `base`.
    ///
    /// Only the canonical spelling is accepted: `disk.img.01` and `disk.img.+1`
    /// are not chunk names.
    pub fn parse(file_name: &OsStr, base: &OsStr) -> Option<Self> {
        let name = file_name.as_encoded_bytes();
        let base_bytes = base.as_encoded_bytes();
        let suffix = name.strip_prefix(base_bytes)?.strip_prefix(b".")?;

        if suffix.is_empty() || !suffix.iter().all(u8::is_ascii_digit) {
            return None;
        }
        if suffix.len() > 1 && suffix[0] == b'0' {
            return None;
        }

        let index = std::str::from_utf8(suffix).ok()?.parse().ok()?;
        Some(Self::new(base, index))
    }
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.base.to_string_lossy(), self.index)
    }
}

/// Path of chunk `index` for a chunk set named by `prefix`.
///
/// The suffix is appended to the full path, so `dir/disk.img` maps to
/// `dir/disk.img.0`, `dir/disk.img.1`, ...
pub fn chunk_path(prefix: &Path, index: u64) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(format!(".{index}"));
    PathBuf::from(path)
}

/// Chunk files for `prefix` whose index is greater than `first_missing`.
///
/// These are the chunks a join cannot reach because of the gap at
/// `first_missing`. Results are sorted by index. A missing directory yields
/// an empty list.
pub fn find_stray_chunks(prefix: &Path, first_missing: u64) -> Result<Vec<PathBuf>> {
    let Some(base) = prefix.file_name() else {
        return Ok(Vec::new());
    };
    let dir = match prefix.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stray = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if let Some(name) = ChunkName::parse(&entry.file_name(), base) {
            if name.index() > first_missing {
                stray.push((name.index(), entry.path()));
            }
        }
    }
    stray.sort_by_key(|(index, _)| *index);

    Ok(stray.into_iter().map(|(_, path)| path).collect())
}
