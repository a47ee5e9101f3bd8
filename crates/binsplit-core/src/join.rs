use crate::chunk::{chunk_path, find_stray_chunks};
use crate::error::{BinsplitError, Result};
use crate::types::{ChunkRecord, JoinSummary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reassemble the chunk set `<src>.0`, `<src>.1`, ... into `out_dir/<file name of src>`.
///
/// Stops at the first missing index. `out_dir` must already exist.
pub fn join_file(src: &Path, out_dir: &Path) -> Result<JoinSummary> {
    join_file_with(src, out_dir, |_| {})
}

/// Like [`join_file`], calling `on_chunk` after each chunk is appended.
pub fn join_file_with(
    src: &Path,
    out_dir: &Path,
    mut on_chunk: impl FnMut(&ChunkRecord),
) -> Result<JoinSummary> {
    let name = src
        .file_name()
        .ok_or_else(|| BinsplitError::MissingFileName(src.to_path_buf()))?;
    let output = out_dir.join(name);

    let file = File::create(&output).map_err(|source| BinsplitError::Create {
        path: output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let mut chunks = Vec::new();
    let mut total_bytes = 0u64;
    let mut index = 0u64;

    loop {
        let path = chunk_path(src, index);
        if !path.exists() {
            break;
        }

        let mut chunk = File::open(&path).map_err(|source| BinsplitError::Open {
            path: path.clone(),
            source,
        })?;
        let len = std::io::copy(&mut chunk, &mut writer)?;

        let record = ChunkRecord { index, path, len };
        debug!(chunk = %record.path.display(), bytes = len, "appended chunk");
        on_chunk(&record);

        total_bytes += len;
        chunks.push(record);
        index += 1;
    }

    writer.flush()?;

    let stray_chunks = stray_or_empty(find_stray_chunks(src, index), index);

    info!(
        output = %output.display(),
        chunks = chunks.len(),
        bytes = total_bytes,
        "join complete"
    );

    Ok(JoinSummary {
        output,
        chunks,
        total_bytes,
        stray_chunks,
    })
}

/// The stray scan only feeds diagnostics. A directory that cannot be listed
/// is logged and treated as having no strays; the join itself has succeeded.
fn stray_or_empty(scan: Result<Vec<PathBuf>>, missing_index: u64) -> Vec<PathBuf> {
    match scan {
        Ok(stray) => {
            if !stray.is_empty() {
                warn!(
                    missing_index,
                    stray = stray.len(),
                    "chunk sequence has a gap; later chunks were not joined"
                );
            }
            stray
        }
        Err(e) => {
            warn!(error = %e, "could not scan for chunks past the last joined index");
            Vec::new()
        }
    }
}
