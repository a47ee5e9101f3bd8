use anyhow::Result;
use binsplit_core::{JoinSummary, SplitSummary};
use std::fmt::Write;

pub(crate) fn print_split(summary: &SplitSummary, json: bool) -> Result<()> {
    print!("{}", render_split(summary, json)?);
    Ok(())
}

pub(crate) fn print_join(summary: &JoinSummary, json: bool) -> Result<()> {
    print!("{}", render_join(summary, json)?);
    Ok(())
}

fn render_split(summary: &SplitSummary, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(summary)? + "\n");
    }

    let mut out = String::new();
    writeln!(
        out,
        "Split {} into {} chunk(s) of up to {} in {}",
        summary.source_name,
        summary.chunk_count(),
        format_bytes(summary.chunk_size),
        summary.out_dir.display()
    )?;
    for chunk in &summary.chunks {
        writeln!(
            out,
            "  {:<48} {:>12}",
            chunk.path.display(),
            format_bytes(chunk.len)
        )?;
    }
    writeln!(out, "  Total: {}", format_bytes(summary.total_bytes))?;

    Ok(out)
}

fn render_join(summary: &JoinSummary, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(summary)? + "\n");
    }

    let mut out = String::new();
    writeln!(
        out,
        "Joined {} chunk(s) ({}) into {}",
        summary.chunk_count(),
        format_bytes(summary.total_bytes),
        summary.output.display()
    )?;

    if !summary.is_contiguous() {
        writeln!(
            out,
            "  Chunk {} is missing; {} later chunk(s) were not joined:",
            summary.chunk_count(),
            summary.stray_chunks.len()
        )?;
        for path in &summary.stray_chunks {
            writeln!(out, "    {}", path.display())?;
        }
    }

    Ok(out)
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
