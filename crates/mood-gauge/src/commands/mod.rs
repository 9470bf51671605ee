//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod indicators;
pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read an input file, or stdin when `path` is `-`, and validate its size
/// against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_bounded(std::io::stdin().lock(), max_bytes, "stdin")
}

/// Read all of `reader`, failing once more than `max_bytes` arrive.
///
/// Reads at most one byte past the limit, so oversized input is detected
/// without buffering all of it.
fn read_bounded<R: Read>(
    reader: R,
    max_bytes: Option<usize>,
    name: &str,
) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(cap)
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {name}"))?;
            if buf.len() > max {
                anyhow::bail!("input too large: {name} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {name}"))?;
        }
    }
    String::from_utf8(buf).with_context(|| format!("{name} is not valid UTF-8"))
}
