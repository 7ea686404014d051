use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::checker::CommitCheckResult;
use crate::{Error, Result};

pub const DEFAULT_OUTPUT_FILE: &str = "commit_check.txt";

/// Marker written for a field that has no value.
const ABSENT: &str = "None";

/// Renders the result as three lines: found flag, timestamp, message.
///
/// The last line carries no trailing newline. The message is written verbatim, so a multi-line
/// commit message extends the third field over several lines.
pub fn render(result: &CommitCheckResult) -> String {
    let found = if result.found() { "True" } else { "False" };
    format!(
        "{}\n{}\n{}",
        found,
        result.timestamp().unwrap_or(ABSENT),
        result.message().unwrap_or(ABSENT)
    )
}

/// Writes the rendered result to `path`, replacing whatever was there.
///
/// The content goes to a uniquely named temporary file in the destination directory and is
/// renamed into place once synced. The temporary file is removed on every failure path.
pub fn write_result(path: &Path, result: &CommitCheckResult) -> Result<()> {
    let content = render(result);
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::Builder::new()
        .prefix(".commit_check")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;

    file.persist(path).map_err(|e| io_err(e.error))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
