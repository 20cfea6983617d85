use std::fs;
use std::path::Path;

use macgen_common::error::MacgenError;
use pnet::util::MacAddr;
use tracing::debug;

/// One address per line, trailing newline included. Empty input renders as "".
pub fn render(addrs: &[MacAddr]) -> String {
    addrs.iter().map(|mac| format!("{mac}\n")).collect()
}

/// Writes `addrs` to `path`, truncating anything already there.
pub fn save(path: &Path, addrs: &[MacAddr]) -> Result<(), MacgenError> {
    fs::write(path, render(addrs)).map_err(|source| MacgenError::FileWriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} addresses to {}", addrs.len(), path.display());
    Ok(())
}
