use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

const LOG_TARGET: &str = "art";

/// Reads the ASCII art file. A missing file is not fatal: it is logged and
/// the art column stays blank.
pub fn load_ascii_art(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(art) => Ok(art),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(target: LOG_TARGET, "File {} not found, rendering without art", path.display());
            Ok(String::new())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read ASCII art from {}", path.display())),
    }
}
