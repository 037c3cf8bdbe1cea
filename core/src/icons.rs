//! Icon asset loading for effect display metadata.
//!
//! Icons are cosmetic: a load failure is logged and the effect functions
//! without one.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Errors while reading an icon asset.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to read icon file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raw icon bytes plus the name they were loaded under.
#[derive(Debug, Clone)]
pub struct IconData {
    /// Encoded image bytes (PNG as shipped; the renderer decodes).
    pub bytes: Vec<u8>,
    /// File stem, used as the display resource name.
    pub name: String,
}

/// Read an icon file, propagating the failure.
pub fn read_icon(path: &Path) -> Result<IconData, IconError> {
    let bytes = std::fs::read(path).map_err(|source| IconError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("icon")
        .to_string();
    Ok(IconData { bytes, name })
}

/// Load an icon, treating failure as non-fatal.
pub fn load_icon(path: &Path) -> Option<IconData> {
    match read_icon(path) {
        Ok(icon) => Some(icon),
        Err(err) => {
            warn!(%err, "icon load failed; effect will display without an icon");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_icon_is_none() {
        assert!(load_icon(Path::new("/nonexistent/grace.png")).is_none());
    }
}
