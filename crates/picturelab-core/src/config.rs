//! Run configuration for the collage binary.
//!
//! Only file locations are configurable. The geometry of the collage is
//! fixed in [`crate::collage`].
//!
//! ```json
//! {
//!   "assets_dir": "images",
//!   "tux": "tux.png",
//!   "output": "out/MyCollage.png"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config {path}: {message}")]
    Parse { path: String, message: String },
}

/// Where the collage reads its inputs and writes its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollageConfig {
    /// Directory the input pictures are resolved against.
    pub assets_dir: PathBuf,
    /// The penguin, 265 wide by 314 high.
    pub tux: PathBuf,
    /// The laptop, 550 by 550.
    pub mac_book: PathBuf,
    /// The logo blended into the center.
    pub windows_logo: PathBuf,
    /// Output file; its extension picks the format.
    pub output: PathBuf,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("."),
            tux: PathBuf::from("tux.png"),
            mac_book: PathBuf::from("macbook.jpg"),
            windows_logo: PathBuf::from("windows.jpg"),
            output: PathBuf::from("MyCollage.jpg"),
        }
    }
}

impl CollageConfig {
    /// Resolve an input path against `assets_dir`. Absolute paths are kept.
    pub fn asset(&self, file: &Path) -> PathBuf {
        self.assets_dir.join(file)
    }
}

/// Parse a configuration from a JSON string.
pub fn parse_config(data: &str) -> Result<CollageConfig, serde_json::Error> {
    serde_json::from_str(data)
}

/// Load a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<CollageConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_config(&data).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
