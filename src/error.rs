//! Level loading errors

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level {level} not found at {}", path.display())]
    NotFound { level: u32, path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed level file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("level {level} is invalid: {reason}")]
    Invalid { level: u32, reason: String },
}

impl LevelError {
    /// True when the requested level simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, LevelError::NotFound { .. })
    }
}
