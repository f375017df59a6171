// Error types for eventdesk.
// Covers config loading, log file setup, and terminal I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
