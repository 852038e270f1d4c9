//! Errors raised while reading definitions and generating the action table.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Every failure aborts the run; there is no partial-output guarantee.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid definitions document: {0}")]
    ConfigParse(#[from] json5::Error),
    #[error("Malformed definitions: {0}")]
    ConfigShape(String),
    #[error("CommandSizes[{index}] = {value:?} is not a hex integer: {source}")]
    InvalidSize {
        index: usize,
        value: String,
        source: ParseIntError,
    },
    #[error("CommandSizes[{index}] = {value:?} is outside 0..={max:#X}")]
    SizeOutOfRange {
        index: usize,
        value: String,
        max: i64,
    },
    #[error(
        "Action {index} ({name}) has {count} parameters but CommandMap lists only {available} argument types"
    )]
    MissingArgument {
        index: usize,
        name: String,
        count: usize,
        available: usize,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Short category name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::ConfigRead { .. } => "read",
            GenerateError::ConfigParse(_) => "parse",
            GenerateError::ConfigShape(_) => "shape",
            GenerateError::InvalidSize { .. } | GenerateError::SizeOutOfRange { .. } => "size",
            GenerateError::MissingArgument { .. } => "arguments",
            GenerateError::Write { .. } => "write",
        }
    }
}
