use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input video not found: {0}")]
    InputNotFound(PathBuf),
    #[error("{0} is not available on this system")]
    ToolNotAvailable(&'static str),
    #[error("{step} failed with exit code {}", .code.map(|c| c.to_string()).unwrap_or_else(|| String::from("none (signal)")))]
    StepFailed { step: String, code: Option<i32> },
    #[error("No training run found under {0}")]
    NoTrainingRunFound(PathBuf),
    #[error("Argument cannot be empty: {0}")]
    EmptyArgument(String),
    #[error("Required argument is missing: {0}")]
    MissingArgument(String),
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
