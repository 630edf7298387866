use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Input not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Empty CSV: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
