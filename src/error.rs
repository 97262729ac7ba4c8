//! Error types for document extraction

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("DOCX parse error: {0}")]
    Parse(String),

    #[error("Missing part in document package: {0}")]
    MissingPart(String),

    #[error("Image is linked outside the document package: {0}")]
    ExternalPart(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
