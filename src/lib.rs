//! docx-extract: pull text, tables and images out of .docx files
//!
//! This library opens Microsoft Word documents and runs three extraction
//! passes over them: paragraph text, table rows and embedded images.

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod report;

/// Output format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Text and tables on stdout, images saved to disk
    #[default]
    Console,
    /// Text and tables saved to a text file
    Text,
    /// Everything as JSON
    Json,
}

// Re-export commonly used types
pub use config::Settings;
pub use document::{DocumentReader, DocxDocument, MemoryDocument};
pub use error::{ExtractError, Result};
pub use extract::{CellTrim, Extractor, ImageOrder};
pub use report::ReportStyle;
