//! Document reading and data structures module
//!
//! This module opens Microsoft Word (.docx) documents and exposes their
//! paragraphs, tables and relationships through [`DocumentReader`].

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod reader;

pub use loader::DocxDocument;
pub use models::*;
pub use reader::{DocumentReader, MemoryDocument};
