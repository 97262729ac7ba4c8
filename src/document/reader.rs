//! The capability every extraction pass reads from

use super::models::{Paragraph, Relationship, Table};

/// Read access to the content of an opened document.
///
/// Implemented by [`DocxDocument`](super::DocxDocument) for real files and by
/// [`MemoryDocument`] for content assembled in code.
pub trait DocumentReader {
    /// Body paragraphs in document order
    fn paragraphs(&self) -> &[Paragraph];

    /// Body tables in document order
    fn tables(&self) -> &[Table];

    /// Relationships of the main document part, in the order the package lists them
    fn relationships(&self) -> &[Relationship];
}

/// In-memory document
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    paragraphs: Vec<Paragraph>,
    tables: Vec<Table>,
    relationships: Vec<Relationship>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(Paragraph::new(text));
        self
    }

    pub fn with_paragraphs<I>(mut self, texts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.paragraphs.extend(texts.into_iter().map(Paragraph::new));
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }
}

impl DocumentReader for MemoryDocument {
    fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn tables(&self) -> &[Table] {
        &self.tables
    }

    fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}
