//! Core data structures for extracted document content
//!
//! These are read-only views produced by a [`DocumentReader`](super::DocumentReader).
//! Nothing here is mutated once a document has been opened.

use serde::{Deserialize, Serialize};

/// Substring that marks a relationship type as pointing at an image part
pub const IMAGE_RELATIONSHIP_MARKER: &str = "image";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whitespace-only paragraphs count as blank
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
}

impl Table {
    /// Build a table from rows of cell text
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|cells| TableRow {
                    cells: cells
                        .into_iter()
                        .map(|text| TableCell { text: text.into() })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// A relationship from the main document part to another package part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target as written in the relationships part, e.g. `media/image1.png`
    pub target_ref: String,
    /// Raw bytes of the target part
    pub payload: Vec<u8>,
    /// Offset of the first reference to `id` in the main document part
    pub first_reference: Option<usize>,
}

impl Relationship {
    pub fn new(
        id: impl Into<String>,
        rel_type: impl Into<String>,
        target_ref: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            id: id.into(),
            rel_type: rel_type.into(),
            target_ref: target_ref.into(),
            payload,
            first_reference: None,
        }
    }

    pub fn with_first_reference(mut self, position: usize) -> Self {
        self.first_reference = Some(position);
        self
    }

    pub fn is_image(&self) -> bool {
        self.rel_type.contains(IMAGE_RELATIONSHIP_MARKER)
    }

    /// Everything after the last `.` of the target reference.
    ///
    /// A reference without a dot yields the whole reference.
    pub fn extension(&self) -> &str {
        match self.target_ref.rfind('.') {
            Some(pos) => &self.target_ref[pos + 1..],
            None => &self.target_ref,
        }
    }
}

/// Record of one image written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// 1-based position in traversal order
    pub index: usize,
    pub file_name: String,
    pub path: std::path::PathBuf,
    pub relationship_id: String,
    pub size: usize,
}
