//! Extraction passes over an opened document
//!
//! [`Extractor`] runs three independent passes: paragraph text, table rows
//! and embedded images. Each pass reads from a [`DocumentReader`], so the
//! same code serves docx files and in-memory documents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{DocumentReader, ExtractedImage, Relationship};
use crate::error::Result;

/// Separator between cells of a table row
pub const CELL_SEPARATOR: &str = " | ";

/// Whether table cell text is trimmed before joining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellTrim {
    #[default]
    Keep,
    Trim,
}

impl CellTrim {
    fn apply(self, text: &str) -> &str {
        match self {
            CellTrim::Keep => text,
            CellTrim::Trim => text.trim(),
        }
    }
}

/// Order in which image relationships are numbered
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageOrder {
    /// The order the document package lists its relationships
    #[default]
    Relationship,
    /// The order images are first referenced in the document body
    Document,
}

pub struct Extractor<'a, R: DocumentReader + ?Sized> {
    reader: &'a R,
}

impl<'a, R: DocumentReader + ?Sized> Extractor<'a, R> {
    pub fn new(reader: &'a R) -> Self {
        Self { reader }
    }

    /// Raw text of every paragraph that is not blank, in document order
    pub fn text_lines(&self) -> impl Iterator<Item = &'a str> + use<'a, R> {
        self.reader
            .paragraphs()
            .iter()
            .filter(|para| !para.is_blank())
            .map(|para| para.text.as_str())
    }

    /// One entry per table, holding one line per row with cells joined by
    /// [`CELL_SEPARATOR`]
    pub fn table_lines(&self, trim: CellTrim) -> Vec<Vec<String>> {
        self.reader
            .tables()
            .iter()
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|row| {
                        row.cells
                            .iter()
                            .map(|cell| trim.apply(&cell.text))
                            .collect::<Vec<_>>()
                            .join(CELL_SEPARATOR)
                    })
                    .collect()
            })
            .collect()
    }

    /// Image relationships in numbering order
    pub fn image_relationships(&self, order: ImageOrder) -> Vec<&'a Relationship> {
        let mut images: Vec<&Relationship> = self
            .reader
            .relationships()
            .iter()
            .filter(|rel| rel.is_image())
            .collect();

        if order == ImageOrder::Document {
            // Stable: unreferenced images keep their relative order, after the rest
            images.sort_by_key(|rel| rel.first_reference.unwrap_or(usize::MAX));
        }

        images
    }

    /// Write every image payload to `output_dir/image_{n}.{ext}`.
    ///
    /// The directory is created if needed. The first failed write aborts
    /// the pass; files written before it stay on disk.
    pub fn extract_images(
        &self,
        output_dir: &Path,
        order: ImageOrder,
    ) -> Result<Vec<ExtractedImage>> {
        self.extract_images_with(output_dir, order, |_| {})
    }

    /// Like [`Extractor::extract_images`], calling `on_written` right after
    /// each file lands on disk
    pub fn extract_images_with<F>(
        &self,
        output_dir: &Path,
        order: ImageOrder,
        mut on_written: F,
    ) -> Result<Vec<ExtractedImage>>
    where
        F: FnMut(&ExtractedImage),
    {
        fs::create_dir_all(output_dir)?;

        let mut extracted = Vec::new();
        for (position, rel) in self.image_relationships(order).into_iter().enumerate() {
            let index = position + 1;
            let file_name = format!("image_{index}.{}", rel.extension());
            let path = output_dir.join(&file_name);

            fs::write(&path, &rel.payload)?;
            log::debug!(
                "Wrote {} bytes from {} ({}) to {}",
                rel.payload.len(),
                rel.id,
                rel.target_ref,
                path.display()
            );

            let image = ExtractedImage {
                index,
                file_name,
                path,
                relationship_id: rel.id.clone(),
                size: rel.payload.len(),
            };
            on_written(&image);
            extracted.push(image);
        }

        log::info!(
            "Extracted {} images into {}",
            extracted.len(),
            output_dir.display()
        );
        Ok(extracted)
    }
}
