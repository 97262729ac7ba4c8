use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use crate::document::{DocumentReader, ExtractedImage};
use crate::extract::{CellTrim, Extractor};

pub const TEXT_HEADER: &str = "=== TEXT CONTENT ===";
pub const TABLE_HEADER: &str = "=== TABLE CONTENT ===";

/// Layout of a plain-text report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Printed to the terminal; cells are kept as written
    Console,
    /// Saved to a text file; cells are trimmed and tables separated by a blank line
    TextFile,
}

impl ReportStyle {
    pub fn cell_trim(self) -> CellTrim {
        match self {
            ReportStyle::Console => CellTrim::Keep,
            ReportStyle::TextFile => CellTrim::Trim,
        }
    }

    fn separates_tables(self) -> bool {
        matches!(self, ReportStyle::TextFile)
    }
}

/// Render the text and table sections
pub fn render_content<R: DocumentReader + ?Sized>(
    extractor: &Extractor<'_, R>,
    style: ReportStyle,
) -> Result<String> {
    let mut output = String::new();

    match style {
        ReportStyle::Console => writeln!(output, "{TEXT_HEADER}")?,
        ReportStyle::TextFile => write!(output, "{TEXT_HEADER}\n\n")?,
    }
    for line in extractor.text_lines() {
        writeln!(output, "{line}")?;
    }

    match style {
        ReportStyle::Console => write!(output, "\n{TABLE_HEADER}\n")?,
        ReportStyle::TextFile => write!(output, "\n\n{TABLE_HEADER}\n\n")?,
    }
    for table in extractor.table_lines(style.cell_trim()) {
        for row in &table {
            writeln!(output, "{row}")?;
        }
        if style.separates_tables() {
            output.push('\n');
        }
    }

    Ok(output)
}

/// Console line announcing one written image
pub fn image_line(image: &ExtractedImage) -> String {
    format!("Extracted: {}", image.file_name)
}

/// Closing line of the console image section, after a blank line
pub fn image_total(count: usize) -> String {
    format!("\nTotal images extracted: {count}")
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    paragraphs: Vec<&'a str>,
    tables: Vec<Vec<Vec<&'a str>>>,
    images: &'a [ExtractedImage],
}

/// Render everything as a pretty-printed JSON object
pub fn render_json<R: DocumentReader + ?Sized>(
    reader: &R,
    source: &str,
    images: &[ExtractedImage],
) -> Result<String> {
    let report = JsonReport {
        source,
        paragraphs: Extractor::new(reader).text_lines().collect(),
        tables: reader
            .tables()
            .iter()
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|row| row.cells.iter().map(|cell| cell.text.trim()).collect())
                    .collect()
            })
            .collect(),
        images,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
