//! Table extraction
//!
//! Converts a docx-rs table into rows of cell text. A cell's text is the
//! text of each paragraph directly inside it, one line per paragraph.
//! Rows are laid out on the table grid: a cell spanning several grid
//! columns appears once per column, and a cell that continues a vertical
//! merge repeats the text of the cell above it. Nested tables are not
//! descended into.

use std::iter;

use super::super::models::{Table, TableCell, TableRow};
use super::properties::{as_count, as_keyword, find_key, serialized};
use super::text::paragraph_text;

/// Extract table data from a docx-rs Table
pub(crate) fn extract_table_data(table: &docx_rs::Table) -> Table {
    // Resolved text of the previous row, one entry per grid column
    let mut above: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(table.rows.len());

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells: Vec<TableCell> = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let layout = CellLayout::of(cell);

            let text = match above.get(cells.len()) {
                Some(top) if layout.continues_merge => top.clone(),
                _ => cell_text(cell),
            };
            cells.extend(iter::repeat_n(TableCell { text }, layout.grid_span));
        }

        above = cells.iter().map(|cell| cell.text.clone()).collect();
        rows.push(TableRow { cells });
    }

    Table { rows }
}

/// Placement of a `w:tc` on the table grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellLayout {
    grid_span: usize,
    continues_merge: bool,
}

impl CellLayout {
    fn of(cell: &docx_rs::TableCell) -> Self {
        let Some(property) = serialized(&cell.property) else {
            return Self::default();
        };

        let grid_span = find_key(&property, "gridSpan")
            .and_then(as_count)
            .unwrap_or(1)
            .max(1);
        let continues_merge = find_key(&property, "verticalMerge")
            .and_then(as_keyword)
            .is_some_and(|kind| kind == "continue");

        Self {
            grid_span,
            continues_merge,
        }
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            grid_span: 1,
            continues_merge: false,
        }
    }
}

fn cell_text(cell: &docx_rs::TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| match content {
            docx_rs::TableCellContent::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
