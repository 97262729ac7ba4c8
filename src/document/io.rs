//! File I/O operations and validation
//!
//! This module handles file validation and raw part access inside the
//! document package.

use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

use crate::error::{ExtractError, Result};

pub(crate) type Package<'a> = ZipArchive<Cursor<&'a [u8]>>;

/// Validates that the path points at something that can be a .docx file
pub(crate) fn validate_docx_path(file_path: &Path) -> Result<()> {
    if !file_path.exists() {
        return Err(ExtractError::FileNotFound(file_path.to_path_buf()));
    }

    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(ExtractError::InvalidFormat(format!(
            "Invalid file format. Expected .docx file, got .{extension}\n\
            Note: only Word .docx files are supported (not .doc, .xlsx, .zip, etc.)"
        )));
    }

    Ok(())
}

/// Opens the zip container and checks that it holds a Word document
pub(crate) fn open_package(data: &[u8]) -> Result<Package<'_>> {
    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
        ExtractError::InvalidFormat(format!("Invalid .docx file: not a zip archive ({e})"))
    })?;

    if !has_part(&mut archive, "word/document.xml") {
        if has_part(&mut archive, "xl/workbook.xml") {
            return Err(ExtractError::InvalidFormat(
                "This appears to be an Excel file (.xlsx).\n\
                Only Word documents (.docx) are supported."
                    .to_string(),
            ));
        }
        if has_part(&mut archive, "ppt/presentation.xml") {
            return Err(ExtractError::InvalidFormat(
                "This appears to be a PowerPoint file (.pptx).\n\
                Only Word documents (.docx) are supported."
                    .to_string(),
            ));
        }

        return Err(ExtractError::InvalidFormat(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
                .to_string(),
        ));
    }

    Ok(archive)
}

pub(crate) fn has_part(archive: &mut Package<'_>, name: &str) -> bool {
    archive.by_name(name).is_ok()
}

/// Reads a part's bytes, `Ok(None)` when the package has no such part
pub(crate) fn read_optional_part(archive: &mut Package<'_>, name: &str) -> Result<Option<Vec<u8>>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut data = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut data)?;
    Ok(Some(data))
}

pub(crate) fn read_part(archive: &mut Package<'_>, name: &str) -> Result<Vec<u8>> {
    read_optional_part(archive, name)?.ok_or_else(|| ExtractError::MissingPart(name.to_string()))
}
