//! Document loading and orchestration
//!
//! Opens a .docx package, takes paragraphs and tables from the docx-rs
//! object model and reads the main part's relationships together with the
//! payload of every internal target.

use std::path::Path;

use super::io::{Package, open_package, read_optional_part, read_part, validate_docx_path};
use super::models::{IMAGE_RELATIONSHIP_MARKER, Paragraph, Relationship, Table};
use super::parsing::relationships::{
    first_references, main_document_path, parse_relationships, part_dir, rels_path_for,
    resolve_target,
};
use super::parsing::table::extract_table_data;
use super::parsing::text::to_paragraph;
use super::reader::DocumentReader;
use crate::error::{ExtractError, Result};

/// A .docx document opened from disk or memory
#[derive(Debug, Clone)]
pub struct DocxDocument {
    paragraphs: Vec<Paragraph>,
    tables: Vec<Table>,
    relationships: Vec<Relationship>,
}

impl DocxDocument {
    /// Validate and open a .docx file
    pub fn open(file_path: &Path) -> Result<Self> {
        validate_docx_path(file_path)?;

        let file_data = std::fs::read(file_path)?;
        log::debug!(
            "Read {} bytes from {}",
            file_data.len(),
            file_path.display()
        );

        Self::from_bytes(&file_data)
    }

    /// Open a .docx package held in memory
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut archive = open_package(data)?;
        let relationships = load_relationships(&mut archive)?;

        let docx = docx_rs::read_docx(data).map_err(|e| ExtractError::Parse(e.to_string()))?;

        let mut paragraphs = Vec::new();
        let mut tables = Vec::new();

        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(para) => paragraphs.push(to_paragraph(para)),
                docx_rs::DocumentChild::Table(table) => tables.push(extract_table_data(table)),
                _ => {}
            }
        }

        log::info!(
            "Loaded document: {} paragraphs, {} tables, {} relationships",
            paragraphs.len(),
            tables.len(),
            relationships.len()
        );

        Ok(Self {
            paragraphs,
            tables,
            relationships,
        })
    }
}

impl DocumentReader for DocxDocument {
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

fn load_relationships(archive: &mut Package<'_>) -> Result<Vec<Relationship>> {
    let package_rels = read_optional_part(archive, "_rels/.rels")?;
    let main_part = main_document_path(package_rels.as_deref())?;

    let rels_path = rels_path_for(&main_part);
    let Some(rels_xml) = read_optional_part(archive, &rels_path)? else {
        log::debug!("No relationships part at {rels_path}");
        return Ok(Vec::new());
    };

    let main_xml = read_part(archive, &main_part)?;
    let references = first_references(&main_xml)?;
    let base_dir = part_dir(&main_part);

    let mut relationships = Vec::new();
    for raw in parse_relationships(&rels_xml)? {
        if raw.external {
            if raw.rel_type.contains(IMAGE_RELATIONSHIP_MARKER) {
                return Err(ExtractError::ExternalPart(raw.target));
            }
            log::debug!("Skipping external relationship {} -> {}", raw.id, raw.target);
            continue;
        }

        let part_name = resolve_target(base_dir, &raw.target);
        let payload = match read_optional_part(archive, &part_name)? {
            Some(payload) => payload,
            None if raw.rel_type.contains(IMAGE_RELATIONSHIP_MARKER) => {
                return Err(ExtractError::MissingPart(part_name));
            }
            None => {
                log::warn!("Relationship {} points at missing part {part_name}", raw.id);
                Vec::new()
            }
        };

        let mut relationship = Relationship::new(raw.id, raw.rel_type, raw.target, payload);
        relationship.first_reference = references.get(&relationship.id).copied();
        relationships.push(relationship);
    }

    Ok(relationships)
}
