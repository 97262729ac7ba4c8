//! Package relationship parsing
//!
//! OOXML uses relationship parts (`_rels/*.rels`) to map ids to targets.
//! Images embedded in the body are reached through the relationships of
//! the main document part.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Result;

/// Relationship type of the package's main document part
pub(crate) const TYPE_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

pub(crate) const DEFAULT_MAIN_PART: &str = "word/document.xml";

/// One `<Relationship>` element as written in a rels part
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRelationship {
    pub(crate) id: String,
    pub(crate) rel_type: String,
    pub(crate) target: String,
    pub(crate) external: bool,
}

/// Parse a rels part, keeping entries in the order they are written
pub(crate) fn parse_relationships(xml: &[u8]) -> Result<Vec<RawRelationship>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut relationships = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(ref e) | Event::Start(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let mut id = None;
                let mut target = None;
                let mut rel_type = None;
                let mut external = false;

                for attr in e.attributes().filter_map(|a| a.ok()) {
                    match attr.key.as_ref() {
                        b"Id" => id = Some(attr.unescape_value()?.into_owned()),
                        b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                        b"Type" => rel_type = Some(attr.unescape_value()?.into_owned()),
                        b"TargetMode" => {
                            external = attr.unescape_value()?.eq_ignore_ascii_case("External")
                        }
                        _ => {}
                    }
                }

                if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                    relationships.push(RawRelationship {
                        id,
                        rel_type,
                        target,
                        external,
                    });
                } else {
                    log::warn!("Skipping relationship entry without Id, Type or Target");
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(relationships)
}

/// Path of the main document part, from the package-level `_rels/.rels`
pub(crate) fn main_document_path(package_rels: Option<&[u8]>) -> Result<String> {
    let Some(xml) = package_rels else {
        return Ok(DEFAULT_MAIN_PART.to_string());
    };

    let path = parse_relationships(xml)?
        .into_iter()
        .find(|rel| rel.rel_type == TYPE_OFFICE_DOCUMENT)
        .map(|rel| resolve_target("", &rel.target))
        .unwrap_or_else(|| DEFAULT_MAIN_PART.to_string());

    Ok(path)
}

/// `word/document.xml` -> `word/_rels/document.xml.rels`
pub(crate) fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, name)) => format!("{dir}/_rels/{name}.rels"),
        None => format!("_rels/{part}.rels"),
    }
}

/// Directory of a part name, empty for parts at the package root
pub(crate) fn part_dir(part: &str) -> &str {
    part.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

/// Resolve a relationship target against the directory of its source part.
///
/// Targets starting with `/` are package-absolute. `.` and `..` segments
/// are folded; `..` never climbs above the package root.
pub(crate) fn resolve_target(base_dir: &str, target: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    let joined;
    let path = if let Some(absolute) = target.strip_prefix('/') {
        absolute
    } else if base_dir.is_empty() {
        target
    } else {
        joined = format!("{base_dir}/{target}");
        &joined
    };

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}

/// Byte offset of the first reference to each relationship id in a part.
///
/// Looks at attributes in the relationships namespace (`r:embed`, `r:id`,
/// `r:link`, `r:pict`, ...), matched by the `r` prefix Word writes.
pub(crate) fn first_references(xml: &[u8]) -> Result<HashMap<String, usize>> {
    let mut reader = Reader::from_reader(xml);
    let mut positions = HashMap::new();
    let mut buf = Vec::new();

    loop {
        let offset = reader.buffer_position() as usize;
        match reader.read_event_into(&mut buf)? {
            Event::Empty(ref e) | Event::Start(ref e) => {
                for attr in e.attributes().filter_map(|a| a.ok()) {
                    let is_relationship_ref = attr
                        .key
                        .prefix()
                        .is_some_and(|prefix| prefix.as_ref() == b"r");
                    if is_relationship_ref {
                        let id = attr.unescape_value()?.into_owned();
                        positions.entry(id).or_insert(offset);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(positions)
}
