//! Builds small .docx packages for tests

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;

pub const IMAGE_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
pub const STYLES_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
pub const HYPERLINK_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// 1x1 transparent PNG
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Default Extension="png" ContentType="image/png"/>
  <Default Extension="jpeg" ContentType="image/jpeg"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

struct FixtureRelationship {
    id: String,
    rel_type: String,
    target: String,
    external: bool,
}

/// A .docx package assembled from raw WordprocessingML
#[derive(Default)]
pub struct DocxFixture {
    body: String,
    relationships: Vec<FixtureRelationship>,
    parts: Vec<(String, Vec<u8>)>,
}

impl DocxFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.body.push_str(&paragraph_xml(text));
        self
    }

    pub fn paragraphs(self, texts: &[&str]) -> Self {
        texts.iter().fold(self, |fixture, text| fixture.paragraph(text))
    }

    pub fn table(mut self, rows: &[&[&str]]) -> Self {
        self.body.push_str("<w:tbl>");
        for row in rows {
            self.body.push_str("<w:tr>");
            for cell in row.iter() {
                self.body.push_str("<w:tc>");
                self.body.push_str(&paragraph_xml(cell));
                self.body.push_str("</w:tc>");
            }
            self.body.push_str("</w:tr>");
        }
        self.body.push_str("</w:tbl>");
        self
    }

    /// Image relationship whose part lives at `word/{target}`
    pub fn image(mut self, id: &str, target: &str, data: &[u8]) -> Self {
        self.relationships.push(FixtureRelationship {
            id: id.to_string(),
            rel_type: IMAGE_TYPE.to_string(),
            target: target.to_string(),
            external: false,
        });
        self.parts.push((format!("word/{target}"), data.to_vec()));
        self
    }

    /// Relationship entry without a part behind it
    pub fn dangling_relationship(mut self, id: &str, rel_type: &str, target: &str) -> Self {
        self.relationships.push(FixtureRelationship {
            id: id.to_string(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
            external: false,
        });
        self
    }

    pub fn external_link(mut self, id: &str, url: &str) -> Self {
        self.relationships.push(FixtureRelationship {
            id: id.to_string(),
            rel_type: HYPERLINK_TYPE.to_string(),
            target: url.to_string(),
            external: true,
        });
        self
    }

    /// Image relationship with `TargetMode="External"` (a linked picture)
    pub fn external_image(mut self, id: &str, url: &str) -> Self {
        self.relationships.push(FixtureRelationship {
            id: id.to_string(),
            rel_type: IMAGE_TYPE.to_string(),
            target: url.to_string(),
            external: true,
        });
        self
    }

    /// Raw WordprocessingML appended to the body as is
    pub fn raw_body(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// Styles part, referenced from the relationships like Word does
    pub fn styles(mut self) -> Self {
        self.relationships.push(FixtureRelationship {
            id: "rIdStyles".to_string(),
            rel_type: STYLES_TYPE.to_string(),
            target: "styles.xml".to_string(),
            external: false,
        });
        self.parts.push((
            "word/styles.xml".to_string(),
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"></w:styles>"#
                .to_vec(),
        ));
        self
    }

    /// Body element that only carries a relationship reference
    pub fn reference(mut self, id: &str) -> Self {
        self.body.push_str(&format!(
            r#"<fx:ref xmlns:fx="urn:docx-extract:fixture" r:embed="{id}"/>"#
        ));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));

        let mut add = |name: &str, data: &[u8]| {
            writer
                .start_file(name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        };

        add("[Content_Types].xml", CONTENT_TYPES.as_bytes());
        add("_rels/.rels", PACKAGE_RELS.as_bytes());
        add("word/document.xml", self.document_xml().as_bytes());
        add("word/_rels/document.xml.rels", self.rels_xml().as_bytes());
        for (name, data) in &self.parts {
            add(name, data);
        }

        writer.finish().unwrap().into_inner()
    }

    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }

    fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{}</w:body></w:document>"#,
            self.body
        )
    }

    fn rels_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in &self.relationships {
            let mode = if rel.external {
                r#" TargetMode="External""#
            } else {
                ""
            };
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"{mode}/>"#,
                rel.id,
                rel.rel_type,
                escape(&rel.target)
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

fn paragraph_xml(text: &str) -> String {
    if text.is_empty() {
        "<w:p/>".to_string()
    } else {
        format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            escape(text)
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
