//! Paragraph text extraction from the docx-rs object model

use super::super::models::Paragraph;
use super::properties::{as_keyword, find_key, serialized};

/// Plain text of a paragraph: runs in order, including runs inside
/// hyperlinks. Tabs become `\t`; line breaks and carriage returns become
/// `\n`. Page and column breaks add nothing.
pub(crate) fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&para.children, &mut text);
    text
}

pub(crate) fn to_paragraph(para: &docx_rs::Paragraph) -> Paragraph {
    Paragraph::new(paragraph_text(para))
}

fn push_paragraph_children(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run_text(run, text),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                push_paragraph_children(&link.children, text);
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &docx_rs::Run, text: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => text.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => text.push('\t'),
            docx_rs::RunChild::Break(br) => text.push_str(break_text(br)),
            docx_rs::RunChild::CarriageReturn(_) => text.push('\n'),
            _ => {}
        }
    }
}

fn break_text(br: &docx_rs::Break) -> &'static str {
    let kind = serialized(br).and_then(|value| find_key(&value, "breakType").and_then(as_keyword));
    match kind.as_deref() {
        Some("page" | "column") => "",
        _ => "\n",
    }
}
