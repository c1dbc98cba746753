//! Shared test utilities for steamdoc-ooxml

use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::OoxmlArchive;

/// A run as read back from document.xml
#[derive(Debug, Default, Clone)]
pub struct ReadRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size: Option<String>,
}

/// A paragraph as read back from document.xml
#[derive(Debug, Default, Clone)]
pub struct ReadParagraph {
    pub justified: bool,
    pub runs: Vec<ReadRun>,
}

impl ReadParagraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Extract document.xml from a generated DOCX
pub fn extract_document_xml(docx: &[u8]) -> String {
    extract_file(docx, "word/document.xml").unwrap()
}

/// Extract any part from a generated DOCX
pub fn extract_file(docx: &[u8], path: &str) -> Option<String> {
    let archive = OoxmlArchive::from_reader(Cursor::new(docx)).unwrap();
    archive.get_string(path)
}

fn val(e: &BytesStart) -> Option<String> {
    e.try_get_attribute("w:val")
        .unwrap()
        .map(|a| a.unescape_value().unwrap().into_owned())
}

/// Scan document.xml into paragraphs and runs
pub fn collect_paragraphs(xml: &str) -> Vec<ReadParagraph> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut para: Option<ReadParagraph> = None;
    let mut run: Option<ReadRun> = None;
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => para = Some(ReadParagraph::default()),
                b"w:r" => run = Some(ReadRun::default()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                let name = e.name();
                match (name.as_ref(), run.as_mut(), para.as_mut()) {
                    (b"w:b", Some(r), _) => r.bold = true,
                    (b"w:i", Some(r), _) => r.italic = true,
                    (b"w:sz", Some(r), _) => r.size = val(&e),
                    (b"w:jc", None, Some(p)) => p.justified = val(&e).as_deref() == Some("both"),
                    _ => {}
                }
            }
            Event::Text(t) => {
                if let (true, Some(r)) = (in_text, run.as_mut()) {
                    r.text.push_str(&t.unescape().unwrap());
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:r" => {
                    if let (Some(r), Some(p)) = (run.take(), para.as_mut()) {
                        p.runs.push(r);
                    }
                }
                b"w:p" => paragraphs.extend(para.take()),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    paragraphs
}
