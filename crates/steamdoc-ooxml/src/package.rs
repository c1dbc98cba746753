//! Fixed package parts
//!
//! Everything in a generated DOCX except `word/document.xml`: content types,
//! relationships, the default text style and optional core properties.

use crate::writer::escape_xml;

/// Path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";
/// Path of the style definitions part
pub const STYLES_PART: &str = "word/styles.xml";
/// Path of the core properties part
pub const CORE_PART: &str = "docProps/core.xml";

/// `[Content_Types].xml`
pub fn content_types_xml(with_core: bool) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
"#,
    );
    if with_core {
        xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
        xml.push('\n');
    }
    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`
pub fn root_rels_xml(with_core: bool) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
"#,
    );
    if with_core {
        xml.push_str(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#);
        xml.push('\n');
    }
    xml.push_str("</Relationships>");
    xml
}

/// `word/_rels/document.xml.rels`
pub fn document_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#
        .to_string()
}

/// `word/styles.xml` with the default run font and size
///
/// `half_points` is the OOXML size unit: 22 for 11pt.
pub fn styles_xml(font: &str, half_points: u32) -> String {
    let font = escape_xml(font);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:docDefaults>
<w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr></w:rPrDefault>
<w:pPrDefault/>
</w:docDefaults>
<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>
</w:styles>"#
    )
}

/// `docProps/core.xml` carrying the document title
pub fn core_xml(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<dc:title>{}</dc:title>
<dc:creator>steamdoc</dc:creator>
</cp:coreProperties>"#,
        escape_xml(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_part_is_optional() {
        assert!(!content_types_xml(false).contains("core.xml"));
        assert!(content_types_xml(true).contains("/docProps/core.xml"));
        assert!(!root_rels_xml(false).contains("core-properties"));
        assert!(root_rels_xml(true).contains("core-properties"));
    }

    #[test]
    fn test_styles_defaults() {
        let xml = styles_xml("Helvetica", 22);
        assert!(xml.contains(r#"w:ascii="Helvetica""#));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
    }

    #[test]
    fn test_core_title_escaped() {
        let xml = core_xml("Rocks & Rivers");
        assert!(xml.contains("<dc:title>Rocks &amp; Rivers</dc:title>"));
    }
}
