//! Record data parsers and host-side routing.
//!
//! An SRU client looks up the parser whose [`RecordDataParser::record_schema`]
//! matches the schema declared for a record and lets it consume the record
//! from a cursor parked at the record's root element.

mod legacy;
mod parser;

pub use legacy::LegacyRecordParser;
pub use parser::ClarinFcsRecordParser;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::config::{FCS_RECORD_SCHEMA, LEGACY_FCS_RECORD_SCHEMA, RESOURCE_ELEMENT};
use crate::error::{RecordError, Result};
use crate::types::RecordData;
use crate::xml::{has_name, DocumentCursor, XmlCursor};

/// Trait implemented by record data parsers plugged into an SRU client.
pub trait RecordDataParser: Send + Sync {
    /// Record schema identifier; equals the record namespace URI.
    fn record_schema(&self) -> &str;

    /// Parse one record and leave the cursor right after it.
    fn parse(&self, cursor: &mut dyn XmlCursor) -> Result<RecordData>;
}

/// All built-in record data parsers.
#[must_use]
pub fn default_parsers() -> Vec<Box<dyn RecordDataParser>> {
    vec![
        Box::new(ClarinFcsRecordParser::new()),
        Box::new(LegacyRecordParser::new()),
    ]
}

/// Find the parser responsible for a record schema.
pub fn parser_for_schema<'p>(
    parsers: &'p [Box<dyn RecordDataParser>],
    schema: &str,
) -> Option<&'p dyn RecordDataParser> {
    parsers
        .iter()
        .find(|parser| parser.record_schema() == schema)
        .map(|parser| parser.as_ref())
}

fn is_record_element(node: Node<'_, '_>) -> bool {
    has_name(node, FCS_RECORD_SCHEMA, RESOURCE_ELEMENT)
        || has_name(node, LEGACY_FCS_RECORD_SCHEMA, RESOURCE_ELEMENT)
}

/// Find the root elements of all records in a document.
///
/// A record root is a `<Resource>` in a known record namespace that is not
/// nested inside another record. Records are returned in document order, so
/// a bare record document and an SRU response embedding many records are
/// handled alike.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use fcs_record::record::locate_records;
///
/// let xml = r#"<records>
///     <Resource xmlns="http://clarin.eu/fcs/resource"><Resource/></Resource>
///     <Resource xmlns="http://clarin.eu/fcs/1.0"/>
/// </records>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(locate_records(&doc).len(), 2);
/// ```
pub fn locate_records<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|node| is_record_element(*node))
        .filter(|node| !node.ancestors().skip(1).any(is_record_element))
        .collect()
}

/// Parse all records of a document, routing each by its namespace.
///
/// # Errors
/// Returns `UnsupportedSchema` if a record's schema has no parser, or the
/// first parse error encountered.
pub fn parse_records(
    parsers: &[Box<dyn RecordDataParser>],
    doc: &Document<'_>,
) -> Result<Vec<RecordData>> {
    locate_records(doc)
        .into_iter()
        .map(|node| {
            let schema = node.tag_name().namespace().unwrap_or_default();
            let parser = parser_for_schema(parsers, schema)
                .ok_or_else(|| RecordError::UnsupportedSchema(schema.to_string()))?;
            debug!(schema = %schema, "parsing record");
            let mut cursor = DocumentCursor::at(node);
            parser.parse(&mut cursor)
        })
        .collect()
}

/// Parse all records in an XML string with the built-in parsers.
///
/// # Examples
/// ```
/// use fcs_record::record::parse_str;
///
/// let xml = r#"<Resource xmlns="http://clarin.eu/fcs/resource" pid="hdl:1/a"/>"#;
/// let records = parse_str(xml).unwrap();
/// assert_eq!(records[0].as_fcs().unwrap().pid(), Some("hdl:1/a"));
/// ```
pub fn parse_str(xml: &str) -> Result<Vec<RecordData>> {
    let doc = Document::parse(xml)?;
    parse_records(&default_parsers(), &doc)
}
