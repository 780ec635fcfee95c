//! End-to-end tests parsing record fixtures through the public API.

use std::fs;
use std::path::Path;

use fcs_record::config::{FCS_RECORD_SCHEMA, KWIC_MIME_TYPE, LEGACY_FCS_RECORD_SCHEMA};
use fcs_record::record::{default_parsers, locate_records, parse_records, parse_str};
use fcs_record::xml::DocumentCursor;
use fcs_record::{
    ClarinFcsRecordParser, DataViewKind, KwicDataView, LegacyRecordParser, RecordData,
    RecordError,
};
use pretty_assertions::assert_eq;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn test_resource_record() {
    let xml = load_fixture("resource.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let mut cursor = DocumentCursor::new(&doc);

    let record = ClarinFcsRecordParser::new()
        .parse_record(&mut cursor)
        .unwrap();
    assert!(cursor.is_exhausted());

    assert_eq!(record.pid(), Some("hdl:11858/00-1733-0000-0000-0001"));
    assert_eq!(record.reference(), Some("http://corpus.example.org/text/42"));

    let resource = record.resource();
    let views = resource.data_views().unwrap();
    assert_eq!(views.len(), 2);

    assert_eq!(views[0].mime_type(), KWIC_MIME_TYPE);
    assert_eq!(views[0].pid(), Some("dv-kwic-1"));
    assert_eq!(
        views[0].kind(),
        &DataViewKind::Kwic(KwicDataView::new("Sie sagte, das", "Haus", "sei schon alt."))
    );

    assert_eq!(views[1].mime_type(), "application/x-cmdi+xml");
    assert_eq!(views[1].reference(), Some("http://corpus.example.org/cmdi/42"));
    let cmdi = views[1].as_generic().unwrap().fragment();
    let root = cmdi.elements().next().unwrap();
    assert!(root.name().is("http://www.clarin.eu/cmd/", "CMD"));
    assert_eq!(root.attribute("CMDVersion"), Some("1.1"));
    assert_eq!(root.text_content().trim(), "corpus");

    let fragments = resource.resource_fragments().unwrap();
    assert_eq!(fragments.len(), 2);
    assert_eq!(
        fragments[0].reference(),
        Some("http://corpus.example.org/text/42#s12")
    );
    let fragment_view = &fragments[0].data_views().unwrap()[0];
    assert_eq!(fragment_view.mime_type(), KWIC_MIME_TYPE);
    assert_eq!(fragment_view.as_kwic().unwrap(), &KwicDataView::new("", "Haus", ""));
    assert!(!fragments[1].has_data_views());
    assert_eq!(fragments[1].data_views(), None);
}

#[test]
fn test_legacy_record() {
    let xml = load_fixture("legacy.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let mut cursor = DocumentCursor::new(&doc);

    let record = LegacyRecordParser::new().parse_record(&mut cursor).unwrap();

    assert_eq!(record.pid(), Some("hdl:11858/legacy-7"));
    assert_eq!(record.left(), "Sie sagte, das");
    assert_eq!(record.keyword(), "Haus");
    assert_eq!(record.right(), "sei schon alt.");
}

#[test]
fn test_legacy_record_with_two_kwic_views() {
    let xml = load_fixture("legacy_two_kwic.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let mut cursor = DocumentCursor::new(&doc);

    let err = LegacyRecordParser::new()
        .parse_record(&mut cursor)
        .unwrap_err();
    assert!(matches!(err, RecordError::Cardinality(_)));
}

#[test]
fn test_data_view_without_type() {
    let err = parse_str(&load_fixture("missing_type.xml")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Element <DataView> is missing mandatory attribute 'mime-type' or 'type'"
    );
}

#[test]
fn test_search_retrieve_response() {
    let xml = load_fixture("search_retrieve_response.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();

    assert_eq!(locate_records(&doc).len(), 2);

    let records = parse_records(&default_parsers(), &doc).unwrap();
    let keywords: Vec<(Option<&str>, &str, &str, &str)> = records
        .iter()
        .map(|record| {
            let data = record.as_fcs().unwrap();
            let kwic = data.resource().data_views().unwrap()[0].as_kwic().unwrap();
            (data.pid(), kwic.left(), kwic.keyword(), kwic.right())
        })
        .collect();

    assert_eq!(
        keywords,
        vec![
            (Some("r1"), "ein", "Baum", ""),
            (Some("r2"), "", "Wald", "rauscht"),
        ]
    );
}

#[test]
fn test_cursor_continues_after_record() {
    let xml = load_fixture("search_retrieve_response.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let record = locate_records(&doc)[0];
    let mut cursor = DocumentCursor::at(record);

    ClarinFcsRecordParser::new().parse_record(&mut cursor).unwrap();

    // Only whitespace follows the record inside <sru:recordData>.
    assert_eq!(cursor.depth(), 0);
    assert!(cursor.is_exhausted());
}

#[test]
fn test_schemas_route_to_matching_parser() {
    let mixed = format!(
        "<batch>{}{}</batch>",
        strip_declaration(&load_fixture("resource.xml")),
        strip_declaration(&load_fixture("legacy.xml"))
    );

    let records = parse_str(&mixed).unwrap();
    let schemas: Vec<&str> = records.iter().map(RecordData::record_schema).collect();
    assert_eq!(schemas, vec![FCS_RECORD_SCHEMA, LEGACY_FCS_RECORD_SCHEMA]);
}

fn strip_declaration(xml: &str) -> &str {
    match xml.find("?>") {
        Some(end) if xml.starts_with("<?xml") => &xml[end + 2..],
        _ => xml,
    }
}
