//! CLARIN-FCS record data parser.
//!
//! This crate parses the record data of CLARIN Federated Content Search
//! results into immutable, strongly typed values. It is meant to be plugged
//! into an SRU client: the client parks a cursor at the start of a record
//! and the parser consumes exactly that record.
//!
//! # Example
//!
//! ```
//! use fcs_record::record::ClarinFcsRecordParser;
//! use fcs_record::xml::DocumentCursor;
//!
//! let xml = r#"<Resource xmlns="http://clarin.eu/fcs/resource" pid="hdl:1/x">
//!     <DataView mime-type="application/x-clarin-fcs-kwic+xml">
//!         <kwic xmlns="http://clarin.eu/fcs/1.0/kwic"><kw>Haus</kw></kwic>
//!     </DataView>
//! </Resource>"#;
//!
//! let doc = roxmltree::Document::parse(xml).unwrap();
//! let mut cursor = DocumentCursor::new(&doc);
//! let record = ClarinFcsRecordParser::new().parse_record(&mut cursor).unwrap();
//!
//! let view = &record.resource().data_views().unwrap()[0];
//! assert_eq!(view.as_kwic().unwrap().keyword(), "Haus");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespaces, MIME types, priorities and validation
//! - [`types`]: Immutable data model (Resource, DataView, records)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Cursor capability, `roxmltree` cursor, captured fragments
//! - [`registry`]: Data view parsers selected by MIME type and priority
//! - [`record`]: Current and legacy record parsers, schema routing
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod record;
pub mod registry;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use error::{RecordError, Result};
pub use record::{ClarinFcsRecordParser, LegacyRecordParser, RecordDataParser};
pub use registry::{create_default_registry, DataViewParser, DataViewParserRegistry};
pub use types::{
    ClarinFcsRecordData, DataView, DataViewKind, GenericDataView, KwicDataView,
    LegacyRecordData, RecordData, Resource, ResourceFragment,
};
