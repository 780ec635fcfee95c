//! Error types for record data parsing.
//!
//! Every fatal condition surfaces as a [`RecordError`]. Conditions that only
//! warrant a diagnostic (deprecated attributes, unroutable data views) are
//! reported through `tracing` and never reach this type.

use thiserror::Error;

/// Main error type for the record data parsers.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required start or end tag was absent or out of order.
    #[error("Unexpected content: expected {expected}, found {found}")]
    UnexpectedContent { expected: String, found: String },

    /// Required character content was absent.
    #[error("Missing content: {0}")]
    MissingContent(String),

    /// The cursor was driven in an order it cannot honour.
    #[error("Invalid cursor state: {0}")]
    CursorState(String),

    /// An element lacks a mandatory attribute.
    #[error("Element <{element}> is missing mandatory attribute {attributes}")]
    MissingAttribute { element: String, attributes: String },

    /// A data view occurred too often or not at all.
    #[error("Cardinality violation: {0}")]
    Cardinality(String),

    /// A data view could not be constructed.
    #[error("Invalid data view: {0}")]
    InvalidDataView(String),

    /// A record parser was configured without any data view parsers.
    #[error("Data view parser registry is empty")]
    EmptyRegistry,

    /// No record parser is available for the record schema.
    #[error("No parser for record schema '{0}'")]
    UnsupportedSchema(String),

    /// The document is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for record parsing operations.
pub type Result<T> = std::result::Result<T, RecordError>;
