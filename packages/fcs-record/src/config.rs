//! Configuration constants and validation functions for record parsing.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{RecordError, Result};

/// Record schema (and namespace) of CLARIN-FCS resource records.
pub const FCS_RECORD_SCHEMA: &str = "http://clarin.eu/fcs/resource";

/// Record schema (and namespace) of legacy FCS 1.0 records.
pub const LEGACY_FCS_RECORD_SCHEMA: &str = "http://clarin.eu/fcs/1.0";

/// Namespace of the keyword-in-context data view body.
pub const KWIC_NAMESPACE: &str = "http://clarin.eu/fcs/1.0/kwic";

/// MIME type of the keyword-in-context data view.
pub const KWIC_MIME_TYPE: &str = "application/x-clarin-fcs-kwic+xml";

/// Deprecated bare-word type of the keyword-in-context data view.
///
/// Also the only data view type understood by the legacy record schema.
pub const KWIC_LEGACY_TYPE: &str = "kwic";

/// Priority of the keyword-in-context data view parser.
pub const KWIC_PRIORITY: i32 = 1000;

/// Priority of the generic catch-all data view parser.
pub const GENERIC_PRIORITY: i32 = i32::MIN;

// Element names of the record grammar.
pub const RESOURCE_ELEMENT: &str = "Resource";
pub const RESOURCE_FRAGMENT_ELEMENT: &str = "ResourceFragment";
pub const DATA_VIEW_ELEMENT: &str = "DataView";

// Attribute names of the record grammar.
pub const PID_ATTRIBUTE: &str = "pid";
pub const REF_ATTRIBUTE: &str = "ref";
pub const MIME_TYPE_ATTRIBUTE: &str = "mime-type";
/// Deprecated spelling of [`MIME_TYPE_ATTRIBUTE`]; mandatory in legacy records.
pub const TYPE_ATTRIBUTE: &str = "type";

/// MIME type pattern: `type/subtype` with RFC 6838 restricted name characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MIME_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*$")
        .expect("valid regex")
});

/// Check whether a declared data view type looks like a MIME type.
///
/// # Examples
/// ```
/// use fcs_record::config::is_well_formed_mime_type;
///
/// assert!(is_well_formed_mime_type("application/x-clarin-fcs-kwic+xml"));
/// assert!(!is_well_formed_mime_type("kwic"));
/// ```
pub fn is_well_formed_mime_type(mime_type: &str) -> bool {
    MIME_TYPE_PATTERN.is_match(mime_type)
}

/// Validate that a data view type is usable.
///
/// Only emptiness is fatal; a malformed MIME type is still routable.
///
/// # Returns
/// * `Ok(())` if the type is non-empty
/// * `Err(RecordError::InvalidDataView)` otherwise
pub fn validate_mime_type(mime_type: &str) -> Result<()> {
    if mime_type.trim().is_empty() {
        return Err(RecordError::InvalidDataView(
            "data view MIME type must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Normalize an optional string: blank values become absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_mime_types() {
        assert!(is_well_formed_mime_type(KWIC_MIME_TYPE));
        assert!(is_well_formed_mime_type("text/plain"));
        assert!(is_well_formed_mime_type("application/x-cmdi+xml"));
    }

    #[test]
    fn test_malformed_mime_types() {
        assert!(!is_well_formed_mime_type(KWIC_LEGACY_TYPE));
        assert!(!is_well_formed_mime_type(""));
        assert!(!is_well_formed_mime_type("text/"));
        assert!(!is_well_formed_mime_type("text/plain extra"));
    }

    #[test]
    fn test_validate_mime_type() {
        assert!(validate_mime_type("kwic").is_ok());
        assert!(validate_mime_type("").is_err());
        assert!(validate_mime_type("   ").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_priorities_are_ordered() {
        assert!(KWIC_PRIORITY > GENERIC_PRIORITY);
    }
}
