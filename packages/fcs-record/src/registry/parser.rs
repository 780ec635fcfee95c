//! Data view parser trait definition.

use crate::error::Result;
use crate::types::DataView;
use crate::xml::XmlCursor;

/// Trait for data view parsers.
///
/// A parser is responsible for the body of `<DataView>` elements of the MIME
/// types it accepts. Parsers are shared between concurrent record parses, so
/// they must not keep per-parse state.
pub trait DataViewParser: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Check if this parser can process data views of the given type.
    fn accepts(&self, mime_type: &str) -> bool;

    /// Priority among parsers accepting the same type; higher wins.
    fn priority(&self) -> i32;

    /// Parse the body of a data view.
    ///
    /// # Arguments
    /// * `cursor` - Positioned inside the `<DataView>` element, past its
    ///   attributes and leading whitespace
    /// * `mime_type` - The declared type of the data view
    /// * `pid` - Persistent identifier from the `<DataView>` element
    /// * `reference` - Reference URI from the `<DataView>` element
    ///
    /// On return the cursor must be in front of `</DataView>`.
    fn parse(
        &self,
        cursor: &mut dyn XmlCursor,
        mime_type: &str,
        pid: Option<String>,
        reference: Option<String>,
    ) -> Result<DataView>;
}
