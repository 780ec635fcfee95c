//! Catch-all parser keeping the data view body as captured markup.

use crate::config::GENERIC_PRIORITY;
use crate::error::Result;
use crate::registry::parser::DataViewParser;
use crate::types::{DataView, DataViewKind, GenericDataView};
use crate::xml::XmlCursor;

/// Parser for data views without a dedicated parser.
///
/// Accepts every type at the lowest priority and copies the body verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDataViewParser;

impl DataViewParser for GenericDataViewParser {
    fn name(&self) -> &str {
        "generic"
    }

    fn accepts(&self, _mime_type: &str) -> bool {
        true
    }

    fn priority(&self) -> i32 {
        GENERIC_PRIORITY
    }

    fn parse(
        &self,
        cursor: &mut dyn XmlCursor,
        mime_type: &str,
        pid: Option<String>,
        reference: Option<String>,
    ) -> Result<DataView> {
        let fragment = cursor.capture_fragment()?;
        DataView::new(
            mime_type,
            pid,
            reference,
            DataViewKind::Generic(GenericDataView::new(fragment)),
        )
    }
}
