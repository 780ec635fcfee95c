//! Parser for keyword-in-context data views.

use tracing::warn;

use crate::config::{KWIC_LEGACY_TYPE, KWIC_MIME_TYPE, KWIC_NAMESPACE, KWIC_PRIORITY};
use crate::error::Result;
use crate::registry::parser::DataViewParser;
use crate::types::{DataView, DataViewKind, KwicDataView};
use crate::xml::XmlCursor;

/// Parser for `application/x-clarin-fcs-kwic+xml` data views.
///
/// Body grammar, in the KWIC namespace:
///
/// ```text
/// <kwic> <c>left</c>? <kw>keyword</kw> <c>right</c>? </kwic>
/// ```
///
/// The deprecated type `kwic` is accepted as well. Either way the resulting
/// data view carries the canonical MIME type.
#[derive(Debug, Clone, Copy, Default)]
pub struct KwicDataViewParser;

impl KwicDataViewParser {
    fn read_context(cursor: &mut dyn XmlCursor) -> Result<String> {
        Ok(cursor
            .read_text(KWIC_NAMESPACE, "c", false)?
            .unwrap_or_default())
    }
}

impl DataViewParser for KwicDataViewParser {
    fn name(&self) -> &str {
        "kwic"
    }

    fn accepts(&self, mime_type: &str) -> bool {
        mime_type == KWIC_MIME_TYPE || mime_type == KWIC_LEGACY_TYPE
    }

    fn priority(&self) -> i32 {
        KWIC_PRIORITY
    }

    fn parse(
        &self,
        cursor: &mut dyn XmlCursor,
        mime_type: &str,
        pid: Option<String>,
        reference: Option<String>,
    ) -> Result<DataView> {
        if mime_type == KWIC_LEGACY_TYPE {
            warn!(
                deprecated = KWIC_LEGACY_TYPE,
                replacement = KWIC_MIME_TYPE,
                "DataView uses deprecated KWIC type"
            );
        }

        cursor.try_start(KWIC_NAMESPACE, "kwic", true, false)?;
        let left = Self::read_context(cursor)?;
        let keyword = cursor
            .read_text(KWIC_NAMESPACE, "kw", true)?
            .unwrap_or_default();
        let right = Self::read_context(cursor)?;
        cursor.match_end(KWIC_NAMESPACE, "kwic", true, false)?;

        DataView::new(
            KWIC_MIME_TYPE,
            pid,
            reference,
            DataViewKind::Kwic(KwicDataView::new(left, keyword, right)),
        )
    }
}
