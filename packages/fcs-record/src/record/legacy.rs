//! Record data parser for the legacy FCS 1.0 schema.
//!
//! Legacy records carry exactly one keyword-in-context data view. The grammar
//! is stricter than the current one (the `type` attribute is mandatory and
//! there is no `mime-type`), so it is parsed here on its own instead of going
//! through the data view registry.

use tracing::debug;

use super::RecordDataParser;
use crate::config::{
    DATA_VIEW_ELEMENT, KWIC_LEGACY_TYPE, KWIC_NAMESPACE, LEGACY_FCS_RECORD_SCHEMA, PID_ATTRIBUTE,
    RESOURCE_ELEMENT, TYPE_ATTRIBUTE,
};
use crate::error::{RecordError, Result};
use crate::types::{LegacyRecordData, RecordData};
use crate::xml::XmlCursor;

/// Excerpt read from the legacy `<kwic>` body.
struct Excerpt {
    left: String,
    keyword: String,
    right: String,
}

/// Parser for `http://clarin.eu/fcs/1.0` records.
///
/// ```text
/// Resource := <Resource pid?> DataView+ </Resource>
/// DataView := <DataView type> (kwic body | anything) </DataView>
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyRecordParser;

impl LegacyRecordParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse one record, leaving the cursor right after `</Resource>`.
    pub fn parse_record(&self, cursor: &mut dyn XmlCursor) -> Result<LegacyRecordData> {
        cursor.try_start(LEGACY_FCS_RECORD_SCHEMA, RESOURCE_ELEMENT, true, true)?;
        let pid = cursor.read_attribute(None, PID_ATTRIBUTE);
        cursor.consume_start()?;

        let mut excerpt: Option<Excerpt> = None;
        while cursor.try_start(LEGACY_FCS_RECORD_SCHEMA, DATA_VIEW_ELEMENT, false, true)? {
            let data_view_type = cursor.read_attribute(None, TYPE_ATTRIBUTE).ok_or_else(|| {
                RecordError::MissingAttribute {
                    element: DATA_VIEW_ELEMENT.to_string(),
                    attributes: format!("'{TYPE_ATTRIBUTE}'"),
                }
            })?;
            cursor.consume_start()?;

            if data_view_type != KWIC_LEGACY_TYPE {
                debug!(data_view_type = %data_view_type, "skipping legacy data view");
                cursor.match_end(LEGACY_FCS_RECORD_SCHEMA, DATA_VIEW_ELEMENT, true, true)?;
                continue;
            }
            if excerpt.is_some() {
                return Err(RecordError::Cardinality(
                    "more than one kwic dataview in legacy record".to_string(),
                ));
            }

            cursor.consume_whitespace()?;
            excerpt = Some(Self::parse_kwic(cursor)?);
            cursor.match_end(LEGACY_FCS_RECORD_SCHEMA, DATA_VIEW_ELEMENT, true, false)?;
        }

        cursor.match_end(LEGACY_FCS_RECORD_SCHEMA, RESOURCE_ELEMENT, true, false)?;

        let excerpt = excerpt.ok_or_else(|| {
            RecordError::Cardinality("mandatory kwic dataview missing".to_string())
        })?;
        Ok(LegacyRecordData::new(
            pid,
            excerpt.left,
            excerpt.keyword,
            excerpt.right,
        ))
    }

    /// `<kwic> <c type="left">? <kw> <c type="right">? </kwic>`
    fn parse_kwic(cursor: &mut dyn XmlCursor) -> Result<Excerpt> {
        cursor.try_start(KWIC_NAMESPACE, "kwic", true, false)?;
        let left = cursor.read_text(KWIC_NAMESPACE, "c", false)?;
        let keyword = cursor.read_text(KWIC_NAMESPACE, "kw", true)?;
        let right = cursor.read_text(KWIC_NAMESPACE, "c", false)?;
        cursor.match_end(KWIC_NAMESPACE, "kwic", true, false)?;

        Ok(Excerpt {
            left: left.unwrap_or_default(),
            keyword: keyword.unwrap_or_default(),
            right: right.unwrap_or_default(),
        })
    }
}

impl RecordDataParser for LegacyRecordParser {
    fn record_schema(&self) -> &str {
        LEGACY_FCS_RECORD_SCHEMA
    }

    fn parse(&self, cursor: &mut dyn XmlCursor) -> Result<RecordData> {
        self.parse_record(cursor).map(RecordData::Legacy)
    }
}
