//! Record data parser for the CLARIN-FCS resource schema.

use tracing::{debug, warn};

use super::RecordDataParser;
use crate::config::{
    is_well_formed_mime_type, DATA_VIEW_ELEMENT, FCS_RECORD_SCHEMA, KWIC_LEGACY_TYPE,
    MIME_TYPE_ATTRIBUTE, PID_ATTRIBUTE, REF_ATTRIBUTE, RESOURCE_ELEMENT,
    RESOURCE_FRAGMENT_ELEMENT, TYPE_ATTRIBUTE,
};
use crate::error::{RecordError, Result};
use crate::registry::{create_default_registry, DataViewParserRegistry};
use crate::types::{ClarinFcsRecordData, DataView, RecordData, Resource, ResourceFragment};
use crate::xml::XmlCursor;

/// Parser for `http://clarin.eu/fcs/resource` records.
///
/// ```text
/// Resource         := <Resource pid? ref?> Resource? DataView* ResourceFragment* </Resource>
/// ResourceFragment := <ResourceFragment pid? ref?> DataView* </ResourceFragment>
/// DataView         := <DataView pid? ref? mime-type> body </DataView>
/// ```
///
/// Data view bodies are dispatched through a [`DataViewParserRegistry`].
#[derive(Debug)]
pub struct ClarinFcsRecordParser {
    registry: DataViewParserRegistry,
}

impl ClarinFcsRecordParser {
    /// Create a parser using the built-in data view parsers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: create_default_registry(),
        }
    }

    /// Create a parser using a custom registry.
    ///
    /// # Errors
    /// Returns `EmptyRegistry` if the registry has no parsers.
    pub fn with_registry(registry: DataViewParserRegistry) -> Result<Self> {
        if registry.is_empty() {
            return Err(RecordError::EmptyRegistry);
        }
        Ok(Self { registry })
    }

    /// Parse one record, leaving the cursor right after `</Resource>`.
    pub fn parse_record(&self, cursor: &mut dyn XmlCursor) -> Result<ClarinFcsRecordData> {
        let resource = self.parse_resource(cursor)?;
        Ok(ClarinFcsRecordData::new(resource))
    }

    fn parse_resource(&self, cursor: &mut dyn XmlCursor) -> Result<Resource> {
        cursor.try_start(FCS_RECORD_SCHEMA, RESOURCE_ELEMENT, true, true)?;
        let pid = cursor.read_attribute(None, PID_ATTRIBUTE);
        let reference = cursor.read_attribute(None, REF_ATTRIBUTE);
        cursor.consume_start()?;

        // The grammar allows a nested <Resource>; its content is not kept.
        if cursor.try_start(FCS_RECORD_SCHEMA, RESOURCE_ELEMENT, false, false)? {
            debug!(pid = ?pid, "skipping nested <Resource>");
            cursor.match_end(FCS_RECORD_SCHEMA, RESOURCE_ELEMENT, true, true)?;
        }

        let data_views = self.parse_data_views(cursor)?;

        let mut fragments = Vec::new();
        while cursor.try_start(FCS_RECORD_SCHEMA, RESOURCE_FRAGMENT_ELEMENT, false, true)? {
            fragments.push(self.parse_resource_fragment(cursor)?);
        }

        cursor.match_end(FCS_RECORD_SCHEMA, RESOURCE_ELEMENT, true, false)?;
        Ok(Resource::new(pid, reference, data_views, fragments))
    }

    /// Parse a `<ResourceFragment>` whose start tag has just been matched.
    fn parse_resource_fragment(&self, cursor: &mut dyn XmlCursor) -> Result<ResourceFragment> {
        let pid = cursor.read_attribute(None, PID_ATTRIBUTE);
        let reference = cursor.read_attribute(None, REF_ATTRIBUTE);
        cursor.consume_start()?;

        let data_views = self.parse_data_views(cursor)?;

        cursor.match_end(FCS_RECORD_SCHEMA, RESOURCE_FRAGMENT_ELEMENT, true, false)?;
        Ok(ResourceFragment::new(pid, reference, data_views))
    }

    fn parse_data_views(&self, cursor: &mut dyn XmlCursor) -> Result<Vec<DataView>> {
        let mut data_views = Vec::new();
        while cursor.try_start(FCS_RECORD_SCHEMA, DATA_VIEW_ELEMENT, false, true)? {
            if let Some(view) = self.parse_data_view(cursor)? {
                data_views.push(view);
            }
        }
        Ok(data_views)
    }

    /// Parse a `<DataView>` whose start tag has just been matched.
    ///
    /// Returns `None` when no parser accepts the type and the view was skipped.
    fn parse_data_view(&self, cursor: &mut dyn XmlCursor) -> Result<Option<DataView>> {
        let pid = cursor.read_attribute(None, PID_ATTRIBUTE);
        let reference = cursor.read_attribute(None, REF_ATTRIBUTE);
        let mime_type = Self::read_data_view_type(cursor)?;
        cursor.consume_start()?;
        cursor.consume_whitespace()?;

        let Some(parser) = self.registry.find_parser(&mime_type) else {
            warn!(mime_type = %mime_type, "no parser for data view type, skipping");
            cursor.match_end(FCS_RECORD_SCHEMA, DATA_VIEW_ELEMENT, true, true)?;
            return Ok(None);
        };

        debug!(mime_type = %mime_type, parser = parser.name(), "parsing data view");
        let view = parser.parse(cursor, &mime_type, pid, reference)?;
        cursor.match_end(FCS_RECORD_SCHEMA, DATA_VIEW_ELEMENT, true, false)?;
        Ok(Some(view))
    }

    fn read_data_view_type(cursor: &mut dyn XmlCursor) -> Result<String> {
        let mime_type = match cursor.read_attribute(None, MIME_TYPE_ATTRIBUTE) {
            Some(mime_type) => mime_type,
            None => {
                let legacy = cursor.read_attribute(None, TYPE_ATTRIBUTE).ok_or_else(|| {
                    RecordError::MissingAttribute {
                        element: DATA_VIEW_ELEMENT.to_string(),
                        attributes: format!("'{MIME_TYPE_ATTRIBUTE}' or '{TYPE_ATTRIBUTE}'"),
                    }
                })?;
                warn!(
                    data_view_type = %legacy,
                    "DataView uses deprecated attribute 'type', please use 'mime-type'"
                );
                legacy
            }
        };

        if mime_type != KWIC_LEGACY_TYPE && !is_well_formed_mime_type(&mime_type) {
            warn!(mime_type = %mime_type, "DataView type is not a well-formed MIME type");
        }
        Ok(mime_type)
    }
}

impl Default for ClarinFcsRecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordDataParser for ClarinFcsRecordParser {
    fn record_schema(&self) -> &str {
        FCS_RECORD_SCHEMA
    }

    fn parse(&self, cursor: &mut dyn XmlCursor) -> Result<RecordData> {
        self.parse_record(cursor).map(RecordData::Fcs)
    }
}
