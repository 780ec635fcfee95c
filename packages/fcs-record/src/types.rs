//! Core data types for parsed CLARIN-FCS records.
//!
//! All types are immutable once built. Optional identifiers are `None` when
//! the attribute was missing or blank, and collections are `None` rather
//! than empty.

use serde::Serialize;

use crate::config::{non_empty, validate_mime_type, FCS_RECORD_SCHEMA, LEGACY_FCS_RECORD_SCHEMA};
use crate::error::Result;
use crate::xml::Fragment;

/// Keyword-in-context excerpt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KwicDataView {
    left: String,
    keyword: String,
    right: String,
}

impl KwicDataView {
    /// Create an excerpt. Missing contexts should be passed as empty strings.
    pub fn new(
        left: impl Into<String>,
        keyword: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            keyword: keyword.into(),
            right: right.into(),
        }
    }

    /// Context preceding the keyword (may be empty).
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The matched keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Context following the keyword (may be empty).
    pub fn right(&self) -> &str {
        &self.right
    }
}

/// Body of a data view type without a dedicated parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenericDataView {
    fragment: Fragment,
}

impl GenericDataView {
    pub fn new(fragment: Fragment) -> Self {
        Self { fragment }
    }

    /// The captured markup.
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}

/// Type-specific part of a [`DataView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataViewKind {
    Generic(GenericDataView),
    Kwic(KwicDataView),
}

/// A typed rendering of a resource's or fragment's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataView {
    mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pid: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(flatten)]
    kind: DataViewKind,
}

impl DataView {
    /// Create a data view.
    ///
    /// # Errors
    /// Returns `InvalidDataView` if `mime_type` is empty.
    pub fn new(
        mime_type: impl Into<String>,
        pid: Option<String>,
        reference: Option<String>,
        kind: DataViewKind,
    ) -> Result<Self> {
        let mime_type = mime_type.into();
        validate_mime_type(&mime_type)?;
        Ok(Self {
            mime_type,
            pid: non_empty(pid),
            reference: non_empty(reference),
            kind,
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Persistent identifier of the data view.
    pub fn pid(&self) -> Option<&str> {
        self.pid.as_deref()
    }

    /// Reference URI of the data view.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn kind(&self) -> &DataViewKind {
        &self.kind
    }

    /// Check the declared MIME type.
    pub fn is_mime_type(&self, mime_type: &str) -> bool {
        self.mime_type == mime_type
    }

    pub fn as_kwic(&self) -> Option<&KwicDataView> {
        match &self.kind {
            DataViewKind::Kwic(kwic) => Some(kwic),
            DataViewKind::Generic(_) => None,
        }
    }

    pub fn as_generic(&self) -> Option<&GenericDataView> {
        match &self.kind {
            DataViewKind::Generic(generic) => Some(generic),
            DataViewKind::Kwic(_) => None,
        }
    }
}

fn non_empty_vec<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

fn find_by_type<'a>(views: Option<&'a [DataView]>, mime_type: &str) -> Option<&'a DataView> {
    views?.iter().find(|view| view.is_mime_type(mime_type))
}

/// A sub-span of a resource with its own data views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pid: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_views: Option<Vec<DataView>>,
}

impl ResourceFragment {
    pub fn new(pid: Option<String>, reference: Option<String>, data_views: Vec<DataView>) -> Self {
        Self {
            pid: non_empty(pid),
            reference: non_empty(reference),
            data_views: non_empty_vec(data_views),
        }
    }

    pub fn pid(&self) -> Option<&str> {
        self.pid.as_deref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Data views in document order, `None` if there are none.
    pub fn data_views(&self) -> Option<&[DataView]> {
        self.data_views.as_deref()
    }

    pub fn has_data_views(&self) -> bool {
        self.data_views.is_some()
    }

    /// First data view with the given MIME type.
    pub fn find_data_view(&self, mime_type: &str) -> Option<&DataView> {
        find_by_type(self.data_views(), mime_type)
    }
}

/// The matched resource of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pid: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_views: Option<Vec<DataView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_fragments: Option<Vec<ResourceFragment>>,
}

impl Resource {
    pub fn new(
        pid: Option<String>,
        reference: Option<String>,
        data_views: Vec<DataView>,
        resource_fragments: Vec<ResourceFragment>,
    ) -> Self {
        Self {
            pid: non_empty(pid),
            reference: non_empty(reference),
            data_views: non_empty_vec(data_views),
            resource_fragments: non_empty_vec(resource_fragments),
        }
    }

    pub fn pid(&self) -> Option<&str> {
        self.pid.as_deref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Data views in document order, `None` if there are none.
    pub fn data_views(&self) -> Option<&[DataView]> {
        self.data_views.as_deref()
    }

    pub fn has_data_views(&self) -> bool {
        self.data_views.is_some()
    }

    /// Resource fragments in document order, `None` if there are none.
    pub fn resource_fragments(&self) -> Option<&[ResourceFragment]> {
        self.resource_fragments.as_deref()
    }

    pub fn has_resource_fragments(&self) -> bool {
        self.resource_fragments.is_some()
    }

    /// First data view of the resource itself with the given MIME type.
    pub fn find_data_view(&self, mime_type: &str) -> Option<&DataView> {
        find_by_type(self.data_views(), mime_type)
    }
}

/// Record data of the current CLARIN-FCS resource schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarinFcsRecordData {
    resource: Resource,
}

impl ClarinFcsRecordData {
    /// Record schema handled by this record type.
    pub const RECORD_SCHEMA: &'static str = FCS_RECORD_SCHEMA;

    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// `pid` of the outer `<Resource>` element.
    pub fn pid(&self) -> Option<&str> {
        self.resource.pid()
    }

    /// `ref` of the outer `<Resource>` element.
    pub fn reference(&self) -> Option<&str> {
        self.resource.reference()
    }
}

/// Record data of the legacy FCS 1.0 schema: one mandatory KWIC excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyRecordData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pid: Option<String>,
    left: String,
    keyword: String,
    right: String,
}

impl LegacyRecordData {
    /// Record schema handled by this record type.
    pub const RECORD_SCHEMA: &'static str = LEGACY_FCS_RECORD_SCHEMA;

    pub fn new(
        pid: Option<String>,
        left: impl Into<String>,
        keyword: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            pid: non_empty(pid),
            left: left.into(),
            keyword: keyword.into(),
            right: right.into(),
        }
    }

    pub fn pid(&self) -> Option<&str> {
        self.pid.as_deref()
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn right(&self) -> &str {
        &self.right
    }
}

/// Record data produced by any of the record parsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "schema", rename_all = "snake_case")]
pub enum RecordData {
    Fcs(ClarinFcsRecordData),
    Legacy(LegacyRecordData),
}

impl RecordData {
    /// Record schema identifier of the contained record.
    pub fn record_schema(&self) -> &'static str {
        match self {
            RecordData::Fcs(_) => ClarinFcsRecordData::RECORD_SCHEMA,
            RecordData::Legacy(_) => LegacyRecordData::RECORD_SCHEMA,
        }
    }

    pub fn as_fcs(&self) -> Option<&ClarinFcsRecordData> {
        match self {
            RecordData::Fcs(record) => Some(record),
            RecordData::Legacy(_) => None,
        }
    }

    pub fn as_legacy(&self) -> Option<&LegacyRecordData> {
        match self {
            RecordData::Legacy(record) => Some(record),
            RecordData::Fcs(_) => None,
        }
    }
}

impl From<ClarinFcsRecordData> for RecordData {
    fn from(record: ClarinFcsRecordData) -> Self {
        RecordData::Fcs(record)
    }
}

impl From<LegacyRecordData> for RecordData {
    fn from(record: LegacyRecordData) -> Self {
        RecordData::Legacy(record)
    }
}
