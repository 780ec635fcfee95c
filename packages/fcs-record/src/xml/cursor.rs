//! The stream cursor capability consumed by the record parsers.

use super::fragment::Fragment;
use crate::error::Result;

/// Forward-only cursor over namespaced XML.
///
/// Record parsers only ever see a record through this trait. The host hands
/// it over parked in front of the record's start tag and gets it back parked
/// right after the record's end tag.
///
/// Namespaces are passed as URIs; `""` means "no namespace".
pub trait XmlCursor {
    /// Try to match the next start tag, skipping whitespace and comments.
    ///
    /// On a mismatch the cursor does not move; `required` turns the mismatch
    /// into an error. With `allow_attributes` the start tag stays pending so
    /// its attributes can be read before [`consume_start`](Self::consume_start);
    /// otherwise the cursor enters the element at once.
    fn try_start(
        &mut self,
        namespace: &str,
        local_name: &str,
        required: bool,
        allow_attributes: bool,
    ) -> Result<bool>;

    /// Read an attribute of the pending start tag (or the innermost open
    /// element). Values are trimmed; empty values are reported as absent.
    fn read_attribute(&self, namespace: Option<&str>, name: &str) -> Option<String>;

    /// Enter the content of the pending start tag.
    fn consume_start(&mut self) -> Result<()>;

    /// Skip whitespace-only text, comments and processing instructions.
    fn consume_whitespace(&mut self) -> Result<()>;

    /// Read a text-only child element. Present but empty yields `Some("")`.
    fn read_text(
        &mut self,
        namespace: &str,
        local_name: &str,
        required: bool,
    ) -> Result<Option<String>>;

    /// Read trimmed character content at the current position.
    fn read_string(&mut self, required: bool) -> Result<Option<String>>;

    /// Consume the end tag of the innermost open element.
    ///
    /// With `skip_content` any unread content is discarded first; without
    /// it, leftover non-whitespace content is an error when `required`.
    fn match_end(
        &mut self,
        namespace: &str,
        local_name: &str,
        required: bool,
        skip_content: bool,
    ) -> Result<bool>;

    /// Capture the remaining content of the innermost open element, leaving
    /// the cursor in front of its end tag.
    fn capture_fragment(&mut self) -> Result<Fragment>;
}
