//! [`XmlCursor`] over a parsed `roxmltree` document.

use roxmltree::{Document, Node, NodeType};

use super::cursor::XmlCursor;
use super::fragment::Fragment;
use super::utils::{clark_name, describe_end, describe_node, has_name, is_ignorable};
use crate::error::{RecordError, Result};

/// Forward-only cursor walking a `roxmltree` document.
///
/// The position is "in front of `next`" inside the innermost open element.
/// `next == None` means the cursor sits in front of that element's end tag.
#[derive(Debug, Clone)]
pub struct DocumentCursor<'a, 'input> {
    open: Vec<Node<'a, 'input>>,
    next: Option<Node<'a, 'input>>,
    pending: Option<Node<'a, 'input>>,
}

impl<'a, 'input> DocumentCursor<'a, 'input> {
    /// Park a cursor in front of the document's root element.
    pub fn new(doc: &'a Document<'input>) -> Self {
        Self::at(doc.root_element())
    }

    /// Park a cursor in front of `node`, e.g. a record inside an envelope.
    pub fn at(node: Node<'a, 'input>) -> Self {
        Self {
            open: Vec::new(),
            next: Some(node),
            pending: None,
        }
    }

    /// Number of elements the cursor has entered but not yet left.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// True once nothing but ignorable content remains at the top level.
    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
            && self.pending.is_none()
            && std::iter::successors(self.next, |node| node.next_sibling()).all(is_ignorable)
    }

    fn skip_ignorable(&mut self) {
        while let Some(node) = self.next {
            if !is_ignorable(node) {
                break;
            }
            self.next = node.next_sibling();
        }
    }

    fn ensure_no_pending(&self, operation: &str) -> Result<()> {
        match self.pending {
            Some(node) => Err(RecordError::CursorState(format!(
                "{operation} while start tag {} is still pending",
                describe_node(node)
            ))),
            None => Ok(()),
        }
    }

    fn describe_position(&self) -> String {
        match (self.next, self.open.last()) {
            (Some(node), _) => describe_node(node),
            (None, Some(parent)) => describe_end(*parent),
            (None, None) => "end of input".to_string(),
        }
    }
}

impl XmlCursor for DocumentCursor<'_, '_> {
    fn try_start(
        &mut self,
        namespace: &str,
        local_name: &str,
        required: bool,
        allow_attributes: bool,
    ) -> Result<bool> {
        self.ensure_no_pending("try_start")?;
        self.skip_ignorable();

        match self.next {
            Some(node) if has_name(node, namespace, local_name) => {
                self.pending = Some(node);
                if !allow_attributes {
                    self.consume_start()?;
                }
                Ok(true)
            }
            _ if required => Err(RecordError::UnexpectedContent {
                expected: format!("<{}>", clark_name(namespace, local_name)),
                found: self.describe_position(),
            }),
            _ => Ok(false),
        }
    }

    fn read_attribute(&self, namespace: Option<&str>, name: &str) -> Option<String> {
        let node = self.pending.or_else(|| self.open.last().copied())?;
        // Unqualified lookups must not fall through to prefixed attributes.
        let value = match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => node.attribute((ns, name)),
            None => node
                .attributes()
                .find(|attr| attr.namespace().is_none() && attr.name() == name)
                .map(|attr| attr.value()),
        }?;
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn consume_start(&mut self) -> Result<()> {
        let node = self.pending.take().ok_or_else(|| {
            RecordError::CursorState(format!(
                "consume_start without a pending start tag at {}",
                self.describe_position()
            ))
        })?;
        self.open.push(node);
        self.next = node.first_child();
        Ok(())
    }

    fn consume_whitespace(&mut self) -> Result<()> {
        self.ensure_no_pending("consume_whitespace")?;
        self.skip_ignorable();
        Ok(())
    }

    fn read_text(
        &mut self,
        namespace: &str,
        local_name: &str,
        required: bool,
    ) -> Result<Option<String>> {
        if !self.try_start(namespace, local_name, required, false)? {
            return Ok(None);
        }
        let text = self.read_string(false)?;
        self.match_end(namespace, local_name, true, false)?;
        Ok(Some(text.unwrap_or_default()))
    }

    fn read_string(&mut self, required: bool) -> Result<Option<String>> {
        self.ensure_no_pending("read_string")?;

        let mut text = String::new();
        while let Some(node) = self.next {
            match node.node_type() {
                NodeType::Text => text.push_str(node.text().unwrap_or_default()),
                NodeType::Comment | NodeType::PI => {}
                NodeType::Element | NodeType::Root => break,
            }
            self.next = node.next_sibling();
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
        if required {
            return Err(RecordError::MissingContent(format!(
                "expected character content, found {}",
                self.describe_position()
            )));
        }
        Ok(None)
    }

    fn match_end(
        &mut self,
        namespace: &str,
        local_name: &str,
        required: bool,
        skip_content: bool,
    ) -> Result<bool> {
        // A matched but never entered start tag ends here as well.
        if self.pending.is_some() {
            self.consume_start()?;
        }

        if skip_content {
            if let Some(node) = self.next {
                tracing::trace!(first = %describe_node(node), "skipping unread content");
            }
            self.next = None;
        } else {
            self.skip_ignorable();
        }

        let expected = || format!("</{}>", clark_name(namespace, local_name));
        if self.next.is_some() {
            if required {
                return Err(RecordError::UnexpectedContent {
                    expected: expected(),
                    found: self.describe_position(),
                });
            }
            return Ok(false);
        }

        match self.open.last().copied() {
            Some(node) if has_name(node, namespace, local_name) => {
                self.open.pop();
                self.next = node.next_sibling();
                Ok(true)
            }
            _ if required => Err(RecordError::UnexpectedContent {
                expected: expected(),
                found: self.describe_position(),
            }),
            _ => Ok(false),
        }
    }

    fn capture_fragment(&mut self) -> Result<Fragment> {
        self.ensure_no_pending("capture_fragment")?;
        let fragment = Fragment::from_siblings(self.next);
        self.next = None;
        Ok(fragment)
    }
}
