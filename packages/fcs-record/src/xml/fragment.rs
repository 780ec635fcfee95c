//! Owned document fragments.
//!
//! Data views without a dedicated parser keep their body as an opaque,
//! owned copy of the markup so the record outlives the parsed document.

use std::fmt;

use roxmltree::{ExpandedName, Node, NodeType};
use serde::Serialize;

/// Namespace-qualified element or attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    local_name: String,
}

impl QualifiedName {
    /// Create a qualified name. An empty namespace means "no namespace".
    pub fn new(namespace: Option<&str>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            local_name: local_name.into(),
        }
    }

    /// Namespace URI, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local part of the name.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Check whether this name equals `{namespace}local_name`.
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref().unwrap_or_default() == namespace
            && self.local_name == local_name
    }
}

impl From<ExpandedName<'_, '_>> for QualifiedName {
    fn from(name: ExpandedName<'_, '_>) -> Self {
        Self::new(name.namespace(), name.name())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}

/// Attribute of a captured element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentAttribute {
    name: QualifiedName,
    value: String,
}

impl FragmentAttribute {
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Captured element with its attributes and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentElement {
    name: QualifiedName,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<FragmentAttribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<FragmentNode>,
}

impl FragmentElement {
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn attributes(&self) -> &[FragmentAttribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[FragmentNode] {
        &self.children
    }

    /// Value of the un-namespaced attribute `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.is("", name))
            .map(|attr| attr.value.as_str())
    }

    /// First child element with the given local name, in any namespace.
    pub fn first_child_element(&self, local_name: &str) -> Option<&FragmentElement> {
        self.children.iter().find_map(|child| match child {
            FragmentNode::Element(element) if element.name.local_name() == local_name => {
                Some(element)
            }
            _ => None,
        })
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

/// A node of a captured fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", content = "value", rename_all = "snake_case")]
pub enum FragmentNode {
    Element(FragmentElement),
    Text(String),
    Comment(String),
}

impl FragmentNode {
    /// Copy a document node. Processing instructions are dropped.
    fn from_node(node: Node<'_, '_>) -> Option<Self> {
        match node.node_type() {
            NodeType::Element => Some(FragmentNode::Element(FragmentElement {
                name: node.tag_name().into(),
                attributes: node
                    .attributes()
                    .map(|attr| FragmentAttribute {
                        name: QualifiedName::new(attr.namespace(), attr.name()),
                        value: attr.value().to_string(),
                    })
                    .collect(),
                children: node.children().filter_map(FragmentNode::from_node).collect(),
            })),
            NodeType::Text => node.text().map(|t| FragmentNode::Text(t.to_string())),
            NodeType::Comment => node.text().map(|t| FragmentNode::Comment(t.to_string())),
            NodeType::PI | NodeType::Root => None,
        }
    }
}

/// Ordered, owned sequence of captured nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    nodes: Vec<FragmentNode>,
}

impl Fragment {
    /// Capture `first` and all of its following siblings.
    pub fn from_siblings(first: Option<Node<'_, '_>>) -> Self {
        let nodes = std::iter::successors(first, |node| node.next_sibling())
            .filter_map(FragmentNode::from_node)
            .collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[FragmentNode] {
        &self.nodes
    }

    /// True when nothing but whitespace was captured.
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| match node {
            FragmentNode::Text(text) => text.trim().is_empty(),
            _ => false,
        })
    }

    /// Top-level elements of the fragment.
    pub fn elements(&self) -> impl Iterator<Item = &FragmentElement> {
        self.nodes.iter().filter_map(|node| match node {
            FragmentNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Concatenated text of all text nodes in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.nodes, &mut out);
        out
    }
}

fn collect_text(nodes: &[FragmentNode], out: &mut String) {
    for node in nodes {
        match node {
            FragmentNode::Element(element) => collect_text(&element.children, out),
            FragmentNode::Text(text) => out.push_str(text),
            FragmentNode::Comment(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn capture(xml: &str) -> Fragment {
        let doc = Document::parse(xml).unwrap();
        Fragment::from_siblings(doc.root_element().first_child())
    }

    #[test]
    fn test_capture_elements_and_text() {
        let fragment = capture(r#"<root>lead<a x="1">inner</a><!-- note -->tail</root>"#);

        assert_eq!(fragment.nodes().len(), 4);
        assert_eq!(fragment.text_content(), "leadinnertail");

        let a = fragment.elements().next().unwrap();
        assert_eq!(a.name().local_name(), "a");
        assert_eq!(a.attribute("x"), Some("1"));
        assert_eq!(a.text_content(), "inner");
    }

    #[test]
    fn test_capture_keeps_namespaces() {
        let fragment = capture(
            r#"<root xmlns:h="http://example.com/h"><h:p h:lang="nl"><h:b>x</h:b></h:p></root>"#,
        );

        let p = fragment.elements().next().unwrap();
        assert!(p.name().is("http://example.com/h", "p"));
        assert_eq!(p.name().to_string(), "{http://example.com/h}p");
        assert_eq!(p.attribute("lang"), None);
        assert_eq!(p.attributes()[0].value(), "nl");
        assert!(p.first_child_element("b").is_some());
        assert!(p.first_child_element("i").is_none());
    }

    #[test]
    fn test_empty_fragment() {
        assert!(capture("<root/>").is_empty());
        assert!(capture("<root>  \n </root>").is_empty());
        assert!(!capture("<root>text</root>").is_empty());
    }

    #[test]
    fn test_yaml_output_has_no_tags() {
        let fragment = capture(r#"<root>hi<a/><!--c--></root>"#);
        let yaml = serde_yaml_ng::to_string(&fragment).unwrap();

        assert!(!yaml.contains('!'), "unexpected YAML tag in:\n{yaml}");
        assert!(yaml.contains("node: text"));
        assert!(yaml.contains("value: hi"));
        assert!(yaml.contains("node: element"));
        assert!(yaml.contains("node: comment"));
    }

    #[test]
    fn test_qualified_name_without_namespace() {
        let name = QualifiedName::new(Some(""), "plain");
        assert_eq!(name.namespace(), None);
        assert!(name.is("", "plain"));
        assert_eq!(name.to_string(), "plain");
    }
}
