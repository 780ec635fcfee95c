//! XML utility functions for matching and describing document nodes.

use roxmltree::{Node, NodeType};

/// Check if a node is the element `{namespace}local_name`.
///
/// An empty `namespace` matches elements without a namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use fcs_record::xml::has_name;
///
/// let xml = r#"<Resource xmlns="http://clarin.eu/fcs/resource"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(has_name(root, "http://clarin.eu/fcs/resource", "Resource"));
/// assert!(!has_name(root, "", "Resource"));
/// ```
pub fn has_name(node: Node<'_, '_>, namespace: &str, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace().unwrap_or_default() == namespace
}

/// Format a name in Clark notation (`{namespace}local`).
pub fn clark_name(namespace: &str, local_name: &str) -> String {
    if namespace.is_empty() {
        local_name.to_string()
    } else {
        format!("{{{namespace}}}{local_name}")
    }
}

/// Check if a node carries no information for the record grammar.
///
/// Whitespace-only text, comments and processing instructions are ignorable.
pub fn is_ignorable(node: Node<'_, '_>) -> bool {
    match node.node_type() {
        NodeType::Comment | NodeType::PI => true,
        NodeType::Text => node.text().map_or(true, |t| t.trim().is_empty()),
        NodeType::Element | NodeType::Root => false,
    }
}

/// Describe a node for error messages.
pub fn describe_node(node: Node<'_, '_>) -> String {
    match node.node_type() {
        NodeType::Element => {
            let name = node.tag_name();
            format!(
                "<{}>",
                clark_name(name.namespace().unwrap_or_default(), name.name())
            )
        }
        NodeType::Text => {
            let text = node.text().unwrap_or_default().trim();
            let preview: String = text.chars().take(32).collect();
            if preview.len() < text.len() {
                format!("text \"{preview}...\"")
            } else {
                format!("text \"{preview}\"")
            }
        }
        NodeType::Comment => "comment".to_string(),
        NodeType::PI => "processing instruction".to_string(),
        NodeType::Root => "document".to_string(),
    }
}

/// Describe the end tag of an element for error messages.
pub fn describe_end(node: Node<'_, '_>) -> String {
    let name = node.tag_name();
    format!(
        "</{}>",
        clark_name(name.namespace().unwrap_or_default(), name.name())
    )
}
