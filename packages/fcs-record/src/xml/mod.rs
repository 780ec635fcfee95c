//! XML access for the record parsers.
//!
//! The parsers are written against the [`XmlCursor`] capability.
//! [`DocumentCursor`] implements it on top of a parsed `roxmltree` document,
//! and [`Fragment`] holds owned copies of markup captured from it.

mod cursor;
mod document;
mod fragment;
mod utils;

pub use cursor::XmlCursor;
pub use document::DocumentCursor;
pub use fragment::{Fragment, FragmentAttribute, FragmentElement, FragmentNode, QualifiedName};
pub use utils::{clark_name, describe_end, describe_node, has_name, is_ignorable};
