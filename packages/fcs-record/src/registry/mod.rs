//! Data view parser registry.
//!
//! The body of every `<DataView>` is handed to the parser registered for its
//! declared MIME type. Additional parsers can be registered next to the
//! built-in KWIC and generic parsers.

mod config;
mod core;
mod parser;
pub mod parsers;

pub use config::create_default_registry;
pub use core::DataViewParserRegistry;
pub use parser::DataViewParser;
