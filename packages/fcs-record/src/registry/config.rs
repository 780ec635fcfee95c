//! Default data view parser configuration.

use super::core::DataViewParserRegistry;
use super::parsers::{GenericDataViewParser, KwicDataViewParser};

/// Create a registry with the built-in data view parsers.
///
/// KWIC data views get a typed representation; every other type falls back
/// to the generic parser.
#[must_use]
pub fn create_default_registry() -> DataViewParserRegistry {
    let mut registry = DataViewParserRegistry::new();
    registry.register(KwicDataViewParser);
    registry.register(GenericDataViewParser);
    registry
}
