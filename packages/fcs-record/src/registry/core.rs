//! Registry selecting a data view parser by MIME type.

use super::parser::DataViewParser;

/// Ordered collection of data view parsers.
///
/// For a given MIME type the accepting parser with the highest priority is
/// selected; among equal priorities the one registered first wins.
pub struct DataViewParserRegistry {
    parsers: Vec<Box<dyn DataViewParser>>,
}

impl DataViewParserRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser after all previously registered ones.
    pub fn register(&mut self, parser: impl DataViewParser + 'static) {
        self.parsers.push(Box::new(parser));
    }

    /// Register a parser, builder style.
    #[must_use]
    pub fn with(mut self, parser: impl DataViewParser + 'static) -> Self {
        self.register(parser);
        self
    }

    /// Get the parser for a data view type.
    ///
    /// Returns `None` if no registered parser accepts the type.
    pub fn find_parser(&self, mime_type: &str) -> Option<&dyn DataViewParser> {
        let mut best: Option<&dyn DataViewParser> = None;
        for parser in &self.parsers {
            if !parser.accepts(mime_type) {
                continue;
            }
            match best {
                Some(current) if parser.priority() <= current.priority() => {}
                _ => best = Some(parser.as_ref()),
            }
        }
        best
    }

    /// Number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Names of the registered parsers in registration order.
    #[must_use]
    pub fn parser_names(&self) -> Vec<&str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }
}

impl Default for DataViewParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DataViewParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataViewParserRegistry")
            .field("parsers", &self.parser_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::types::{DataView, DataViewKind, KwicDataView};
    use crate::xml::XmlCursor;

    struct DummyParser {
        name: &'static str,
        accepts: &'static str,
        priority: i32,
    }

    impl DataViewParser for DummyParser {
        fn name(&self) -> &str {
            self.name
        }

        fn accepts(&self, mime_type: &str) -> bool {
            self.accepts == "*" || self.accepts == mime_type
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn parse(
            &self,
            _cursor: &mut dyn XmlCursor,
            mime_type: &str,
            pid: Option<String>,
            reference: Option<String>,
        ) -> Result<DataView> {
            DataView::new(
                mime_type,
                pid,
                reference,
                DataViewKind::Kwic(KwicDataView::new("", self.name, "")),
            )
        }
    }

    fn dummy(name: &'static str, accepts: &'static str, priority: i32) -> DummyParser {
        DummyParser {
            name,
            accepts,
            priority,
        }
    }

    #[test]
    fn test_registry_register_and_find() {
        let registry = DataViewParserRegistry::new().with(dummy("custom", "text/x-custom", 1));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.find_parser("text/x-custom").map(|p| p.name()),
            Some("custom")
        );
        assert!(registry.find_parser("text/plain").is_none());
    }

    #[test]
    fn test_higher_priority_wins_regardless_of_order() {
        let low_first = DataViewParserRegistry::new()
            .with(dummy("low", "text/x-custom", 5))
            .with(dummy("high", "text/x-custom", 10));
        let high_first = DataViewParserRegistry::new()
            .with(dummy("high", "text/x-custom", 10))
            .with(dummy("low", "text/x-custom", 5));

        assert_eq!(
            low_first.find_parser("text/x-custom").map(|p| p.name()),
            Some("high")
        );
        assert_eq!(
            high_first.find_parser("text/x-custom").map(|p| p.name()),
            Some("high")
        );
    }

    #[test]
    fn test_equal_priority_keeps_first_registered() {
        let registry = DataViewParserRegistry::new()
            .with(dummy("first", "text/x-custom", 7))
            .with(dummy("second", "text/x-custom", 7));

        assert_eq!(
            registry.find_parser("text/x-custom").map(|p| p.name()),
            Some("first")
        );
    }

    #[test]
    fn test_catch_all_only_used_as_fallback() {
        let registry = DataViewParserRegistry::new()
            .with(dummy("any", "*", i32::MIN))
            .with(dummy("custom", "text/x-custom", 0));

        assert_eq!(
            registry.find_parser("text/x-custom").map(|p| p.name()),
            Some("custom")
        );
        assert_eq!(
            registry.find_parser("text/plain").map(|p| p.name()),
            Some("any")
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = DataViewParserRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.find_parser("text/plain").is_none());
        assert_eq!(format!("{registry:?}"), "DataViewParserRegistry { parsers: [] }");
    }
}
