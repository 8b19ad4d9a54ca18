//! JSON format handler

use serde_json::Value;

use crate::ConfigNode;
use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};

/// Handler for JSON documents
#[derive(Debug, Default)]
pub struct JsonHandler;

impl JsonHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for JsonHandler {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, source: &str) -> Result<Option<ConfigNode>> {
        if source.trim().is_empty() {
            return Ok(None);
        }
        let value: Value =
            serde_json::from_str(source).map_err(|e| Error::parse("JSON", e.to_string()))?;
        Ok((!value.is_null()).then_some(value))
    }

    fn render(&self, node: &ConfigNode) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(node).map_err(|e| Error::render("JSON", e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_parse() {
        let handler = JsonHandler::new();
        let parsed = handler.parse(r#"{"server": {"port": 8080}}"#).unwrap();
        assert_eq!(parsed, Some(json!({"server": {"port": 8080}})));
    }

    #[test]
    fn test_json_parse_null_is_empty() {
        let handler = JsonHandler::new();
        assert_eq!(handler.parse("null").unwrap(), None);
        assert_eq!(handler.parse("  \n").unwrap(), None);
    }

    #[test]
    fn test_json_parse_error() {
        let handler = JsonHandler::new();
        assert!(handler.parse("{\"unclosed\": ").is_err());
    }

    #[test]
    fn test_json_render_ends_with_newline() {
        let handler = JsonHandler::new();
        let rendered = handler.render(&json!({"a": 1})).unwrap();
        assert_eq!(rendered, "{\n  \"a\": 1\n}\n");
    }
}
