//! YAML format handler using serde_yaml

use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};
use crate::{ConfigMap, ConfigNode};

/// Handler for YAML documents using serde_yaml
#[derive(Debug, Default)]
pub struct YamlHandler;

impl YamlHandler {
    pub fn new() -> Self {
        Self
    }
}

/// Convert a YAML value into a tree.
///
/// Non-string mapping keys are stringified and tags are dropped, keeping only
/// the tagged value.
fn yaml_to_tree(value: YamlValue) -> ConfigNode {
    match value {
        YamlValue::Null => ConfigNode::Null,
        YamlValue::Bool(b) => ConfigNode::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigNode::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                ConfigNode::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(ConfigNode::Number)
                    .unwrap_or(ConfigNode::Null)
            }
        }
        YamlValue::String(s) => ConfigNode::String(s),
        YamlValue::Sequence(items) => {
            ConfigNode::Array(items.into_iter().map(yaml_to_tree).collect())
        }
        YamlValue::Mapping(map) => {
            let mut object = ConfigMap::new();
            for (key, value) in map {
                object.insert(yaml_key(key), yaml_to_tree(value));
            }
            ConfigNode::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_tree(tagged.value),
    }
}

fn yaml_key(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl FormatHandler for YamlHandler {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn parse(&self, source: &str) -> Result<Option<ConfigNode>> {
        if source.trim().is_empty() {
            return Ok(None);
        }
        let value: YamlValue =
            serde_yaml::from_str(source).map_err(|e| Error::parse("YAML", e.to_string()))?;
        match yaml_to_tree(value) {
            ConfigNode::Null => Ok(None),
            tree => Ok(Some(tree)),
        }
    }

    fn render(&self, node: &ConfigNode) -> Result<String> {
        serde_yaml::to_string(node).map_err(|e| Error::render("YAML", e.to_string()))
    }
}
