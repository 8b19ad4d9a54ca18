//! TOML format handler

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};
use crate::{ConfigMap, ConfigNode};

/// Handler for TOML documents
#[derive(Debug, Default)]
pub struct TomlHandler;

impl TomlHandler {
    pub fn new() -> Self {
        Self
    }
}

fn toml_to_tree(value: toml::Value) -> ConfigNode {
    match value {
        toml::Value::String(s) => ConfigNode::String(s),
        toml::Value::Integer(i) => ConfigNode::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(ConfigNode::Number)
            .unwrap_or(ConfigNode::Null),
        toml::Value::Boolean(b) => ConfigNode::Bool(b),
        toml::Value::Datetime(dt) => ConfigNode::String(dt.to_string()),
        toml::Value::Array(items) => {
            ConfigNode::Array(items.into_iter().map(toml_to_tree).collect())
        }
        toml::Value::Table(table) => table_to_tree(table),
    }
}

fn table_to_tree(table: toml::Table) -> ConfigNode {
    let mut object = ConfigMap::new();
    for (key, value) in table {
        object.insert(key, toml_to_tree(value));
    }
    ConfigNode::Object(object)
}

/// TOML has no null: null values are dropped from tables and arrays.
fn tree_to_toml(node: &ConfigNode) -> Option<toml::Value> {
    match node {
        ConfigNode::Null => None,
        ConfigNode::Bool(b) => Some(toml::Value::Boolean(*b)),
        ConfigNode::Number(n) => n
            .as_i64()
            .map(toml::Value::Integer)
            .or_else(|| n.as_f64().map(toml::Value::Float)),
        ConfigNode::String(s) => Some(toml::Value::String(s.clone())),
        ConfigNode::Array(items) => Some(toml::Value::Array(
            items.iter().filter_map(tree_to_toml).collect(),
        )),
        ConfigNode::Object(map) => {
            let mut table = toml::Table::new();
            for (key, value) in map {
                if let Some(v) = tree_to_toml(value) {
                    table.insert(key.clone(), v);
                }
            }
            Some(toml::Value::Table(table))
        }
    }
}

impl FormatHandler for TomlHandler {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn parse(&self, source: &str) -> Result<Option<ConfigNode>> {
        if source.trim().is_empty() {
            return Ok(None);
        }
        let table: toml::Table = source
            .parse()
            .map_err(|e: toml::de::Error| Error::parse("TOML", e.to_string()))?;
        Ok(Some(table_to_tree(table)))
    }

    fn render(&self, node: &ConfigNode) -> Result<String> {
        match tree_to_toml(node) {
            Some(toml::Value::Table(table)) => {
                toml::to_string_pretty(&table).map_err(|e| Error::render("TOML", e.to_string()))
            }
            _ => Err(Error::render("TOML", "document root must be a table")),
        }
    }
}
