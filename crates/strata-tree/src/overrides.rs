//! Property overrides applied to a resolved tree
//!
//! An override is a dotted key and a string value, e.g.
//! `server.http.port=8081`. A literal dot inside a key is written `\.`.
//! When the addressed value is an array the override value is split on
//! unescaped commas; an array in the middle of a key is indexed by the next
//! segment (`servers.0.host=example.com`).
//!
//! Values replacing a string stay strings. Anything else is typed by its
//! text: `true`/`false` become booleans and numeric text becomes a number.

use crate::error::{Error, Result};
use crate::{ConfigMap, ConfigNode};

/// Split `input` on `separator`, treating `\<separator>` as a literal.
fn split_escaped(input: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&separator) {
            current.push(separator);
            chars.next();
        } else if ch == separator {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    parts.push(current);
    parts
}

/// Type an override value, keeping strings where a string is replaced.
fn override_value(existing: Option<&ConfigNode>, raw: &str) -> ConfigNode {
    if matches!(existing, Some(ConfigNode::String(_))) {
        return ConfigNode::String(raw.to_string());
    }
    match raw {
        "true" => ConfigNode::Bool(true),
        "false" => ConfigNode::Bool(false),
        _ => raw
            .parse::<i64>()
            .map(ConfigNode::from)
            .ok()
            .or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .and_then(serde_json::Number::from_f64)
                    .map(ConfigNode::Number)
            })
            .unwrap_or_else(|| ConfigNode::String(raw.to_string())),
    }
}

/// Apply a single override to `tree`.
///
/// Missing (or null) intermediate keys are created as objects. Fails when
/// the key walks through a scalar, or indexes an array out of bounds.
pub fn apply_override(tree: &mut ConfigNode, key: &str, value: &str) -> Result<()> {
    let segments = split_escaped(key, '.');
    if segments.iter().any(String::is_empty) {
        return Err(Error::invalid_override(key, "key contains an empty segment"));
    }

    let mut node = tree;
    let mut remaining = segments.iter().peekable();

    while let Some(segment) = remaining.next() {
        let map = match node {
            ConfigNode::Object(map) => map,
            _ => return Err(Error::invalid_override(key, "it's not a valid path")),
        };

        if remaining.peek().is_none() {
            match map.get_mut(segment.as_str()) {
                Some(ConfigNode::Array(items)) => {
                    let typed: Vec<ConfigNode> = split_escaped(value, ',')
                        .iter()
                        .map(|item| override_value(items.first(), item))
                        .collect();
                    *items = typed;
                }
                existing => {
                    let typed = override_value(existing.as_deref(), value);
                    map.insert(segment.clone(), typed);
                }
            }
            return Ok(());
        }

        let child = map.entry(segment.clone()).or_insert(ConfigNode::Null);
        if child.is_null() {
            *child = ConfigNode::Object(ConfigMap::new());
        }

        node = match child {
            ConfigNode::Array(items) => {
                let Some(index) = remaining.next() else {
                    return Err(Error::invalid_override(key, "missing array index"));
                };
                let index: usize = index.parse().map_err(|_| {
                    Error::invalid_override(key, format!("'{index}' is not an array index"))
                })?;
                let len = items.len();
                let element = items.get_mut(index).ok_or_else(|| {
                    Error::invalid_override(
                        key,
                        format!("index {index} out of bounds for array of length {len}"),
                    )
                })?;
                if remaining.peek().is_none() {
                    let typed = override_value(Some(&*element), value);
                    *element = typed;
                    return Ok(());
                }
                element
            }
            other => other,
        };
    }

    Ok(())
}
