//! Binding a resolved tree to a typed configuration, and rendering trees
//! back to text for inspection.

use serde::Serialize;
use serde::de::DeserializeOwned;
use strata_tree::{ConfigNode, Format};

use crate::error::{Error, Result};

/// Deserialize a resolved tree into `T`.
///
/// Keys with no matching field are ignored unless `T` is declared with
/// `#[serde(deny_unknown_fields)]`, which makes them a bind error.
/// `location` only appears in the error message.
pub fn bind<T: DeserializeOwned>(tree: ConfigNode, location: &str) -> Result<T> {
    serde_json::from_value(tree).map_err(|source| Error::Bind {
        location: location.to_string(),
        source,
    })
}

/// Render a resolved tree in `format`.
pub fn render_tree(tree: &ConfigNode, format: Format) -> Result<String> {
    Ok(format.handler().render(tree)?)
}

/// Render any serializable configuration in `format`.
pub fn render_value<T: Serialize>(value: &T, format: Format) -> Result<String> {
    let tree = serde_json::to_value(value)?;
    render_tree(&tree, format)
}
