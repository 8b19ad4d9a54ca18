//! Deep merge of configuration trees
//!
//! Merge semantics, with `source` overriding `dest`:
//! - Objects on both sides: deep-merge by key (recursive)
//! - Object in `dest`, anything else in `source`: `dest` is kept
//! - Arrays: REPLACE (no element-wise merge)
//! - Scalars and null: `source` wins
//!
//! Callers pick the overriding operand: a child over its parent, a local
//! document over its imports, an external file over the primary document.

use crate::ConfigNode;

/// Merge `source` into `dest`.
///
/// Only object roots are merged; any other combination is a no-op.
pub fn merge(source: ConfigNode, dest: &mut ConfigNode) {
    let (ConfigNode::Object(source_map), ConfigNode::Object(dest_map)) = (source, dest) else {
        return;
    };

    for (key, source_value) in source_map {
        match dest_map.get_mut(&key) {
            Some(dest_value) if dest_value.is_object() => merge(source_value, dest_value),
            _ => {
                dest_map.insert(key, source_value);
            }
        }
    }
}

/// Merge `source` into `dest` and return the result.
pub fn merged(source: ConfigNode, mut dest: ConfigNode) -> ConfigNode {
    merge(source, &mut dest);
    dest
}
