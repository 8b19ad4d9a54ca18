//! Reading a single document into a tree

use std::io::Read;

use strata_tree::{ConfigNode, Format};

use crate::error::{Error, Result};
use crate::source::SourceProvider;
use crate::trail::PathTrail;

/// Open `location` through `provider` and parse it.
pub(crate) fn read_tree(
    provider: &dyn SourceProvider,
    location: &str,
    format: Option<Format>,
    trail: &PathTrail,
) -> Result<ConfigNode> {
    let mut reader = provider.open(location).map_err(|source| Error::Open {
        location: location.to_string(),
        trail: trail.chain_with(location),
        source,
    })?;

    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| Error::Read {
            location: location.to_string(),
            trail: trail.chain_with(location),
            source,
        })?;

    parse_tree(location, &content, format, trail)
}

/// Parse document text; the root must be a non-empty object.
pub(crate) fn parse_tree(
    location: &str,
    content: &str,
    format: Option<Format>,
    trail: &PathTrail,
) -> Result<ConfigNode> {
    let format = format.unwrap_or_else(|| Format::detect(location, content));
    let parsed = format
        .handler()
        .parse(content)
        .map_err(|source| Error::Parse {
            location: location.to_string(),
            trail: trail.chain_with(location),
            source,
        })?;

    match parsed {
        Some(tree @ ConfigNode::Object(_)) => Ok(tree),
        Some(_) => Err(Error::NotAnObject {
            location: location.to_string(),
            trail: trail.chain_with(location),
        }),
        None => Err(Error::EmptyDocument {
            location: location.to_string(),
            trail: trail.chain_with(location),
        }),
    }
}
