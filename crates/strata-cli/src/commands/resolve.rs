//! Resolve command: print the resolved tree

use std::io::{self, Write};

use strata_core::{ConfigNode, Format, Resolver, render_tree};

use crate::cli::ResolveArgs;
use crate::error::Result;

/// Resolve the document and apply overrides, without binding.
pub fn resolve(args: &ResolveArgs) -> Result<ConfigNode> {
    let resolver = Resolver::with_options(args.provider(), args.options());
    let mut tree = resolver.resolve_tree(&args.location)?;
    args.property_overrides()?.apply(&mut tree)?;
    Ok(tree)
}

pub fn run_resolve(args: &ResolveArgs, output: Format) -> Result<()> {
    let tree = resolve(args)?;
    let rendered = render_tree(&tree, output)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
