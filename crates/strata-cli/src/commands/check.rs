//! Check command: report whether a document resolves

use colored::Colorize;

use crate::cli::ResolveArgs;
use crate::commands::resolve::resolve;
use crate::error::Result;

pub fn run_check(args: &ResolveArgs) -> Result<()> {
    resolve(args)?;
    println!("{} {} resolves", "OK".green().bold(), args.location);
    Ok(())
}
