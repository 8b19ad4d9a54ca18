//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use strata_core::options::{DEFAULT_IMPORT_KEY, DEFAULT_PARENT_KEY};
use strata_core::overrides::DEFAULT_OVERRIDE_PREFIX;
use strata_core::{FileSourceProvider, Format, PropertyOverrides, ResolverOptions};

/// Strata - Resolve layered configuration documents
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the fully resolved configuration
    ///
    /// Examples:
    ///   strata resolve app.yml                      # Print as YAML
    ///   strata resolve app.yml -o json              # Print as JSON
    ///   strata resolve app.yml --set server.port=81 # Override a value
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,

        /// Output format (yaml, json or toml)
        #[arg(short, long, default_value = "yaml")]
        output: Format,
    },

    /// Check that a configuration resolves without errors
    Check {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// Options shared by every command that resolves a document
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ResolveArgs {
    /// Location of the document to resolve
    pub location: String,

    /// Directory that relative locations are resolved against
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Local file overriding the resolved document, ignored if missing
    #[arg(long, env = "STRATA_EXTERNAL_CONFIG")]
    pub external: Option<PathBuf>,

    /// Key naming a document's parent
    #[arg(long, default_value = DEFAULT_PARENT_KEY)]
    pub parent_key: String,

    /// Key listing a document's imports
    #[arg(long, default_value = DEFAULT_IMPORT_KEY)]
    pub import_key: String,

    /// Treat import keys as ordinary data
    #[arg(long)]
    pub no_imports: bool,

    /// Format of every document, detected per document when omitted
    #[arg(long)]
    pub input_format: Option<Format>,

    /// Override a value after resolution (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Read overrides from environment variables named <PREFIX>.<KEY>
    #[arg(
        long,
        value_name = "PREFIX",
        num_args = 0..=1,
        default_missing_value = DEFAULT_OVERRIDE_PREFIX
    )]
    pub env_prefix: Option<String>,
}

impl ResolveArgs {
    pub fn provider(&self) -> FileSourceProvider {
        match &self.root {
            Some(root) => FileSourceProvider::with_base_dir(root),
            None => FileSourceProvider::new(),
        }
    }

    pub fn options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::new().with_parent_key(&self.parent_key);
        options = if self.no_imports {
            options.without_imports()
        } else {
            options.with_import_key(&self.import_key)
        };
        if let Some(external) = &self.external {
            options = options.with_external_config(external);
        }
        if let Some(format) = self.input_format {
            options = options.with_format(format);
        }
        options
    }

    /// Environment overrides first, so `--set` wins.
    pub fn property_overrides(&self) -> strata_core::Result<PropertyOverrides> {
        let mut overrides = match &self.env_prefix {
            Some(prefix) => PropertyOverrides::from_env(prefix),
            None => PropertyOverrides::new(),
        };
        overrides.extend(PropertyOverrides::parse(&self.overrides)?);
        Ok(overrides)
    }
}
