use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve design-token keys and emit linked CSS custom properties.
#[derive(Parser, Debug)]
#[command(name = "themeweave", version, about)]
pub struct Args {
    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered keys in insertion order.
    Keys {
        /// Canonical theme document (.yaml, .yml or .json).
        theme: PathBuf,
        /// Only list keys starting with this prefix.
        prefix: Option<String>,
    },
    /// Print the literal a key resolves to.
    Resolve {
        /// Canonical theme document.
        theme: PathBuf,
        /// Key to resolve.
        key: String,
    },
    /// Emit a `:root` block of custom-property declarations.
    Properties {
        /// Canonical theme document.
        theme: PathBuf,
        /// Customization document; defaults to the canonical theme's keys.
        #[arg(long)]
        overrides: Option<PathBuf>,
        /// Key prefix for literal entries; defaults to the document's prefix.
        #[arg(long)]
        prefix: Option<String>,
        /// Selector wrapping the declarations.
        #[arg(long, default_value = ":root")]
        selector: String,
    },
    /// Render a stylesheet template against the canonical theme.
    Render {
        /// Canonical theme document.
        theme: PathBuf,
        /// Template file.
        template: PathBuf,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
