//! Command-line definitions.

use clap::{Parser, Subcommand};

/// Mortar - inspect the content behind the RK Constructions site
#[derive(Parser, Debug)]
#[command(name = "mortar", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Host name to resolve the content service for (overrides `host` in the config)
    #[arg(long, global = true, env = "MORTAR_HOST")]
    pub host: Option<String>,

    /// Per-request timeout in seconds (overrides `http.timeout_secs`)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merged about page content
    About,
    /// Merged contact section
    Contact,
    /// Landing page statistics
    Stats,
    /// Project listing, optionally filtered by category
    Projects {
        /// Category label, e.g. "Residential" or "3D Plan"
        #[arg(short = 'C', long, default_value = "All")]
        category: String,
    },
    /// Normalize an image reference
    Asset {
        /// Reference as stored by the content service
        reference: Option<String>,
    },
    /// Show the endpoint selected for the host
    Resolve,
    /// Submit an enquiry
    Enquire {
        /// Visitor name
        #[arg(long)]
        name: String,
        /// Reply address
        #[arg(long)]
        email: String,
        /// Reply phone
        #[arg(long)]
        phone: String,
        /// Subject line
        #[arg(long)]
        subject: String,
        /// Message body
        #[arg(long)]
        message: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Write a default config file
    Init {
        /// Target file (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as TOML
    Show,
}
