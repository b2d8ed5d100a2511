pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Environment-scoped lookups over Rails-style YAML configuration.
#[derive(Parser, Debug)]
#[command(name = "railsyaml", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML document to load (default: config/database.yml)
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    /// Environment block to resolve against
    #[arg(short, long, global = true, env = "RAILS_ENV")]
    pub env: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value of a key for the current environment
    Get {
        /// Key to look up
        key: String,
        /// Fail unless the value is a string
        #[arg(long)]
        string: bool,
    },

    /// List environment blocks in the document
    Envs,

    /// Print every effective key for the current environment
    Show {
        /// Print a JSON object instead of key: value lines
        #[arg(long)]
        json: bool,
    },

    /// Print the current environment
    Env,
}
