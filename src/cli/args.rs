//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "leven-search")]
#[command(about = "Fuzzy word lookup with weighted edit costs")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Query a word list for fuzzy matches
    Query {
        /// Query term
        term: String,

        /// Word list, one word per line
        #[arg(short, long)]
        dict: PathBuf,

        /// Maximum total edit cost
        #[arg(short = 'm', long, default_value = "0")]
        max_distance: f64,

        /// Cost of edits without an override
        #[arg(long)]
        default_cost: Option<f64>,

        /// JSON file with a cost configuration (number, list or object)
        #[arg(short, long)]
        costs: Option<PathBuf>,

        /// Limit results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Stop after visiting this many trie nodes
        #[arg(long)]
        visit_limit: Option<usize>,
    },

    /// Check whether a word is in the word list
    Check {
        /// Word to look up
        term: String,

        /// Word list, one word per line
        #[arg(short, long)]
        dict: PathBuf,
    },

    /// Print a cost configuration
    Costs {
        /// JSON file with a cost configuration
        #[arg(short, long)]
        costs: Option<PathBuf>,

        /// Cost of edits without an override
        #[arg(long)]
        default_cost: Option<f64>,
    },
}
