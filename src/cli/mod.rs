//! CLI interface for leven-search
//!
//! Loads a plain word list, runs one query and prints the matches.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{load_cost_spec, load_word_list};
