//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::config::SearchConfig;
use crate::cost::EditCostConfig;
use crate::facade::{CostSpec, LevenSearch};

use super::args::Commands;

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Query {
            term,
            dict,
            max_distance,
            default_cost,
            costs,
            limit,
            visit_limit,
        } => cmd_query(
            &term,
            &dict,
            max_distance,
            default_cost,
            costs,
            limit,
            visit_limit,
        ),
        Commands::Check { term, dict } => cmd_check(&term, &dict),
        Commands::Costs {
            costs,
            default_cost,
        } => cmd_costs(costs, default_cost),
    }
}

/// Query command
fn cmd_query(
    term: &str,
    dict_path: &Path,
    max_distance: f64,
    default_cost: Option<f64>,
    costs_path: Option<PathBuf>,
    limit: Option<usize>,
    visit_limit: Option<usize>,
) -> Result<()> {
    let index = load_word_list(dict_path)?;
    let costs = load_cost_spec(costs_path.as_deref())?;

    let mut config = SearchConfig::new(max_distance);
    config.visit_limit = visit_limit;

    let result = index
        .find_dist(term, &config, costs, default_cost)
        .with_context(|| format!("Query '{}' failed", term))?;
    let complete = result.is_complete();

    let mut items = result.into_sorted();
    if let Some(lim) = limit {
        items.truncate(lim);
    }

    if items.is_empty() {
        println!("{}", "No matches found".yellow());
    } else {
        for (i, item) in items.iter().enumerate() {
            let updates: Vec<String> = item.updates.iter().map(|e| e.to_string()).collect();
            println!(
                "   {}. {} (d={}) [{}]",
                i + 1,
                item.word.green(),
                item.dist,
                updates.join(", ").dimmed()
            );
        }
        println!();
        println!("{} match(es) found", items.len());
    }

    if !complete {
        println!("{}", "Visit limit reached; results may be incomplete".yellow());
    }

    Ok(())
}

/// Check command
fn cmd_check(term: &str, dict_path: &Path) -> Result<()> {
    let index = load_word_list(dict_path)?;

    if index.find(term) {
        println!("{} {}", "✓".green(), term);
    } else {
        println!("{} {}", "✗".red(), term);
    }

    Ok(())
}

/// Costs command
fn cmd_costs(costs_path: Option<PathBuf>, default_cost: Option<f64>) -> Result<()> {
    let costs: EditCostConfig = load_cost_spec(costs_path.as_deref())?.resolve(default_cost);
    costs.validate()?;
    println!("{}", costs);
    Ok(())
}

/// Load a plain-text word list into an index.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn load_word_list(path: &Path) -> Result<LevenSearch> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = std::io::BufReader::new(file);

    let mut index = LevenSearch::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        index.insert(trimmed);
    }

    log::info!("Loaded {} words from {}", index.len(), path.display());
    Ok(index)
}

/// Load a cost configuration from a JSON file; no file means the default.
pub fn load_cost_spec(path: Option<&Path>) -> Result<CostSpec> {
    let Some(path) = path else {
        return Ok(CostSpec::Default);
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cost file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    CostSpec::from_json(&value).with_context(|| format!("Invalid cost file: {}", path.display()))
}
