//! Loading the structure table and the coding index from disk.
//!
//! Both tables are JSON arrays of row objects. The structure rows map
//! directly onto [`StructureRow`]. Coding-index rows arrive in raw form
//! (`natural_word` plus optional `add`/`ind` qualifiers) and are composed
//! into display titles here before they reach the core crate.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use soc_index_core::{IndexRow, StructureRow};

/// Code the coding index uses for rows with no assignable group.
pub const PLACEHOLDER_CODE: &str = "}}}}";

/// One unprocessed row of the coding index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIndexRow {
    #[serde(default, alias = "soc_2020", alias = "SOC_2020")]
    pub code: Option<String>,
    #[serde(
        default,
        alias = "indexocc_-_natural_word_order",
        alias = "INDEXOCC_-_natural_word_order"
    )]
    pub natural_word: Option<String>,
    #[serde(default, alias = "ADD")]
    pub add: Value,
    #[serde(default, alias = "IND")]
    pub ind: Value,
}

/// `"{add} {natural_word} ({ind})"`, leaving out whichever qualifier is null.
pub fn combine_job_title(natural_word: &str, add: &Value, ind: &Value) -> String {
    let mut title = natural_word.to_string();
    if let Some(add) = qualifier_text(add) {
        title = format!("{} {}", add, title);
    }
    if let Some(ind) = qualifier_text(ind) {
        title.push_str(&format!(" ({})", ind));
    }
    title
}

fn qualifier_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Drop placeholder and incomplete rows, then compose the display titles.
pub fn clean_index(raw: Vec<RawIndexRow>) -> Vec<IndexRow> {
    raw.into_iter()
        .filter_map(|row| {
            let code = row.code?;
            let natural_word = row.natural_word?;
            if code == PLACEHOLDER_CODE {
                return None;
            }
            let title = combine_job_title(&natural_word, &row.add, &row.ind);
            Some(IndexRow::new(code, capitalize(&title)))
        })
        .collect()
}

pub fn load_structure(path: &Path) -> Result<Vec<StructureRow>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read structure table: {}", path.display()))?;
    let rows: Vec<StructureRow> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse structure table: {}", path.display()))?;
    tracing::debug!(rows = rows.len(), path = %path.display(), "loaded structure table");
    Ok(rows)
}

pub fn load_index(path: &Path) -> Result<Vec<IndexRow>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read coding index: {}", path.display()))?;
    let raw: Vec<RawIndexRow> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse coding index: {}", path.display()))?;

    let raw_count = raw.len();
    let rows = clean_index(raw);
    tracing::debug!(
        rows = rows.len(),
        dropped = raw_count - rows.len(),
        path = %path.display(),
        "loaded coding index"
    );
    Ok(rows)
}
