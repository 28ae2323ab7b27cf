//! Job-title and major-group lookups for the CLI.
//!
//! Used by the `soc lookup`, `soc major-group`, and `soc unique-major-groups`
//! commands. `lookup` prints a readable summary unless `--json` is given;
//! the other two always print JSON.

use anyhow::{Context, Result};

use soc_index_core::{LookupResult, MetaRecord, SocCandidate};

use crate::catalog::Catalog;
use crate::config::Config;

/// CLI entry point for `soc lookup`.
pub fn run_lookup(
    catalog: &Catalog,
    config: &Config,
    title: &str,
    similarity: bool,
    json: bool,
) -> Result<()> {
    let similarity = similarity || config.lookup.similarity;
    let result = catalog.titles.lookup(title, similarity);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_lookup(&result, config.lookup.max_matches);
    Ok(())
}

fn print_lookup(result: &LookupResult, max_matches: usize) {
    println!("description:  {}", result.description);
    match (&result.code, &result.code_meta) {
        (Some(code), Some(meta)) => println!("code:         {} ({})", code, meta.group_title),
        (Some(code), None) => println!("code:         {} (no metadata)", code),
        (None, _) => println!("code:         (no exact match)"),
    }
    if let Some(ref major) = result.code_major_group {
        println!(
            "major group:  {} ({})",
            major,
            meta_title(result.code_major_group_meta.as_ref())
        );
    }

    let Some(ref matches) = result.potential_matches else {
        return;
    };
    println!();
    println!("--- Potential matches ({}) ---", matches.descriptions_count);
    for description in matches.descriptions.iter().take(max_matches) {
        println!("  {}", description);
    }
    if matches.descriptions.len() > max_matches {
        println!("  ... {} more", matches.descriptions.len() - max_matches);
    }
    println!("codes ({}): {}", matches.codes_count, matches.codes.join(", "));
    println!("--- Major groups ({}) ---", matches.major_groups_count);
    for group in &matches.major_groups {
        println!("  {}  {}", group.code, meta_title(group.meta.as_ref()));
    }
}

fn meta_title(meta: Option<&MetaRecord>) -> &str {
    meta.map(|m| m.group_title.as_str()).unwrap_or("(unknown)")
}

/// CLI entry point for `soc major-group`.
pub fn run_major_group(catalog: &Catalog, code: &str) -> Result<()> {
    let result = catalog.titles.lookup_code_major_group(code);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// CLI entry point for `soc unique-major-groups`.
pub fn run_unique_major_groups(catalog: &Catalog, codes: &[String]) -> Result<()> {
    let candidates: Vec<SocCandidate> = codes.iter().map(SocCandidate::new).collect();
    let groups = catalog.titles.unique_major_groups(&candidates);
    let out = serde_json::to_string_pretty(&groups).context("Failed to serialize major groups")?;
    println!("{}", out);
    Ok(())
}
