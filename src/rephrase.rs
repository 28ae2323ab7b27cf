//! `soc rephrase` and `soc annotate`.
//!
//! `annotate` reads a classification payload (`soc_code` plus
//! `soc_candidates`) from a file or stdin and prints it back with
//! `soc_description`/`soc_descriptive` filled in.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use crate::catalog::Catalog;

/// CLI entry point for `soc rephrase`. An unknown code is reported in the
/// JSON output, not as a failure.
pub fn run_rephrase(catalog: &Catalog, code: &str) -> Result<()> {
    let result = catalog.rephrase.lookup(code);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub fn read_payload(input: Option<&Path>) -> Result<Value> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("Payload is not valid JSON")
}

/// CLI entry point for `soc annotate`.
pub fn run_annotate(catalog: &Catalog, input: Option<&Path>) -> Result<()> {
    let payload = read_payload(input)?;
    let annotated = catalog.rephrase.annotate_json(payload)?;
    println!("{}", serde_json::to_string_pretty(&annotated)?);
    Ok(())
}
