use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::data_access;

/// Status of one configured data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatus {
    pub name: &'static str,
    pub status: String,
    pub rows: Option<usize>,
}

pub fn source_statuses(config: &Config) -> Vec<SourceStatus> {
    vec![
        table_status("structure", &config.data.structure, |path| {
            data_access::load_structure(path).map(|rows| rows.len())
        }),
        table_status("index", &config.data.index, |path| {
            data_access::load_index(path).map(|rows| rows.len())
        }),
    ]
}

fn table_status(
    name: &'static str,
    path: &Path,
    count: impl Fn(&Path) -> Result<usize>,
) -> SourceStatus {
    if !path.exists() {
        return SourceStatus {
            name,
            status: "MISSING".to_string(),
            rows: None,
        };
    }
    match count(path) {
        Ok(rows) => SourceStatus {
            name,
            status: "OK".to_string(),
            rows: Some(rows),
        },
        Err(e) => {
            tracing::warn!(table = name, error = %e, "unreadable data table");
            SourceStatus {
                name,
                status: "UNREADABLE".to_string(),
                rows: None,
            }
        }
    }
}

pub fn list_sources(config: &Config) -> Result<()> {
    println!("{:<12} {:<12} {:>8}  PATH", "TABLE", "STATUS", "ROWS");
    for (status, path) in source_statuses(config)
        .into_iter()
        .zip([&config.data.structure, &config.data.index])
    {
        let rows = status
            .rows
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<12} {:>8}  {}",
            status.name,
            status.status,
            rows,
            path.display()
        );
    }
    Ok(())
}
