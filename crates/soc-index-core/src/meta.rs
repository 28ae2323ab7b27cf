//! Per-group metadata records and the flat code index over them.
//!
//! [`MetaRecord::from_row`] turns one structure-table row into a record by
//! resolving the four mutually-exclusive code columns into a single code.
//! [`MetaIndex`] holds every record in table order with an exact-code map.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::code::{CodeError, GroupLevel, SocCode};
use crate::models::StructureRow;

/// Why a structure-table row could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has no code in any group column")]
    NoCode,
    #[error("row has codes in more than one group column: {columns:?}")]
    AmbiguousCode { columns: Vec<&'static str> },
    #[error("invalid code in column {column}: {source}")]
    InvalidCode {
        column: &'static str,
        #[source]
        source: CodeError,
    },
    #[error("code {code:?} has the wrong number of digits for column {column}")]
    LevelMismatch { column: &'static str, code: String },
    #[error("row for code {code} has no group title")]
    MissingTitle { code: String },
}

/// Normalized metadata for one classification group.
///
/// Serializes to the `code_meta` shape returned by lookups:
/// `{code, group_title, group_description, entry_routes_and_quals, tasks}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaRecord {
    pub code: SocCode,
    pub group_title: String,
    pub group_description: String,
    #[serde(rename = "entry_routes_and_quals", serialize_with = "empty_if_none")]
    pub qualifications: Option<String>,
    pub tasks: Vec<String>,
}

fn empty_if_none<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

impl MetaRecord {
    /// Decode one structure-table row.
    pub fn from_row(row: &StructureRow) -> Result<Self, RowError> {
        let columns = [
            ("soc2020_major_group", GroupLevel::Major, row.major_group.as_deref()),
            ("soc2020_sub-major_group", GroupLevel::SubMajor, row.sub_major_group.as_deref()),
            ("soc2020_minor_group", GroupLevel::Minor, row.minor_group.as_deref()),
            ("soc_2020_unit_group", GroupLevel::Unit, row.unit_group.as_deref()),
        ];
        let present: Vec<(&'static str, GroupLevel, &str)> = columns
            .into_iter()
            .filter_map(|(column, level, value)| value.map(|v| (column, level, v)))
            .collect();

        let (column, level, raw) = match present.as_slice() {
            [] => return Err(RowError::NoCode),
            [single] => *single,
            many => {
                return Err(RowError::AmbiguousCode {
                    columns: many.iter().map(|(column, _, _)| *column).collect(),
                })
            }
        };

        let code = SocCode::new(raw).map_err(|source| RowError::InvalidCode { column, source })?;
        if code.group_level() != level {
            return Err(RowError::LevelMismatch {
                column,
                code: code.into_string(),
            });
        }

        let group_title = match row.group_title.as_deref() {
            Some(title) => join_lines(title),
            None => {
                return Err(RowError::MissingTitle {
                    code: code.into_string(),
                })
            }
        };
        let group_description = row
            .group_description
            .as_deref()
            .map(join_lines)
            .unwrap_or_default();
        let tasks = row.tasks.as_deref().map(split_tasks).unwrap_or_default();

        Ok(MetaRecord {
            code,
            group_title,
            group_description,
            qualifications: row.qualifications.clone(),
            tasks,
        })
    }
}

/// Replace embedded newlines with spaces.
pub fn join_lines(text: &str) -> String {
    text.replace('\n', " ")
}

/// Split a `~`-delimited tasks blob. The first segment is a header and is
/// dropped; newlines are removed and each task is trimmed.
pub fn split_tasks(blob: &str) -> Vec<String> {
    blob.replace('\n', "")
        .split('~')
        .skip(1)
        .map(|task| task.trim().to_string())
        .collect()
}

/// Every decoded [`MetaRecord`], in table order, with exact-code lookup.
#[derive(Debug, Clone, Default)]
pub struct MetaIndex {
    records: Vec<MetaRecord>,
    by_code: HashMap<String, usize>,
    skipped: usize,
}

impl MetaIndex {
    /// Decode every row, logging and skipping rows that fail.
    pub fn build(rows: &[StructureRow]) -> Self {
        let mut index = MetaIndex::default();
        for (position, row) in rows.iter().enumerate() {
            match MetaRecord::from_row(row) {
                Ok(record) => index.push(record),
                Err(e) => {
                    tracing::warn!(row = position, error = %e, "skipping structure row");
                    index.skipped += 1;
                }
            }
        }
        index
    }

    /// Decode every row, failing on the first row that does not decode.
    pub fn try_build(rows: &[StructureRow]) -> Result<Self, RowError> {
        let mut index = MetaIndex::default();
        for row in rows {
            index.push(MetaRecord::from_row(row)?);
        }
        Ok(index)
    }

    pub fn from_records(records: Vec<MetaRecord>) -> Self {
        let mut index = MetaIndex::default();
        for record in records {
            index.push(record);
        }
        index
    }

    fn push(&mut self, record: MetaRecord) {
        let position = self.records.len();
        self.by_code
            .entry(record.code.as_str().to_string())
            .or_insert(position);
        self.records.push(record);
    }

    /// Exact-match lookup. A shorter code never matches a longer one.
    pub fn get_by_code(&self, code: &str) -> Option<&MetaRecord> {
        self.by_code.get(code).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[MetaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped by [`MetaIndex::build`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
