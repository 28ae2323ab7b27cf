//! Job-title lookup against the SOC coding index.
//!
//! [`TitleLookup`] maps lowercased job titles to Unit codes and enriches each
//! match with [`MetaRecord`]s for the code and its Major group. An optional
//! similarity pass scans every title for the query as a substring.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::meta::{MetaIndex, MetaRecord};
use crate::models::IndexRow;

/// A candidate code proposed by an upstream classifier.
///
/// Fields other than `soc_code` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocCandidate {
    pub soc_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soc_descriptive: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SocCandidate {
    pub fn new(soc_code: impl Into<String>) -> Self {
        SocCandidate {
            soc_code: soc_code.into(),
            soc_descriptive: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Result of [`TitleLookup::lookup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    /// The query, lowercased.
    pub description: String,
    pub code: Option<String>,
    pub code_meta: Option<MetaRecord>,
    pub code_major_group: Option<String>,
    pub code_major_group_meta: Option<MetaRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_matches: Option<PotentialMatches>,
}

/// Substring matches collected when similarity is requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PotentialMatches {
    /// Number of index rows whose title contains the query.
    pub descriptions_count: usize,
    pub descriptions: Vec<String>,
    pub codes_count: usize,
    pub codes: Vec<String>,
    pub major_groups_count: usize,
    pub major_groups: Vec<MajorGroupMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorGroupMeta {
    pub code: String,
    pub meta: Option<MetaRecord>,
}

/// The Major group of a code, with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorGroupResult {
    pub code_major_group: Option<String>,
    pub code_major_group_meta: Option<MetaRecord>,
}

/// Exact and substring lookup from job title to SOC code.
#[derive(Debug, Clone)]
pub struct TitleLookup {
    /// `(lowercased title, code)` in index-table order.
    entries: Vec<(String, String)>,
    by_title: HashMap<String, String>,
    meta: Arc<MetaIndex>,
}

fn major_group_of(code: &str) -> Option<String> {
    code.chars().next().map(String::from)
}

impl TitleLookup {
    /// Index every titled row. On duplicate titles the last row wins.
    pub fn build(index: &[IndexRow], meta: Arc<MetaIndex>) -> Self {
        let entries: Vec<(String, String)> = index
            .iter()
            .filter_map(|row| {
                row.title
                    .as_deref()
                    .map(|title| (title.to_lowercase(), row.code.clone()))
            })
            .collect();

        let mut by_title = HashMap::with_capacity(entries.len());
        for (title, code) in &entries {
            if let Some(previous) = by_title.insert(title.clone(), code.clone()) {
                if &previous != code {
                    tracing::debug!(title = %title, previous = %previous, code = %code, "duplicate job title; last code wins");
                }
            }
        }

        TitleLookup {
            entries,
            by_title,
            meta,
        }
    }

    pub fn meta(&self) -> &MetaIndex {
        &self.meta
    }

    /// Number of distinct lowercased titles.
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }

    /// Code for an exact (case-insensitive) title.
    pub fn code_for_title(&self, title: &str) -> Option<&str> {
        self.by_title.get(&title.to_lowercase()).map(String::as_str)
    }

    /// Look up a job title. With `similarity`, also report every title that
    /// contains the query.
    pub fn lookup(&self, description: &str, similarity: bool) -> LookupResult {
        let description = description.to_lowercase();

        let code = self.by_title.get(&description).cloned();
        let (code_meta, code_major_group, code_major_group_meta) = match code.as_deref() {
            Some(code) => {
                let major = major_group_of(code);
                let major_meta = major
                    .as_deref()
                    .and_then(|m| self.meta.get_by_code(m))
                    .cloned();
                (self.meta.get_by_code(code).cloned(), major, major_meta)
            }
            None => (None, None, None),
        };

        let potential_matches = similarity.then(|| self.potential_matches(&description));

        LookupResult {
            description,
            code,
            code_meta,
            code_major_group,
            code_major_group_meta,
            potential_matches,
        }
    }

    fn potential_matches(&self, query: &str) -> PotentialMatches {
        let mut rows = 0usize;
        let mut descriptions = Vec::new();
        let mut seen_descriptions = HashSet::new();
        let mut codes = Vec::new();
        let mut seen_codes = HashSet::new();

        for (title, code) in &self.entries {
            if !title.contains(query) {
                continue;
            }
            rows += 1;
            if seen_descriptions.insert(title.as_str()) {
                descriptions.push(title.clone());
            }
            if seen_codes.insert(code.as_str()) {
                codes.push(code.clone());
            }
        }

        let mut seen_majors = HashSet::new();
        let major_groups: Vec<MajorGroupMeta> = codes
            .iter()
            .filter_map(|code| major_group_of(code))
            .filter(|major| seen_majors.insert(major.clone()))
            .map(|major| MajorGroupMeta {
                meta: self.meta.get_by_code(&major).cloned(),
                code: major,
            })
            .collect();

        PotentialMatches {
            descriptions_count: rows,
            descriptions,
            codes_count: codes.len(),
            codes,
            major_groups_count: major_groups.len(),
            major_groups,
        }
    }

    /// Major group for a code. Both fields are `None` when the code itself has
    /// no metadata.
    pub fn lookup_code_major_group(&self, code: &str) -> MajorGroupResult {
        if self.meta.get_by_code(code).is_none() {
            return MajorGroupResult {
                code_major_group: None,
                code_major_group_meta: None,
            };
        }
        let major = major_group_of(code);
        let major_meta = major
            .as_deref()
            .and_then(|m| self.meta.get_by_code(m))
            .cloned();
        MajorGroupResult {
            code_major_group: major,
            code_major_group_meta: major_meta,
        }
    }

    /// Distinct Major groups across `candidates`, in first-seen order.
    /// Candidates whose code is unknown are skipped.
    pub fn unique_major_groups(&self, candidates: &[SocCandidate]) -> Vec<MajorGroupResult> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for candidate in candidates {
            let result = self.lookup_code_major_group(&candidate.soc_code);
            let Some(major) = result.code_major_group.clone() else {
                continue;
            };
            if seen.insert(major) {
                out.push(result);
            }
        }
        out
    }
}
