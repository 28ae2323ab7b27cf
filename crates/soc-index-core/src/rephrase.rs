//! Human-readable descriptions for Unit codes.
//!
//! [`RephraseLookup`] maps each leaf code to the aggregated text produced by
//! [`Hierarchy::all_leaf_text`], and uses it to annotate classification
//! payloads (a main `soc_code` plus a list of `soc_candidates`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::code::CodeError;
use crate::hierarchy::Hierarchy;
use crate::lookup::SocCandidate;
use crate::models::{IndexRow, StructureRow};

pub const NOT_FOUND_MESSAGE: &str = "SOC code not found";

/// Outcome of [`RephraseLookup::lookup`]. Serializes without a tag, as either
/// `{soc_code, input_description}` or `{soc_code, error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RephraseResult {
    Found {
        soc_code: String,
        input_description: String,
    },
    NotFound {
        soc_code: String,
        error: String,
    },
}

impl RephraseResult {
    pub fn soc_code(&self) -> &str {
        match self {
            RephraseResult::Found { soc_code, .. } | RephraseResult::NotFound { soc_code, .. } => {
                soc_code.as_str()
            }
        }
    }

    pub fn input_description(&self) -> Option<&str> {
        match self {
            RephraseResult::Found {
                input_description, ..
            } => Some(input_description.as_str()),
            RephraseResult::NotFound { .. } => None,
        }
    }
}

/// A classification result to be annotated with descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationPayload {
    pub soc_code: Option<String>,
    #[serde(default)]
    pub soc_description: Option<String>,
    pub soc_candidates: Vec<SocCandidate>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("payload field soc_candidates must be an array")]
    MissingCandidates,
    #[error("payload soc_code: {0}")]
    Code(#[source] CodeError),
    #[error("soc_candidates[{index}] is invalid: {reason}")]
    InvalidCandidate { index: usize, reason: String },
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Leaf code → aggregated description.
#[derive(Debug, Clone, Default)]
pub struct RephraseLookup {
    by_code: HashMap<String, String>,
}

impl RephraseLookup {
    pub fn build(structure: &[StructureRow], index: &[IndexRow]) -> Self {
        Self::from_hierarchy(&Hierarchy::load(structure, index))
    }

    /// Only leaf codes are indexed; coarser codes always miss.
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> Self {
        let by_code = hierarchy
            .all_leaf_text()
            .into_iter()
            .map(|row| (row.code, row.text))
            .collect();
        RephraseLookup { by_code }
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    pub fn description(&self, soc_code: &str) -> Option<&str> {
        self.by_code.get(soc_code).map(String::as_str)
    }

    pub fn lookup(&self, soc_code: &str) -> RephraseResult {
        match self.by_code.get(soc_code) {
            Some(text) => RephraseResult::Found {
                soc_code: soc_code.to_string(),
                input_description: text.clone(),
            },
            None => RephraseResult::NotFound {
                soc_code: soc_code.to_string(),
                error: NOT_FOUND_MESSAGE.to_string(),
            },
        }
    }

    /// Set `soc_description` on the payload and `soc_descriptive` on each
    /// candidate that resolves. Misses leave the candidate untouched.
    pub fn annotate(&self, mut payload: ClassificationPayload) -> ClassificationPayload {
        payload.soc_description = payload
            .soc_code
            .as_deref()
            .and_then(|code| self.description(code))
            .map(str::to_string);

        for candidate in &mut payload.soc_candidates {
            if let Some(text) = self.description(&candidate.soc_code) {
                candidate.soc_descriptive = Some(text.to_string());
            }
        }
        payload
    }

    /// JSON entry point for [`RephraseLookup::annotate`].
    pub fn annotate_json(&self, payload: Value) -> Result<Value, PayloadError> {
        let object = payload.as_object().ok_or(PayloadError::NotAnObject)?;

        match object.get("soc_code") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Err(PayloadError::Code(CodeError::NotAString)),
        }

        let candidates = object
            .get("soc_candidates")
            .and_then(Value::as_array)
            .ok_or(PayloadError::MissingCandidates)?;
        for (index, candidate) in candidates.iter().enumerate() {
            match candidate.get("soc_code") {
                Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(PayloadError::InvalidCandidate {
                        index,
                        reason: CodeError::NotAString.to_string(),
                    })
                }
                None => {
                    return Err(PayloadError::InvalidCandidate {
                        index,
                        reason: "missing soc_code".to_string(),
                    })
                }
            }
        }

        let typed: ClassificationPayload = serde_json::from_value(payload)?;
        Ok(serde_json::to_value(self.annotate(typed))?)
    }
}
