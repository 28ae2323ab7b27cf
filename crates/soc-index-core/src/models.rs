//! Typed rows of the two source tables.
//!
//! The structure table marks unused cells with the literal `<blank>`. That
//! sentinel (and empty cells) is decoded to `None` here, at deserialization
//! time, so the rest of the crate never compares against it.

use serde::{Deserialize, Deserializer};

/// Sentinel the structure table uses for empty cells.
pub const BLANK: &str = "<blank>";

/// One row of the SOC structure table.
///
/// Exactly one of the four code columns is expected to be present; that is
/// checked by [`MetaRecord::from_row`](crate::meta::MetaRecord::from_row).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StructureRow {
    #[serde(rename = "soc2020_major_group", default, deserialize_with = "blank_as_none")]
    pub major_group: Option<String>,
    #[serde(rename = "soc2020_sub-major_group", default, deserialize_with = "blank_as_none")]
    pub sub_major_group: Option<String>,
    #[serde(rename = "soc2020_minor_group", default, deserialize_with = "blank_as_none")]
    pub minor_group: Option<String>,
    #[serde(rename = "soc_2020_unit_group", default, deserialize_with = "blank_as_none")]
    pub unit_group: Option<String>,
    #[serde(
        rename = "soc2020_group_title",
        alias = "group_title",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub group_title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub group_description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub qualifications: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub tasks: Option<String>,
}

/// One row of the (cleaned) SOC coding index: a job title and its Unit code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexRow {
    pub code: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub title: Option<String>,
}

impl IndexRow {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: Some(title.into()),
        }
    }
}

/// Normalize a raw cell: trim it, and treat empty or `<blank>` as absent.
pub fn clean_cell(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() || trimmed == BLANK {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(clean_cell(raw))
}
