//! SOC code validation and group-level classification.
//!
//! A SOC 2020 code is a string of 1 to 4 ASCII digits. The number of digits
//! determines where the group sits in the classification:
//!
//! | Digits | Level |
//! |--------|-------|
//! | 1 | Major |
//! | 2 | Sub-Major |
//! | 3 | Minor |
//! | 4 | Unit |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of digits in a Unit (leaf) code.
pub const UNIT_CODE_LEN: usize = 4;

/// Reasons a value is rejected as a SOC code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("SOC code must be a string")]
    NotAString,
    #[error("SOC code cannot be an empty string")]
    Empty,
    #[error("SOC code must consist of digits only: {0:?}")]
    NonDigit(String),
    #[error("SOC code length needs to be between 1 and 4 digits: {0:?}")]
    TooLong(String),
}

/// Level of a group within the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupLevel {
    Major,
    SubMajor,
    Minor,
    Unit,
}

impl GroupLevel {
    /// Level for a code of `n_digits` digits, if there is one.
    pub fn from_len(n_digits: usize) -> Option<Self> {
        match n_digits {
            1 => Some(GroupLevel::Major),
            2 => Some(GroupLevel::SubMajor),
            3 => Some(GroupLevel::Minor),
            4 => Some(GroupLevel::Unit),
            _ => None,
        }
    }

    pub fn code_len(self) -> usize {
        match self {
            GroupLevel::Major => 1,
            GroupLevel::SubMajor => 2,
            GroupLevel::Minor => 3,
            GroupLevel::Unit => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupLevel::Major => "Major",
            GroupLevel::SubMajor => "Sub-Major",
            GroupLevel::Minor => "Minor",
            GroupLevel::Unit => "Unit",
        }
    }
}

impl fmt::Display for GroupLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GroupLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A validated SOC code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SocCode(String);

impl SocCode {
    /// Validate `code` and wrap it.
    pub fn new(code: impl Into<String>) -> Result<Self, CodeError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CodeError::Empty);
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::NonDigit(code));
        }
        if code.len() > UNIT_CODE_LEN {
            return Err(CodeError::TooLong(code));
        }
        Ok(SocCode(code))
    }

    /// Validate a dynamically-typed value, e.g. a field of a JSON payload.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CodeError> {
        match value {
            serde_json::Value::String(s) => SocCode::new(s.as_str()),
            _ => Err(CodeError::NotAString),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits (1..=4).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated code.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn group_level(&self) -> GroupLevel {
        match GroupLevel::from_len(self.len()) {
            Some(level) => level,
            None => unreachable!("SocCode length is validated to 1..=4"),
        }
    }

    pub fn is_unit(&self) -> bool {
        self.len() == UNIT_CODE_LEN
    }

    /// The code one level up: all digits but the last. `None` for Major groups.
    pub fn parent(&self) -> Option<SocCode> {
        if self.len() > 1 {
            Some(SocCode(self.0[..self.len() - 1].to_string()))
        } else {
            None
        }
    }

    /// The 1-digit Major group this code belongs to.
    pub fn major_group(&self) -> SocCode {
        SocCode(self.0[..1].to_string())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for SocCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocCode::new(s)
    }
}

impl TryFrom<String> for SocCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SocCode::new(value)
    }
}

impl AsRef<str> for SocCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SocCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SocCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SocCode::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_digit_code_is_valid() {
        let code = SocCode::new("1").unwrap();
        assert_eq!(code.as_str(), "1");
        assert_eq!(code.len(), 1);
    }

    #[test]
    fn test_group_levels() {
        let cases = [
            ("1", "Major"),
            ("12", "Sub-Major"),
            ("123", "Minor"),
            ("1234", "Unit"),
        ];
        for (code, expected) in cases {
            let level = SocCode::new(code).unwrap().group_level();
            assert_eq!(level.to_string(), expected, "code {}", code);
            assert_eq!(level.code_len(), code.len());
        }
    }

    #[test]
    fn test_empty_code_rejected() {
        assert_eq!(SocCode::new(""), Err(CodeError::Empty));
    }

    #[test]
    fn test_non_digit_code_rejected() {
        assert!(matches!(SocCode::new("1ab2"), Err(CodeError::NonDigit(_))));
        assert!(matches!(SocCode::new(" "), Err(CodeError::NonDigit(_))));
        assert!(matches!(SocCode::new("11 "), Err(CodeError::NonDigit(_))));
        assert!(matches!(SocCode::new("-1"), Err(CodeError::NonDigit(_))));
    }

    #[test]
    fn test_long_code_rejected() {
        assert!(matches!(SocCode::new("12345"), Err(CodeError::TooLong(_))));
    }

    #[test]
    fn test_from_value_requires_string() {
        assert_eq!(SocCode::from_value(&json!(1)), Err(CodeError::NotAString));
        assert_eq!(SocCode::from_value(&json!(null)), Err(CodeError::NotAString));
        assert_eq!(
            SocCode::from_value(&json!("2112")).unwrap().as_str(),
            "2112"
        );
    }

    #[test]
    fn test_parent_and_major_group() {
        let code = SocCode::new("2112").unwrap();
        assert_eq!(code.parent().unwrap().as_str(), "211");
        assert_eq!(code.major_group().as_str(), "2");
        assert!(SocCode::new("2").unwrap().parent().is_none());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: SocCode = serde_json::from_value(json!("4111")).unwrap();
        assert!(ok.is_unit());
        assert!(serde_json::from_value::<SocCode>(json!("41111")).is_err());
    }
}
