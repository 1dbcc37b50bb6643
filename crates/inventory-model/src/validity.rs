//! Ternary validity and confidence markers.
//!
//! The clean table carries these as plain strings. An empty string means the
//! input was absent, which is distinct from an explicit invalid value.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validity {
    #[serde(rename = "true")]
    Valid,
    #[serde(rename = "false")]
    Invalid,
    /// Input absent; nothing to judge.
    #[default]
    #[serde(rename = "")]
    NotApplicable,
}

impl Validity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "true",
            Self::Invalid => "false",
            Self::NotApplicable => "",
        }
    }

    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// Parse the string form written to the clean table.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "true" => Some(Self::Valid),
            "false" => Some(Self::Invalid),
            "" => Some(Self::NotApplicable),
            _ => None,
        }
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a device type can be trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Given explicitly in the source row.
    High,
    /// Inferred from hostname or notes hints.
    Medium,
    #[default]
    #[serde(rename = "")]
    None,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::None => "",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_strings_are_ternary() {
        assert_eq!(Validity::Valid.as_str(), "true");
        assert_eq!(Validity::Invalid.as_str(), "false");
        assert_eq!(Validity::NotApplicable.as_str(), "");
        assert_eq!(Validity::default(), Validity::NotApplicable);
    }

    #[test]
    fn validity_parse_roundtrips_table_values() {
        for value in [Validity::Valid, Validity::Invalid, Validity::NotApplicable] {
            assert_eq!(Validity::parse(value.as_str()), Some(value));
        }
        assert_eq!(Validity::parse("TRUE"), None);
    }

    #[test]
    fn confidence_strings() {
        assert_eq!(Confidence::High.to_string(), "high");
        assert_eq!(Confidence::Medium.to_string(), "medium");
        assert_eq!(Confidence::None.to_string(), "");
    }
}
