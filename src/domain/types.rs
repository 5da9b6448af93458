//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, known
//! enum spellings) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Unique identifier of a lead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct LeadId(String);

impl LeadId {
    /// Trims whitespace and rejects empty identifiers.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for LeadId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for LeadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LeadId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LeadId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LeadId> for String {
    fn from(value: LeadId) -> Self {
        value.0
    }
}

/// Generates a closed enum with a fixed snake_case spelling used by serde,
/// `Display` and `FromStr` alike.
macro_rules! spelled_enum {
    ($name:ident, $doc:expr, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the canonical spelling of the variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok($name::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(other.to_string())),
                }
            }
        }
    };
}

spelled_enum!(LeadSource, "Channel through which a lead was acquired.", {
    WebForm => "web_form",
    LandingPage => "landing_page",
    Sms => "sms",
    Email => "email",
    Manual => "manual",
});

spelled_enum!(LeadStatus, "Position of a lead in the sales funnel.", {
    New => "new",
    Contacted => "contacted",
    Qualified => "qualified",
    Booked => "booked",
    Paid => "paid",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_id_trims_and_rejects_blank() {
        assert_eq!(LeadId::new("  lead-1 ").unwrap().as_str(), "lead-1");
        assert_eq!(LeadId::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(LeadId::generate(), LeadId::generate());
    }

    #[test]
    fn source_spelling_matches_serde() {
        for source in LeadSource::ALL {
            let json = serde_json::to_string(source).unwrap();
            assert_eq!(json, format!("\"{source}\""));
            assert_eq!(source.as_str().parse::<LeadSource>().unwrap(), *source);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(
            "lost".parse::<LeadStatus>(),
            Err(TypeConstraintError::InvalidValue("lost".to_string()))
        );
        assert_eq!("booked".parse::<LeadStatus>(), Ok(LeadStatus::Booked));
    }

    #[test]
    fn lead_id_deserialization_rejects_empty() {
        assert!(serde_json::from_str::<LeadId>("\"\"").is_err());
        let id: LeadId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(&*id, "abc");
    }
}
