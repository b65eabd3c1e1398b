//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (ActorName, ItemName)
const MAX_NAME_LENGTH: usize = 200;

fn validated(kind: &str, name: String) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} name cannot be empty", kind)));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} name cannot exceed {} characters",
            kind, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// ActorName
// ============================================================================

/// A validated actor name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorName(String);

impl ActorName {
    /// Create a new validated actor name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated("Actor", name.into()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ActorName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ActorName> for String {
    fn from(name: ActorName) -> String {
        name.0
    }
}

// ============================================================================
// ItemName
// ============================================================================

/// A validated item name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or too long
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated("Item", name.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod actor_name {
        use super::*;

        #[test]
        fn valid_name_is_trimmed() {
            let name = ActorName::new("  Mina the Minstrel ").unwrap();
            assert_eq!(name.as_str(), "Mina the Minstrel");
        }

        #[test]
        fn empty_name_is_rejected() {
            let result = ActorName::new("   ");
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }
    }

    mod item_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = ItemName::new("Traveler's Cloak").unwrap();
            assert_eq!(name.to_string(), "Traveler's Cloak");
        }

        #[test]
        fn empty_name_is_rejected() {
            let result = ItemName::new("");
            assert!(result.is_err());
        }

        #[test]
        fn overlong_name_is_rejected() {
            let result = ItemName::new("x".repeat(MAX_NAME_LENGTH + 1));
            assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("200")));
        }

        #[test]
        fn deserialization_validates() {
            let result: Result<ItemName, _> = serde_json::from_str("\"\"");
            assert!(result.is_err());

            let name: ItemName = serde_json::from_str("\" Lantern \"").unwrap();
            assert_eq!(name.as_str(), "Lantern");
        }
    }
}
