//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around UUIDs provides type safety and prevents
//! accidental mixing of different identifier types. Keys start out nil for
//! records that have not been persisted yet; the service layer assigns a
//! generated key on first add.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

/// Common contract for entity keys.
///
/// Implemented by every identifier produced by [`define_id!`]. The nil key
/// marks an entity that has not been stored yet.
pub trait EntityKey:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Generates a fresh, time-ordered key
    fn generate() -> Self;

    /// Returns the nil (unassigned) key
    fn nil() -> Self;

    /// Returns true if this key has not been assigned
    fn is_nil(&self) -> bool;

    /// Returns the underlying UUID value
    fn uuid(&self) -> Uuid;
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl $crate::identifiers::EntityKey for $name {
            fn generate() -> Self {
                Self::new_v7()
            }

            fn nil() -> Self {
                Self(Uuid::nil())
            }

            fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Uuid::nil())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Scope identifier
define_id!(TreeId, "TREE");

// Person and relationship identifiers
define_id!(IndividualId, "INDI");
define_id!(FamilyId, "FAM");

// Evidence identifiers
define_id!(SourceId, "SOUR");
define_id!(RepositoryId, "REPO");
define_id!(CitationId, "CITE");

// Record identifiers
define_id!(NoteId, "NOTE");
define_id!(FactId, "FACT");
define_id!(MediaLinkId, "OBJE");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_id_display() {
        let id = IndividualId::new();
        let display = id.to_string();
        assert!(display.starts_with("INDI-"));
    }

    #[test]
    fn test_id_parsing() {
        let original = IndividualId::new();
        let parsed: IndividualId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_id_parsing_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: TreeId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed, TreeId::from_uuid(uuid));
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let family_id = FamilyId::from(uuid);
        let back: Uuid = family_id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_default_is_nil() {
        let id = NoteId::default();
        assert!(id.is_nil());
        assert_eq!(id, NoteId::nil());
    }

    #[test]
    fn test_generated_key_is_not_nil() {
        let id = FactId::generate();
        assert!(!id.is_nil());
    }
}
