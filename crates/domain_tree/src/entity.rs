//! Common entity contracts
//!
//! Shared record capabilities are expressed as trait composition rather
//! than a base-entity hierarchy: every persisted record implements
//! [`DomainEntity`], records that own notes and media add
//! [`OwnedRecords`], and the two aggregate roots (individual, family) add
//! [`AncestorEntity`] on top.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use core_kernel::{EntityKey, Repository, TreeId};

use crate::citation::Citation;
use crate::fact::Fact;
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// Discriminator for the persisted record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Tree,
    Individual,
    Family,
    Note,
    Citation,
    Fact,
    Media,
    Source,
    Repository,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Tree => "tree",
            EntityKind::Individual => "individual",
            EntityKind::Family => "family",
            EntityKind::Note => "note",
            EntityKind::Citation => "citation",
            EntityKind::Fact => "fact",
            EntityKind::Media => "media",
            EntityKind::Source => "source",
            EntityKind::Repository => "repository",
        };
        f.write_str(name)
    }
}

/// Reference from an owned record back to its owning record.
///
/// Set during cascade persistence; a record detached from any owner (for
/// example a freshly built note that has not been added yet) has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
    pub kind: EntityKind,
    pub id: Uuid,
}

impl OwnerRef {
    pub fn new(kind: EntityKind, id: Uuid) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Contract every persisted record implements.
///
/// A record is identified by a typed key (nil until first persisted) and
/// scoped to one tree. `repository` resolves the record type's own store
/// from a unit of work, which is what lets a single generic service serve
/// every entity type.
pub trait DomainEntity: Clone + Send + Sync + 'static {
    type Key: EntityKey;

    const KIND: EntityKind;

    /// The record's key; nil when not yet persisted
    fn key(&self) -> Self::Key;

    /// Assigns the record's key (used when a nil key is replaced on add)
    fn set_key(&mut self, key: Self::Key);

    /// The tree scope this record belongs to
    fn tree_id(&self) -> TreeId;

    /// Resolves this record type's repository from a unit of work
    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self>
    where
        Self: Sized;

    /// Validates the record before a write
    fn validate(&self) -> ValidationResult {
        ValidationResult::ok()
    }

    /// Owner reference pointing at this record
    fn as_owner(&self) -> OwnerRef {
        OwnerRef::new(Self::KIND, self.key().uuid())
    }
}

/// Mutable access to the note and media collections a record owns.
pub trait OwnedRecords {
    fn notes_mut(&mut self) -> &mut Vec<Note>;
    fn media_mut(&mut self) -> &mut Vec<MultimediaLink>;
}

/// The aggregate roots: records that own citations and facts as well.
pub trait AncestorEntity: DomainEntity + OwnedRecords {
    fn citations_mut(&mut self) -> &mut Vec<Citation>;
    fn facts_mut(&mut self) -> &mut Vec<Fact>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Individual.to_string(), "individual");
        assert_eq!(EntityKind::Repository.to_string(), "repository");
    }

    #[test]
    fn test_owner_ref_display() {
        let id = Uuid::nil();
        let owner = OwnerRef::new(EntityKind::Family, id);
        assert_eq!(owner.to_string(), format!("family {id}"));
    }

    #[test]
    fn test_entity_kind_serde_uses_snake_case() {
        let json = serde_json::to_string(&EntityKind::Source).unwrap();
        assert_eq!(json, "\"source\"");
    }
}
