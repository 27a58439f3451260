//! Free-text note records

use serde::{Deserialize, Serialize};

use core_kernel::{NoteId, Repository, TreeId};

use crate::entity::{DomainEntity, EntityKind, OwnerRef};
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// A free-text annotation attached to any other record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct Note {
    pub id: NoteId,
    pub tree_id: TreeId,
    /// Owning record, set when the note is persisted through a cascade
    pub owner: Option<OwnerRef>,
    #[validate(length(min = 1, max = 4000))]
    pub text: String,
}

impl Note {
    /// Creates an unsaved note in a tree scope
    pub fn new(tree_id: TreeId, text: impl Into<String>) -> Self {
        Self {
            id: NoteId::default(),
            tree_id,
            owner: None,
            text: text.into(),
        }
    }
}

impl DomainEntity for Note {
    type Key = NoteId;

    const KIND: EntityKind = EntityKind::Note;

    fn key(&self) -> NoteId {
        self.id
    }

    fn set_key(&mut self, key: NoteId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.notes()
    }

    fn validate(&self) -> ValidationResult {
        ValidationResult::from_validator(validator::Validate::validate(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_is_unsaved() {
        use core_kernel::EntityKey;

        let note = Note::new(TreeId::new(), "Born at the family farm.");
        assert!(note.id.is_nil());
        assert!(note.owner.is_none());
    }

    #[test]
    fn test_empty_text_fails_validation() {
        let note = Note::new(TreeId::new(), "");
        assert!(!note.validate().is_valid());
    }
}
