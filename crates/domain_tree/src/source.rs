//! Source records

use serde::{Deserialize, Serialize};

use core_kernel::{Repository, RepositoryId, SourceId, TreeId};

use crate::entity::{DomainEntity, EntityKind, OwnedRecords, OwnerRef};
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// A documentary source (register, book, certificate) that citations
/// point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct Source {
    pub id: SourceId,
    pub tree_id: TreeId,
    /// Owning record, set when the source is persisted through a cascade
    pub owner: Option<OwnerRef>,
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(max = 200))]
    pub author: Option<String>,
    #[validate(length(max = 200))]
    pub publisher: Option<String>,
    /// The archive holding this source, when known
    pub repository_id: Option<RepositoryId>,
    pub notes: Vec<Note>,
    pub media: Vec<MultimediaLink>,
}

impl Source {
    /// Creates an unsaved source in a tree scope
    pub fn new(tree_id: TreeId, title: impl Into<String>) -> Self {
        Self {
            id: SourceId::default(),
            tree_id,
            owner: None,
            title: title.into(),
            author: None,
            publisher: None,
            repository_id: None,
            notes: Vec::new(),
            media: Vec::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn held_by(mut self, repository_id: RepositoryId) -> Self {
        self.repository_id = Some(repository_id);
        self
    }
}

impl DomainEntity for Source {
    type Key = SourceId;

    const KIND: EntityKind = EntityKind::Source;

    fn key(&self) -> SourceId {
        self.id
    }

    fn set_key(&mut self, key: SourceId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.sources()
    }

    fn validate(&self) -> ValidationResult {
        ValidationResult::from_validator(validator::Validate::validate(self))
    }
}

impl OwnedRecords for Source {
    fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    fn media_mut(&mut self) -> &mut Vec<MultimediaLink> {
        &mut self.media
    }
}
