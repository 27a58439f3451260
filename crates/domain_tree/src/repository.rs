//! Source repository records
//!
//! A genealogy "repository" is the archive, library or website holding
//! source material. The record type is named [`SourceRepository`] so it
//! cannot be confused with the persistence port
//! [`core_kernel::Repository`].

use serde::{Deserialize, Serialize};

use core_kernel::{Repository, RepositoryId, TreeId};

use crate::entity::{DomainEntity, EntityKind, OwnedRecords, OwnerRef};
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// An archive that holds sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct SourceRepository {
    pub id: RepositoryId,
    pub tree_id: TreeId,
    /// Owning record, set when the repository record is persisted through a cascade
    pub owner: Option<OwnerRef>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    pub notes: Vec<Note>,
    pub media: Vec<MultimediaLink>,
}

impl SourceRepository {
    /// Creates an unsaved repository record in a tree scope
    pub fn new(tree_id: TreeId, name: impl Into<String>) -> Self {
        Self {
            id: RepositoryId::default(),
            tree_id,
            owner: None,
            name: name.into(),
            address: None,
            notes: Vec::new(),
            media: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl DomainEntity for SourceRepository {
    type Key = RepositoryId;

    const KIND: EntityKind = EntityKind::Repository;

    fn key(&self) -> RepositoryId {
        self.id
    }

    fn set_key(&mut self, key: RepositoryId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.source_repositories()
    }

    fn validate(&self) -> ValidationResult {
        ValidationResult::from_validator(validator::Validate::validate(self))
    }
}

impl OwnedRecords for SourceRepository {
    fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    fn media_mut(&mut self) -> &mut Vec<MultimediaLink> {
        &mut self.media
    }
}
