//! Multimedia link records

use serde::{Deserialize, Serialize};

use core_kernel::{MediaLinkId, Repository, TreeId};

use crate::entity::{DomainEntity, EntityKind, OwnerRef};
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// A link to an external media object (photo, scan, recording).
///
/// Only the link is stored; the media payload itself lives outside this
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct MultimediaLink {
    pub id: MediaLinkId,
    pub tree_id: TreeId,
    /// Owning record, set when the link is persisted through a cascade
    pub owner: Option<OwnerRef>,
    /// Path or URL of the media object
    #[validate(length(min = 1, max = 1000))]
    pub file: String,
    /// Media format hint, e.g. "jpeg"
    pub format: Option<String>,
    pub title: Option<String>,
}

impl MultimediaLink {
    /// Creates an unsaved media link in a tree scope
    pub fn new(tree_id: TreeId, file: impl Into<String>) -> Self {
        Self {
            id: MediaLinkId::default(),
            tree_id,
            owner: None,
            file: file.into(),
            format: None,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl DomainEntity for MultimediaLink {
    type Key = MediaLinkId;

    const KIND: EntityKind = EntityKind::Media;

    fn key(&self) -> MediaLinkId {
        self.id
    }

    fn set_key(&mut self, key: MediaLinkId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.media()
    }

    fn validate(&self) -> ValidationResult {
        ValidationResult::from_validator(validator::Validate::validate(self))
    }
}
