//! Tree (scope root) records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{FamilyId, IndividualId, Repository, TreeId};

use crate::entity::{DomainEntity, EntityKind};
use crate::family::LinkedFamily;
use crate::individual::LinkedIndividual;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// The root scope record.
///
/// Every other record carries the id of the tree it belongs to; the tree
/// itself is its own scope, so its key doubles as its `tree_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct Tree {
    pub id: TreeId,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tree {
    /// Creates an unsaved tree
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TreeId::default(),
            name: name.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Bumps the updated stamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl DomainEntity for Tree {
    type Key = TreeId;

    const KIND: EntityKind = EntityKind::Tree;

    fn key(&self) -> TreeId {
        self.id
    }

    fn set_key(&mut self, key: TreeId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.trees()
    }

    fn validate(&self) -> ValidationResult {
        ValidationResult::from_validator(validator::Validate::validate(self))
    }
}

/// A fully linked projection of one tree: every individual and family in
/// scope with relationships resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeGraph {
    pub tree: Tree,
    pub individuals: Vec<LinkedIndividual>,
    pub families: Vec<LinkedFamily>,
}

impl TreeGraph {
    /// Looks up a linked individual by key
    pub fn individual(&self, id: IndividualId) -> Option<&LinkedIndividual> {
        self.individuals.iter().find(|i| i.individual.id == id)
    }

    /// Looks up a linked family by key
    pub fn family(&self, id: FamilyId) -> Option<&LinkedFamily> {
        self.families.iter().find(|f| f.family.id == id)
    }
}
