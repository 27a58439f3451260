//! Family (union) records

use serde::{Deserialize, Serialize};

use core_kernel::{FamilyId, IndividualId, Repository, TreeId};

use crate::citation::Citation;
use crate::entity::{AncestorEntity, DomainEntity, EntityKind, OwnedRecords};
use crate::fact::Fact;
use crate::individual::Individual;
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// A union of two individuals.
///
/// Either partner may be unrecorded. As with individuals, only the
/// back-reference ids are persisted; the resolved husband, wife and
/// children are computed on read into a [`LinkedFamily`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    pub tree_id: TreeId,
    pub husband_id: Option<IndividualId>,
    pub wife_id: Option<IndividualId>,
    pub notes: Vec<Note>,
    pub media: Vec<MultimediaLink>,
    pub citations: Vec<Citation>,
    pub facts: Vec<Fact>,
}

impl Family {
    /// Creates an unsaved family in a tree scope
    pub fn new(tree_id: TreeId) -> Self {
        Self {
            id: FamilyId::default(),
            tree_id,
            husband_id: None,
            wife_id: None,
            notes: Vec::new(),
            media: Vec::new(),
            citations: Vec::new(),
            facts: Vec::new(),
        }
    }

    pub fn with_husband(mut self, husband_id: IndividualId) -> Self {
        self.husband_id = Some(husband_id);
        self
    }

    pub fn with_wife(mut self, wife_id: IndividualId) -> Self {
        self.wife_id = Some(wife_id);
        self
    }

    /// Returns true if the individual is recorded as either partner
    pub fn involves(&self, individual_id: IndividualId) -> bool {
        self.husband_id == Some(individual_id) || self.wife_id == Some(individual_id)
    }

    /// The other partner of `individual_id` in this family, if recorded.
    ///
    /// Returns `None` when the individual is not part of this family or
    /// the opposite partner is unrecorded.
    pub fn spouse_of(&self, individual_id: IndividualId) -> Option<IndividualId> {
        if self.husband_id == Some(individual_id) {
            self.wife_id
        } else if self.wife_id == Some(individual_id) {
            self.husband_id
        } else {
            None
        }
    }
}

impl DomainEntity for Family {
    type Key = FamilyId;

    const KIND: EntityKind = EntityKind::Family;

    fn key(&self) -> FamilyId {
        self.id
    }

    fn set_key(&mut self, key: FamilyId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.families()
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if let (Some(husband), Some(wife)) = (self.husband_id, self.wife_id) {
            if husband == wife {
                result.add_error("family partners must be two different individuals");
            }
        }
        result
    }
}

impl OwnedRecords for Family {
    fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    fn media_mut(&mut self) -> &mut Vec<MultimediaLink> {
        &mut self.media
    }
}

impl AncestorEntity for Family {
    fn citations_mut(&mut self) -> &mut Vec<Citation> {
        &mut self.citations
    }

    fn facts_mut(&mut self) -> &mut Vec<Fact> {
        &mut self.facts
    }
}

/// Read-time projection of a family with resolved members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedFamily {
    pub family: Family,
    pub husband: Option<Individual>,
    pub wife: Option<Individual>,
    pub children: Vec<Individual>,
}
