//! Fact (life event) records

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{FactId, Repository, TreeId};

use crate::citation::Citation;
use crate::entity::{DomainEntity, EntityKind, OwnedRecords, OwnerRef};
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// The kind of life event a fact records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactType {
    Birth,
    Baptism,
    Death,
    Burial,
    Marriage,
    Divorce,
    Occupation,
    Residence,
    Census,
    Immigration,
    Other,
}

impl FactType {
    /// Returns true for the events that bound a lifespan
    pub fn is_vital(&self) -> bool {
        matches!(self, FactType::Birth | FactType::Death)
    }
}

impl fmt::Display for FactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FactType::Birth => "birth",
            FactType::Baptism => "baptism",
            FactType::Death => "death",
            FactType::Burial => "burial",
            FactType::Marriage => "marriage",
            FactType::Divorce => "divorce",
            FactType::Occupation => "occupation",
            FactType::Residence => "residence",
            FactType::Census => "census",
            FactType::Immigration => "immigration",
            FactType::Other => "other",
        };
        f.write_str(name)
    }
}

/// A dated, placed statement about an individual or family.
///
/// Dates are kept as entered (source records rarely carry a machine-exact
/// date), so the field is free text rather than a calendar type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct Fact {
    pub id: FactId,
    pub tree_id: TreeId,
    /// Owning record, set when the fact is persisted through a cascade
    pub owner: Option<OwnerRef>,
    pub fact_type: FactType,
    #[validate(length(max = 100))]
    pub date: Option<String>,
    #[validate(length(max = 200))]
    pub place: Option<String>,
    pub citations: Vec<Citation>,
    pub notes: Vec<Note>,
    pub media: Vec<MultimediaLink>,
}

impl Fact {
    /// Creates an unsaved fact in a tree scope
    pub fn new(tree_id: TreeId, fact_type: FactType) -> Self {
        Self {
            id: FactId::default(),
            tree_id,
            owner: None,
            fact_type,
            date: None,
            place: None,
            citations: Vec::new(),
            notes: Vec::new(),
            media: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Mutable access to the fact's own citations (used during cascade)
    pub fn citations_mut(&mut self) -> &mut Vec<Citation> {
        &mut self.citations
    }
}

impl DomainEntity for Fact {
    type Key = FactId;

    const KIND: EntityKind = EntityKind::Fact;

    fn key(&self) -> FactId {
        self.id
    }

    fn set_key(&mut self, key: FactId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.facts()
    }

    fn validate(&self) -> ValidationResult {
        ValidationResult::from_validator(validator::Validate::validate(self))
    }
}

impl OwnedRecords for Fact {
    fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    fn media_mut(&mut self) -> &mut Vec<MultimediaLink> {
        &mut self.media
    }
}
