//! Individual (person) records

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{IndividualId, Repository, TreeId};

use crate::citation::Citation;
use crate::entity::{AncestorEntity, DomainEntity, EntityKind, OwnedRecords, OwnerRef};
use crate::fact::Fact;
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// Recorded sex of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A person in a tree.
///
/// `father_id` and `mother_id` are plain back-references; the resolved
/// father, mother, children and spouses are never stored on the record.
/// They are computed on read into a [`LinkedIndividual`], which keeps the
/// persisted model free of mutable back-pointers and reference cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct Individual {
    pub id: IndividualId,
    pub tree_id: TreeId,
    #[validate(length(max = 120))]
    pub first_name: String,
    #[validate(length(max = 120))]
    pub last_name: String,
    pub sex: Sex,
    pub father_id: Option<IndividualId>,
    pub mother_id: Option<IndividualId>,
    pub notes: Vec<Note>,
    pub media: Vec<MultimediaLink>,
    pub citations: Vec<Citation>,
    pub facts: Vec<Fact>,
}

impl Individual {
    /// Creates an unsaved individual in a tree scope
    pub fn new(
        tree_id: TreeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: IndividualId::default(),
            tree_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            sex: Sex::Unknown,
            father_id: None,
            mother_id: None,
            notes: Vec::new(),
            media: Vec::new(),
            citations: Vec::new(),
            facts: Vec::new(),
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_father(mut self, father_id: IndividualId) -> Self {
        self.father_id = Some(father_id);
        self
    }

    pub fn with_mother(mut self, mother_id: IndividualId) -> Self {
        self.mother_id = Some(mother_id);
        self
    }

    /// Display name: "First Last", trimmed when a part is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns true if `parent_id` is recorded as this individual's father or mother
    pub fn has_parent(&self, parent_id: IndividualId) -> bool {
        self.father_id == Some(parent_id) || self.mother_id == Some(parent_id)
    }
}

impl DomainEntity for Individual {
    type Key = IndividualId;

    const KIND: EntityKind = EntityKind::Individual;

    fn key(&self) -> IndividualId {
        self.id
    }

    fn set_key(&mut self, key: IndividualId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.individuals()
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::from_validator(validator::Validate::validate(self));
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            result.add_error("individual requires a first or last name");
        }
        result
    }
}

impl OwnedRecords for Individual {
    fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    fn media_mut(&mut self) -> &mut Vec<MultimediaLink> {
        &mut self.media
    }
}

impl AncestorEntity for Individual {
    fn citations_mut(&mut self) -> &mut Vec<Citation> {
        &mut self.citations
    }

    fn facts_mut(&mut self) -> &mut Vec<Fact> {
        &mut self.facts
    }
}

/// Read-time projection of an individual with resolved relationships.
///
/// Which of the relationship fields are populated depends on the
/// [`LinkingSettings`](crate::settings::LinkingSettings) the lookup ran
/// with; the rest stay empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedIndividual {
    pub individual: Individual,
    pub father: Option<Individual>,
    pub mother: Option<Individual>,
    pub children: Vec<Individual>,
    pub spouses: Vec<Individual>,
}

impl LinkedIndividual {
    /// Wraps an individual with no relationships resolved
    pub fn unlinked(individual: Individual) -> Self {
        Self {
            individual,
            father: None,
            mother: None,
            children: Vec::new(),
            spouses: Vec::new(),
        }
    }
}
