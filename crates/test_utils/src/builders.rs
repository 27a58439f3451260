//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the relevant fields; names default to
//! generated fake data, keys default to nil (unsaved).

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use core_kernel::{IndividualId, SourceId, TreeId};

use domain_tree::citation::Citation;
use domain_tree::fact::{Fact, FactType};
use domain_tree::family::Family;
use domain_tree::individual::{Individual, Sex};
use domain_tree::multimedia::MultimediaLink;
use domain_tree::note::Note;
use domain_tree::tree::Tree;

/// Builder for test individuals
pub struct IndividualBuilder {
    id: IndividualId,
    tree_id: TreeId,
    first_name: String,
    last_name: String,
    sex: Sex,
    father_id: Option<IndividualId>,
    mother_id: Option<IndividualId>,
    notes: Vec<Note>,
    citations: Vec<Citation>,
    facts: Vec<Fact>,
    media: Vec<MultimediaLink>,
}

impl IndividualBuilder {
    /// Creates a builder with generated names in the given tree
    pub fn new(tree_id: TreeId) -> Self {
        Self {
            id: IndividualId::default(),
            tree_id,
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            sex: Sex::Unknown,
            father_id: None,
            mother_id: None,
            notes: Vec::new(),
            citations: Vec::new(),
            facts: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Sets the key (marks the individual as already saved)
    pub fn with_id(mut self, id: IndividualId) -> Self {
        self.id = id;
        self
    }

    /// Sets both names
    pub fn with_names(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the recorded sex
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Sets the father back-reference
    pub fn with_father(mut self, father_id: IndividualId) -> Self {
        self.father_id = Some(father_id);
        self
    }

    /// Sets the mother back-reference
    pub fn with_mother(mut self, mother_id: IndividualId) -> Self {
        self.mother_id = Some(mother_id);
        self
    }

    /// Attaches an owned note
    pub fn with_note(mut self, text: impl Into<String>) -> Self {
        self.notes.push(Note::new(self.tree_id, text));
        self
    }

    /// Attaches an owned citation
    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.citations.push(citation);
        self
    }

    /// Attaches an owned fact
    pub fn with_fact(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }

    /// Attaches an owned media link
    pub fn with_media(mut self, file: impl Into<String>) -> Self {
        self.media.push(MultimediaLink::new(self.tree_id, file));
        self
    }

    pub fn build(self) -> Individual {
        let mut individual = Individual::new(self.tree_id, self.first_name, self.last_name);
        individual.id = self.id;
        individual.sex = self.sex;
        individual.father_id = self.father_id;
        individual.mother_id = self.mother_id;
        individual.notes = self.notes;
        individual.citations = self.citations;
        individual.facts = self.facts;
        individual.media = self.media;
        individual
    }
}

/// Builder for test families
pub struct FamilyBuilder {
    family: Family,
}

impl FamilyBuilder {
    pub fn new(tree_id: TreeId) -> Self {
        Self {
            family: Family::new(tree_id),
        }
    }

    /// Sets the key (marks the family as already saved)
    pub fn with_id(mut self, id: core_kernel::FamilyId) -> Self {
        self.family.id = id;
        self
    }

    pub fn with_husband(mut self, husband_id: IndividualId) -> Self {
        self.family.husband_id = Some(husband_id);
        self
    }

    pub fn with_wife(mut self, wife_id: IndividualId) -> Self {
        self.family.wife_id = Some(wife_id);
        self
    }

    pub fn build(self) -> Family {
        self.family
    }
}

/// Builder for test trees
pub struct TreeBuilder {
    tree: Tree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: Tree::new(format!("{} family", LastName().fake::<String>())),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.tree.name = name.into();
        self
    }

    pub fn with_id(mut self, id: TreeId) -> Self {
        self.tree.id = id;
        self
    }

    pub fn build(self) -> Tree {
        self.tree
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for test facts
pub struct FactBuilder {
    fact: Fact,
}

impl FactBuilder {
    pub fn new(tree_id: TreeId, fact_type: FactType) -> Self {
        Self {
            fact: Fact::new(tree_id, fact_type),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.fact.date = Some(date.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.fact.place = Some(place.into());
        self
    }

    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.fact.citations.push(citation);
        self
    }

    pub fn with_note(mut self, text: impl Into<String>) -> Self {
        let tree_id = self.fact.tree_id;
        self.fact.notes.push(Note::new(tree_id, text));
        self
    }

    pub fn build(self) -> Fact {
        self.fact
    }
}

/// Builder for test citations
pub struct CitationBuilder {
    citation: Citation,
}

impl CitationBuilder {
    pub fn new(tree_id: TreeId) -> Self {
        Self {
            citation: Citation::new(tree_id),
        }
    }

    pub fn with_source(mut self, source_id: SourceId) -> Self {
        self.citation.source_id = Some(source_id);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.citation.text = Some(text.into());
        self
    }

    pub fn with_note(mut self, text: impl Into<String>) -> Self {
        let tree_id = self.citation.tree_id;
        self.citation.notes.push(Note::new(tree_id, text));
        self
    }

    pub fn build(self) -> Citation {
        self.citation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_builder_defaults() {
        let person = IndividualBuilder::new(TreeId::new()).build();
        assert!(!person.first_name.is_empty());
        assert!(!person.last_name.is_empty());
        assert!(person.father_id.is_none());
    }

    #[test]
    fn test_individual_builder_with_children_records() {
        let tree_id = TreeId::new();
        let person = IndividualBuilder::new(tree_id)
            .with_names("Anna", "Larsen")
            .with_note("A note")
            .with_fact(FactBuilder::new(tree_id, FactType::Birth).build())
            .build();
        assert_eq!(person.notes.len(), 1);
        assert_eq!(person.facts.len(), 1);
    }
}
