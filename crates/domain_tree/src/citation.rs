//! Source citation records

use serde::{Deserialize, Serialize};

use core_kernel::{CitationId, Repository, SourceId, TreeId};

use crate::entity::{DomainEntity, EntityKind, OwnedRecords, OwnerRef};
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::validation::ValidationResult;

/// A citation tying a statement to the source that backs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct Citation {
    pub id: CitationId,
    pub tree_id: TreeId,
    /// Owning record, set when the citation is persisted through a cascade
    pub owner: Option<OwnerRef>,
    /// The cited source, when it has been recorded
    pub source_id: Option<SourceId>,
    /// Locator within the source, e.g. a page number
    #[validate(length(max = 200))]
    pub page: Option<String>,
    /// Quoted or transcribed text
    #[validate(length(max = 4000))]
    pub text: Option<String>,
    pub notes: Vec<Note>,
    pub media: Vec<MultimediaLink>,
}

impl Citation {
    /// Creates an unsaved citation in a tree scope
    pub fn new(tree_id: TreeId) -> Self {
        Self {
            id: CitationId::default(),
            tree_id,
            owner: None,
            source_id: None,
            page: None,
            text: None,
            notes: Vec::new(),
            media: Vec::new(),
        }
    }

    pub fn with_source(mut self, source_id: SourceId) -> Self {
        self.source_id = Some(source_id);
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl DomainEntity for Citation {
    type Key = CitationId;

    const KIND: EntityKind = EntityKind::Citation;

    fn key(&self) -> CitationId {
        self.id
    }

    fn set_key(&mut self, key: CitationId) {
        self.id = key;
    }

    fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    fn repository(uow: &dyn UnitOfWork) -> &dyn Repository<Self> {
        uow.citations()
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::from_validator(validator::Validate::validate(self));
        if self.source_id.is_none() && self.text.is_none() {
            result.add_warning("citation has neither a source nor text");
        }
        result
    }
}

impl OwnedRecords for Citation {
    fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    fn media_mut(&mut self) -> &mut Vec<MultimediaLink> {
        &mut self.media
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_citation_warns_but_passes() {
        let citation = Citation::new(TreeId::new());
        let result = citation.validate();
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_sourced_citation_has_no_warning() {
        let citation = Citation::new(TreeId::new())
            .with_source(SourceId::new())
            .with_page("p. 14");
        let result = citation.validate();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }
}
