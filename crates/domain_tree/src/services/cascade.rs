//! Aggregate cascade policies
//!
//! When a store cannot persist an aggregate root together with the child
//! records it owns, the service layer writes the children through their
//! own repositories after the root. The walk is two levels deep at most
//! (root, then citations and facts, then their notes/media/citations),
//! and every child is stamped with the root's owner reference and tree
//! scope before it is written: the root owns the whole subtree, including
//! a fact's own citations.

use core_kernel::{EntityKey, FactId, Repository, TreeId};

use crate::citation::Citation;
use crate::entity::{AncestorEntity, DomainEntity, OwnedRecords, OwnerRef};
use crate::error::ServiceError;
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;

/// How an entity's owned child collections are persisted after an add
/// against a store without native aggregate support.
pub trait CascadePolicy<T>: Send + Sync {
    fn cascade_add(&self, entity: &mut T, uow: &dyn UnitOfWork) -> Result<(), ServiceError>;
}

/// Policy for leaf records that own nothing.
pub struct NoCascade;

impl<T: DomainEntity> CascadePolicy<T> for NoCascade {
    fn cascade_add(&self, _entity: &mut T, _uow: &dyn UnitOfWork) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// Policy for records that own notes and media.
pub struct EntityCascade;

impl<T: DomainEntity + OwnedRecords> CascadePolicy<T> for EntityCascade {
    fn cascade_add(&self, entity: &mut T, uow: &dyn UnitOfWork) -> Result<(), ServiceError> {
        let owner = entity.as_owner();
        let tree_id = entity.tree_id();
        add_notes(entity.notes_mut(), owner, tree_id, uow)?;
        add_media(entity.media_mut(), owner, tree_id, uow)?;
        Ok(())
    }
}

/// Policy for the aggregate roots: notes, media, citations and facts.
///
/// Facts always receive a fresh key on cascade; their citations, notes and
/// media follow, owned by the root ancestor.
pub struct AncestorCascade;

impl<T: AncestorEntity> CascadePolicy<T> for AncestorCascade {
    fn cascade_add(&self, entity: &mut T, uow: &dyn UnitOfWork) -> Result<(), ServiceError> {
        let owner = entity.as_owner();
        let tree_id = entity.tree_id();

        add_notes(entity.notes_mut(), owner, tree_id, uow)?;
        add_media(entity.media_mut(), owner, tree_id, uow)?;
        add_citations(entity.citations_mut(), owner, tree_id, uow)?;

        for fact in entity.facts_mut() {
            fact.id = FactId::generate();
            fact.owner = Some(owner);
            fact.tree_id = tree_id;
            uow.facts().add(fact)?;

            add_citations(fact.citations_mut(), owner, tree_id, uow)?;
            add_notes(fact.notes_mut(), owner, tree_id, uow)?;
            add_media(fact.media_mut(), owner, tree_id, uow)?;
        }
        Ok(())
    }
}

fn add_notes(
    notes: &mut [Note],
    owner: OwnerRef,
    tree_id: TreeId,
    uow: &dyn UnitOfWork,
) -> Result<(), ServiceError> {
    for note in notes {
        if note.id.is_nil() {
            note.id = core_kernel::NoteId::generate();
        }
        note.owner = Some(owner);
        note.tree_id = tree_id;
        uow.notes().add(note)?;
    }
    Ok(())
}

fn add_media(
    media: &mut [MultimediaLink],
    owner: OwnerRef,
    tree_id: TreeId,
    uow: &dyn UnitOfWork,
) -> Result<(), ServiceError> {
    for link in media {
        if link.id.is_nil() {
            link.id = core_kernel::MediaLinkId::generate();
        }
        link.owner = Some(owner);
        link.tree_id = tree_id;
        uow.media().add(link)?;
    }
    Ok(())
}

fn add_citations(
    citations: &mut [Citation],
    owner: OwnerRef,
    tree_id: TreeId,
    uow: &dyn UnitOfWork,
) -> Result<(), ServiceError> {
    for citation in citations {
        if citation.id.is_nil() {
            citation.id = core_kernel::CitationId::generate();
        }
        citation.owner = Some(owner);
        citation.tree_id = tree_id;
        uow.citations().add(citation)?;

        add_notes(&mut citation.notes, owner, tree_id, uow)?;
        add_media(&mut citation.media, owner, tree_id, uow)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::fact::{Fact, FactType};
    use crate::individual::Individual;
    use crate::ports::mock::MemoryUnitOfWork;
    use core_kernel::IndividualId;

    fn root_with_children(tree_id: TreeId) -> Individual {
        let mut person = Individual::new(tree_id, "Marta", "Vik");
        person.id = IndividualId::generate();
        person.notes.push(Note::new(tree_id, "Emigrated in 1902."));
        person
            .citations
            .push(Citation::new(tree_id).with_text("Ship manifest"));

        let mut birth = Fact::new(tree_id, FactType::Birth).with_date("3 MAY 1881");
        birth
            .citations
            .push(Citation::new(tree_id).with_text("Parish record"));
        birth.notes.push(Note::new(tree_id, "Date partly legible."));
        person.facts.push(birth);
        person
    }

    #[test]
    fn test_ancestor_cascade_writes_the_whole_subtree() {
        let uow = MemoryUnitOfWork::without_aggregates();
        let tree_id = TreeId::new();
        let mut person = root_with_children(tree_id);

        AncestorCascade.cascade_add(&mut person, &uow).unwrap();

        // root note + fact note
        assert_eq!(uow.note_rows().len(), 2);
        // root citation + fact citation
        assert_eq!(uow.citation_rows().len(), 2);
        assert_eq!(uow.fact_rows().len(), 1);
    }

    #[test]
    fn test_cascade_stamps_root_ownership() {
        let uow = MemoryUnitOfWork::without_aggregates();
        let tree_id = TreeId::new();
        let mut person = root_with_children(tree_id);

        AncestorCascade.cascade_add(&mut person, &uow).unwrap();

        let owner = OwnerRef::new(EntityKind::Individual, person.id.uuid());
        for note in uow.note_rows().all().unwrap() {
            assert_eq!(note.owner, Some(owner));
            assert_eq!(note.tree_id, tree_id);
        }
        // A fact's citation is owned by the individual, not the fact
        for citation in uow.citation_rows().all().unwrap() {
            assert_eq!(citation.owner, Some(owner));
        }
    }

    #[test]
    fn test_facts_get_fresh_keys() {
        let uow = MemoryUnitOfWork::without_aggregates();
        let tree_id = TreeId::new();
        let mut person = root_with_children(tree_id);
        let stale_key = FactId::generate();
        person.facts[0].id = stale_key;

        AncestorCascade.cascade_add(&mut person, &uow).unwrap();

        let stored = uow.fact_rows().all().unwrap();
        assert_ne!(stored[0].id, stale_key);
        assert!(!stored[0].id.is_nil());
    }

    #[test]
    fn test_entity_cascade_stops_at_notes_and_media() {
        let uow = MemoryUnitOfWork::without_aggregates();
        let tree_id = TreeId::new();
        let mut citation = Citation::new(tree_id).with_text("Census sheet");
        citation.id = core_kernel::CitationId::generate();
        citation.notes.push(Note::new(tree_id, "Margin damaged."));

        EntityCascade.cascade_add(&mut citation, &uow).unwrap();

        assert_eq!(uow.note_rows().len(), 1);
        assert!(uow.fact_rows().is_empty());
    }
}
