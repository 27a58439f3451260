//! Individual service
//!
//! CRUD facade over the individual store plus the relationship read path.
//! Relationship lookups fetch the tree scope once and resolve every link
//! against that in-memory set; nothing is re-queried per individual.

use std::sync::Arc;

use core_kernel::{EntityKey, IndividualId, PagedList, Repository, TreeId};

use crate::error::ServiceError;
use crate::family::Family;
use crate::individual::{Individual, LinkedIndividual};
use crate::ports::UnitOfWork;
use crate::services::cascade::AncestorCascade;
use crate::services::entity_service::EntityService;
use crate::services::relationship;
use crate::settings::LinkingSettings;

/// Facade over the individuals store.
pub struct IndividualService {
    entities: EntityService<Individual>,
    settings: LinkingSettings,
}

impl IndividualService {
    /// Creates a service over a unit of work with the given linking settings
    pub fn new(uow: Arc<dyn UnitOfWork>, settings: LinkingSettings) -> Self {
        Self {
            entities: EntityService::new(uow, Arc::new(AncestorCascade)),
            settings,
        }
    }

    /// Adds an individual, cascading owned records where the store needs it
    pub fn add(&self, individual: &mut Individual) -> Result<(), ServiceError> {
        self.entities.add(individual)
    }

    /// Updates an individual
    pub fn update(&self, individual: &Individual) -> Result<(), ServiceError> {
        self.entities.update(individual)
    }

    /// Deletes an individual, effective immediately
    pub fn delete(&self, individual: &Individual) -> Result<(), ServiceError> {
        self.entities.delete(individual)
    }

    /// Retrieves a single individual
    pub fn get(
        &self,
        id: IndividualId,
        tree_id: TreeId,
    ) -> Result<Option<Individual>, ServiceError> {
        self.entities.get(id, tree_id)
    }

    /// Retrieves all individuals in a tree
    pub fn get_all(&self, tree_id: TreeId) -> Result<Vec<Individual>, ServiceError> {
        self.entities.get_all(tree_id)
    }

    /// Retrieves the individuals matching a predicate
    pub fn get_where(
        &self,
        tree_id: TreeId,
        predicate: impl Fn(&Individual) -> bool,
    ) -> Result<Vec<Individual>, ServiceError> {
        self.entities.get_where(tree_id, predicate)
    }

    /// Retrieves one page of the individuals matching a predicate
    pub fn get_page(
        &self,
        tree_id: TreeId,
        predicate: impl Fn(&Individual) -> bool,
        page_index: usize,
        page_size: usize,
    ) -> Result<PagedList<Individual>, ServiceError> {
        self.entities
            .get_page(tree_id, predicate, page_index, page_size)
    }

    /// Retrieves one individual with relationships resolved per the
    /// service's linking settings.
    pub fn get_linked(
        &self,
        id: IndividualId,
        tree_id: TreeId,
    ) -> Result<Option<LinkedIndividual>, ServiceError> {
        if id.is_nil() {
            return Err(ServiceError::invalid_argument("record id is required"));
        }

        let scope = self.get_all(tree_id)?;
        let Some(individual) = scope.iter().find(|candidate| candidate.id == id) else {
            return Ok(None);
        };

        let families = self.families_if_needed(tree_id)?;
        Ok(Some(relationship::link_individual(
            individual,
            &scope,
            &families,
            &self.settings,
        )))
    }

    /// Retrieves every individual in a tree with relationships resolved.
    ///
    /// The scope and family sets are fetched once and shared across the
    /// whole pass.
    pub fn get_all_linked(&self, tree_id: TreeId) -> Result<Vec<LinkedIndividual>, ServiceError> {
        let scope = self.get_all(tree_id)?;
        let families = self.families_if_needed(tree_id)?;

        Ok(scope
            .iter()
            .map(|individual| {
                relationship::link_individual(individual, &scope, &families, &self.settings)
            })
            .collect())
    }

    /// All individuals recording `parent_id` as father or mother
    pub fn get_children(
        &self,
        parent_id: IndividualId,
        tree_id: TreeId,
    ) -> Result<Vec<Individual>, ServiceError> {
        if parent_id.is_nil() {
            return Err(ServiceError::invalid_argument("parent id is required"));
        }

        let scope = self.get_all(tree_id)?;
        Ok(relationship::children_of(parent_id, &scope)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Children of a couple, honouring unrecorded partners
    pub fn get_children_of_couple(
        &self,
        father_id: Option<IndividualId>,
        mother_id: Option<IndividualId>,
        tree_id: TreeId,
    ) -> Result<Vec<Individual>, ServiceError> {
        let scope = self.get_all(tree_id)?;
        Ok(relationship::children_of_couple(father_id, mother_id, &scope)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Spouses of an individual, resolved through the family records
    pub fn get_spouses(
        &self,
        individual_id: IndividualId,
        tree_id: TreeId,
    ) -> Result<Vec<Individual>, ServiceError> {
        if individual_id.is_nil() {
            return Err(ServiceError::invalid_argument("individual id is required"));
        }

        let scope = self.get_all(tree_id)?;
        let families = self.load_families(tree_id)?;
        Ok(relationship::spouses_of(individual_id, &scope, &families)
            .into_iter()
            .cloned()
            .collect())
    }

    fn families_if_needed(&self, tree_id: TreeId) -> Result<Vec<Family>, ServiceError> {
        if self.settings.include_spouses {
            self.load_families(tree_id)
        } else {
            Ok(Vec::new())
        }
    }

    fn load_families(&self, tree_id: TreeId) -> Result<Vec<Family>, ServiceError> {
        Ok(self.entities.unit_of_work().families().get(tree_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MemoryUnitOfWork;
    use uuid::Uuid;

    fn id(n: u128) -> IndividualId {
        IndividualId::from_uuid(Uuid::from_u128(n))
    }

    fn service(uow: &Arc<MemoryUnitOfWork>) -> IndividualService {
        IndividualService::new(uow.clone(), LinkingSettings::all())
    }

    fn seed_family_scope(uow: &Arc<MemoryUnitOfWork>) -> TreeId {
        let tree_id = TreeId::new();
        let service = service(uow);
        for (n, name) in [(1, "Lars"), (2, "Ingrid"), (3, "Erik"), (4, "Astrid")] {
            let mut person = Individual::new(tree_id, name, "Berg");
            person.id = id(n);
            if n > 2 {
                person.father_id = Some(id(1));
                person.mother_id = Some(id(2));
            }
            service.add(&mut person).unwrap();
        }
        uow.families()
            .add(&{
                let mut family = Family::new(tree_id).with_husband(id(1)).with_wife(id(2));
                family.id = core_kernel::FamilyId::generate();
                family
            })
            .unwrap();
        tree_id
    }

    #[test]
    fn test_get_children_of_parent() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let tree_id = seed_family_scope(&uow);

        let children = service(&uow).get_children(id(1), tree_id).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|child| child.has_parent(id(1))));
    }

    #[test]
    fn test_get_spouses() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let tree_id = seed_family_scope(&uow);

        let spouses = service(&uow).get_spouses(id(1), tree_id).unwrap();
        assert_eq!(spouses.len(), 1);
        assert_eq!(spouses[0].id, id(2));

        // Erik is in no family record
        assert!(service(&uow).get_spouses(id(3), tree_id).unwrap().is_empty());
    }

    #[test]
    fn test_get_children_of_couple() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let tree_id = seed_family_scope(&uow);
        let service = service(&uow);

        let both = service
            .get_children_of_couple(Some(id(1)), Some(id(2)), tree_id)
            .unwrap();
        assert_eq!(both.len(), 2);

        // No child records Lars alone
        let father_only = service
            .get_children_of_couple(Some(id(1)), None, tree_id)
            .unwrap();
        assert!(father_only.is_empty());

        let neither = service
            .get_children_of_couple(None, None, tree_id)
            .unwrap();
        assert!(neither.is_empty());
    }

    #[test]
    fn test_get_linked_respects_settings() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let tree_id = seed_family_scope(&uow);

        let no_spouses = IndividualService::new(
            uow.clone(),
            LinkingSettings {
                include_parents: true,
                include_children: true,
                include_spouses: false,
            },
        );

        let linked = no_spouses.get_linked(id(1), tree_id).unwrap().unwrap();
        assert_eq!(linked.children.len(), 2);
        assert!(linked.spouses.is_empty());
    }

    #[test]
    fn test_get_linked_missing_individual_is_none() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let tree_id = seed_family_scope(&uow);

        let linked = service(&uow).get_linked(id(999), tree_id).unwrap();
        assert!(linked.is_none());
    }

    #[test]
    fn test_get_all_linked_links_everyone_in_one_pass() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let tree_id = seed_family_scope(&uow);

        let linked = service(&uow).get_all_linked(tree_id).unwrap();
        assert_eq!(linked.len(), 4);

        let erik = linked
            .iter()
            .find(|entry| entry.individual.id == id(3))
            .unwrap();
        assert_eq!(erik.father.as_ref().unwrap().id, id(1));
        assert_eq!(erik.mother.as_ref().unwrap().id, id(2));
    }

    #[test]
    fn test_nil_arguments_are_rejected() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let service = service(&uow);

        assert!(service
            .get_children(IndividualId::nil(), TreeId::new())
            .unwrap_err()
            .is_argument_error());
        assert!(service
            .get_spouses(IndividualId::nil(), TreeId::new())
            .unwrap_err()
            .is_argument_error());
        assert!(service
            .get_linked(id(1), TreeId::nil())
            .unwrap_err()
            .is_argument_error());
    }
}
