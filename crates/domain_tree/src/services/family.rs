//! Family service
//!
//! CRUD facade over the family store plus linked reads that resolve the
//! partners and children of each union from the tree scope.

use std::sync::Arc;

use core_kernel::{EntityKey, FamilyId, PagedList, Repository, TreeId};

use crate::error::ServiceError;
use crate::family::{Family, LinkedFamily};
use crate::individual::Individual;
use crate::ports::UnitOfWork;
use crate::services::cascade::AncestorCascade;
use crate::services::entity_service::EntityService;
use crate::services::relationship;

/// Facade over the families store.
pub struct FamilyService {
    entities: EntityService<Family>,
}

impl FamilyService {
    /// Creates a service over a unit of work
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self {
            entities: EntityService::new(uow, Arc::new(AncestorCascade)),
        }
    }

    /// Adds a family, cascading owned records where the store needs it
    pub fn add(&self, family: &mut Family) -> Result<(), ServiceError> {
        self.entities.add(family)
    }

    /// Updates a family
    pub fn update(&self, family: &Family) -> Result<(), ServiceError> {
        self.entities.update(family)
    }

    /// Deletes a family, effective immediately
    pub fn delete(&self, family: &Family) -> Result<(), ServiceError> {
        self.entities.delete(family)
    }

    /// Retrieves a single family
    pub fn get(&self, id: FamilyId, tree_id: TreeId) -> Result<Option<Family>, ServiceError> {
        self.entities.get(id, tree_id)
    }

    /// Retrieves all families in a tree
    pub fn get_all(&self, tree_id: TreeId) -> Result<Vec<Family>, ServiceError> {
        self.entities.get_all(tree_id)
    }

    /// Retrieves one page of the families matching a predicate
    pub fn get_page(
        &self,
        tree_id: TreeId,
        predicate: impl Fn(&Family) -> bool,
        page_index: usize,
        page_size: usize,
    ) -> Result<PagedList<Family>, ServiceError> {
        self.entities
            .get_page(tree_id, predicate, page_index, page_size)
    }

    /// All families naming the individual as a partner
    pub fn get_for_individual(
        &self,
        individual_id: core_kernel::IndividualId,
        tree_id: TreeId,
    ) -> Result<Vec<Family>, ServiceError> {
        if individual_id.is_nil() {
            return Err(ServiceError::invalid_argument("individual id is required"));
        }
        self.entities
            .get_where(tree_id, |family| family.involves(individual_id))
    }

    /// Retrieves one family with partners and children resolved
    pub fn get_linked(
        &self,
        id: FamilyId,
        tree_id: TreeId,
    ) -> Result<Option<LinkedFamily>, ServiceError> {
        let Some(family) = self.get(id, tree_id)? else {
            return Ok(None);
        };
        let scope = self.individual_scope(tree_id)?;
        Ok(Some(relationship::link_family(&family, &scope)))
    }

    /// Retrieves every family in a tree with partners and children
    /// resolved, sharing one scope fetch across the pass
    pub fn get_all_linked(&self, tree_id: TreeId) -> Result<Vec<LinkedFamily>, ServiceError> {
        let families = self.get_all(tree_id)?;
        let scope = self.individual_scope(tree_id)?;
        Ok(families
            .iter()
            .map(|family| relationship::link_family(family, &scope))
            .collect())
    }

    fn individual_scope(&self, tree_id: TreeId) -> Result<Vec<Individual>, ServiceError> {
        Ok(self.entities.unit_of_work().individuals().get(tree_id)?)
    }
}
