//! Tree service
//!
//! CRUD facade over the tree catalogue plus the fully linked graph
//! projection. The graph is the one eager read in the layer: it links
//! every individual and family in a scope in a single pass and memoizes
//! the result through the cache provider. Entries are never invalidated
//! here; a projection can go stale until the hosting application evicts
//! it.

use std::sync::Arc;

use core_kernel::{CacheProvider, EntityKey, Repository, TreeId};

use crate::error::ServiceError;
use crate::ports::UnitOfWork;
use crate::services::cascade::NoCascade;
use crate::services::entity_service::EntityService;
use crate::services::relationship;
use crate::settings::LinkingSettings;
use crate::tree::{Tree, TreeGraph};

/// Cache key for a memoized tree graph
pub fn graph_cache_key(tree_id: TreeId) -> String {
    format!("tree_graph_{tree_id}")
}

/// Facade over the tree catalogue.
pub struct TreeService {
    entities: EntityService<Tree>,
    cache: Arc<dyn CacheProvider>,
}

impl TreeService {
    /// Creates a service over a unit of work and a cache provider
    pub fn new(uow: Arc<dyn UnitOfWork>, cache: Arc<dyn CacheProvider>) -> Self {
        Self {
            entities: EntityService::new(uow, Arc::new(NoCascade)),
            cache,
        }
    }

    /// Adds a tree
    pub fn add_tree(&self, tree: &mut Tree) -> Result<(), ServiceError> {
        self.entities.add(tree)
    }

    /// Updates a tree, bumping its updated stamp
    pub fn update_tree(&self, tree: &mut Tree) -> Result<(), ServiceError> {
        tree.touch();
        self.entities.update(tree)
    }

    /// Deletes a tree record, effective immediately.
    ///
    /// Records scoped to the tree are not cascaded.
    pub fn delete_tree(&self, tree: &Tree) -> Result<(), ServiceError> {
        self.entities.delete(tree)
    }

    /// Retrieves a single tree
    pub fn get_tree(&self, tree_id: TreeId) -> Result<Option<Tree>, ServiceError> {
        self.entities.get(tree_id, tree_id)
    }

    /// Retrieves every tree in the catalogue
    pub fn get_trees(&self) -> Result<Vec<Tree>, ServiceError> {
        Ok(self.entities.unit_of_work().trees().all()?)
    }

    /// Retrieves the fully linked graph of one tree.
    ///
    /// Served from the cache when a projection is present; otherwise the
    /// scope is fetched once, every relationship resolved, and the result
    /// memoized. A missing tree yields `Ok(None)` and is not cached.
    pub fn graph(&self, tree_id: TreeId) -> Result<Option<Arc<TreeGraph>>, ServiceError> {
        if tree_id.is_nil() {
            return Err(ServiceError::invalid_argument("tree id is required"));
        }

        self.cache
            .as_ref()
            .get_or_try_insert(&graph_cache_key(tree_id), || self.build_graph(tree_id))
    }

    fn build_graph(&self, tree_id: TreeId) -> Result<Option<TreeGraph>, ServiceError> {
        let Some(tree) = self.get_tree(tree_id)? else {
            return Ok(None);
        };

        tracing::info!(%tree_id, "building tree graph projection");
        let uow = self.entities.unit_of_work();
        let individuals = uow.individuals().get(tree_id)?;
        let families = uow.families().get(tree_id)?;

        let settings = LinkingSettings::all();
        let linked_individuals = individuals
            .iter()
            .map(|individual| {
                relationship::link_individual(individual, &individuals, &families, &settings)
            })
            .collect();
        let linked_families = families
            .iter()
            .map(|family| relationship::link_family(family, &individuals))
            .collect();

        Ok(Some(TreeGraph {
            tree,
            individuals: linked_individuals,
            families: linked_families,
        }))
    }
}
