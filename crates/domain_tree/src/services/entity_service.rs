//! Generic CRUD facade
//!
//! One parameterized service covers the CRUD surface of every record type.
//! Per-entity behaviour is limited to the injected [`CascadePolicy`],
//! which describes how to persist owned child collections when the store
//! cannot do it natively; everything else is shared.

use std::sync::Arc;

use core_kernel::{EntityKey, PagedList, Repository, TreeId};

use crate::entity::DomainEntity;
use crate::error::ServiceError;
use crate::ports::UnitOfWork;
use crate::services::cascade::CascadePolicy;

/// CRUD facade over one record type's repository.
///
/// Reads answer absence with `Ok(None)` or an empty collection; argument
/// problems fail before the store is touched; store failures (including
/// commit failures) propagate unchanged.
pub struct EntityService<T: DomainEntity> {
    uow: Arc<dyn UnitOfWork>,
    cascade: Arc<dyn CascadePolicy<T>>,
}

impl<T: DomainEntity> EntityService<T> {
    /// Creates a service over a unit of work with the given cascade policy
    pub fn new(uow: Arc<dyn UnitOfWork>, cascade: Arc<dyn CascadePolicy<T>>) -> Self {
        Self { uow, cascade }
    }

    fn repository(&self) -> &dyn Repository<T> {
        T::repository(self.uow.as_ref())
    }

    fn require_tree(tree_id: TreeId) -> Result<(), ServiceError> {
        if tree_id.is_nil() {
            return Err(ServiceError::invalid_argument("tree id is required"));
        }
        Ok(())
    }

    /// Adds a record to the store, assigning a key when it has none.
    ///
    /// When the store cannot persist nested aggregates, the cascade policy
    /// persists the record's owned children afterwards and a second commit
    /// closes the cascade.
    pub fn add(&self, entity: &mut T) -> Result<(), ServiceError> {
        entity.validate().into_result()?;

        if entity.key().is_nil() {
            entity.set_key(T::Key::generate());
        }
        Self::require_tree(entity.tree_id())?;

        tracing::debug!(kind = %T::KIND, key = %entity.key(), "adding record");
        let repository = self.repository();
        repository.add(entity)?;
        self.uow.commit()?;

        if !repository.supports_aggregates() {
            self.cascade.cascade_add(entity, self.uow.as_ref())?;
            self.uow.commit()?;
        }
        Ok(())
    }

    /// Updates a record in the store.
    pub fn update(&self, entity: &T) -> Result<(), ServiceError> {
        entity.validate().into_result()?;
        if entity.key().is_nil() {
            return Err(ServiceError::invalid_argument(
                "cannot update a record that was never added",
            ));
        }

        tracing::debug!(kind = %T::KIND, key = %entity.key(), "updating record");
        self.repository().update(entity)?;
        self.uow.commit()?;
        Ok(())
    }

    /// Deletes a record from the store, effective immediately.
    ///
    /// Owned child records are not cascaded on delete.
    pub fn delete(&self, entity: &T) -> Result<(), ServiceError> {
        if entity.key().is_nil() {
            return Err(ServiceError::invalid_argument(
                "cannot delete a record that was never added",
            ));
        }

        tracing::debug!(kind = %T::KIND, key = %entity.key(), "deleting record");
        self.repository().delete(entity)?;
        self.uow.commit()?;
        Ok(())
    }

    /// Retrieves a single record by key within one tree scope.
    pub fn get(&self, id: T::Key, tree_id: TreeId) -> Result<Option<T>, ServiceError> {
        if id.is_nil() {
            return Err(ServiceError::invalid_argument("record id is required"));
        }
        Self::require_tree(tree_id)?;

        let matches = self
            .repository()
            .find(tree_id, &|entity| entity.key() == id)?;
        Ok(matches.into_iter().next())
    }

    /// Retrieves all records of this type within one tree scope.
    pub fn get_all(&self, tree_id: TreeId) -> Result<Vec<T>, ServiceError> {
        Self::require_tree(tree_id)?;
        Ok(self.repository().get(tree_id)?)
    }

    /// Retrieves the records within one tree scope matching a predicate.
    pub fn get_where(
        &self,
        tree_id: TreeId,
        predicate: impl Fn(&T) -> bool,
    ) -> Result<Vec<T>, ServiceError> {
        Self::require_tree(tree_id)?;
        Ok(self.repository().find(tree_id, &predicate)?)
    }

    /// Retrieves one page of the records matching a predicate.
    ///
    /// The result's `total_count` is the size of the whole filtered set
    /// and its `page_size` the requested size, whatever the page index.
    pub fn get_page(
        &self,
        tree_id: TreeId,
        predicate: impl Fn(&T) -> bool,
        page_index: usize,
        page_size: usize,
    ) -> Result<PagedList<T>, ServiceError> {
        Self::require_tree(tree_id)?;
        if page_size == 0 {
            return Err(ServiceError::out_of_range("page size must be positive"));
        }

        let filtered = self.repository().find(tree_id, &predicate)?;
        Ok(PagedList::new(filtered, page_index, page_size))
    }

    /// The unit of work this service operates on
    pub(crate) fn unit_of_work(&self) -> &Arc<dyn UnitOfWork> {
        &self.uow
    }
}
