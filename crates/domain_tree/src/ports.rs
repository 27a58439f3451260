//! Family Tree Domain Ports
//!
//! This module defines the unit-of-work port for the family tree domain.
//! A unit of work hands out one repository per record type and provides the
//! single commit point for a logical operation; services obtain it once and
//! use it for the duration of a request.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_tree::ports::UnitOfWork;
//! use std::sync::Arc;
//!
//! // Services receive the port trait
//! pub struct NoteTaker {
//!     uow: Arc<dyn UnitOfWork>,
//! }
//!
//! impl NoteTaker {
//!     pub fn record(&self, note: &Note) -> Result<(), StoreError> {
//!         self.uow.notes().add(note)?;
//!         self.uow.commit()
//!     }
//! }
//! ```
//!
//! A single generic repository accessor is not expressible on a trait
//! object (object safety), so the port exposes one typed accessor per
//! record type. Entities tie the two together through
//! `DomainEntity::repository`, which picks the right accessor for the
//! generic service.

use core_kernel::{Repository, StoreError};

use crate::citation::Citation;
use crate::fact::Fact;
use crate::family::Family;
use crate::individual::Individual;
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::repository::SourceRepository;
use crate::source::Source;
use crate::tree::Tree;

/// Transaction boundary and repository factory for one logical operation.
///
/// Implementations are request-scoped and not designed for concurrent
/// mutation; callers hold one unit of work per request or transaction.
pub trait UnitOfWork: Send + Sync {
    fn trees(&self) -> &dyn Repository<Tree>;
    fn individuals(&self) -> &dyn Repository<Individual>;
    fn families(&self) -> &dyn Repository<Family>;
    fn notes(&self) -> &dyn Repository<Note>;
    fn citations(&self) -> &dyn Repository<Citation>;
    fn facts(&self) -> &dyn Repository<Fact>;
    fn media(&self) -> &dyn Repository<MultimediaLink>;
    fn sources(&self) -> &dyn Repository<Source>;
    fn source_repositories(&self) -> &dyn Repository<SourceRepository>;

    /// Makes the writes issued since the last commit durable
    fn commit(&self) -> Result<(), StoreError>;
}

/// In-memory implementation of the persistence ports
///
/// Stores rows in insertion order and is useful for unit testing and for
/// embedding the service layer without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::RwLock;

    use core_kernel::{EntityKey, TreeId};

    use crate::entity::DomainEntity;

    /// In-memory repository for one record type.
    ///
    /// Rows keep insertion order. Adding a row whose key is already present
    /// is a conflict; updating or deleting a missing row is not found.
    #[derive(Debug)]
    pub struct MemoryRepository<T> {
        rows: RwLock<Vec<T>>,
        aggregates: bool,
    }

    impl<T: DomainEntity> MemoryRepository<T> {
        pub fn new(aggregates: bool) -> Self {
            Self {
                rows: RwLock::new(Vec::new()),
                aggregates,
            }
        }

        /// Number of stored rows, across all scopes
        pub fn len(&self) -> usize {
            self.rows.read().expect("store lock poisoned").len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn position_of(&self, rows: &[T], key: T::Key) -> Option<usize> {
            rows.iter().position(|row| row.key() == key)
        }
    }

    impl<T: DomainEntity> Repository<T> for MemoryRepository<T> {
        fn supports_aggregates(&self) -> bool {
            self.aggregates
        }

        fn add(&self, entity: &T) -> Result<(), StoreError> {
            let mut rows = self.rows.write().expect("store lock poisoned");
            if self.position_of(&rows, entity.key()).is_some() {
                return Err(StoreError::conflict(format!(
                    "{} {} already exists",
                    T::KIND,
                    entity.key()
                )));
            }
            rows.push(entity.clone());
            Ok(())
        }

        fn update(&self, entity: &T) -> Result<(), StoreError> {
            let mut rows = self.rows.write().expect("store lock poisoned");
            match self.position_of(&rows, entity.key()) {
                Some(index) => {
                    rows[index] = entity.clone();
                    Ok(())
                }
                None => Err(StoreError::not_found(T::KIND.to_string(), entity.key())),
            }
        }

        fn delete(&self, entity: &T) -> Result<(), StoreError> {
            let mut rows = self.rows.write().expect("store lock poisoned");
            match self.position_of(&rows, entity.key()) {
                Some(index) => {
                    rows.remove(index);
                    Ok(())
                }
                None => Err(StoreError::not_found(T::KIND.to_string(), entity.key())),
            }
        }

        fn get(&self, tree_id: TreeId) -> Result<Vec<T>, StoreError> {
            let rows = self.rows.read().expect("store lock poisoned");
            Ok(rows
                .iter()
                .filter(|row| row.tree_id() == tree_id)
                .cloned()
                .collect())
        }

        fn find(
            &self,
            tree_id: TreeId,
            predicate: &dyn Fn(&T) -> bool,
        ) -> Result<Vec<T>, StoreError> {
            let rows = self.rows.read().expect("store lock poisoned");
            Ok(rows
                .iter()
                .filter(|row| row.tree_id() == tree_id && predicate(row))
                .cloned()
                .collect())
        }

        fn all(&self) -> Result<Vec<T>, StoreError> {
            Ok(self.rows.read().expect("store lock poisoned").clone())
        }
    }

    /// In-memory unit of work over one repository per record type.
    ///
    /// Writes land in the working set immediately; `commit` only counts
    /// invocations (and can be made to fail for error-path tests), since
    /// there is no durability boundary to cross in memory.
    #[derive(Debug)]
    pub struct MemoryUnitOfWork {
        trees: MemoryRepository<Tree>,
        individuals: MemoryRepository<Individual>,
        families: MemoryRepository<Family>,
        notes: MemoryRepository<Note>,
        citations: MemoryRepository<Citation>,
        facts: MemoryRepository<Fact>,
        media: MemoryRepository<MultimediaLink>,
        sources: MemoryRepository<Source>,
        source_repositories: MemoryRepository<SourceRepository>,
        commits: AtomicUsize,
        fail_commit: AtomicBool,
    }

    impl MemoryUnitOfWork {
        /// Creates a store whose repositories persist aggregates natively
        pub fn new() -> Self {
            Self::with_aggregates(true)
        }

        /// Creates a store whose repositories cannot persist nested
        /// aggregates, forcing the service layer to cascade child records
        pub fn without_aggregates() -> Self {
            Self::with_aggregates(false)
        }

        fn with_aggregates(aggregates: bool) -> Self {
            Self {
                trees: MemoryRepository::new(aggregates),
                individuals: MemoryRepository::new(aggregates),
                families: MemoryRepository::new(aggregates),
                notes: MemoryRepository::new(aggregates),
                citations: MemoryRepository::new(aggregates),
                facts: MemoryRepository::new(aggregates),
                media: MemoryRepository::new(aggregates),
                sources: MemoryRepository::new(aggregates),
                source_repositories: MemoryRepository::new(aggregates),
                commits: AtomicUsize::new(0),
                fail_commit: AtomicBool::new(false),
            }
        }

        /// Number of commits issued so far
        pub fn commits(&self) -> usize {
            self.commits.load(Ordering::SeqCst)
        }

        /// Makes every subsequent commit fail with a connection error
        pub fn set_commit_failure(&self, fail: bool) {
            self.fail_commit.store(fail, Ordering::SeqCst);
        }

        /// Direct access to the note rows (for cascade assertions)
        pub fn note_rows(&self) -> &MemoryRepository<Note> {
            &self.notes
        }

        /// Direct access to the citation rows (for cascade assertions)
        pub fn citation_rows(&self) -> &MemoryRepository<Citation> {
            &self.citations
        }

        /// Direct access to the fact rows (for cascade assertions)
        pub fn fact_rows(&self) -> &MemoryRepository<Fact> {
            &self.facts
        }

        /// Direct access to the media rows (for cascade assertions)
        pub fn media_rows(&self) -> &MemoryRepository<MultimediaLink> {
            &self.media
        }
    }

    impl Default for MemoryUnitOfWork {
        fn default() -> Self {
            Self::new()
        }
    }

    impl UnitOfWork for MemoryUnitOfWork {
        fn trees(&self) -> &dyn Repository<Tree> {
            &self.trees
        }

        fn individuals(&self) -> &dyn Repository<Individual> {
            &self.individuals
        }

        fn families(&self) -> &dyn Repository<Family> {
            &self.families
        }

        fn notes(&self) -> &dyn Repository<Note> {
            &self.notes
        }

        fn citations(&self) -> &dyn Repository<Citation> {
            &self.citations
        }

        fn facts(&self) -> &dyn Repository<Fact> {
            &self.facts
        }

        fn media(&self) -> &dyn Repository<MultimediaLink> {
            &self.media
        }

        fn sources(&self) -> &dyn Repository<Source> {
            &self.sources
        }

        fn source_repositories(&self) -> &dyn Repository<SourceRepository> {
            &self.source_repositories
        }

        fn commit(&self) -> Result<(), StoreError> {
            if self.fail_commit.load(Ordering::SeqCst) {
                return Err(StoreError::connection("commit failed"));
            }
            self.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}
