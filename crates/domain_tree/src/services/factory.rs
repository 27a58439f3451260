//! Service factory
//!
//! Builds one instance of each concrete service over a shared unit of
//! work, lazily and at most once per factory. Construction is cheap, but
//! callers expect repeated lookups to hand back the same instance, so each
//! service sits behind a once-cell rather than a null-check idiom.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use core_kernel::{CacheProvider, MemoryCache, NullCache};

use crate::citation::Citation;
use crate::fact::Fact;
use crate::multimedia::MultimediaLink;
use crate::note::Note;
use crate::ports::UnitOfWork;
use crate::repository::SourceRepository;
use crate::services::cascade::{EntityCascade, NoCascade};
use crate::services::entity_service::EntityService;
use crate::services::family::FamilyService;
use crate::services::individual::IndividualService;
use crate::services::tree::TreeService;
use crate::settings::ServiceSettings;
use crate::source::Source;

/// Facade over the notes store
pub type NoteService = EntityService<Note>;
/// Facade over the multimedia-link store
pub type MultimediaService = EntityService<MultimediaLink>;
/// Facade over the citations store
pub type CitationService = EntityService<Citation>;
/// Facade over the facts store
pub type FactService = EntityService<Fact>;
/// Facade over the sources store
pub type SourceService = EntityService<Source>;
/// Facade over the source-repository (archive) store
pub type RepositoryService = EntityService<SourceRepository>;

/// Lazily constructs and memoizes the concrete services for one unit of
/// work.
pub struct ServiceFactory {
    uow: Arc<dyn UnitOfWork>,
    cache: Arc<dyn CacheProvider>,
    settings: ServiceSettings,
    trees: OnceCell<Arc<TreeService>>,
    individuals: OnceCell<Arc<IndividualService>>,
    families: OnceCell<Arc<FamilyService>>,
    notes: OnceCell<Arc<NoteService>>,
    media: OnceCell<Arc<MultimediaService>>,
    citations: OnceCell<Arc<CitationService>>,
    facts: OnceCell<Arc<FactService>>,
    sources: OnceCell<Arc<SourceService>>,
    repositories: OnceCell<Arc<RepositoryService>>,
}

impl ServiceFactory {
    /// Creates a factory with default settings and an in-memory cache
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self::with_settings(uow, Arc::new(MemoryCache::new()), ServiceSettings::default())
    }

    /// Creates a factory with explicit settings and cache provider.
    ///
    /// When tree caching is disabled in the settings, the provider is
    /// replaced by the no-op cache.
    pub fn with_settings(
        uow: Arc<dyn UnitOfWork>,
        cache: Arc<dyn CacheProvider>,
        settings: ServiceSettings,
    ) -> Self {
        let cache: Arc<dyn CacheProvider> = if settings.cache_trees {
            cache
        } else {
            Arc::new(NullCache::new())
        };

        Self {
            uow,
            cache,
            settings,
            trees: OnceCell::new(),
            individuals: OnceCell::new(),
            families: OnceCell::new(),
            notes: OnceCell::new(),
            media: OnceCell::new(),
            citations: OnceCell::new(),
            facts: OnceCell::new(),
            sources: OnceCell::new(),
            repositories: OnceCell::new(),
        }
    }

    /// The tree service
    pub fn tree_service(&self) -> Arc<TreeService> {
        self.trees
            .get_or_init(|| Arc::new(TreeService::new(self.uow.clone(), self.cache.clone())))
            .clone()
    }

    /// The individual service
    pub fn individual_service(&self) -> Arc<IndividualService> {
        self.individuals
            .get_or_init(|| {
                Arc::new(IndividualService::new(
                    self.uow.clone(),
                    self.settings.linking,
                ))
            })
            .clone()
    }

    /// The family service
    pub fn family_service(&self) -> Arc<FamilyService> {
        self.families
            .get_or_init(|| Arc::new(FamilyService::new(self.uow.clone())))
            .clone()
    }

    /// The note service
    pub fn note_service(&self) -> Arc<NoteService> {
        self.notes
            .get_or_init(|| Arc::new(EntityService::new(self.uow.clone(), Arc::new(NoCascade))))
            .clone()
    }

    /// The multimedia service
    pub fn multimedia_service(&self) -> Arc<MultimediaService> {
        self.media
            .get_or_init(|| Arc::new(EntityService::new(self.uow.clone(), Arc::new(NoCascade))))
            .clone()
    }

    /// The citation service
    pub fn citation_service(&self) -> Arc<CitationService> {
        self.citations
            .get_or_init(|| {
                Arc::new(EntityService::new(self.uow.clone(), Arc::new(EntityCascade)))
            })
            .clone()
    }

    /// The fact service
    pub fn fact_service(&self) -> Arc<FactService> {
        self.facts
            .get_or_init(|| {
                Arc::new(EntityService::new(self.uow.clone(), Arc::new(EntityCascade)))
            })
            .clone()
    }

    /// The source service
    pub fn source_service(&self) -> Arc<SourceService> {
        self.sources
            .get_or_init(|| {
                Arc::new(EntityService::new(self.uow.clone(), Arc::new(EntityCascade)))
            })
            .clone()
    }

    /// The source-repository (archive) service
    pub fn repository_service(&self) -> Arc<RepositoryService> {
        self.repositories
            .get_or_init(|| {
                Arc::new(EntityService::new(self.uow.clone(), Arc::new(EntityCascade)))
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MemoryUnitOfWork;
    use crate::settings::LinkingSettings;
    use crate::tree::Tree;
    use core_kernel::EntityKey;

    #[test]
    fn test_services_are_memoized() {
        let factory = ServiceFactory::new(Arc::new(MemoryUnitOfWork::new()));

        assert!(Arc::ptr_eq(
            &factory.individual_service(),
            &factory.individual_service()
        ));
        assert!(Arc::ptr_eq(&factory.note_service(), &factory.note_service()));
        assert!(Arc::ptr_eq(&factory.tree_service(), &factory.tree_service()));
    }

    #[test]
    fn test_services_share_the_unit_of_work() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let factory = ServiceFactory::new(uow.clone());

        let mut tree = Tree::new("Shared store");
        factory.tree_service().add_tree(&mut tree).unwrap();

        // A different service over the same unit of work sees the write
        assert_eq!(factory.tree_service().get_trees().unwrap().len(), 1);
        assert_eq!(uow.commits(), 1);
    }

    #[test]
    fn test_disabled_tree_caching_uses_the_null_cache() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let settings = ServiceSettings {
            linking: LinkingSettings::all(),
            cache_trees: false,
        };
        let factory = ServiceFactory::with_settings(
            uow.clone(),
            Arc::new(MemoryCache::new()),
            settings,
        );

        let mut tree = Tree::new("Uncached");
        tree.id = core_kernel::TreeId::generate();
        factory.tree_service().add_tree(&mut tree).unwrap();

        let first = factory.tree_service().graph(tree.id).unwrap().unwrap();
        let second = factory.tree_service().graph(tree.id).unwrap().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
