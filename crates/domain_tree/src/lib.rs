//! Family Tree Domain
//!
//! This crate is the domain-service layer of the family tree system: the
//! entity model (trees, individuals, families and the records they own),
//! relationship resolution, and CRUD service facades over a pluggable
//! persistence boundary.
//!
//! # Architecture
//!
//! Persistence is reached only through ports: the generic
//! [`core_kernel::Repository`] trait per record type and the
//! [`ports::UnitOfWork`] trait as the transaction boundary. The service
//! layer is one generic facade ([`services::EntityService`]) parameterized
//! by an aggregate [`services::CascadePolicy`], plus concrete services for
//! the record types with a relationship read path.
//!
//! Relationships are never persisted. Individuals and families store
//! plain back-reference ids; the resolved father, mother, children and
//! spouses are computed on read into projections
//! ([`individual::LinkedIndividual`], [`family::LinkedFamily`],
//! [`tree::TreeGraph`]).
//!
//! # Example
//!
//! ```rust,ignore
//! // Requires the `mock` feature for the in-memory store
//! use std::sync::Arc;
//! use domain_tree::individual::Individual;
//! use domain_tree::ports::mock::MemoryUnitOfWork;
//! use domain_tree::services::ServiceFactory;
//! use domain_tree::tree::Tree;
//!
//! let factory = ServiceFactory::new(Arc::new(MemoryUnitOfWork::new()));
//!
//! let mut tree = Tree::new("Berg family");
//! factory.tree_service().add_tree(&mut tree)?;
//!
//! let mut lars = Individual::new(tree.id, "Lars", "Berg");
//! factory.individual_service().add(&mut lars)?;
//!
//! let found = factory.individual_service().get(lars.id, tree.id)?;
//! assert!(found.is_some());
//! ```

pub mod citation;
pub mod entity;
pub mod error;
pub mod fact;
pub mod family;
pub mod individual;
pub mod multimedia;
pub mod note;
pub mod ports;
pub mod repository;
pub mod services;
pub mod settings;
pub mod source;
pub mod tree;
pub mod validation;

pub use citation::Citation;
pub use entity::{AncestorEntity, DomainEntity, EntityKind, OwnedRecords, OwnerRef};
pub use error::ServiceError;
pub use fact::{Fact, FactType};
pub use family::{Family, LinkedFamily};
pub use individual::{Individual, LinkedIndividual, Sex};
pub use multimedia::MultimediaLink;
pub use note::Note;
pub use ports::UnitOfWork;
pub use repository::SourceRepository;
pub use services::{
    CitationService, EntityService, FactService, FamilyService, IndividualService,
    MultimediaService, NoteService, RepositoryService, ServiceFactory, SourceService, TreeService,
};
pub use settings::{LinkingSettings, ServiceSettings};
pub use source::Source;
pub use tree::{Tree, TreeGraph};
pub use validation::ValidationResult;
