//! Domain services
//!
//! Thin facades over the persistence ports. One generic CRUD service
//! covers every record type; the individual, family and tree services add
//! the relationship read paths on top; the factory wires one instance of
//! each over a shared unit of work.

pub mod cascade;
pub mod entity_service;
pub mod factory;
pub mod family;
pub mod individual;
pub mod relationship;
pub mod tree;

pub use cascade::{AncestorCascade, CascadePolicy, EntityCascade, NoCascade};
pub use entity_service::EntityService;
pub use factory::{
    CitationService, FactService, MultimediaService, NoteService, RepositoryService,
    ServiceFactory, SourceService,
};
pub use family::FamilyService;
pub use individual::IndividualService;
pub use tree::{graph_cache_key, TreeService};
