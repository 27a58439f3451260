//! Core Kernel - Foundational types and utilities for the family tree system
//!
//! This crate provides the fundamental building blocks used by the domain
//! layer:
//! - Strongly-typed, UUID-backed entity identifiers
//! - The generic repository port and store error taxonomy
//! - Paged query results
//! - The cache-provider port with in-memory and no-op implementations

pub mod cache;
pub mod identifiers;
pub mod paging;
pub mod ports;

pub use cache::{CacheProvider, MemoryCache, NullCache};
pub use identifiers::{
    CitationId, EntityKey, FactId, FamilyId, IndividualId, MediaLinkId, NoteId, RepositoryId,
    SourceId, TreeId,
};
pub use paging::PagedList;
pub use ports::{Repository, StoreError};
