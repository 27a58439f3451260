//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for the persistence boundary
//! of the family tree system. Domain services never talk to a concrete
//! store; they depend on the [`Repository`] port, and adapters implement it
//! for whatever backend is in use (an in-memory store for tests and
//! embedding, a database adapter in a hosting application, and so on).
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Services                          │
//! │        (EntityService, IndividualService, TreeService)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Port Traits                            │
//! │            (Repository<T>, UnitOfWork, CacheProvider)        │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴─────────┐
//!         │  In-memory store  │     │  Hosting app's    │
//!         │  (tests, embeds)  │     │  database adapter │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! The unit-of-work port lives next to the entity model in the domain
//! crate; the generic single-entity repository port is defined here because
//! it depends only on kernel types.

use std::fmt;
use thiserror::Error;

use crate::identifiers::TreeId;

/// Error type for store operations
///
/// Provides a unified error type that all repository implementations must
/// use, ensuring consistent error handling across adapters. Queries report
/// absence as an empty result, never as `NotFound`; point writes against a
/// missing row do report `NotFound`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted record was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying store failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal adapter error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        StoreError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Connection { .. })
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Generic persistence port for one entity type.
///
/// Writes take effect against the adapter's working set immediately; the
/// owning unit of work decides when they become durable via its commit.
/// Every query is confined to one tree scope, except [`Repository::all`],
/// which exists for the tree catalogue itself.
///
/// Adapters that can persist an aggregate root together with its owned
/// child collections report `supports_aggregates() == true`; for the rest,
/// the service layer persists children through their own repositories.
pub trait Repository<T>: Send + Sync {
    /// Returns true if the adapter natively persists nested child collections
    fn supports_aggregates(&self) -> bool;

    /// Adds a record to the store
    fn add(&self, entity: &T) -> Result<(), StoreError>;

    /// Updates an existing record
    fn update(&self, entity: &T) -> Result<(), StoreError>;

    /// Deletes an existing record
    fn delete(&self, entity: &T) -> Result<(), StoreError>;

    /// Retrieves all records within one tree scope
    fn get(&self, tree_id: TreeId) -> Result<Vec<T>, StoreError>;

    /// Retrieves the records within one tree scope matching a predicate
    fn find(&self, tree_id: TreeId, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>, StoreError>;

    /// Retrieves every record regardless of scope
    fn all(&self) -> Result<Vec<T>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_not_found() {
        let error = StoreError::not_found("Individual", "INDI-123");
        assert!(error.is_not_found());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("Individual"));
        assert!(error.to_string().contains("INDI-123"));
    }

    #[test]
    fn test_store_error_transient() {
        let connection = StoreError::connection("socket closed");
        assert!(connection.is_transient());

        let conflict = StoreError::conflict("duplicate key");
        assert!(!conflict.is_transient());
        assert!(!conflict.is_not_found());
    }

    #[test]
    fn test_store_error_internal_display() {
        let error = StoreError::internal("row decode failed");
        assert_eq!(error.to_string(), "Internal error: row decode failed");
    }
}
