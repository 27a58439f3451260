//! Deterministic test fixtures
//!
//! Fixed identifiers and the constants of the standard seeded scenario:
//! a tree of 22 individuals where individual 1 is the father and 2 the
//! mother of individuals 3 and 4, and family 1 joins individuals 4 and 3.

use uuid::Uuid;

use core_kernel::{FamilyId, IndividualId, TreeId};

/// Total individuals in the standard seeded tree
pub const SEEDED_INDIVIDUAL_COUNT: usize = 22;

/// Page size used by paging scenarios
pub const PAGE_SIZE: usize = 5;

/// Shared surname of the first individuals in the seeded tree
pub const LAST_NAME: &str = "Bar";

/// Surname of the remaining individuals in the seeded tree
pub const ALT_LAST_NAME: &str = "Car";

/// Individuals numbered above this get [`ALT_LAST_NAME`]
pub const LAST_NAME_COUNT: usize = 10;

/// Identifier fixtures, stable across runs
pub struct IdFixtures;

impl IdFixtures {
    /// The scope id of the standard seeded tree
    pub fn tree_id() -> TreeId {
        TreeId::from_uuid(Uuid::from_u128(0xA11C_E000))
    }

    /// The n-th individual of the seeded tree (1-based)
    pub fn individual(n: usize) -> IndividualId {
        IndividualId::from_uuid(Uuid::from_u128(n as u128))
    }

    /// The seeded father (individual 1)
    pub fn father_id() -> IndividualId {
        Self::individual(1)
    }

    /// The seeded mother (individual 2)
    pub fn mother_id() -> IndividualId {
        Self::individual(2)
    }

    /// The wife in the seeded family (individual 3)
    pub fn wife_id() -> IndividualId {
        Self::individual(3)
    }

    /// The husband in the seeded family (individual 4)
    pub fn husband_id() -> IndividualId {
        Self::individual(4)
    }

    /// An id that exists in no seeded scenario
    pub fn unknown_individual() -> IndividualId {
        Self::individual(999)
    }

    /// The seeded family record id
    pub fn family_id() -> FamilyId {
        FamilyId::from_uuid(Uuid::from_u128(0xFA_0001))
    }
}

/// Name fixtures for the seeded tree
pub struct NameFixtures;

impl NameFixtures {
    /// First name of the n-th seeded individual
    pub fn first_name(n: usize) -> String {
        format!("Foo{n}")
    }

    /// Surname of the n-th seeded individual
    pub fn last_name(n: usize) -> &'static str {
        if n <= LAST_NAME_COUNT {
            LAST_NAME
        } else {
            ALT_LAST_NAME
        }
    }
}
