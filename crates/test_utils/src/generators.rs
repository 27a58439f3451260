//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use proptest::prelude::*;
use uuid::Uuid;

use core_kernel::{IndividualId, TreeId};

use domain_tree::fact::FactType;
use domain_tree::individual::{Individual, Sex};

/// Strategy for generating short human-looking names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}"
}

/// Strategy for generating valid Sex values
pub fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female), Just(Sex::Unknown)]
}

/// Strategy for generating valid FactType values
pub fn fact_type_strategy() -> impl Strategy<Value = FactType> {
    prop_oneof![
        Just(FactType::Birth),
        Just(FactType::Baptism),
        Just(FactType::Death),
        Just(FactType::Burial),
        Just(FactType::Marriage),
        Just(FactType::Occupation),
        Just(FactType::Residence),
        Just(FactType::Census),
        Just(FactType::Other),
    ]
}

/// Strategy for generating saved individuals in a fixed tree scope.
///
/// Generated individuals have non-nil keys and no parent references.
pub fn individual_strategy(tree_id: TreeId) -> impl Strategy<Value = Individual> {
    (any::<u128>(), name_strategy(), name_strategy(), sex_strategy()).prop_map(
        move |(raw_id, first, last, sex)| {
            let mut person = Individual::new(tree_id, first, last).with_sex(sex);
            person.id = IndividualId::from_uuid(Uuid::from_u128(raw_id.max(1)));
            person
        },
    )
}

/// Strategy for generating small, key-distinct scopes of individuals
pub fn scope_strategy(tree_id: TreeId, max_len: usize) -> impl Strategy<Value = Vec<Individual>> {
    prop::collection::vec(individual_strategy(tree_id), 0..max_len).prop_map(|mut scope| {
        scope.sort_by_key(|person| person.id);
        scope.dedup_by_key(|person| person.id);
        scope
    })
}
