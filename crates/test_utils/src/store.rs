//! Seeded in-memory stores
//!
//! Spin up a `MemoryUnitOfWork` pre-loaded with the standard scenarios the
//! suite asserts against.

use std::sync::Arc;

use core_kernel::Repository;

use domain_tree::ports::mock::MemoryUnitOfWork;
use domain_tree::ports::UnitOfWork;
use domain_tree::tree::Tree;

use crate::builders::{FamilyBuilder, IndividualBuilder, TreeBuilder};
use crate::fixtures::{IdFixtures, NameFixtures, SEEDED_INDIVIDUAL_COUNT};

/// An empty store with native aggregate support
pub fn empty_store() -> Arc<MemoryUnitOfWork> {
    Arc::new(MemoryUnitOfWork::new())
}

/// An empty store whose repositories cannot persist nested aggregates
pub fn cascading_store() -> Arc<MemoryUnitOfWork> {
    Arc::new(MemoryUnitOfWork::without_aggregates())
}

/// The standard seeded tree.
///
/// 22 individuals numbered 1..=22 (names `Foo<n>`, surname split per the
/// fixtures); individuals 3 and 4 record individual 1 as father and 2 as
/// mother; one family joins husband 4 and wife 3. Returns the store and
/// the seeded tree record.
pub fn seeded_store() -> (Arc<MemoryUnitOfWork>, Tree) {
    let uow = empty_store();
    let tree_id = IdFixtures::tree_id();

    let tree = TreeBuilder::new()
        .with_id(tree_id)
        .with_name("Seeded test tree")
        .build();
    uow.trees().add(&tree).expect("seed tree");

    for n in 1..=SEEDED_INDIVIDUAL_COUNT {
        let mut builder = IndividualBuilder::new(tree_id)
            .with_id(IdFixtures::individual(n))
            .with_names(NameFixtures::first_name(n), NameFixtures::last_name(n));
        if n > 2 && n < 5 {
            builder = builder
                .with_father(IdFixtures::father_id())
                .with_mother(IdFixtures::mother_id());
        }
        uow.individuals().add(&builder.build()).expect("seed individual");
    }

    let family = FamilyBuilder::new(tree_id)
        .with_id(IdFixtures::family_id())
        .with_husband(IdFixtures::husband_id())
        .with_wife(IdFixtures::wife_id())
        .build();
    uow.families().add(&family).expect("seed family");

    (uow, tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_shape() {
        let (uow, tree) = seeded_store();
        assert_eq!(
            uow.individuals().get(tree.id).unwrap().len(),
            SEEDED_INDIVIDUAL_COUNT
        );
        assert_eq!(uow.families().get(tree.id).unwrap().len(), 1);

        let children = uow
            .individuals()
            .find(tree.id, &|person| person.has_parent(IdFixtures::father_id()))
            .unwrap();
        assert_eq!(children.len(), 2);
    }
}
