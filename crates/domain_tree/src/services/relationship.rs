//! Relationship resolution
//!
//! Pure, single-pass lookups over an already-fetched scope of individuals
//! and families. A missing or unresolvable id never fails a lookup; it
//! simply contributes no link. All functions expect every record to come
//! from the same tree scope.

use core_kernel::IndividualId;

use crate::family::{Family, LinkedFamily};
use crate::individual::{Individual, LinkedIndividual};
use crate::settings::LinkingSettings;

/// Resolves an individual's father within the scope.
pub fn father_of<'a>(individual: &Individual, scope: &'a [Individual]) -> Option<&'a Individual> {
    individual
        .father_id
        .and_then(|father_id| scope.iter().find(|candidate| candidate.id == father_id))
}

/// Resolves an individual's mother within the scope.
pub fn mother_of<'a>(individual: &Individual, scope: &'a [Individual]) -> Option<&'a Individual> {
    individual
        .mother_id
        .and_then(|mother_id| scope.iter().find(|candidate| candidate.id == mother_id))
}

/// All individuals recording `parent_id` as father or mother.
pub fn children_of(parent_id: IndividualId, scope: &[Individual]) -> Vec<&Individual> {
    scope
        .iter()
        .filter(|candidate| candidate.has_parent(parent_id))
        .collect()
}

/// Children of a couple, honouring unrecorded partners.
///
/// With both parents recorded, a child must match both; with one recorded,
/// a child must match it and have the other parent unrecorded; with
/// neither, there are no children to resolve.
pub fn children_of_couple<'a>(
    father_id: Option<IndividualId>,
    mother_id: Option<IndividualId>,
    scope: &'a [Individual],
) -> Vec<&'a Individual> {
    scope
        .iter()
        .filter(|candidate| match (father_id, mother_id) {
            (Some(father), Some(mother)) => {
                candidate.father_id == Some(father) && candidate.mother_id == Some(mother)
            }
            (Some(father), None) => {
                candidate.father_id == Some(father) && candidate.mother_id.is_none()
            }
            (None, Some(mother)) => {
                candidate.father_id.is_none() && candidate.mother_id == Some(mother)
            }
            (None, None) => false,
        })
        .collect()
}

/// Spouses of an individual, resolved through the family records.
///
/// Each family naming the individual as one partner contributes the other
/// partner, when that partner is recorded and present in scope.
pub fn spouses_of<'a>(
    individual_id: IndividualId,
    scope: &'a [Individual],
    families: &[Family],
) -> Vec<&'a Individual> {
    families
        .iter()
        .filter(|family| family.involves(individual_id))
        .filter_map(|family| family.spouse_of(individual_id))
        .filter_map(|spouse_id| scope.iter().find(|candidate| candidate.id == spouse_id))
        .collect()
}

/// Builds the linked projection of one individual.
///
/// Only the relationships enabled in `settings` are resolved; the rest
/// stay empty.
pub fn link_individual(
    individual: &Individual,
    scope: &[Individual],
    families: &[Family],
    settings: &LinkingSettings,
) -> LinkedIndividual {
    let mut linked = LinkedIndividual::unlinked(individual.clone());

    if settings.include_parents {
        linked.father = father_of(individual, scope).cloned();
        linked.mother = mother_of(individual, scope).cloned();
    }
    if settings.include_children {
        linked.children = children_of(individual.id, scope)
            .into_iter()
            .cloned()
            .collect();
    }
    if settings.include_spouses {
        linked.spouses = spouses_of(individual.id, scope, families)
            .into_iter()
            .cloned()
            .collect();
    }
    linked
}

/// Builds the linked projection of one family.
pub fn link_family(family: &Family, scope: &[Individual]) -> LinkedFamily {
    let resolve = |id: Option<IndividualId>| {
        id.and_then(|id| scope.iter().find(|candidate| candidate.id == id))
            .cloned()
    };

    LinkedFamily {
        husband: resolve(family.husband_id),
        wife: resolve(family.wife_id),
        children: children_of_couple(family.husband_id, family.wife_id, scope)
            .into_iter()
            .cloned()
            .collect(),
        family: family.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::TreeId;
    use uuid::Uuid;

    fn id(n: u128) -> IndividualId {
        IndividualId::from_uuid(Uuid::from_u128(n))
    }

    fn person(tree_id: TreeId, n: u128, name: &str) -> Individual {
        let mut individual = Individual::new(tree_id, name, "Berg");
        individual.id = id(n);
        individual
    }

    fn scope_with_parents(tree_id: TreeId) -> Vec<Individual> {
        let father = person(tree_id, 1, "Lars");
        let mother = person(tree_id, 2, "Ingrid");
        let mut son = person(tree_id, 3, "Erik");
        son.father_id = Some(id(1));
        son.mother_id = Some(id(2));
        let mut daughter = person(tree_id, 4, "Astrid");
        daughter.father_id = Some(id(1));
        daughter.mother_id = Some(id(2));
        vec![father, mother, son, daughter]
    }

    #[test]
    fn test_father_resolution() {
        let tree_id = TreeId::new();
        let scope = scope_with_parents(tree_id);

        let father = father_of(&scope[2], &scope).unwrap();
        assert_eq!(father.id, id(1));
    }

    #[test]
    fn test_unset_parent_yields_no_link() {
        let tree_id = TreeId::new();
        let scope = scope_with_parents(tree_id);

        // Lars has no recorded parents
        assert!(father_of(&scope[0], &scope).is_none());
        assert!(mother_of(&scope[0], &scope).is_none());
    }

    #[test]
    fn test_parent_missing_from_scope_yields_no_link() {
        let tree_id = TreeId::new();
        let mut orphan = person(tree_id, 9, "Unknown");
        orphan.father_id = Some(id(999));
        let scope = vec![orphan.clone()];

        assert!(father_of(&orphan, &scope).is_none());
    }

    #[test]
    fn test_children_of_either_parent() {
        let tree_id = TreeId::new();
        let scope = scope_with_parents(tree_id);

        let children = children_of(id(1), &scope);
        assert_eq!(children.len(), 2);

        let by_mother = children_of(id(2), &scope);
        assert_eq!(by_mother.len(), 2);

        assert!(children_of(id(3), &scope).is_empty());
    }

    #[test]
    fn test_children_of_couple_requires_both_when_both_set() {
        let tree_id = TreeId::new();
        let mut scope = scope_with_parents(tree_id);
        // A child of Lars and a different mother
        let mut half_sibling = person(tree_id, 5, "Johan");
        half_sibling.father_id = Some(id(1));
        half_sibling.mother_id = Some(id(7));
        scope.push(half_sibling);

        let children = children_of_couple(Some(id(1)), Some(id(2)), &scope);
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_children_of_single_parent_excludes_two_parent_children() {
        let tree_id = TreeId::new();
        let mut scope = scope_with_parents(tree_id);
        let mut only_father = person(tree_id, 6, "Per");
        only_father.father_id = Some(id(1));
        scope.push(only_father);

        let children = children_of_couple(Some(id(1)), None, &scope);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, id(6));
    }

    #[test]
    fn test_children_of_no_couple_is_empty() {
        let scope = scope_with_parents(TreeId::new());
        assert!(children_of_couple(None, None, &scope).is_empty());
    }

    #[test]
    fn test_spouses_resolved_through_families() {
        let tree_id = TreeId::new();
        let scope = vec![
            person(tree_id, 1, "Lars"),
            person(tree_id, 3, "Ingrid"),
            person(tree_id, 6, "Unwed"),
        ];
        let family = Family::new(tree_id).with_husband(id(1)).with_wife(id(3));
        let families = vec![family];

        let spouses = spouses_of(id(1), &scope, &families);
        assert_eq!(spouses.len(), 1);
        assert_eq!(spouses[0].id, id(3));

        assert!(spouses_of(id(6), &scope, &families).is_empty());
    }

    #[test]
    fn test_family_without_other_partner_contributes_no_spouse() {
        let tree_id = TreeId::new();
        let scope = vec![person(tree_id, 1, "Lars")];
        let families = vec![Family::new(tree_id).with_husband(id(1))];

        assert!(spouses_of(id(1), &scope, &families).is_empty());
    }

    #[test]
    fn test_link_individual_honours_settings() {
        let tree_id = TreeId::new();
        let scope = scope_with_parents(tree_id);
        let families = vec![Family::new(tree_id).with_husband(id(1)).with_wife(id(2))];

        let parents_only = LinkingSettings {
            include_parents: true,
            ..LinkingSettings::none()
        };
        let linked = link_individual(&scope[2], &scope, &families, &parents_only);
        assert!(linked.father.is_some());
        assert!(linked.mother.is_some());
        assert!(linked.children.is_empty());
        assert!(linked.spouses.is_empty());

        let all = link_individual(&scope[0], &scope, &families, &LinkingSettings::all());
        assert_eq!(all.children.len(), 2);
        assert_eq!(all.spouses.len(), 1);
        assert!(all.father.is_none());
    }

    #[test]
    fn test_link_family_resolves_members_and_children() {
        let tree_id = TreeId::new();
        let scope = scope_with_parents(tree_id);
        let family = Family::new(tree_id).with_husband(id(1)).with_wife(id(2));

        let linked = link_family(&family, &scope);
        assert_eq!(linked.husband.as_ref().unwrap().id, id(1));
        assert_eq!(linked.wife.as_ref().unwrap().id, id(2));
        assert_eq!(linked.children.len(), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Exactly the records referencing the parent come back.
            #[test]
            fn prop_children_of_only_returns_matching_records(
                flags in prop::collection::vec(any::<bool>(), 0..20)
            ) {
                let tree_id = TreeId::new();
                let parent = id(1);
                let scope: Vec<Individual> = flags
                    .iter()
                    .enumerate()
                    .map(|(index, references_parent)| {
                        let mut child = person(tree_id, index as u128 + 10, "Gen");
                        if *references_parent {
                            child.father_id = Some(parent);
                        }
                        child
                    })
                    .collect();

                let children = children_of(parent, &scope);
                prop_assert_eq!(
                    children.len(),
                    flags.iter().filter(|flag| **flag).count()
                );
                prop_assert!(children.iter().all(|child| child.has_parent(parent)));
            }
        }
    }
}
