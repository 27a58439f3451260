//! Custom assertion helpers for domain types

use core_kernel::IndividualId;

use domain_tree::error::ServiceError;
use domain_tree::individual::Individual;

/// Asserts the result failed before reaching the store with an
/// invalid-argument or out-of-range error.
pub fn assert_argument_error<T: std::fmt::Debug>(result: Result<T, ServiceError>) {
    match result {
        Err(error) if error.is_argument_error() => {}
        other => panic!("expected an argument error, got {other:?}"),
    }
}

/// Asserts the result carries a propagated store failure.
pub fn assert_store_error<T: std::fmt::Debug>(result: Result<T, ServiceError>) {
    match result {
        Err(error) if error.is_store_error() => {}
        other => panic!("expected a store error, got {other:?}"),
    }
}

/// Asserts a set of individuals carries exactly the expected keys,
/// ignoring order.
pub fn assert_individual_keys(individuals: &[Individual], expected: &[IndividualId]) {
    let mut actual: Vec<IndividualId> = individuals.iter().map(|person| person.id).collect();
    let mut expected = expected.to_vec();
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected, "individual key sets differ");
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::TreeId;

    #[test]
    fn test_assert_individual_keys_ignores_order() {
        let tree_id = TreeId::new();
        let a = {
            let mut person = Individual::new(tree_id, "A", "One");
            person.id = IndividualId::new();
            person
        };
        let b = {
            let mut person = Individual::new(tree_id, "B", "Two");
            person.id = IndividualId::new();
            person
        };
        assert_individual_keys(&[a.clone(), b.clone()], &[b.id, a.id]);
    }

    #[test]
    fn test_assert_argument_error_accepts_argument_failures() {
        let result: Result<(), ServiceError> = Err(ServiceError::invalid_argument("nope"));
        assert_argument_error(result);
    }

    #[test]
    #[should_panic(expected = "expected an argument error")]
    fn test_assert_argument_error_rejects_success() {
        assert_argument_error(Ok(()));
    }
}
