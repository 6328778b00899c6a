use serde::{Deserialize, Serialize};

use crate::graphs::Distance;

/// Represents a request for finding a shortest path distance in a graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest<V> {
    pub source: V,
    pub target: V,
}

/// A request together with its expected distance, `None` if the target is
/// unreachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTestCase<V> {
    pub request: ShortestPathRequest<V>,
    pub distance: Option<Distance>,
}

/// A test case the validated pathfinder answered differently.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch<V> {
    pub test_case: ShortestPathTestCase<V>,
    pub actual: Option<Distance>,
}

/// Compares two distances with a relative tolerance of `1e-9`.
pub fn distances_match(expected: Option<Distance>, actual: Option<Distance>) -> bool {
    match (expected, actual) {
        (Some(expected), Some(actual)) => {
            (expected - actual).abs() <= 1e-9 * expected.abs().max(actual.abs()).max(1.0)
        }
        (None, None) => true,
        _ => false,
    }
}
