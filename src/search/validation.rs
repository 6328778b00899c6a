use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use super::{
    path::{distances_match, Mismatch, ShortestPathRequest, ShortestPathTestCase},
    PathFinding,
};
use crate::{
    error::Result,
    graphs::{graph::Graph, VertexKey},
    utility::get_optional_progressbar,
};

/// Draws `number_of_requests` random source/target pairs from the graph.
pub fn random_requests<V: VertexKey>(
    graph: &Graph<V>,
    number_of_requests: usize,
    seed: u64,
) -> Vec<ShortestPathRequest<V>> {
    let number_of_vertices = graph.number_of_vertices();
    if number_of_vertices == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..number_of_requests)
        .map(|_| ShortestPathRequest {
            source: graph.id_of(rng.gen_range(0..number_of_vertices)).clone(),
            target: graph.id_of(rng.gen_range(0..number_of_vertices)).clone(),
        })
        .collect()
}

/// Every ordered pair of vertices of the graph.
pub fn all_requests<V: VertexKey>(graph: &Graph<V>) -> Vec<ShortestPathRequest<V>> {
    graph
        .vertices()
        .flat_map(|source| {
            graph.vertices().map(move |target| ShortestPathRequest {
                source: graph.id_of(source).clone(),
                target: graph.id_of(target).clone(),
            })
        })
        .collect()
}

/// Answers all requests with the reference pathfinder.
pub fn generate_test_cases<V: VertexKey>(
    oracle: &dyn PathFinding<V>,
    requests: Vec<ShortestPathRequest<V>>,
    progress: bool,
) -> Result<Vec<ShortestPathTestCase<V>>> {
    let pb = get_optional_progressbar(progress, "Generating test cases", requests.len() as u64);
    let test_cases = requests
        .into_par_iter()
        .map(|request| {
            let distance = oracle.shortest_path_distance(&request.source, &request.target);
            pb.inc(1);
            distance.map(|distance| ShortestPathTestCase { request, distance })
        })
        .collect();
    pb.finish_and_clear();
    test_cases
}

/// Runs all test cases against `pathfinder` in parallel and returns the
/// cases it answered differently.
pub fn validate<V: VertexKey>(
    pathfinder: &dyn PathFinding<V>,
    test_cases: &[ShortestPathTestCase<V>],
    progress: bool,
) -> Result<Vec<Mismatch<V>>> {
    let pb = get_optional_progressbar(progress, "Validating", test_cases.len() as u64);
    let answers = test_cases
        .par_iter()
        .map(|test_case| {
            let answer = pathfinder
                .shortest_path_distance(&test_case.request.source, &test_case.request.target);
            pb.inc(1);
            answer
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();

    Ok(test_cases
        .iter()
        .zip(answers)
        .filter(|(test_case, actual)| !distances_match(test_case.distance, *actual))
        .map(|(test_case, actual)| Mismatch {
            test_case: test_case.clone(),
            actual,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::graph_factory::GraphFactory,
        search::{bidirectional::BidirectionalDijkstra, dijkstra::Dijkstra},
    };

    #[test]
    fn oracles_agree() {
        let graph = GraphFactory::grid(5, 11);
        let requests = random_requests(&graph, 200, 4);
        let test_cases = generate_test_cases(&Dijkstra::new(&graph), requests, false).unwrap();

        let mismatches =
            validate(&BidirectionalDijkstra::new(&graph), &test_cases, false).unwrap();
        assert!(mismatches.is_empty());
    }

    #[test]
    fn reports_wrong_answers() {
        let graph = GraphFactory::grid(3, 0);
        let mut test_cases =
            generate_test_cases(&Dijkstra::new(&graph), all_requests(&graph), false).unwrap();
        assert_eq!(test_cases.len(), 81);

        test_cases[1].distance = Some(1000.0);
        let mismatches = validate(&Dijkstra::new(&graph), &test_cases, false).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].test_case.request, test_cases[1].request);
    }

    #[test]
    fn unknown_vertex_aborts_validation() {
        let graph = GraphFactory::grid(2, 0);
        let test_cases = vec![ShortestPathTestCase {
            request: ShortestPathRequest {
                source: 1,
                target: 99,
            },
            distance: None,
        }];
        assert!(validate(&Dijkstra::new(&graph), &test_cases, false).is_err());
    }
}
