use super::{
    contraction::{uncontracted_in_neighbors, uncontracted_out_neighbors},
    witness::witness_search,
};
use crate::{
    config::ShortcutEstimate,
    graphs::{graph::Graph, Distance, Vertex, VertexKey},
    search::collections::dijkstra_data::DijkstraData,
};

/// Heuristic cost of contracting a vertex. Lower values are contracted first.
pub trait ImportanceEstimator<V: VertexKey>: Send + Sync {
    /// Importance of the uncontracted `vertex`. `shortcuts_added` is the number
    /// of shortcuts inserted so far that have `vertex` as an endpoint.
    fn importance(&self, graph: &Graph<V>, vertex: Vertex, shortcuts_added: u32) -> i64;
}

pub fn estimator_from_config<V: VertexKey>(
    shortcut_estimate: ShortcutEstimate,
) -> Box<dyn ImportanceEstimator<V>> {
    match shortcut_estimate {
        ShortcutEstimate::Pessimistic => Box::new(PessimisticEstimator {}),
        ShortcutEstimate::WitnessSearch { settled_limit } => {
            Box::new(WitnessEstimator { settled_limit })
        }
    }
}

/// `(degree - contracted neighbors)` part shared by all estimators. Counts
/// outgoing edges, parallel edges included.
pub fn remaining_degree<V: VertexKey>(graph: &Graph<V>, vertex: Vertex) -> i64 {
    let degree = graph.out_edges(vertex).len() as i64;
    let contracted_neighbors = graph
        .out_edges(vertex)
        .iter()
        .filter(|edge| graph.is_contracted(edge.head))
        .count() as i64;

    degree - contracted_neighbors
}

/// Assumes every ordered pair of uncontracted neighbors needs a shortcut.
pub struct PessimisticEstimator {}

impl PessimisticEstimator {
    pub fn estimated_shortcuts<V: VertexKey>(graph: &Graph<V>, vertex: Vertex) -> i64 {
        let k = graph.uncontracted_neighbors(vertex).len() as i64;
        k * (k - 1).max(0)
    }
}

impl<V: VertexKey> ImportanceEstimator<V> for PessimisticEstimator {
    fn importance(&self, graph: &Graph<V>, vertex: Vertex, shortcuts_added: u32) -> i64 {
        remaining_degree(graph, vertex)
            + Self::estimated_shortcuts(graph, vertex)
            + shortcuts_added as i64
    }
}

/// Counts only the neighbor pairs for which a bounded witness search finds
/// no path avoiding the vertex that is at most as long as the path through it.
pub struct WitnessEstimator {
    pub settled_limit: usize,
}

impl WitnessEstimator {
    pub fn required_shortcuts<V: VertexKey>(&self, graph: &Graph<V>, vertex: Vertex) -> i64 {
        let in_neighbors = uncontracted_in_neighbors(graph, vertex);
        let out_neighbors = uncontracted_out_neighbors(graph, vertex);

        let Some(max_out_weight) = out_neighbors
            .iter()
            .map(|&(_, weight)| weight)
            .reduce(Distance::max)
        else {
            return 0;
        };

        let mut required = 0;
        for &(tail, in_weight) in in_neighbors.iter() {
            let data = witness_search(
                graph,
                tail,
                vertex,
                in_weight + max_out_weight,
                self.settled_limit,
            );

            required += out_neighbors
                .iter()
                .filter(|&&(head, out_weight)| {
                    head != tail
                        && data
                            .get_distance(head)
                            .map_or(true, |witness| witness > in_weight + out_weight)
                })
                .count() as i64;
        }

        required
    }
}

impl<V: VertexKey> ImportanceEstimator<V> for WitnessEstimator {
    fn importance(&self, graph: &Graph<V>, vertex: Vertex, shortcuts_added: u32) -> i64 {
        remaining_degree(graph, vertex)
            + self.required_shortcuts(graph, vertex)
            + shortcuts_added as i64
    }
}
