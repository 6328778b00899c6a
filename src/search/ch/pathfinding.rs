use super::contracted_graph::ContractedGraph;
use crate::{
    error::Result,
    graphs::{vec_vec_graph::VecVecGraph, Distance, Vertex, VertexKey},
    search::{
        collections::{
            dijkstra_data::{DijkstraData, DijkstraDataHashMap},
            vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
            vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
        },
        PathFinding,
    },
};

impl<V: VertexKey> PathFinding<V> for ContractedGraph<V> {
    fn shortest_path_distance(&self, source: &V, target: &V) -> Result<Option<Distance>> {
        let source = self.index_of(source)?;
        let target = self.index_of(target)?;
        Ok(one_to_one_distance(
            &self.upward_graph,
            &self.downward_graph,
            source,
            target,
        ))
    }
}

impl<V: VertexKey> ContractedGraph<V> {
    /// Shortest distance from `source` to `target`, `None` if there is no path.
    pub fn query(&self, source: &V, target: &V) -> Result<Option<Distance>> {
        self.shortest_path_distance(source, target)
    }
}

/// State of one direction of the bidirectional search.
pub struct SearchSpace {
    pub data: DijkstraDataHashMap,
    pub expanded: VertexExpandedDataHashSet,
    pub queue: VertexDistanceQueueBinaryHeap,
    finished: bool,
}

impl SearchSpace {
    pub fn new(start: Vertex) -> Self {
        let mut search_space = SearchSpace {
            data: DijkstraDataHashMap::new(),
            expanded: VertexExpandedDataHashSet::new(),
            queue: VertexDistanceQueueBinaryHeap::new(),
            finished: false,
        };
        search_space.data.set_distance(start, 0.0);
        search_space.queue.insert(start, 0.0);
        search_space
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self) {
        self.finished = true;
        self.queue.clear();
    }
}

/// Hierarchy query. Forward search over the upward graph from `source`,
/// backward search over the (reversed) downward graph from `target`.
pub fn one_to_one_distance(
    upward_graph: &VecVecGraph,
    downward_graph: &VecVecGraph,
    source: Vertex,
    target: Vertex,
) -> Option<Distance> {
    if source == target {
        return Some(0.0);
    }

    let (distance, _forward, _backward) =
        one_to_one(upward_graph, downward_graph, source, target);
    distance
}

/// Like [`one_to_one_distance`] but also returns both search spaces.
pub fn one_to_one(
    upward_graph: &VecVecGraph,
    downward_graph: &VecVecGraph,
    source: Vertex,
    target: Vertex,
) -> (Option<Distance>, SearchSpace, SearchSpace) {
    let mut forward = SearchSpace::new(source);
    let mut backward = SearchSpace::new(target);
    let mut best = Distance::INFINITY;

    while !forward.is_finished() || !backward.is_finished() {
        single_search_step(upward_graph, &mut forward, &backward, &mut best);
        single_search_step(downward_graph, &mut backward, &forward, &mut best);
    }

    let distance = (best != Distance::INFINITY).then_some(best);
    (distance, forward, backward)
}

/// Single search step in one direction.
///
/// A side stops for good once its smallest key exceeds the best distance
/// found so far. Every vertex reached by both sides yields an upper bound,
/// the two searches do not have to settle the same vertex.
fn single_search_step(
    graph: &VecVecGraph,
    this: &mut SearchSpace,
    other: &SearchSpace,
    best: &mut Distance,
) {
    if this.finished {
        return;
    }

    let Some((tail, distance_tail)) = this.queue.pop() else {
        this.finish();
        return;
    };

    if distance_tail > *best {
        this.finish();
        return;
    }

    // The queue has no decrease key, skip outdated entries.
    if this.expanded.expand(tail) {
        return;
    }

    if let Some(other_distance_tail) = other.data.get_distance(tail) {
        *best = best.min(distance_tail + other_distance_tail);
    }

    for edge in graph.edges(tail) {
        let current_distance_head = this.data.get_distance(edge.head).unwrap_or(Distance::INFINITY);
        let alternative_distance_head = distance_tail + edge.weight;
        if alternative_distance_head < current_distance_head {
            this.data.set_distance(edge.head, alternative_distance_head);
            this.queue.insert(edge.head, alternative_distance_head);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::BuildConfig, graphs::graph::Graph, graphs::WeightedEdge};

    #[test]
    fn meets_at_highest_vertex() {
        // 0 -> 2 <- 1 in the upward graph sense, level order 0, 1, 2
        let upward_graph = VecVecGraph::from_edges(3, &[WeightedEdge::new(0, 2, 1.0)]);
        let downward_graph = VecVecGraph::from_edges(3, &[WeightedEdge::new(1, 2, 2.0)]);

        assert_eq!(one_to_one_distance(&upward_graph, &downward_graph, 0, 1), Some(3.0));
        assert_eq!(one_to_one_distance(&upward_graph, &downward_graph, 1, 0), None);
        assert_eq!(one_to_one_distance(&upward_graph, &downward_graph, 2, 2), Some(0.0));
    }

    #[test]
    fn meeting_on_tentative_distance_counts() {
        // Forward reaches 2 directly, backward reaches 2 via 1.
        let upward_graph = VecVecGraph::from_edges(4, &[WeightedEdge::new(0, 2, 5.0)]);
        let downward_graph = VecVecGraph::from_edges(
            4,
            &[WeightedEdge::new(3, 1, 1.0), WeightedEdge::new(1, 2, 1.0)],
        );

        let (distance, forward, backward) = one_to_one(&upward_graph, &downward_graph, 0, 3);
        assert_eq!(distance, Some(7.0));
        assert!(forward.is_finished() && backward.is_finished());
    }

    #[test]
    fn stops_sides_beyond_best_distance() {
        // The direct upward edge is short, everything else is far away.
        let upward_graph = VecVecGraph::from_edges(
            4,
            &[
                WeightedEdge::new(0, 3, 1.0),
                WeightedEdge::new(0, 1, 10.0),
                WeightedEdge::new(1, 2, 10.0),
            ],
        );
        let downward_graph = VecVecGraph::from_edges(4, &[]);

        let (distance, forward, _backward) = one_to_one(&upward_graph, &downward_graph, 0, 3);
        assert_eq!(distance, Some(1.0));
        assert!(!forward.expanded.is_expanded(1));
        assert!(!forward.expanded.is_expanded(2));
    }

    #[test]
    fn queries_by_identifier() {
        let mut graph = Graph::new();
        for id in ["a", "b", "c"] {
            graph.add_vertex(id);
        }
        graph.add_edge(&"a", &"b", 1.0).unwrap();
        graph.add_edge(&"b", &"c", 1.5).unwrap();

        let contracted_graph = ContractedGraph::by_contraction(&graph, &BuildConfig::default());
        assert_eq!(contracted_graph.query(&"a", &"c").unwrap(), Some(2.5));
        assert_eq!(contracted_graph.query(&"c", &"a").unwrap(), None);
        assert_eq!(contracted_graph.query(&"b", &"b").unwrap(), Some(0.0));
        assert!(contracted_graph.query(&"a", &"x").is_err());
        assert!(contracted_graph.query(&"x", &"x").is_err());
    }
}
