use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
    },
    PathFinding,
};
use crate::{
    error::Result,
    graphs::{graph::Graph, Distance, Vertex, VertexKey},
};

/// Bidirectional Dijkstra over a graph store: forward over out-edges from the
/// source, backward over in-edges from the target.
pub struct BidirectionalDijkstra<'a, V: VertexKey> {
    pub graph: &'a Graph<V>,
}

impl<'a, V: VertexKey> BidirectionalDijkstra<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Self {
        BidirectionalDijkstra { graph }
    }
}

impl<'a, V: VertexKey> PathFinding<V> for BidirectionalDijkstra<'a, V> {
    fn shortest_path_distance(&self, source: &V, target: &V) -> Result<Option<Distance>> {
        let source = self.graph.index_of(source)?;
        let target = self.graph.index_of(target)?;
        Ok(bidirectional_one_to_one_wrapped(self.graph, source, target))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Forward,
    Backward,
}

struct SearchSide {
    direction: Direction,
    data: DijkstraDataVec,
    expanded: VertexExpandedDataVec,
    queue: VertexDistanceQueueBinaryHeap,
}

impl SearchSide {
    fn new(direction: Direction, number_of_vertices: u32, start: Vertex) -> Self {
        let mut side = SearchSide {
            direction,
            data: DijkstraDataVec::new(number_of_vertices),
            expanded: VertexExpandedDataVec::new(number_of_vertices),
            queue: VertexDistanceQueueBinaryHeap::new(),
        };
        side.data.set_distance(start, 0.0);
        side.queue.insert(start, 0.0);
        side
    }

    fn min_key(&self) -> Distance {
        self.queue
            .peek()
            .map_or(Distance::INFINITY, |(_, distance)| distance)
    }
}

pub fn bidirectional_one_to_one_wrapped<V: VertexKey>(
    graph: &Graph<V>,
    source: Vertex,
    target: Vertex,
) -> Option<Distance> {
    if source == target {
        return Some(0.0);
    }

    let number_of_vertices = graph.number_of_vertices();
    let mut forward = SearchSide::new(Direction::Forward, number_of_vertices, source);
    let mut backward = SearchSide::new(Direction::Backward, number_of_vertices, target);
    let mut best = Distance::INFINITY;

    // Any s-t path has length at least the sum of both frontier minima.
    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        if forward.min_key() + backward.min_key() >= best {
            break;
        }

        if forward.min_key() <= backward.min_key() {
            single_search_step(graph, &mut forward, &backward, &mut best);
        } else {
            single_search_step(graph, &mut backward, &forward, &mut best);
        }
    }

    (best != Distance::INFINITY).then_some(best)
}

fn single_search_step<V: VertexKey>(
    graph: &Graph<V>,
    side: &mut SearchSide,
    other: &SearchSide,
    best: &mut Distance,
) {
    let Some((tail, distance_tail)) = side.queue.pop() else {
        return;
    };
    if side.expanded.expand(tail) {
        return;
    }

    let mut relax = |head: Vertex, weight: Distance| {
        let alternative_distance_head = distance_tail + weight;
        let current_distance_head = side.data.get_distance(head).unwrap_or(Distance::INFINITY);
        if alternative_distance_head < current_distance_head {
            side.data.set_distance(head, alternative_distance_head);
            side.queue.insert(head, alternative_distance_head);
            if let Some(other_distance) = other.data.get_distance(head) {
                *best = best.min(alternative_distance_head + other_distance);
            }
        }
    };

    match side.direction {
        Direction::Forward => graph
            .out_edges(tail)
            .iter()
            .for_each(|edge| relax(edge.head, edge.weight)),
        Direction::Backward => graph
            .in_edges(tail)
            .iter()
            .for_each(|edge| relax(edge.tail, edge.weight)),
    }
}
