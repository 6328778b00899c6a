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

/// Plain Dijkstra over a graph store. Serves as reference for the hierarchy.
pub struct Dijkstra<'a, V: VertexKey> {
    pub graph: &'a Graph<V>,
}

impl<'a, V: VertexKey> Dijkstra<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Self {
        Dijkstra { graph }
    }

    /// Distances from `source` to every vertex, indexed by dense vertex index.
    pub fn one_to_all(&self, source: &V) -> Result<Vec<Option<Distance>>> {
        let source = self.graph.index_of(source)?;
        let data = dijkstra_one_to_all_wrapped(self.graph, source);
        Ok(self
            .graph
            .vertices()
            .map(|vertex| data.get_distance(vertex))
            .collect())
    }
}

impl<'a, V: VertexKey> PathFinding<V> for Dijkstra<'a, V> {
    fn shortest_path_distance(&self, source: &V, target: &V) -> Result<Option<Distance>> {
        let source = self.graph.index_of(source)?;
        let target = self.graph.index_of(target)?;
        Ok(dijkstra_one_to_one_wrapped(self.graph, source, target))
    }
}

pub fn dijkstra_one_to_one_wrapped<V: VertexKey>(
    graph: &Graph<V>,
    source: Vertex,
    target: Vertex,
) -> Option<Distance> {
    let mut data = DijkstraDataVec::new(graph.number_of_vertices());
    let mut expanded = VertexExpandedDataVec::new(graph.number_of_vertices());
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    dijkstra_one_to_one(
        graph,
        &mut data,
        &mut expanded,
        &mut queue,
        source,
        Some(target),
    );

    data.get_distance(target)
}

pub fn dijkstra_one_to_all_wrapped<V: VertexKey>(
    graph: &Graph<V>,
    source: Vertex,
) -> DijkstraDataVec {
    let mut data = DijkstraDataVec::new(graph.number_of_vertices());
    let mut expanded = VertexExpandedDataVec::new(graph.number_of_vertices());
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    dijkstra_one_to_one(graph, &mut data, &mut expanded, &mut queue, source, None);

    data
}

/// Settles vertices in order of distance from `source` until `target` is
/// settled, or until everything reachable is settled if there is no target.
pub fn dijkstra_one_to_one<V: VertexKey>(
    graph: &Graph<V>,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Option<Vertex>,
) {
    data.set_distance(source, 0.0);
    queue.insert(source, 0.0);

    while let Some((tail, distance_tail)) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        if Some(tail) == target {
            break;
        }

        for edge in graph.out_edges(tail) {
            let current_distance_head = data.get_distance(edge.head).unwrap_or(Distance::INFINITY);
            let alternative_distance_head = distance_tail + edge.weight;
            if alternative_distance_head < current_distance_head {
                data.set_distance(edge.head, alternative_distance_head);
                queue.insert(edge.head, alternative_distance_head);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_vertex(id);
        }
        graph.add_edge(&"a", &"b", 1.0).unwrap();
        graph.add_edge(&"b", &"c", 2.0).unwrap();
        graph.add_edge(&"a", &"c", 4.0).unwrap();
        graph
    }

    #[test]
    fn finds_shortest_distance() {
        let graph = line_graph();
        let dijkstra = Dijkstra::new(&graph);

        assert_eq!(dijkstra.shortest_path_distance(&"a", &"c").unwrap(), Some(3.0));
        assert_eq!(dijkstra.shortest_path_distance(&"a", &"a").unwrap(), Some(0.0));
        assert_eq!(dijkstra.shortest_path_distance(&"c", &"a").unwrap(), None);
        assert_eq!(dijkstra.shortest_path_distance(&"a", &"d").unwrap(), None);
        assert!(dijkstra.shortest_path_distance(&"a", &"z").is_err());
    }

    #[test]
    fn one_to_all_distances() {
        let graph = line_graph();
        let distances = Dijkstra::new(&graph).one_to_all(&"a").unwrap();
        assert_eq!(distances, vec![Some(0.0), Some(1.0), Some(3.0), None]);
    }
}
