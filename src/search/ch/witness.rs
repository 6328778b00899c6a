use crate::{
    graphs::{graph::Graph, Distance, Vertex, VertexKey},
    search::collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
};

/// Local Dijkstra from `source` that never enters `avoid` or an already
/// contracted vertex. Stops once `settled_limit` vertices are settled or the
/// next distance exceeds `max_distance`.
///
/// Every distance in the result is the length of an actual path, so a stored
/// distance `<= d` proves a witness of length `<= d`. The converse does not
/// hold since the search is bounded.
pub fn witness_search<V: VertexKey>(
    graph: &Graph<V>,
    source: Vertex,
    avoid: Vertex,
    max_distance: Distance,
    settled_limit: usize,
) -> DijkstraDataHashMap {
    let mut data = DijkstraDataHashMap::new();
    let mut expanded = VertexExpandedDataHashSet::new();
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    data.set_distance(source, 0.0);
    queue.insert(source, 0.0);

    while let Some((tail, distance_tail)) = queue.pop() {
        if distance_tail > max_distance || expanded.len() >= settled_limit {
            break;
        }
        if expanded.expand(tail) {
            continue;
        }

        for edge in graph.out_edges(tail) {
            if edge.head == avoid || graph.is_contracted(edge.head) {
                continue;
            }

            let current_distance_head = data.get_distance(edge.head).unwrap_or(Distance::INFINITY);
            let alternative_distance_head = distance_tail + edge.weight;
            if alternative_distance_head < current_distance_head {
                data.set_distance(edge.head, alternative_distance_head);
                queue.insert(edge.head, alternative_distance_head);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<u32> {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_vertex(id);
        }
        graph.add_edge(&0, &1, 1.0).unwrap();
        graph.add_edge(&1, &3, 1.0).unwrap();
        graph.add_edge(&0, &2, 2.0).unwrap();
        graph.add_edge(&2, &3, 2.0).unwrap();
        graph
    }

    #[test]
    fn avoids_the_contracted_vertex() {
        let graph = diamond();

        let data = witness_search(&graph, 0, 1, f64::INFINITY, usize::MAX);
        assert_eq!(data.get_distance(3), Some(4.0));
        assert_eq!(data.get_distance(1), None);
    }

    #[test]
    fn respects_distance_bound() {
        let graph = diamond();

        let data = witness_search(&graph, 0, 1, 1.0, usize::MAX);
        assert_eq!(data.get_distance(2), Some(2.0));
        assert_eq!(data.get_distance(3), None);
    }

    #[test]
    fn respects_settled_limit() {
        let graph = diamond();

        let data = witness_search(&graph, 0, 1, f64::INFINITY, 1);
        assert_eq!(data.get_distance(3), None);
    }
}
