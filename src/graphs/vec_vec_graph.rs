use serde::{Deserialize, Serialize};

use super::{TaillessEdge, Vertex, Weight, WeightedEdge};

/// Static adjacency list graph. Edges sharing a tail are sorted by head and
/// there is at most one edge per ordered pair.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecVecGraph {
    pub fn with_vertices(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Builds a graph over `number_of_vertices` vertices. Of several edges
    /// between the same ordered pair only the lightest one is kept.
    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> VecVecGraph {
        let mut graph = VecVecGraph::with_vertices(number_of_vertices);

        edges.iter().for_each(|edge| {
            if edge.weight < graph.get_weight(edge.tail, edge.head).unwrap_or(Weight::INFINITY) {
                graph.set_weight(edge);
            }
        });

        graph
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn edges(&self, tail: Vertex) -> &[TaillessEdge] {
        self.edges
            .get(tail as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().enumerate().flat_map(|(tail, edges)| {
            edges.iter().map(move |edge| edge.set_tail(tail as Vertex))
        })
    }

    pub fn get_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        // Retrieve the vector of edges sharing the same tail, if it exists.
        let edges_sharing_tail = self.edges.get(tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&head, |tailless_edge| tailless_edge.head)
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight)
    }

    fn set_weight(&mut self, edge: &WeightedEdge) {
        let max_edge_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[edge.tail as usize];
        match edges_sharing_tail.binary_search_by_key(&edge.head, |other| other.head) {
            Ok(index) => edges_sharing_tail[index].weight = edge.weight,
            Err(index) => edges_sharing_tail.insert(index, edge.remove_tail()),
        }
    }
}
