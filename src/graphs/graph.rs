use ahash::{HashMap, HashMapExt};
use itertools::Itertools;

use super::{
    is_valid_weight, HeadlessEdge, Level, Position, TaillessEdge, Vertex, VertexKey, Weight,
    WeightedEdge,
};
use crate::error::{Error, Result};

/// A vertex record. Neighbors are referenced by their dense index, never by
/// reference, so the cyclic graph has no ownership cycles.
#[derive(Clone, Debug)]
pub struct VertexRecord<V> {
    pub id: V,
    pub position: Option<Position>,
    pub out_edges: Vec<TaillessEdge>,
    pub in_edges: Vec<HeadlessEdge>,
    /// Contraction order. `None` while the vertex is unranked.
    pub rank: Option<Level>,
}

impl<V> VertexRecord<V> {
    fn new(id: V, position: Option<Position>) -> Self {
        VertexRecord {
            id,
            position,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            rank: None,
        }
    }
}

/// Graph store owning all vertices and their weighted out- and in-edges.
///
/// Parallel edges between the same ordered pair are allowed. Identifiers are
/// mapped to dense indices in insertion order, which is also the order used to
/// break ties deterministically.
#[derive(Clone, Debug)]
pub struct Graph<V: VertexKey> {
    index: HashMap<V, Vertex>,
    vertices: Vec<VertexRecord<V>>,
    number_of_edges: usize,
}

impl<V: VertexKey> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> Graph<V> {
    pub fn new() -> Self {
        Graph {
            index: HashMap::new(),
            vertices: Vec::new(),
            number_of_edges: 0,
        }
    }

    /// Adds a vertex if it is not already present. Returns its index.
    pub fn add_vertex(&mut self, id: V) -> Vertex {
        self.insert_vertex(id, None)
    }

    /// Like [`Graph::add_vertex`]; the position is only set on first insertion.
    pub fn add_vertex_with_position(&mut self, id: V, position: Position) -> Vertex {
        self.insert_vertex(id, Some(position))
    }

    fn insert_vertex(&mut self, id: V, position: Option<Position>) -> Vertex {
        if let Some(&vertex) = self.index.get(&id) {
            return vertex;
        }

        let vertex = self.vertices.len() as Vertex;
        self.index.insert(id.clone(), vertex);
        self.vertices.push(VertexRecord::new(id, position));
        vertex
    }

    /// Adds the directed edge `from -> to`. Both endpoints must already exist
    /// and the weight must be finite and non-negative.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: Weight) -> Result<()> {
        let tail = self.index_of(from)?;
        let head = self.index_of(to)?;

        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight {
                tail: format!("{:?}", from),
                head: format!("{:?}", to),
                weight,
            });
        }

        self.push_edge(WeightedEdge::new(tail, head, weight));
        Ok(())
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    pub fn add_edge_bidirectional(&mut self, a: &V, b: &V, weight: Weight) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    fn push_edge(&mut self, edge: WeightedEdge) {
        self.vertices[edge.tail as usize]
            .out_edges
            .push(edge.remove_tail());
        self.vertices[edge.head as usize]
            .in_edges
            .push(edge.remove_head());
        self.number_of_edges += 1;
    }

    /// Replaces every existing `tail -> head` edge by a single edge of the
    /// given weight, or appends one if there is none.
    pub(crate) fn set_shortcut(&mut self, edge: WeightedEdge) {
        let out_edges = &mut self.vertices[edge.tail as usize].out_edges;
        let before = out_edges.len();
        out_edges.retain(|out_edge| out_edge.head != edge.head);
        let removed = before - out_edges.len();

        self.vertices[edge.head as usize]
            .in_edges
            .retain(|in_edge| in_edge.tail != edge.tail);

        self.number_of_edges -= removed;
        self.push_edge(edge);
    }

    pub(crate) fn set_rank(&mut self, vertex: Vertex, rank: Level) {
        self.vertices[vertex as usize].rank = Some(rank);
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn number_of_edges(&self) -> usize {
        self.number_of_edges
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Vertex> {
        0..self.number_of_vertices()
    }

    pub fn contains(&self, id: &V) -> bool {
        self.index.contains_key(id)
    }

    pub fn index_of(&self, id: &V) -> Result<Vertex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::unknown_vertex(id))
    }

    pub fn id_of(&self, vertex: Vertex) -> &V {
        &self.vertices[vertex as usize].id
    }

    pub fn position(&self, id: &V) -> Result<Option<Position>> {
        let vertex = self.index_of(id)?;
        Ok(self.vertices[vertex as usize].position)
    }

    pub fn rank(&self, vertex: Vertex) -> Option<Level> {
        self.vertices[vertex as usize].rank
    }

    pub fn is_contracted(&self, vertex: Vertex) -> bool {
        self.rank(vertex).is_some()
    }

    pub fn out_edges(&self, vertex: Vertex) -> &[TaillessEdge] {
        &self.vertices[vertex as usize].out_edges
    }

    pub fn in_edges(&self, vertex: Vertex) -> &[HeadlessEdge] {
        &self.vertices[vertex as usize].in_edges
    }

    /// Current outgoing edges of `id` as `(target, weight)`. May contain
    /// several edges towards the same neighbor.
    pub fn edges_of(&self, id: &V) -> Result<Vec<(V, Weight)>> {
        let vertex = self.index_of(id)?;
        Ok(self
            .out_edges(vertex)
            .iter()
            .map(|edge| (self.id_of(edge.head).clone(), edge.weight))
            .collect())
    }

    pub fn all_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |tail| {
            self.out_edges(tail)
                .iter()
                .map(move |edge| edge.set_tail(tail))
        })
    }

    /// Smallest weight over all `tail -> head` edges.
    pub fn get_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        self.out_edges(tail)
            .iter()
            .filter(|edge| edge.head == head)
            .map(|edge| edge.weight)
            .reduce(Weight::min)
    }

    /// Distinct uncontracted vertices adjacent to `vertex` in either direction.
    pub fn uncontracted_neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        self.out_edges(vertex)
            .iter()
            .map(|edge| edge.head)
            .chain(self.in_edges(vertex).iter().map(|edge| edge.tail))
            .filter(|&neighbor| neighbor != vertex && !self.is_contracted(neighbor))
            .unique()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        assert_eq!(graph.add_vertex("a"), a);
        assert_ne!(a, b);
        assert_eq!(graph.number_of_vertices(), 2);
    }

    #[test]
    fn first_position_wins() {
        let mut graph = Graph::new();
        let first = Position {
            latitude: 1.0,
            longitude: 2.0,
        };
        graph.add_vertex_with_position(7, first);
        graph.add_vertex_with_position(
            7,
            Position {
                latitude: 3.0,
                longitude: 4.0,
            },
        );
        assert_eq!(graph.position(&7).unwrap(), Some(first));
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut graph = Graph::new();
        graph.add_vertex(1);

        assert!(matches!(
            graph.add_edge(&1, &2, 1.0),
            Err(Error::UnknownVertex(_))
        ));
        assert!(matches!(
            graph.add_edge(&2, &1, 1.0),
            Err(Error::UnknownVertex(_))
        ));
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn add_edge_rejects_invalid_weights() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);

        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                graph.add_edge(&1, &2, weight),
                Err(Error::InvalidWeight { .. })
            ));
        }
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.add_edge(&1, &2, 0.0).is_ok());
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = Graph::new();
        graph.add_vertex('x');
        graph.add_vertex('y');
        graph.add_edge(&'x', &'y', 3.0).unwrap();
        graph.add_edge(&'x', &'y', 2.0).unwrap();

        assert_eq!(graph.edges_of(&'x').unwrap(), vec![('y', 3.0), ('y', 2.0)]);
        assert_eq!(graph.get_weight(0, 1), Some(2.0));
        assert_eq!(graph.in_edges(1).len(), 2);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn set_shortcut_replaces_parallel_edges() {
        let mut graph = Graph::new();
        for id in 0..3 {
            graph.add_vertex(id);
        }
        graph.add_edge(&0, &1, 5.0).unwrap();
        graph.add_edge(&0, &1, 4.0).unwrap();
        graph.add_edge(&2, &1, 1.0).unwrap();

        graph.set_shortcut(WeightedEdge::new(0, 1, 2.0));

        assert_eq!(graph.edges_of(&0).unwrap(), vec![(1, 2.0)]);
        assert_eq!(graph.in_edges(1).len(), 2);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn neighbors_cover_both_directions() {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_vertex(id);
        }
        graph.add_edge(&0, &1, 1.0).unwrap();
        graph.add_edge(&2, &0, 1.0).unwrap();
        graph.add_edge(&0, &2, 1.0).unwrap();
        graph.add_edge(&0, &0, 1.0).unwrap();
        graph.set_rank(1, 0);

        assert_eq!(graph.uncontracted_neighbors(0), vec![2]);
    }

    #[test]
    fn unknown_lookup_fails() {
        let graph: Graph<u32> = Graph::new();
        assert!(matches!(graph.edges_of(&3), Err(Error::UnknownVertex(_))));
        assert!(!graph.contains(&3));
    }
}
