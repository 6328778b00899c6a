use ahash::{HashMap, HashMapExt};

use super::builder::HierarchyBuilder;
use crate::{
    config::BuildConfig,
    error::{Error, Result},
    graphs::{graph::Graph, vec_vec_graph::VecVecGraph, Level, Vertex, VertexKey},
};

/// A built contraction hierarchy. Immutable and safe to query concurrently.
///
/// Both derived graphs only hold edges from a lower to a higher level. The
/// upward graph keeps every augmented edge `u -> v` with
/// `level(u) < level(v)`. The downward graph stores every remaining edge
/// `u -> v` reversed as `v -> u`, so it is searched backwards from the target.
pub struct ContractedGraph<V: VertexKey> {
    pub upward_graph: VecVecGraph,
    pub downward_graph: VecVecGraph,
    pub level_to_vertex: Vec<Vertex>,
    pub vertex_to_level: Vec<Level>,
    ids: Vec<V>,
    index: HashMap<V, Vertex>,
}

impl<V: VertexKey> ContractedGraph<V> {
    /// Contracts a copy of `graph` and builds the hierarchy from it.
    pub fn by_contraction(graph: &Graph<V>, config: &BuildConfig) -> ContractedGraph<V> {
        HierarchyBuilder::new(graph.clone(), config).build()
    }

    /// Splits the shortcut augmented `graph` by the contraction order.
    /// `level_to_vertex` must hold every vertex exactly once.
    pub fn new(graph: &Graph<V>, level_to_vertex: Vec<Vertex>) -> ContractedGraph<V> {
        let vertex_to_level = vertex_to_level(&level_to_vertex);
        let number_of_vertices = graph.number_of_vertices();

        let mut upward_edges = Vec::new();
        let mut downward_edges = Vec::new();
        for edge in graph.all_edges() {
            let tail_level = vertex_to_level[edge.tail as usize];
            let head_level = vertex_to_level[edge.head as usize];
            if tail_level < head_level {
                upward_edges.push(edge);
            } else if tail_level > head_level {
                downward_edges.push(edge.reversed());
            }
            // Self loops never lie on a shortest path and are dropped.
        }

        let ids: Vec<V> = graph
            .vertices()
            .map(|vertex| graph.id_of(vertex).clone())
            .collect();
        let mut index = HashMap::with_capacity(ids.len());
        for (vertex, id) in ids.iter().enumerate() {
            index.insert(id.clone(), vertex as Vertex);
        }

        ContractedGraph {
            upward_graph: VecVecGraph::from_edges(number_of_vertices, &upward_edges),
            downward_graph: VecVecGraph::from_edges(number_of_vertices, &downward_edges),
            level_to_vertex,
            vertex_to_level,
            ids,
            index,
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.ids.len() as u32
    }

    pub fn index_of(&self, id: &V) -> Result<Vertex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::unknown_vertex(id))
    }

    pub fn id_of(&self, vertex: Vertex) -> &V {
        &self.ids[vertex as usize]
    }

    /// Rank (level) of the vertex in the contraction order.
    pub fn rank(&self, id: &V) -> Result<Level> {
        let vertex = self.index_of(id)?;
        Ok(self.vertex_to_level[vertex as usize])
    }

    /// Identifiers in contraction order, least important first.
    pub fn contraction_order(&self) -> impl Iterator<Item = &V> + '_ {
        self.level_to_vertex
            .iter()
            .map(|&vertex| self.id_of(vertex))
    }
}

pub fn vertex_to_level(level_to_vertex: &[Vertex]) -> Vec<Level> {
    let mut vertex_to_level = vec![0; level_to_vertex.len()];

    for (level, &vertex) in level_to_vertex.iter().enumerate() {
        vertex_to_level[vertex as usize] = level as Level;
    }

    vertex_to_level
}
