use ahash::{HashSet, HashSetExt};

use crate::graphs::Vertex;

pub trait VertexExpandedData {
    /// Marks the vertex as expanded and returns whether it was already
    /// expanded before.
    fn expand(&mut self, vertex: Vertex) -> bool;

    fn is_expanded(&self, vertex: Vertex) -> bool;

    fn clear(&mut self);
}

pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices as usize],
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: Vertex) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    fn is_expanded(&self, vertex: Vertex) -> bool {
        self.expanded[vertex as usize]
    }

    fn clear(&mut self) {
        self.expanded.fill(false);
    }
}

#[derive(Default)]
pub struct VertexExpandedDataHashSet {
    expanded: HashSet<Vertex>,
}

impl VertexExpandedDataHashSet {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

impl VertexExpandedData for VertexExpandedDataHashSet {
    fn expand(&mut self, vertex: Vertex) -> bool {
        !self.expanded.insert(vertex)
    }

    fn is_expanded(&self, vertex: Vertex) -> bool {
        self.expanded.contains(&vertex)
    }

    fn clear(&mut self) {
        self.expanded.clear();
    }
}
