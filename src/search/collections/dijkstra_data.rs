use ahash::{HashMap, HashMapExt};

use crate::graphs::{Distance, Vertex};

/// Tentative distances of a Dijkstra search.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the distance to a given vertex, if it was reached.
    fn get_distance(&self, vertex: Vertex) -> Option<Distance>;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);
}

/// Dense storage, sized for the whole graph. Suited for searches that touch
/// most of the graph.
pub struct DijkstraDataVec {
    distances: Vec<Distance>,
}

impl DijkstraDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        DijkstraDataVec {
            distances: vec![Distance::INFINITY; number_of_vertices as usize],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.distances.fill(Distance::INFINITY);
    }

    fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        let distance = *self.distances.get(vertex as usize)?;
        (distance != Distance::INFINITY).then_some(distance)
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }
}

/// Sparse storage for searches with small search spaces, like hierarchy
/// queries and witness searches.
#[derive(Default)]
pub struct DijkstraDataHashMap {
    distances: HashMap<Vertex, Distance>,
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            distances: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn clear(&mut self) {
        self.distances.clear();
    }

    fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        self.distances.get(&vertex).copied()
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances.insert(vertex, distance);
    }
}
