use std::{fmt::Debug, hash::Hash};

use serde::{Deserialize, Serialize};

pub mod graph;
pub mod graph_factory;
pub mod vec_vec_graph;

/// Dense index of a vertex inside a graph's arena.
pub type Vertex = u32;
pub type Weight = f64;
pub type Distance = f64;
/// Position of a vertex in the contraction order.
pub type Level = u32;

/// External identifier of a vertex. Opaque, only equality and hashing are used.
pub trait VertexKey: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync> VertexKey for T {}

/// Optional positional metadata of a vertex. Never read by any algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn remove_head(&self) -> HeadlessEdge {
        HeadlessEdge {
            tail: self.tail,
            weight: self.weight,
        }
    }
}

/// Outgoing edge stored at its tail.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

/// Incoming edge stored at its head.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadlessEdge {
    pub tail: Vertex,
    pub weight: Weight,
}

pub fn is_valid_weight(weight: Weight) -> bool {
    weight.is_finite() && weight >= 0.0
}
