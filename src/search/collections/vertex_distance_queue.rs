use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;

use crate::graphs::{Distance, Vertex};

/// A priority queue handing out the vertex with the smallest distance first.
///
/// There is no decrease key operation. A vertex may be queued several times,
/// callers skip entries of vertices that are already expanded.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the entry with the smallest distance.
    fn pop(&mut self) -> Option<(Vertex, Distance)>;

    fn peek(&self) -> Option<(Vertex, Distance)>;

    fn is_empty(&self) -> bool;
}

/// Equal distances are ordered by vertex index, so searches are deterministic.
#[derive(Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(OrderedFloat<Distance>, Vertex)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(Reverse((OrderedFloat(distance), vertex)));
    }

    fn pop(&mut self) -> Option<(Vertex, Distance)> {
        let Reverse((distance, vertex)) = self.heap.pop()?;
        Some((vertex, distance.into_inner()))
    }

    fn peek(&self) -> Option<(Vertex, Distance)> {
        let Reverse((distance, vertex)) = self.heap.peek()?;
        Some((*vertex, distance.into_inner()))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
