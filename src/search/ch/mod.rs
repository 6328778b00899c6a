pub mod builder;
pub mod contracted_graph;
pub mod contraction;
pub mod importance;
pub mod pathfinding;
pub mod witness;
