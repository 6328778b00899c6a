pub mod config;
pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use config::{BuildConfig, OrderingStrategy, ShortcutEstimate};
pub use error::{Error, Result};
pub use graphs::{graph::Graph, Distance, Position, Vertex, VertexKey, Weight};
pub use search::{ch::contracted_graph::ContractedGraph, PathFinding};
