use crate::{
    error::Result,
    graphs::{Distance, VertexKey},
};

pub mod bidirectional;
pub mod ch;
pub mod collections;
pub mod dijkstra;
pub mod path;
pub mod validation;

/// Point to point shortest distance queries.
///
/// `Ok(None)` means the target is unreachable from the source. Unknown
/// identifiers fail with [`crate::Error::UnknownVertex`].
pub trait PathFinding<V: VertexKey>: Send + Sync {
    fn shortest_path_distance(&self, source: &V, target: &V) -> Result<Option<Distance>>;
}
