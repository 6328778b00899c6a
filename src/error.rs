/// Errors raised while building graphs, contracting them or answering queries.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown vertex {0}")]
    UnknownVertex(String),

    #[error("invalid weight {weight} on edge {tail} -> {head}")]
    InvalidWeight {
        tail: String,
        head: String,
        weight: f64,
    },

    #[error("unable to parse line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(id: &V) -> Error {
        Error::UnknownVertex(format!("{:?}", id))
    }
}
