use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the spanning-tree computation and its priority queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input graph failed structural validation: an empty edge list, a
    /// zero vertex count, an edge endpoint outside `[0, node_count)`, or a
    /// negative edge weight.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// The graph has no spanning tree: the frontier ran dry after reaching
    /// only `spanned` of `total` vertices.
    #[error("disconnected graph: reached {spanned} of {total} vertices")]
    Disconnected { spanned: usize, total: usize },

    /// Extraction was attempted on an empty priority queue.
    #[error("extract called on an empty queue")]
    EmptyQueue,
}

impl Error {
    /// Builds an [`Error::InvalidGraph`] from any message.
    pub fn invalid_graph<S: Into<String>>(msg: S) -> Self {
        Error::InvalidGraph(msg.into())
    }
}
