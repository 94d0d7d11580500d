use thiserror::Error;

/// Canonical result for the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A source handle was absent (e.g. a query names a source its engine
    /// does not know). Plain Rust values cannot be null, so this surfaces
    /// only at dynamic collaborator seams.
    #[error("source is absent")]
    NullSource,

    #[error("page size {0} must be greater than or equal to 1")]
    InvalidPageSize(usize),

    #[error("page size + 1 overflows the addressable range")]
    Overflow,

    #[error("no bounded-take operation for element type '{0}'")]
    UnsupportedElementType(&'static str),

    /// The query's engine cannot round-trip the rewritten expression back
    /// into a typed query. A collaborator misconfiguration, not a runtime
    /// condition.
    #[error("invalid query shape: {0}")]
    InvalidQueryShape(String),

    #[error("page construction was cancelled")]
    Cancelled,

    // Collaborator engines map their evaluation failures into this variant.
    #[error("query evaluation failed: {0}")]
    Evaluation(String),
}
