use thiserror::Error;

/// Canonical result for the engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid arguments are rejected eagerly at call time, never deferred
    /// into the lazy pipeline.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading past the end of a cursor.
    #[error("No more elements")]
    Exhausted,

    /// A statistic that needs at least one element ran on an empty sequence.
    #[error("Empty sequence: {0} requires at least one element")]
    EmptySequence(&'static str),

    /// A statistic evaluated outside its domain.
    #[error("{stat} requires at least {need} elements, got {got}")]
    Undefined {
        stat: &'static str,
        need: usize,
        got: usize,
    },
}
