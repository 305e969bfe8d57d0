//! Error types for the word pool.

/// Errors that can occur while loading or drawing from the pool.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// The word-list source could not be read. Startup-fatal, like
    /// [`PoolError::Empty`] — there is no game without words.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// The source yielded zero usable words. Startup-fatal
    /// misconfiguration; callers should not retry.
    #[error("word list is empty")]
    Empty,

    /// Every word in the pool has already been drawn.
    #[error("all words have been used")]
    Exhausted,
}
