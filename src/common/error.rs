//! Error types for pagesim.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a simulation can be rejected.
///
/// All errors are raised while validating inputs. Once a run has a valid
/// [`Capacity`](crate::Capacity) and a parsed trace, it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The frame count was zero or negative.
    #[error("Invalid capacity {0}: at least one frame is required")]
    InvalidCapacity(i64),

    /// A token in a textual trace is not an integer page id.
    #[error("Malformed page reference {token:?} at position {position}")]
    MalformedTrace { position: usize, token: String },

    /// A policy name that matches none of the supported policies.
    #[error("Unknown replacement policy {0:?}")]
    UnknownPolicy(String),
}
