//! Errors of the adapter.
use thiserror::Error;

/// Errors of [`EntityEnvAdapter`](crate::EntityEnvAdapter).
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The wrapped environment's observation space is not a dict of
    /// fixed-length vector groups.
    #[error("Unsupported observation space, only a dict of 1D vector groups is supported: {0}")]
    UnsupportedObsSpace(String),

    /// The wrapped environment's action space is not a single discrete
    /// space.
    #[error("Unsupported action space, only a single discrete space is supported: {0}")]
    UnsupportedActionSpace(String),

    /// No choice was given for the named action.
    #[error("No choice given for action: {0}")]
    MissingAction(String),
}
