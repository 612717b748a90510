//! Errors of the environment.
use thiserror::Error;

/// Errors of [`MinefieldEnv`](crate::MinefieldEnv).
#[derive(Error, Debug)]
pub enum MinefieldEnvError {
    /// The action index is not an element of the action space.
    #[error("Invalid action {0}, must be 0, 1, or 2. (0: left, 1: forward, 2: right)")]
    InvalidAction(i32),
}
