//! Error taxonomy for the constraint core.
//!
//! Setup-time configuration problems are the only user-visible failures;
//! evaluation-time input is sanitized instead of rejected, except for the
//! buffer-size invariant which indicates a programming error in the host.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RigError {
    /// The configuration is structurally unusable: the source reference or
    /// a twist-node transform reference is unset. Binding must fail and the
    /// constraint must not enter evaluation until resolved.
    #[error("invalid twist correction configuration: {0}")]
    InvalidConfiguration(String),

    /// The weight buffer no longer matches the node count. Setup sizes the
    /// buffer once; divergence means the job was mutated out from under the
    /// evaluation pass.
    #[error("weight buffer size mismatch: expected {expected}, found {found}")]
    BufferSizeMismatch { expected: usize, found: usize },
}
