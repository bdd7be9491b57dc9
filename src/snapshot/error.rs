//! Errors raised while encoding, decoding or restoring checkpoints.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The checkpoint could not be encoded as JSON or bincode.
    #[error("Could not encode automaton checkpoint: {0}")]
    SerializationFailed(String),

    /// The bytes or text did not decode to a checkpoint.
    #[error("Could not decode automaton checkpoint: {0}")]
    DeserializationFailed(String),

    #[error("Checkpoint format v{found} cannot be restored (this build reads v{supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The decoded checkpoint does not describe a restorable automaton,
    /// e.g. its cursor names a state outside the snapshot.
    #[error("Checkpoint does not describe a restorable automaton: {0}")]
    ValidationFailed(String),
}
