//! Structural snapshots and checkpoints.
//!
//! A [`Snapshot`] is the canonical, sorted form of an automaton definition.
//! It never includes the simulation cursor, so two automata with the same
//! definition produce equal snapshots wherever their cursors stand.
//!
//! A [`Checkpoint`] wraps a snapshot with a version, an identifier, a
//! timestamp and, separately, the cursor, so a simulation can be resumed
//! after a restart.

use crate::automaton::Dfa;
use crate::core::{State, StructurePhase, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Canonical structural snapshot of an automaton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State, A: Symbol> {
    /// All states, sorted
    pub states: Vec<S>,

    /// The alphabet, sorted
    pub alphabet: Vec<A>,

    /// One row per state, keyed and ordered by state then symbol
    pub transitions: BTreeMap<S, BTreeMap<A, S>>,

    /// Start state, if any
    pub start: Option<S>,

    /// Accept states, sorted
    pub accept: Vec<S>,

    /// The dead state added by completion, if any
    #[serde(default)]
    pub dead: Option<S>,
}

/// Serializable checkpoint of an automaton and its cursor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, A: Symbol> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub created_at: DateTime<Utc>,

    /// Structural definition
    pub snapshot: Snapshot<S, A>,

    /// Simulation cursor at checkpoint time
    pub cursor: Option<S>,
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// Produce the canonical structural snapshot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::automaton::Dfa;
    ///
    /// let mut dfa = Dfa::ends_with_ab();
    /// let before = dfa.to_snapshot();
    /// dfa.run("aab".chars());
    ///
    /// assert_eq!(dfa.to_snapshot(), before);
    /// assert_eq!(before.states, vec!["q0", "q1", "q2"]);
    /// assert_eq!(before.accept, vec!["q2"]);
    /// ```
    pub fn to_snapshot(&self) -> Snapshot<S, A> {
        let mut states: Vec<S> = self.states.iter().cloned().collect();
        states.sort();
        let mut alphabet: Vec<A> = self.alphabet.iter().cloned().collect();
        alphabet.sort();
        let mut accept: Vec<S> = self.accept.iter().cloned().collect();
        accept.sort();

        let transitions = states
            .iter()
            .map(|state| {
                let row: BTreeMap<A, S> = self
                    .transitions
                    .get(state)
                    .map(|row| {
                        row.iter()
                            .map(|(symbol, target)| (symbol.clone(), target.clone()))
                            .collect()
                    })
                    .unwrap_or_default();
                (state.clone(), row)
            })
            .collect();

        Snapshot {
            states,
            alphabet,
            transitions,
            start: self.start.clone(),
            accept,
            dead: self.dead.clone(),
        }
    }

    /// Rebuild an automaton from a snapshot.
    ///
    /// Completion is not run; the table is restored exactly as captured,
    /// including which state is the dead state.
    pub fn from_snapshot(snapshot: Snapshot<S, A>) -> Self {
        let transitions: HashMap<S, HashMap<A, S>> = snapshot
            .transitions
            .into_iter()
            .map(|(state, row)| (state, row.into_iter().collect()))
            .collect();

        let mut dfa = Self::new(
            snapshot.states,
            snapshot.alphabet,
            &transitions,
            snapshot.start,
            snapshot.accept,
            false,
        );

        dfa.dead = snapshot.dead.filter(|dead| dfa.states.contains(dead));
        if dfa.is_total() {
            dfa.structure = StructurePhase::Completed;
        }
        dfa
    }

    /// Capture the definition and the current cursor.
    pub fn checkpoint(&self) -> Checkpoint<S, A> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            snapshot: self.to_snapshot(),
            cursor: self.current().cloned(),
        }
    }

    /// Rebuild an automaton from a checkpoint, restoring its cursor.
    pub fn restore(checkpoint: Checkpoint<S, A>) -> Result<Self, SnapshotError> {
        checkpoint.validate()?;
        let cursor = checkpoint.cursor;
        let mut dfa = Self::from_snapshot(checkpoint.snapshot);
        dfa.position.current = cursor;
        Ok(dfa)
    }
}

impl<S: State, A: Symbol> Checkpoint<S, A> {
    /// Check the version and that the cursor names a known state.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if let Some(cursor) = &self.cursor {
            if !self.snapshot.states.contains(cursor) {
                return Err(SnapshotError::ValidationFailed(format!(
                    "cursor {:?} is not a state of the snapshot",
                    cursor
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        debug!(id = %self.id, "encoding checkpoint as JSON");
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        debug!(id = %checkpoint.id, "decoded JSON checkpoint");
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        debug!(id = %self.id, "encoding checkpoint as binary");
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a binary checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        debug!(id = %checkpoint.id, "decoded binary checkpoint");
        Ok(checkpoint)
    }
}
