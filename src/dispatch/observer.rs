//! State-change notifications.
//!
//! A renderer (or anything else that mirrors the cube) registers an observer
//! with [`Cube::subscribe`](super::Cube::subscribe) and is called after every
//! change, with the change and the new state.

use serde::{Deserialize, Serialize};

use crate::core::CubeState;
use crate::moves::Move;

/// Identifier handed out by [`Cube::subscribe`](super::Cube::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// What just happened to the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateChange {
    /// A single move was applied.
    Moved(Move),
    /// The cube was reset to solved.
    Reset,
}

/// Receiver of state-change notifications.
///
/// Any `FnMut(StateChange, &CubeState)` closure is an observer.
pub trait StateObserver {
    /// Called after the cube changed. `state` is the state after the change.
    fn on_state_changed(&mut self, change: StateChange, state: &CubeState);
}

impl<F> StateObserver for F
where
    F: FnMut(StateChange, &CubeState),
{
    fn on_state_changed(&mut self, change: StateChange, state: &CubeState) {
        self(change, state);
    }
}
