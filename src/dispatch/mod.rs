//! Move dispatcher: one cube, driven by move tokens.
//!
//! [`Cube`] owns a [`CubeState`] and is the single entry point collaborators
//! use to change it. Every change goes through here so observers can be told
//! about it:
//!
//! - `apply_move("R'")` parses the token, applies the move, notifies
//! - `apply(Move::R)` skips parsing for callers that already hold a [`Move`]
//! - `init_solved()` resets and notifies
//!
//! Moves are applied one at a time, synchronously; each observer call
//! happens before the next move starts.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use rust_cube::{Cube, CubeState, Face, StateChange};
//!
//! let mut cube = Cube::new();
//!
//! let redraws = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&redraws);
//! cube.subscribe(move |_: StateChange, _: &CubeState| counter.set(counter.get() + 1));
//!
//! cube.apply_move("R").unwrap();
//! cube.apply_move("U'").unwrap();
//! assert!(cube.apply_move("Q").is_err());
//!
//! assert_eq!(redraws.get(), 2);
//! assert_eq!(cube.history().len(), 2);
//! assert_eq!(cube.face(Face::Down).len(), 9);
//! ```

mod observer;

pub use observer::{ObserverId, StateChange, StateObserver};

use rand::Rng;

use crate::core::{Color, CubeConfig, CubeState, Face, FACELETS_PER_FACE};
use crate::error::CubeError;
use crate::moves::{parse_sequence, Move};
use crate::shuffle;

/// A cube plus everything watching it.
pub struct Cube {
    state: CubeState,
    config: CubeConfig,

    /// Moves applied since the last reset, oldest first. With a history limit
    /// this holds fewer than twice the limit; [`Cube::history`] shows the tail.
    history: Vec<Move>,

    observers: Vec<(ObserverId, Box<dyn StateObserver>)>,
    next_observer_id: u32,
}

impl Cube {
    /// Create a solved cube with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CubeConfig::default())
    }

    /// Create a solved cube from a configuration.
    #[must_use]
    pub fn with_config(config: CubeConfig) -> Self {
        Self {
            state: CubeState::solved(&config.color_scheme),
            config,
            history: Vec::new(),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    // === State Queries ===

    /// Current sticker colors.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Snapshot of one face, for rendering.
    #[must_use]
    pub fn face(&self, face: Face) -> [Color; FACELETS_PER_FACE] {
        self.state.face(face)
    }

    /// Whether every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Configuration this cube was built with.
    #[must_use]
    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    /// Moves applied since the last reset, oldest first.
    ///
    /// Without a [`history_limit`](CubeConfig::history_limit) this grows by one
    /// entry per move until [`init_solved`](Self::init_solved) or
    /// [`clear_history`](Self::clear_history). With a limit, only the most
    /// recent `limit` moves are kept.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        match self.config.history_limit {
            Some(limit) => &self.history[self.history.len().saturating_sub(limit)..],
            None => &self.history,
        }
    }

    // === State Changes ===

    /// Forget the recorded moves without touching the state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Reset to the solved configuration and clear the history.
    pub fn init_solved(&mut self) {
        self.state.init_solved(&self.config.color_scheme);
        self.history.clear();
        log::debug!("cube reset to solved");
        self.notify(StateChange::Reset);
    }

    /// Parse a move token and apply it.
    ///
    /// Fails with [`CubeError::InvalidMove`] before touching the state if the
    /// token is not one of the twelve moves.
    pub fn apply_move(&mut self, token: &str) -> Result<Move, CubeError> {
        let m = token.parse::<Move>().inspect_err(|_| {
            log::debug!("rejected move token {token:?}");
        })?;
        self.apply(m);
        Ok(m)
    }

    /// Apply a move that has already been parsed.
    pub fn apply(&mut self, m: Move) {
        self.state.apply_move(m);
        self.record(m);
        log::debug!("applied {m}");
        self.notify(StateChange::Moved(m));
    }

    /// Parse a whitespace-separated move sequence and apply it.
    ///
    /// Nothing is applied unless every token parses. Observers are notified
    /// once per move.
    pub fn apply_sequence(&mut self, sequence: &str) -> Result<Vec<Move>, CubeError> {
        let moves = parse_sequence(sequence)?;
        for &m in &moves {
            self.apply(m);
        }
        Ok(moves)
    }

    /// Apply `count` uniformly random moves drawn from `rng`.
    ///
    /// Returns the moves in the order they were applied.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Move> {
        shuffle::shuffle(self, count, rng)
    }

    /// Apply the configured number of random moves.
    pub fn shuffle_default<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Move> {
        let count = self.config.shuffle_length;
        self.shuffle(count, rng)
    }

    // === Observers ===

    /// Register an observer. It is called after every subsequent change.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) -> ObserverId {
        let id = ObserverId::new(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn record(&mut self, m: Move) {
        self.history.push(m);
        // Trimmed in bulk: fewer than 2 * limit entries are stored.
        if let Some(limit) = self.config.history_limit {
            if self.history.len() >= limit.saturating_mul(2).max(1) {
                let excess = self.history.len() - limit;
                self.history.drain(..excess);
            }
        }
    }

    fn notify(&mut self, change: StateChange) {
        for (_, observer) in &mut self.observers {
            observer.on_state_changed(change, &self.state);
        }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cube")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
