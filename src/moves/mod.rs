//! Moves: notation and the engine that applies them.
//!
//! ## Example
//!
//! ```
//! use rust_cube::core::CubeState;
//! use rust_cube::moves::{parse_sequence, invert_sequence};
//!
//! let mut state = CubeState::default();
//! let sexy = parse_sequence("R U R' U'").unwrap();
//!
//! state.apply_moves(&sexy);
//! assert!(!state.is_solved());
//!
//! state.apply_moves(&invert_sequence(&sexy));
//! assert!(state.is_solved());
//! ```

mod engine;
mod notation;

pub use engine::{turn_cycle, Strip, TurnCycle, TURN_CYCLES};
pub use notation::{invert_sequence, parse_sequence, Move};
