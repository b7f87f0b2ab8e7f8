//! # rust-cube
//!
//! State model and move engine for a 3x3x3 twisty puzzle.
//!
//! ## Design Principles
//!
//! 1. **Moves Are Permutations**: Every face turn is a fixed permutation of
//!    the 54 facelets. Nothing is ever recolored, so each color always shows
//!    up exactly nine times.
//!
//! 2. **Inverses By Construction**: A counterclockwise turn is three
//!    clockwise turns, and a face's own rotation is one clockwise rotation
//!    table applied repeatedly. There is no second table to get wrong.
//!
//! 3. **Owned State**: A [`Cube`] owns its state. No globals; as many
//!    independent cubes as you like.
//!
//! 4. **Parse At The Boundary**: Move tokens are turned into the closed
//!    [`Move`] enum once. Bad tokens are rejected before anything changes.
//!
//! ## Modules
//!
//! - `core`: Faces, colors, facelet grid, face rotation, RNG, configuration
//! - `moves`: Move notation and the move engine
//! - `dispatch`: The `Cube` dispatcher and state-change observers
//! - `shuffle`: Random scrambles
//! - `error`: Error type
//!
//! ## Example
//!
//! ```
//! use rust_cube::{Color, Cube, Face};
//!
//! let mut cube = Cube::new();
//! cube.apply_move("U").unwrap();
//!
//! // Right's old top row is now on front.
//! assert_eq!(cube.face(Face::Front)[..3], [Color::Red; 3]);
//!
//! cube.apply_move("U'").unwrap();
//! assert!(cube.is_solved());
//! ```

pub mod core;
pub mod moves;
pub mod dispatch;
pub mod shuffle;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Color, Face, Facelet,
    ColorScheme, CubeConfig, DEFAULT_SHUFFLE_LENGTH, UI_SHUFFLE_LENGTH,
    CubeState, FaceletGrid,
    CubeRng, CubeRngState,
    rotate_cw, rotate_ccw,
};

pub use crate::moves::{Move, parse_sequence, invert_sequence};

pub use crate::dispatch::{Cube, ObserverId, StateChange, StateObserver};

pub use crate::shuffle::random_move;

pub use crate::error::CubeError;
