//! Core cube types: faces, colors, facelet grid, face rotation, RNG, configuration.
//!
//! This module holds the data model. It knows nothing about move notation;
//! the move engine in [`crate::moves`] is built on top of it.

pub mod face;
pub mod config;
pub mod rotate;
pub mod rng;
pub mod state;

pub use face::{Color, Face, Facelet, FACELETS_PER_FACE, FACE_COUNT};
pub use config::{ColorScheme, CubeConfig, DEFAULT_SHUFFLE_LENGTH, UI_SHUFFLE_LENGTH};
pub use rotate::{rotate_ccw, rotate_cw};
pub use rng::{CubeRng, CubeRngState};
pub use state::{CubeState, FaceletGrid};
