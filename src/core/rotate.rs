//! Quarter-turn rotation of a single face's 9 facelets.
//!
//! These are pure functions over a row-major 3x3 array. They never touch
//! neighboring faces; the move engine handles the border strips.

use super::face::FACELETS_PER_FACE;

/// Source index for each output slot of a clockwise quarter turn.
///
/// Output slot `i` takes the facelet that was at `CW_SOURCE[i]`.
const CW_SOURCE: [usize; FACELETS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Rotate a face 90 degrees clockwise.
#[must_use]
pub fn rotate_cw<T: Copy>(face: [T; FACELETS_PER_FACE]) -> [T; FACELETS_PER_FACE] {
    CW_SOURCE.map(|src| face[src])
}

/// Rotate a face 90 degrees counterclockwise.
///
/// Three clockwise turns, so it is the exact inverse of [`rotate_cw`].
#[must_use]
pub fn rotate_ccw<T: Copy>(face: [T; FACELETS_PER_FACE]) -> [T; FACELETS_PER_FACE] {
    rotate_cw(rotate_cw(rotate_cw(face)))
}
