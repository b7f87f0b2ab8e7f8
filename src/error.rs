//! Error type for cube operations.

use thiserror::Error;

use crate::core::{Color, Face};

/// Error produced by cube operations.
///
/// Moves themselves never fail; errors only come from input that crosses the
/// API boundary (move tokens, color schemes).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Token is not one of the twelve face-turn symbols.
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    /// Facelet index outside 0..9.
    #[error("facelet index {index} is out of range on {face}")]
    FaceletOutOfRange {
        /// Face of the rejected position.
        face: Face,
        /// The rejected index.
        index: u8,
    },

    /// Two faces of a color scheme share a color.
    #[error("color {color} is assigned to both {first} and {second}")]
    DuplicateColor {
        /// The repeated color.
        color: Color,
        /// First face using the color.
        first: Face,
        /// Second face using the color.
        second: Face,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = CubeError::InvalidMove("X2".to_string());
        assert_eq!(err.to_string(), "invalid move: \"X2\"");
    }

    #[test]
    fn test_duplicate_color_message() {
        let err = CubeError::DuplicateColor {
            color: Color::Red,
            first: Face::Left,
            second: Face::Right,
        };
        assert_eq!(err.to_string(), "color red is assigned to both Left and Right");
    }

    #[test]
    fn test_facelet_out_of_range_message() {
        let err = CubeError::FaceletOutOfRange {
            face: Face::Up,
            index: 9,
        };
        assert_eq!(err.to_string(), "facelet index 9 is out of range on Up");
    }
}
