//! Face and color identifiers.
//!
//! ## Face
//!
//! The six faces of the cube in a fixed order: Up, Down, Left, Right, Front,
//! Back. `Face::index()` is the slot used by [`FaceletGrid`](super::FaceletGrid).
//!
//! ## Color
//!
//! The six sticker colors. Which color belongs to which face is decided by a
//! [`ColorScheme`](super::ColorScheme), not hardcoded here.
//!
//! ## Facelet
//!
//! A sticker position: a face plus an index 0-8, row-major as seen when
//! looking straight at that face.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::error::CubeError;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// Number of facelets on each face.
pub const FACELETS_PER_FACE: usize = 9;

/// One of the six faces.
#[derive(EnumIter, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Face {
    /// Top face.
    Up = 0,
    /// Bottom face.
    Down = 1,
    /// Left face.
    Left = 2,
    /// Right face.
    Right = 3,
    /// Face pointing toward the viewer.
    Front = 4,
    /// Face pointing away from the viewer.
    Back = 5,
}

impl Face {
    /// All faces in index order.
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Slot of this face in a facelet grid (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter notation symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Face for a notation symbol, if there is one.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Face> {
        match symbol {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            _ => None,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Front => "Front",
            Face::Back => "Back",
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sticker color.
#[derive(EnumIter, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Yellow = 1,
    Orange = 2,
    Red = 3,
    Green = 4,
    Blue = 5,
}

impl Color {
    /// Dense index (0-5), used for per-color tallies.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A sticker position on the cube.
///
/// The index is always in 0..9: fields are private, and both constructors and
/// deserialization check the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFacelet", into = "RawFacelet")]
pub struct Facelet {
    face: Face,
    index: u8,
}

impl Facelet {
    /// Create a facelet position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0..9.
    #[must_use]
    pub const fn new(face: Face, index: u8) -> Self {
        assert!((index as usize) < FACELETS_PER_FACE, "facelet index out of range");
        Self { face, index }
    }

    /// Create a facelet position from untrusted input.
    ///
    /// Fails with [`CubeError::FaceletOutOfRange`] if `index` is not in 0..9.
    pub fn try_new(face: Face, index: u8) -> Result<Self, CubeError> {
        if (index as usize) < FACELETS_PER_FACE {
            Ok(Self { face, index })
        } else {
            Err(CubeError::FaceletOutOfRange { face, index })
        }
    }

    /// Face the sticker sits on.
    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    /// Row-major index on that face (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Whether this is the fixed center sticker of its face.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.index == 4
    }
}

impl std::fmt::Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.symbol(), self.index)
    }
}

/// Serialized form of a [`Facelet`], checked on the way in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawFacelet {
    face: Face,
    index: u8,
}

impl TryFrom<RawFacelet> for Facelet {
    type Error = CubeError;

    fn try_from(raw: RawFacelet) -> Result<Self, Self::Error> {
        Facelet::try_new(raw.face, raw.index)
    }
}

impl From<Facelet> for RawFacelet {
    fn from(facelet: Facelet) -> Self {
        Self {
            face: facelet.face,
            index: facelet.index,
        }
    }
}
