//! Facelet grid: the 54 stickers of the cube.
//!
//! ## FaceletGrid
//!
//! Six faces of nine facelets each, stored as fixed-size arrays so the shape
//! can never drift. The grid is generic over what a facelet holds:
//! - `CubeState` (`FaceletGrid<Color>`) is the puzzle itself
//! - `FaceletGrid<Facelet>` labels every slot with its home position, which
//!   is handy for tracing where a sequence of moves sends each sticker
//!
//! ## Layout
//!
//! Indices 0-8 are row-major as seen when looking straight at the face:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Up is viewed from above with Back at the top of the view. Front, Right,
//! Back and Left are viewed from outside with Up at the top. Down is viewed
//! from below with Front at the top.
//!
//! The grid does no validation beyond its shape. Moves keep it a permutation
//! of the solved grid because every move is written as a total permutation.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::ColorScheme;
use super::face::{Color, Face, Facelet, FACELETS_PER_FACE, FACE_COUNT};

/// Six faces of nine facelets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceletGrid<T> {
    faces: [[T; FACELETS_PER_FACE]; FACE_COUNT],
}

/// Sticker colors of a whole cube.
pub type CubeState = FaceletGrid<Color>;

impl<T: Copy> FaceletGrid<T> {
    /// Create a grid by asking `factory` for the value at every position.
    pub fn from_fn(mut factory: impl FnMut(Facelet) -> T) -> Self {
        let faces = Face::ALL.map(|face| {
            std::array::from_fn(|i| factory(Facelet::new(face, i as u8)))
        });
        Self { faces }
    }

    /// Copy of one face's nine facelets.
    #[must_use]
    pub fn face(&self, face: Face) -> [T; FACELETS_PER_FACE] {
        self.faces[face.index()]
    }

    /// Mutable access to one face's nine facelets.
    pub fn face_mut(&mut self, face: Face) -> &mut [T; FACELETS_PER_FACE] {
        &mut self.faces[face.index()]
    }

    /// Overwrite one face's nine facelets.
    pub fn set_face(&mut self, face: Face, facelets: [T; FACELETS_PER_FACE]) {
        self.faces[face.index()] = facelets;
    }

    /// Iterate over every position and its value, face by face.
    pub fn iter(&self) -> impl Iterator<Item = (Facelet, T)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            self.faces[face.index()]
                .iter()
                .enumerate()
                .map(move |(i, &value)| (Facelet::new(face, i as u8), value))
        })
    }
}

impl FaceletGrid<Facelet> {
    /// Grid where every slot holds its own position.
    #[must_use]
    pub fn labeled() -> Self {
        Self::from_fn(|facelet| facelet)
    }
}

impl CubeState {
    /// Solved cube: every face uniformly its scheme color.
    #[must_use]
    pub fn solved(scheme: &ColorScheme) -> Self {
        Self::from_fn(|facelet| scheme.color_of(facelet.face()))
    }

    /// Reset every face to its solved color.
    pub fn init_solved(&mut self, scheme: &ColorScheme) {
        *self = Self::solved(scheme);
    }

    /// Whether every face shows a single color.
    ///
    /// Centers never move, so a uniform cube is always the solved one for
    /// whatever scheme produced it.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|face| face.iter().all(|&c| c == face[4]))
    }

    /// Number of facelets of each color, indexed by [`Color::index`].
    #[must_use]
    pub fn color_counts(&self) -> [usize; FACE_COUNT] {
        let mut counts = [0; FACE_COUNT];
        for face in &self.faces {
            for color in face {
                counts[color.index()] += 1;
            }
        }
        counts
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved(&ColorScheme::default())
    }
}

impl<T> Index<Face> for FaceletGrid<T> {
    type Output = [T; FACELETS_PER_FACE];

    fn index(&self, face: Face) -> &Self::Output {
        &self.faces[face.index()]
    }
}

impl<T> IndexMut<Face> for FaceletGrid<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.faces[face.index()]
    }
}

impl<T> Index<Facelet> for FaceletGrid<T> {
    type Output = T;

    fn index(&self, facelet: Facelet) -> &Self::Output {
        &self.faces[facelet.face().index()][facelet.index()]
    }
}

impl<T> IndexMut<Facelet> for FaceletGrid<T> {
    fn index_mut(&mut self, facelet: Facelet) -> &mut Self::Output {
        &mut self.faces[facelet.face().index()][facelet.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_faces_are_uniform() {
        let scheme = ColorScheme::default();
        let state = CubeState::solved(&scheme);

        for face in Face::ALL {
            assert_eq!(state.face(face), [scheme.color_of(face); 9]);
        }
        assert!(state.is_solved());
    }

    #[test]
    fn test_solved_color_counts() {
        let state = CubeState::default();
        assert_eq!(state.color_counts(), [9; 6]);
    }

    #[test]
    fn test_set_face_breaks_solved() {
        let mut state = CubeState::default();
        let mut up = state.face(Face::Up);
        up[0] = Color::Red;
        state.set_face(Face::Up, up);

        assert!(!state.is_solved());
        assert_eq!(state[Facelet::new(Face::Up, 0)], Color::Red);
    }

    #[test]
    fn test_init_solved_resets() {
        let scheme = ColorScheme::default();
        let mut state = CubeState::solved(&scheme);
        state.face_mut(Face::Front)[3] = Color::Blue;
        state[Face::Back][5] = Color::Green;

        state.init_solved(&scheme);
        assert_eq!(state, CubeState::solved(&scheme));
    }

    #[test]
    fn test_labeled_grid() {
        let grid = FaceletGrid::<Facelet>::labeled();
        for (position, label) in grid.iter() {
            assert_eq!(position, label);
        }
        assert_eq!(grid.iter().count(), 54);
    }

    #[test]
    fn test_iter_order_is_row_major() {
        let grid = FaceletGrid::<Facelet>::labeled();
        let first: Vec<_> = grid.iter().take(10).map(|(p, _)| p).collect();
        assert_eq!(first[0], Facelet::new(Face::Up, 0));
        assert_eq!(first[8], Facelet::new(Face::Up, 8));
        assert_eq!(first[9], Facelet::new(Face::Down, 0));
    }

    #[test]
    fn test_state_serde() {
        let mut state = CubeState::default();
        state.face_mut(Face::Left)[0] = Color::Yellow;
        state.face_mut(Face::Down)[0] = Color::Orange;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CubeState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
