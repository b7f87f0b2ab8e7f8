//! Move engine: the permutation behind every face turn.
//!
//! A clockwise turn does two things at once:
//! - rotates the turned face's own nine facelets (via [`rotate_cw`])
//! - cycles the four three-facelet strips that border that face
//!
//! Each turn is described by a [`TurnCycle`] table entry. The four strips are
//! listed in flow order: the old contents of strip `k` land in strip `k + 1`,
//! and the last strip wraps around to the first. Index triples are written in
//! aligned order, so some strips run backwards where a neighboring face is
//! seen from the opposite side.
//!
//! Counterclockwise turns are three clockwise turns. That makes
//! `m; m'` and `m; m; m; m` the identity for every move without a second,
//! hand-derived table that could drift out of sync.

use crate::core::{rotate_cw, Face, FaceletGrid};

use super::notation::Move;

/// A three-facelet strip on one face, in aligned order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    /// Face the strip lies on.
    pub face: Face,
    /// Facelet indices, ordered to line up with the neighboring strips.
    pub indices: [usize; 3],
}

impl Strip {
    const fn new(face: Face, indices: [usize; 3]) -> Self {
        Self { face, indices }
    }
}

/// Permutation of one clockwise face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnCycle {
    /// Face rotated clockwise.
    pub face: Face,
    /// Border strips in flow order.
    pub strips: [Strip; 4],
}

const TOP_ROW: [usize; 3] = [0, 1, 2];
const BOTTOM_ROW: [usize; 3] = [6, 7, 8];
const LEFT_COL: [usize; 3] = [0, 3, 6];
const RIGHT_COL: [usize; 3] = [2, 5, 8];

/// Clockwise turn tables, indexed by [`Face::index`].
pub static TURN_CYCLES: [TurnCycle; 6] = [
    // U: front -> left -> back -> right
    TurnCycle {
        face: Face::Up,
        strips: [
            Strip::new(Face::Front, TOP_ROW),
            Strip::new(Face::Left, TOP_ROW),
            Strip::new(Face::Back, TOP_ROW),
            Strip::new(Face::Right, TOP_ROW),
        ],
    },
    // D: front -> right -> back -> left
    TurnCycle {
        face: Face::Down,
        strips: [
            Strip::new(Face::Front, BOTTOM_ROW),
            Strip::new(Face::Right, BOTTOM_ROW),
            Strip::new(Face::Back, BOTTOM_ROW),
            Strip::new(Face::Left, BOTTOM_ROW),
        ],
    },
    // L: up -> front -> down -> back
    TurnCycle {
        face: Face::Left,
        strips: [
            Strip::new(Face::Up, LEFT_COL),
            Strip::new(Face::Front, LEFT_COL),
            Strip::new(Face::Down, LEFT_COL),
            Strip::new(Face::Back, [8, 5, 2]),
        ],
    },
    // R: up -> back -> down -> front
    TurnCycle {
        face: Face::Right,
        strips: [
            Strip::new(Face::Up, RIGHT_COL),
            Strip::new(Face::Back, [6, 3, 0]),
            Strip::new(Face::Down, RIGHT_COL),
            Strip::new(Face::Front, RIGHT_COL),
        ],
    },
    // F: up -> right -> down -> left
    TurnCycle {
        face: Face::Front,
        strips: [
            Strip::new(Face::Up, BOTTOM_ROW),
            Strip::new(Face::Right, LEFT_COL),
            Strip::new(Face::Down, [2, 1, 0]),
            Strip::new(Face::Left, [8, 5, 2]),
        ],
    },
    // B: up -> left -> down -> right
    TurnCycle {
        face: Face::Back,
        strips: [
            Strip::new(Face::Up, TOP_ROW),
            Strip::new(Face::Left, [6, 3, 0]),
            Strip::new(Face::Down, [8, 7, 6]),
            Strip::new(Face::Right, RIGHT_COL),
        ],
    },
];

/// Clockwise turn table for a face.
#[must_use]
pub fn turn_cycle(face: Face) -> &'static TurnCycle {
    &TURN_CYCLES[face.index()]
}

impl<T: Copy> FaceletGrid<T> {
    /// Turn one face a quarter turn clockwise.
    pub fn turn_cw(&mut self, face: Face) {
        let cycle = turn_cycle(face);

        let rotated = rotate_cw(self.face(face));
        self.set_face(face, rotated);

        // Read every strip before writing any of them.
        let old = cycle.strips.map(|strip| strip.indices.map(|i| self[strip.face][i]));
        for (k, strip) in cycle.strips.iter().enumerate() {
            let src = &old[(k + 3) % 4];
            let dst = &mut self[strip.face];
            for (&i, &value) in strip.indices.iter().zip(src) {
                dst[i] = value;
            }
        }

        log::trace!("turned {face} clockwise");
    }

    /// Turn one face a quarter turn counterclockwise.
    pub fn turn_ccw(&mut self, face: Face) {
        self.turn_cw(face);
        self.turn_cw(face);
        self.turn_cw(face);
    }

    /// Apply one move.
    pub fn apply_move(&mut self, m: Move) {
        match m {
            Move::U => self.turn_cw(Face::Up),
            Move::UPrime => self.turn_ccw(Face::Up),
            Move::D => self.turn_cw(Face::Down),
            Move::DPrime => self.turn_ccw(Face::Down),
            Move::L => self.turn_cw(Face::Left),
            Move::LPrime => self.turn_ccw(Face::Left),
            Move::R => self.turn_cw(Face::Right),
            Move::RPrime => self.turn_ccw(Face::Right),
            Move::F => self.turn_cw(Face::Front),
            Move::FPrime => self.turn_ccw(Face::Front),
            Move::B => self.turn_cw(Face::Back),
            Move::BPrime => self.turn_ccw(Face::Back),
        }
    }

    /// Apply moves in order.
    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }
}
