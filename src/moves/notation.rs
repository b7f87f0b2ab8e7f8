//! Move notation: the twelve quarter turns.
//!
//! A move is a face letter (`U D L R F B`) optionally followed by `'` for a
//! counterclockwise turn. Those twelve tokens are the whole notation: no
//! lowercase, no `i` suffix, no double turns, no slices.
//!
//! Strings are parsed into [`Move`] once at the boundary. Everything past
//! that point matches on the enum, so all twelve cases are checked by the
//! compiler.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;

use crate::core::Face;
use crate::error::CubeError;

/// One of the twelve face quarter turns.
///
/// Plain variants turn the face clockwise as seen looking at that face;
/// `Prime` variants turn it counterclockwise.
#[derive(EnumIter, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    U,
    UPrime,
    D,
    DPrime,
    L,
    LPrime,
    R,
    RPrime,
    F,
    FPrime,
    B,
    BPrime,
}

impl Move {
    /// All twelve moves, clockwise before counterclockwise for each face.
    pub const ALL: [Move; 12] = [
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
        Move::L,
        Move::LPrime,
        Move::R,
        Move::RPrime,
        Move::F,
        Move::FPrime,
        Move::B,
        Move::BPrime,
    ];

    /// Build a move from its face and direction.
    #[must_use]
    pub const fn new(face: Face, prime: bool) -> Self {
        match (face, prime) {
            (Face::Up, false) => Move::U,
            (Face::Up, true) => Move::UPrime,
            (Face::Down, false) => Move::D,
            (Face::Down, true) => Move::DPrime,
            (Face::Left, false) => Move::L,
            (Face::Left, true) => Move::LPrime,
            (Face::Right, false) => Move::R,
            (Face::Right, true) => Move::RPrime,
            (Face::Front, false) => Move::F,
            (Face::Front, true) => Move::FPrime,
            (Face::Back, false) => Move::B,
            (Face::Back, true) => Move::BPrime,
        }
    }

    /// Face this move turns.
    #[must_use]
    pub const fn face(self) -> Face {
        match self {
            Move::U | Move::UPrime => Face::Up,
            Move::D | Move::DPrime => Face::Down,
            Move::L | Move::LPrime => Face::Left,
            Move::R | Move::RPrime => Face::Right,
            Move::F | Move::FPrime => Face::Front,
            Move::B | Move::BPrime => Face::Back,
        }
    }

    /// Whether this is a counterclockwise turn.
    #[must_use]
    pub const fn is_prime(self) -> bool {
        matches!(
            self,
            Move::UPrime
                | Move::DPrime
                | Move::LPrime
                | Move::RPrime
                | Move::FPrime
                | Move::BPrime
        )
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Move::new(self.face(), !self.is_prime())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.face().symbol())?;
        if self.is_prime() {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMove(s.to_string());

        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_symbol).ok_or_else(invalid)?;
        let prime = match chars.next() {
            None => false,
            Some('\'') => true,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Move::new(face, prime))
    }
}

/// Parse a whitespace-separated list of move tokens.
///
/// The whole string is parsed before anything is returned, so a bad token
/// anywhere means no moves at all.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, CubeError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Sequence that undoes `moves`: reversed, with every move inverted.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}
