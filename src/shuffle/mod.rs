//! Shuffle generator: random scrambles applied through the dispatcher.
//!
//! Each step draws one of the twelve moves uniformly, with replacement.
//! Nothing is filtered: a move may be followed by its own inverse, or
//! repeated. The random source is a parameter, so a seeded
//! [`CubeRng`](crate::core::CubeRng) reproduces a scramble exactly.
//!
//! ```
//! use rust_cube::{Cube, CubeRng, invert_sequence};
//!
//! let mut cube = Cube::new();
//! let scramble = cube.shuffle(30, &mut CubeRng::new(7));
//! assert_eq!(scramble.len(), 30);
//!
//! for m in invert_sequence(&scramble) {
//!     cube.apply(m);
//! }
//! assert!(cube.is_solved());
//! ```

use rand::Rng;

use crate::dispatch::Cube;
use crate::moves::Move;

/// Draw one move uniformly from all twelve.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::ALL[rng.gen_range(0..Move::ALL.len())]
}

/// Apply `count` random moves to `cube`, one at a time.
///
/// Every move goes through [`Cube::apply`], so observers see each one.
/// Returns the moves in the order they were applied.
pub fn shuffle<R: Rng + ?Sized>(cube: &mut Cube, count: usize, rng: &mut R) -> Vec<Move> {
    let mut moves = Vec::with_capacity(count);
    for _ in 0..count {
        let m = random_move(rng);
        cube.apply(m);
        moves.push(m);
    }
    log::debug!("shuffled with {count} moves");
    moves
}
