//! Property tests over arbitrary move sequences and tokens.

use proptest::prelude::*;

use rust_cube::{invert_sequence, Cube, CubeError, CubeState, Move, rotate_ccw, rotate_cw};

/// The complete notation, written out independently of the parser.
const VALID_TOKENS: [&str; 12] = ["U", "U'", "D", "D'", "L", "L'", "R", "R'", "F", "F'", "B", "B'"];

fn any_move() -> impl Strategy<Value = Move> {
    proptest::sample::select(Move::ALL.to_vec())
}

fn any_sequence(max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    proptest::collection::vec(any_move(), 0..max_len)
}

fn state_after(moves: &[Move]) -> CubeState {
    let mut state = CubeState::default();
    state.apply_moves(moves);
    state
}

proptest! {
    /// Every reachable state has nine stickers of each color.
    #[test]
    fn prop_color_counts_conserved(moves in any_sequence(60)) {
        prop_assert_eq!(state_after(&moves).color_counts(), [9; 6]);
    }

    /// A move followed by its inverse is the identity, from any state.
    #[test]
    fn prop_move_then_inverse(moves in any_sequence(40), m in any_move()) {
        let start = state_after(&moves);
        let mut state = start;
        state.apply_move(m);
        state.apply_move(m.inverse());
        prop_assert_eq!(state, start);
    }

    /// A move applied four times is the identity, from any state.
    #[test]
    fn prop_identity_of_four(moves in any_sequence(40), m in any_move()) {
        let start = state_after(&moves);
        let mut state = start;
        state.apply_moves(&[m, m, m, m]);
        prop_assert_eq!(state, start);
    }

    /// Any sequence is undone by its inverted reverse.
    #[test]
    fn prop_inverted_sequence_solves(moves in any_sequence(80)) {
        let mut state = state_after(&moves);
        state.apply_moves(&invert_sequence(&moves));
        prop_assert!(state.is_solved());
    }

    /// Face rotation has order four and counterclockwise undoes clockwise.
    #[test]
    fn prop_face_rotation(face in proptest::array::uniform9(0u8..6)) {
        prop_assert_eq!(rotate_cw(rotate_cw(rotate_cw(rotate_cw(face)))), face);
        prop_assert_eq!(rotate_ccw(rotate_cw(face)), face);
        prop_assert_eq!(rotate_ccw(face), rotate_cw(rotate_cw(rotate_cw(face))));
    }

    /// Face letters with an arbitrary suffix are rejected unless the suffix is `'`.
    #[test]
    fn prop_suffixed_tokens_rejected(face in "[UDLRFB]", suffix in "\\PC{1,2}") {
        let token = format!("{face}{suffix}");
        prop_assume!(!VALID_TOKENS.contains(&token.as_str()));

        let mut cube = Cube::new();
        prop_assert_eq!(cube.apply_move(&token), Err(CubeError::InvalidMove(token.clone())));
        prop_assert!(cube.is_solved());
    }

    /// Tokens outside the notation set are rejected without touching the cube.
    #[test]
    fn prop_bad_tokens_rejected(moves in any_sequence(20), token in "\\PC{0,4}") {
        prop_assume!(!VALID_TOKENS.contains(&token.as_str()));

        let mut cube = Cube::new();
        for &m in &moves {
            cube.apply(m);
        }
        let before = *cube.state();

        prop_assert_eq!(cube.apply_move(&token), Err(CubeError::InvalidMove(token.clone())));
        prop_assert_eq!(*cube.state(), before);
        prop_assert_eq!(cube.history().len(), moves.len());
    }
}

/// Exactly the twelve listed tokens parse, each to the move that displays as it.
#[test]
fn test_valid_tokens_are_the_whole_notation() {
    for (token, m) in VALID_TOKENS.iter().zip(Move::ALL) {
        assert_eq!(token.parse::<Move>(), Ok(m));
        assert_eq!(m.to_string(), *token);
    }
}

/// The `i` inverse suffix is not part of the notation.
#[test]
fn test_i_suffix_rejected() {
    for token in ["Ui", "Di", "Li", "Ri", "Fi", "Bi"] {
        let mut cube = Cube::new();
        assert_eq!(cube.apply_move(token), Err(CubeError::InvalidMove(token.to_string())));
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
    }
}
