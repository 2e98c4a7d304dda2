//! Fixed first-move policy

use crate::tictactoe::{BoardState, Cell, Move};

/// Opening move on an untouched board, `None` once any cell is occupied.
///
/// Odd boards open in the center, even boards in the top-left corner.
pub fn opening_move(state: &BoardState) -> Option<Move> {
    let size = state.size();
    if size == 0 || !state.is_empty_board() {
        return None;
    }

    if size % 2 == 1 {
        let center = Move::new(size / 2, size / 2);
        if state.get(center) == Some(Cell::Empty) {
            return Some(center);
        }
    }
    Some(Move::new(0, 0))
}
