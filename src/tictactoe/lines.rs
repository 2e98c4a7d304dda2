//! Line enumeration and analysis for N x N boards

use super::{Cell, Player};

/// One of the 2N + 2 lines on an N x N board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

impl Line {
    /// All lines of a `size` x `size` board: rows, then columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Row-major cell indices covered by this line
    pub fn positions(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |i| match self {
            Line::Row(r) => r * size + i,
            Line::Column(c) => i * size + c,
            Line::Diagonal => i * size + i,
            Line::AntiDiagonal => i * size + (size - 1 - i),
        })
    }
}

/// Piece counts along a single line, relative to one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    pub own: usize,
    pub opponent: usize,
    pub empty: usize,
}

/// Utility for analyzing lines on a row-major cell slice
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if `player` fills some full row, column or diagonal
    pub fn has_won(cells: &[Cell], size: usize, player: Player) -> bool {
        if size == 0 {
            return false;
        }
        let target = player.to_cell();
        Line::all(size).any(|line| line.positions(size).all(|idx| cells[idx] == target))
    }

    /// Count own, opponent and empty cells along `line`, "own" being `player`
    pub fn counts(cells: &[Cell], size: usize, line: Line, player: Player) -> LineCounts {
        let own = player.to_cell();
        let mut counts = LineCounts::default();
        for idx in line.positions(size) {
            match cells[idx] {
                Cell::Empty => counts.empty += 1,
                c if c == own => counts.own += 1,
                _ => counts.opponent += 1,
            }
        }
        counts
    }
}
