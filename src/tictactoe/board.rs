//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse a player token (`x` or `o`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayerString`] for anything else.
    pub fn parse(token: &str, context: &str) -> Result<Player, crate::Error> {
        match token.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: token.to_string(),
                context: context.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, col) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Structural identity of a grid, ignoring whose turn it is.
///
/// Used as the closed-set key during best-first search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(Box<[Cell]>);

/// Immutable N x N grid plus the player to move.
///
/// Cells are stored row-major. Every operation that places a piece returns a
/// fresh state, so states handed out to search never alias each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    size: usize,
    cells: Vec<Cell>,
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl BoardState {
    /// Create a new empty `size` x `size` board with X to move
    pub fn new(size: usize) -> Self {
        Self::new_with_player(size, Player::X)
    }

    /// Create a new empty board with a specified player to move first
    pub fn new_with_player(size: usize, first_player: Player) -> Self {
        BoardState {
            size,
            cells: vec![Cell::Empty; size * size],
            to_move: first_player,
        }
    }

    /// Build a state from a grid snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGridShape`] if the grid is empty or not
    /// square (including ragged rows).
    pub fn from_rows(rows: &[Vec<Cell>], to_move: Player) -> Result<Self, crate::Error> {
        let size = rows.len();
        if size == 0 {
            return Err(crate::Error::InvalidGridShape {
                reason: "grid has no rows".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(crate::Error::InvalidGridShape {
                    reason: format!("row {r} has {} cells, expected {size}", row.len()),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(BoardState {
            size,
            cells,
            to_move,
        })
    }

    /// Create a board from a string representation.
    ///
    /// The string holds N² cell characters (`X`, `O`, `.`); whitespace and `/`
    /// row separators are ignored. An optional `_X` / `_O` suffix sets the
    /// player to move, otherwise it is inferred from the piece counts.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not a non-zero perfect square, a
    /// character is not a valid cell, or the piece counts differ by more than one.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let (board_part, specified_turn) = match cleaned.rfind('_') {
            Some(idx) if idx + 1 < cleaned.len() && idx > 0 => {
                let suffix = &cleaned[idx + 1..];
                (&cleaned[..idx], Some(Player::parse(suffix, s)?))
            }
            _ => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        let size = chars.len().isqrt();
        if size == 0 || size * size != chars.len() {
            return Err(crate::Error::InvalidGridShape {
                reason: format!("{} cells do not form a square board in '{s}'", chars.len()),
            });
        }

        let mut cells = Vec::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            cells.push(
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?,
            );
        }

        let count = Self::count_pieces(&cells);
        let to_move = match specified_turn {
            Some(turn) => turn,
            None => Self::determine_turn_from_counts(&count)?,
        };

        Ok(BoardState {
            size,
            cells,
            to_move,
        })
    }

    fn count_pieces(cells: &[Cell]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    fn determine_turn_from_counts(count: &PieceCount) -> Result<Player, crate::Error> {
        if count.x == count.o || count.o == count.x + 1 {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at `mv`, or `None` if it lies off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        if mv.row < self.size && mv.col < self.size {
            Some(self.cells[mv.row * self.size + mv.col])
        } else {
            None
        }
    }

    /// Copy the grid out as rows
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    /// Count the number of empty cells
    pub fn empty_count(&self) -> usize {
        Self::count_pieces(&self.cells).empty
    }

    /// Count the number of occupied cells
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// True if no cell is occupied
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// All empty cells in row-major order
    pub fn empty_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::new(i / self.size, i % self.size))
            .collect()
    }

    /// Place the mover's piece at `mv` and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] or [`crate::Error::OccupiedCell`];
    /// the original state is unchanged either way.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, mv: Move) -> Result<BoardState, crate::Error> {
        match self.get(mv) {
            None => Err(crate::Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            }),
            Some(Cell::Empty) => Ok(self.place(mv.row * self.size + mv.col)),
            Some(_) => Err(crate::Error::OccupiedCell {
                row: mv.row,
                col: mv.col,
            }),
        }
    }

    fn place(&self, idx: usize) -> BoardState {
        let mut cells = self.cells.clone();
        cells[idx] = self.to_move.to_cell();
        BoardState {
            size: self.size,
            cells,
            to_move: self.to_move.opponent(),
        }
    }

    /// Every successor state paired with the move producing it.
    ///
    /// Successors are produced in row-major order of the empty cells; search
    /// strategies rely on this order to break ties.
    pub fn successors(&self) -> Vec<(BoardState, Move)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (self.place(i), Move::new(i / self.size, i % self.size)))
            .collect()
    }

    /// Check if `player` holds a full row, column or diagonal
    pub fn is_winner(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, self.size, player)
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.is_winner(Player::X) || self.is_winner(Player::O) || self.is_full()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.is_winner(Player::X) {
            Some(Player::X)
        } else if self.is_winner(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Structural fingerprint of the grid
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(self.cells.clone().into_boxed_slice())
    }

    /// Compact encoding, e.g. `XO......._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new(3);
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.size(), 3);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
        assert!(board.is_empty_board());
    }

    #[test]
    fn test_make_move() {
        let board = BoardState::new(3);

        let result = board.make_move(Move::new(1, 1));
        assert!(result.is_ok());
        let new_board = result.unwrap();
        assert_eq!(new_board.get(Move::new(1, 1)), Some(Cell::X));
        assert_eq!(new_board.to_move, Player::O);
        // Original untouched
        assert!(board.is_empty_board());

        let result2 = new_board.make_move(Move::new(1, 1));
        assert!(result2.is_err());
        assert!(result2.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_make_move_out_of_bounds() {
        let board = BoardState::new(3);
        let err = board.make_move(Move::new(3, 0)).unwrap_err();
        assert!(matches!(err, crate::Error::OutOfBounds { row: 3, .. }));
    }

    #[test]
    fn test_successors_row_major() {
        let board = BoardState::from_string("X...O....").unwrap();
        let successors = board.successors();
        let moves: Vec<Move> = successors.iter().map(|(_, m)| *m).collect();
        assert_eq!(
            moves,
            vec![
                Move::new(0, 1),
                Move::new(0, 2),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
        for (state, mv) in &successors {
            assert_eq!(state.get(*mv), Some(Cell::X));
            assert_eq!(state.to_move, Player::O);
            assert_eq!(state.occupied_count(), board.occupied_count() + 1);
        }
    }

    #[test]
    fn test_win_detection() {
        let board = BoardState::from_string("XXX/OO./...").unwrap();
        assert!(board.is_winner(Player::X));
        assert!(!board.is_winner(Player::O));
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));

        let diag = BoardState::from_string("O.X/.OX/..O").unwrap();
        assert_eq!(diag.winner(), Some(Player::O));
    }

    #[test]
    fn test_draw_detection() {
        let board = BoardState::from_string("XOX/XOO/OXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        for size in 1..=5 {
            let board = BoardState::new(size);
            assert!(!board.is_winner(Player::X));
            assert!(!board.is_winner(Player::O));
        }
    }

    #[test]
    fn test_from_rows_rejects_ragged_grid() {
        let rows = vec![
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
            vec![Cell::Empty, Cell::Empty],
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
        ];
        let err = BoardState::from_rows(&rows, Player::X).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidGridShape { .. }));

        let err = BoardState::from_rows(&[], Player::X).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidGridShape { .. }));
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let board = BoardState::from_string("XO./.X./..O").unwrap();
        let rebuilt = BoardState::from_rows(&board.rows(), board.to_move).unwrap();
        assert_eq!(rebuilt, board);
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX......").unwrap();
        assert_eq!(board.get(Move::new(0, 0)), Some(Cell::X));
        assert_eq!(board.get(Move::new(0, 1)), Some(Cell::O));
        assert_eq!(board.to_move, Player::O);

        let four = BoardState::from_string("..../..../..../....").unwrap();
        assert_eq!(four.size(), 4);

        assert!(BoardState::from_string("XO").is_err());
        assert!(BoardState::from_string("XOZ......").is_err());
        assert!(BoardState::from_string("XXXX.....").is_err());
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let board = BoardState::from_string("........._O").unwrap();
        assert_eq!(board.to_move, Player::O);

        let err = BoardState::from_string("........._Q").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPlayerString { .. }));
    }

    #[test]
    fn test_fingerprint_ignores_turn() {
        let a = BoardState::from_string("X........_O").unwrap();
        let b = BoardState::from_string("X........_X").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_encode_and_display() {
        let board = BoardState::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO......._X");
        assert_eq!(format!("{board}"), "XO.\n...\n...");
    }
}
