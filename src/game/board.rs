use std::fmt;

use super::Player;
use crate::error::{MoveError, ParseBoardError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned discs needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player owning a disc in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        self.owner().map_or('.', Player::symbol)
    }
}

/// Rectangular Connect Four grid. Row 0 is the top, discs fall towards the
/// highest row index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Create the classic empty 6x7 board
    pub fn standard() -> Self {
        Self::new(ROWS, COLS)
    }

    /// Parse a board from its rows, top first. `.` is empty, `X` belongs to
    /// [`Player::One`] and `O` to [`Player::Two`].
    pub fn from_rows(lines: &[&str]) -> Result<Self, ParseBoardError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(ParseBoardError::Empty);
        }

        let mut board = Board::new(rows, cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseBoardError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = match glyph {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::One,
                    'O' | 'o' => Cell::Two,
                    other => {
                        return Err(ParseBoardError::UnknownGlyph {
                            row,
                            col,
                            glyph: other,
                        })
                    }
                };
                board.cells[row * cols + col] = cell;
            }
        }

        // Discs must rest on the floor or on another disc
        for row in 0..rows - 1 {
            for col in 0..cols {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(ParseBoardError::FloatingDisc { row, col });
                }
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Cells of row `r`, left to right.
    pub fn row(&self, r: usize) -> Vec<Cell> {
        self.cells[r * self.cols..(r + 1) * self.cols].to_vec()
    }

    /// Cells of column `c`, top to bottom.
    pub fn col(&self, c: usize) -> Vec<Cell> {
        (0..self.rows).map(|r| self.get(r, c)).collect()
    }

    /// True iff a disc can be dropped in `col`.
    pub fn placeable(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Drop a disc for `player` in `col`, returns the row where it landed
    pub fn place(&mut self, player: Player, col: usize) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            let idx = row * self.cols + col;
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = player.to_cell();
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.placeable(col))
    }

    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// The player with four in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.check_win(row, col) {
                    return self.get(row, col).owner();
                }
            }
        }
        None
    }

    /// True iff the game has ended, by a win or a full board.
    pub fn terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Check if the disc at (row, col) is part of a winning line
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        // Horizontal, vertical, and both diagonals
        [(0, 1), (1, 0), (1, 1), (1, -1)].iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, cell) + self.run_length(row, col, -dr, -dc, cell)
                >= CONNECT
        })
    }

    /// Count consecutive `cell`s starting next to (row, col) in direction (dr, dc).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.cols
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self.row(row).into_iter().map(Cell::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        assert_eq!(board.rows(), ROWS);
        assert_eq!(board.cols(), COLS);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.terminal());
    }

    #[test]
    fn test_place() {
        let mut board = Board::standard();

        // First disc in column 3
        let row = board.place(Player::One, 3).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::One);

        // Second disc in same column
        let row = board.place(Player::Two, 3).unwrap();
        assert_eq!(row, 4); // Should land on top of first disc
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        for _ in 0..ROWS {
            board.place(Player::One, 0).unwrap();
        }

        assert!(!board.placeable(0));
        assert_eq!(board.place(Player::Two, 0), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert!(!board.placeable(7));
        assert_eq!(board.place(Player::One, 7), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_full_board_is_terminal() {
        // Column-wise pattern with no four in a row
        let board = Board::from_rows(&[
            "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX",
        ])
        .unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.terminal());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        for col in 0..4 {
            board.place(Player::One, col).unwrap();
        }
        assert!(board.check_win(5, 2));
        assert_eq!(board.winner(), Some(Player::One));
        assert!(board.terminal());
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        for _ in 0..4 {
            board.place(Player::Two, 3).unwrap();
        }
        assert!(board.check_win(2, 3));
        assert_eq!(board.winner(), Some(Player::Two));
    }

    #[test]
    fn test_diagonal_wins() {
        let up = Board::from_rows(&[
            ".......", ".......", "...X...", "..XO...", ".XOO...", "XOOX...",
        ])
        .unwrap();
        assert_eq!(up.winner(), Some(Player::One));

        let down = Board::from_rows(&[
            ".......", ".......", "...O...", "...XO..", "...XXO.", "...XXXO",
        ])
        .unwrap();
        assert_eq!(down.winner(), Some(Player::Two));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.place(Player::One, col).unwrap();
        }
        assert!(!board.check_win(5, 1));
        assert!(!board.terminal());
    }

    #[test]
    fn test_row_and_col_views() {
        let board = Board::from_rows(&["...", "X..", "XO."]).unwrap();
        assert_eq!(board.row(2), vec![Cell::One, Cell::Two, Cell::Empty]);
        assert_eq!(board.col(0), vec![Cell::Empty, Cell::One, Cell::One]);
        assert_eq!(board.disc_count(), 3);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(Board::from_rows(&[]), Err(ParseBoardError::Empty));
        assert_eq!(
            Board::from_rows(&["...", ".."]),
            Err(ParseBoardError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Board::from_rows(&["..?"]),
            Err(ParseBoardError::UnknownGlyph {
                row: 0,
                col: 2,
                glyph: '?'
            })
        );
        assert_eq!(
            Board::from_rows(&["X..", "..."]),
            Err(ParseBoardError::FloatingDisc { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_display_matches_parse_format() {
        let board = Board::from_rows(&["....", ".O..", "XXO."]).unwrap();
        assert_eq!(board.to_string(), "....\n.O..\nXXO.\n");
    }
}
