use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned pieces needed to win.
const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Result of a cell query. Unlike [`Cell`], a query can land off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellValue {
    Empty,
    Red,
    Yellow,
    OutOfBounds,
}

impl From<Cell> for CellValue {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => CellValue::Empty,
            Cell::Red => CellValue::Red,
            Cell::Yellow => CellValue::Yellow,
        }
    }
}

/// The 7x6 grid plus the counters kept alongside it.
///
/// Row 0 is the top, row 5 is the bottom. `heights[col]` always equals the
/// number of pieces in `col`, and `free_spots` the number of empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
    free_spots: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
            free_spots: ROWS * COLS,
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Bounds-checked lookup taking `(column, row)` in signed coordinates.
    pub fn cell_at(&self, col: i32, row: i32) -> CellValue {
        if col < 0 || row < 0 || col as usize >= COLS || row as usize >= ROWS {
            return CellValue::OutOfBounds;
        }
        self.cells[row as usize][col as usize].into()
    }

    /// Number of pieces stacked in a column (0 for columns off the board).
    pub fn height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    pub fn free_spots(&self) -> usize {
        self.free_spots
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.heights[col] >= ROWS
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = ROWS - 1 - self.heights[col];
        self.cells[row][col] = cell;
        self.heights[col] += 1;
        self.free_spots -= 1;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.free_spots == 0
    }

    /// Check whether `cell` has four in a row anywhere on the board.
    pub fn has_four(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        // (row step, col step): vertical, horizontal, diagonal \, diagonal /
        const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        AXES.iter().any(|&(dr, dc)| {
            (0..ROWS).any(|row| (0..COLS).any(|col| self.line_from(row, col, dr, dc, cell)))
        })
    }

    /// True when the four cells starting at (row, col) along (dr, dc) all hold `cell`.
    fn line_from(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..WIN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            r >= 0
                && c >= 0
                && (r as usize) < ROWS
                && (c as usize) < COLS
                && self.cells[r as usize][c as usize] == cell
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.free_spots(), ROWS * COLS);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);

        assert_eq!(board.height(3), 2);
        assert_eq!(board.free_spots(), ROWS * COLS - 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
        assert_eq!(board.open_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.free_spots(), ROWS * COLS);
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.cell_at(0, 0), CellValue::Empty);
        assert_eq!(board.cell_at(-1, 0), CellValue::OutOfBounds);
        assert_eq!(board.cell_at(0, -1), CellValue::OutOfBounds);
        assert_eq!(board.cell_at(COLS as i32, 0), CellValue::OutOfBounds);
        assert_eq!(board.cell_at(0, ROWS as i32), CellValue::OutOfBounds);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.open_columns().is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.has_four(Cell::Red));
        assert!(!board.has_four(Cell::Yellow));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::new();
        for col in 3..COLS {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert!(board.has_four(Cell::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.has_four(Cell::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(!board.has_four(Cell::Red));
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.has_four(Cell::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.has_four(Cell::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.has_four(Cell::Red));
        assert!(!board.has_four(Cell::Empty));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(6, Cell::Yellow).unwrap();
        let text = board.to_string();
        let last = text.lines().last().unwrap();
        assert_eq!(last, "R.....Y");
        assert_eq!(text.lines().count(), ROWS);
    }
}
