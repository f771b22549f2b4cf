//! The grid the agent walks on.
//!
//! Storage is a flat row-major `Vec<Cell>`: row 0 is the ground, column 0 is
//! the inward edge. One extra top row and one extra outer column are
//! allocated beyond the real extent; both start empty and give the traversal
//! a one-step cushion to probe past the last token run. `step` still bounds
//! checks every edge, so even a second step past the cushion fails cleanly
//! instead of walking off the allocation.

use std::fmt;

use rand::Rng;

use super::cell::Cell;

/// The four directions the agent can step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward column 0.
    Inward,
    /// Toward the outer cushion column.
    Outward,
    /// Toward the top cushion row.
    Up,
    /// Toward row 0 (the ground).
    Down,
}

pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    agent_row: usize,
    agent_col: usize,
    total_tokens: usize,
}

impl Board {
    /// Build a board from explicit per-column token heights (each >= 1).
    ///
    /// The agent spawns at (0, 0), on top of the first column's bottom
    /// token, so that cell starts as [`Cell::Combo`].
    pub fn from_heights(heights: &[usize]) -> Board {
        assert!(!heights.is_empty(), "board needs at least one column");
        assert!(
            heights.iter().all(|&h| h >= 1),
            "column heights start at 1"
        );

        let max_height = heights.iter().copied().fold(0, usize::max);
        let rows = max_height + 1;
        let cols = heights.len() + 1;

        let mut cells = vec![Cell::Empty; rows * cols];
        for (col, &height) in heights.iter().enumerate() {
            for row in 0..height {
                cells[row * cols + col] = Cell::Token;
            }
        }
        cells[0] = cells[0].with_agent();

        Board {
            cells,
            rows,
            cols,
            agent_row: 0,
            agent_col: 0,
            total_tokens: heights.iter().sum(),
        }
    }

    /// Build a board with `columns` columns whose heights are drawn
    /// uniformly from `[1, max_height]`.
    pub fn random(columns: usize, max_height: usize, rng: &mut impl Rng) -> Board {
        assert!(columns >= 1, "board needs at least one column");
        assert!(max_height >= 1, "max height starts at 1");
        let heights: Vec<usize> = (0..columns)
            .map(|_| rng.random_range(1..=max_height))
            .collect();
        Board::from_heights(&heights)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Row count, including the top cushion row.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count, including the outer cushion column.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tokens placed at construction. Fixed for the board's lifetime.
    #[inline]
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// The agent's `(row, col)` position.
    #[inline]
    pub fn agent(&self) -> (usize, usize) {
        (self.agent_row, self.agent_col)
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn agent_cell(&self) -> Cell {
        self.cell(self.agent_row, self.agent_col)
    }

    /// Live count of token-flagged cells. Tokens in the agent's pocket are
    /// not on the board, so this dips below `total_tokens` while it carries.
    pub fn board_tokens(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_token()).count()
    }

    /// Move the agent one cell. Returns `false` and changes nothing when the
    /// step would leave the grid; otherwise rewrites exactly the two affected
    /// cells, touching only their agent flags.
    pub(crate) fn step(&mut self, direction: Direction) -> bool {
        let (row, col) = (self.agent_row, self.agent_col);
        let (to_row, to_col) = match direction {
            Direction::Inward => {
                if col == 0 {
                    return false;
                }
                (row, col - 1)
            }
            Direction::Outward => {
                if col + 1 >= self.cols {
                    return false;
                }
                (row, col + 1)
            }
            Direction::Up => {
                if row + 1 >= self.rows {
                    return false;
                }
                (row + 1, col)
            }
            Direction::Down => {
                if row == 0 {
                    return false;
                }
                (row - 1, col)
            }
        };

        let from = self.index(row, col);
        let to = self.index(to_row, to_col);
        self.cells[from] = self.cells[from].without_agent();
        self.cells[to] = self.cells[to].with_agent();
        self.agent_row = to_row;
        self.agent_col = to_col;
        true
    }

    /// Clear the token flag under the agent. `false` if there is none.
    pub(crate) fn lift_token(&mut self) -> bool {
        let idx = self.index(self.agent_row, self.agent_col);
        if !self.cells[idx].has_token() {
            return false;
        }
        self.cells[idx] = self.cells[idx].without_token();
        true
    }

    /// Set the token flag under the agent. `false` if one is already there.
    pub(crate) fn drop_token(&mut self) -> bool {
        let idx = self.index(self.agent_row, self.agent_col);
        if self.cells[idx].has_token() {
            return false;
        }
        self.cells[idx] = self.cells[idx].with_token();
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                write!(f, " {}", self.cell(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Cell, Direction};

    #[test]
    fn construction_fills_columns_and_leaves_cushion_empty() {
        let board = Board::from_heights(&[2, 1, 3]);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.total_tokens(), 6);

        assert_eq!(board.cell(0, 0), Cell::Combo);
        assert_eq!(board.cell(1, 0), Cell::Token);
        assert_eq!(board.cell(2, 0), Cell::Empty);
        assert_eq!(board.cell(0, 1), Cell::Token);
        assert_eq!(board.cell(1, 1), Cell::Empty);
        assert_eq!(board.cell(2, 2), Cell::Token);

        for row in 0..board.rows() {
            assert_eq!(board.cell(row, 3), Cell::Empty, "outer column row {row}");
        }
        for col in 0..board.cols() {
            assert_eq!(board.cell(3, col), Cell::Empty, "top row col {col}");
        }
    }

    #[test]
    fn step_moves_only_the_agent_flag() {
        let mut board = Board::from_heights(&[1, 1]);
        assert!(board.step(Direction::Outward));
        assert_eq!(board.agent(), (0, 1));
        assert_eq!(board.cell(0, 0), Cell::Token);
        assert_eq!(board.cell(0, 1), Cell::Combo);
    }

    #[test]
    fn step_fails_cleanly_at_every_edge() {
        let mut board = Board::from_heights(&[1]);
        // 2 rows x 2 cols; agent at the ground inward corner.
        assert!(!board.step(Direction::Inward));
        assert!(!board.step(Direction::Down));
        assert!(board.step(Direction::Outward));
        assert!(!board.step(Direction::Outward));
        assert!(board.step(Direction::Up));
        assert!(!board.step(Direction::Up));
        assert_eq!(board.agent(), (1, 1));
        assert_eq!(board.board_tokens(), 1);
    }

    #[test]
    fn lift_and_drop_guard_their_preconditions() {
        let mut board = Board::from_heights(&[1]);
        assert!(board.lift_token());
        assert!(!board.lift_token());
        assert_eq!(board.agent_cell(), Cell::Agent);
        assert!(board.drop_token());
        assert!(!board.drop_token());
        assert_eq!(board.agent_cell(), Cell::Combo);
    }

    #[test]
    fn display_prints_top_row_first() {
        let board = Board::from_heights(&[2, 1]);
        let lines: Vec<String> = board.to_string().lines().map(str::to_owned).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "      "); // top cushion row
        assert_eq!(lines[1], " *    ");
        assert_eq!(lines[2], " ⊛ *  ");
    }
}
