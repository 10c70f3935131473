use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

/// Position of a cell on the board, `0..9` in row-major order.
pub type CellIndex = u8;

/// Position of a snapshot in the game history, `0` being the game start.
pub type MoveIndex = usize;

/// Number of cells on a side of the board.
pub const SIDE: CellIndex = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: CellIndex = SIDE * SIDE;

/// `(row, col)` of a cell index.
pub const fn to_row_col(index: CellIndex) -> (CellIndex, CellIndex) {
    (index / SIDE, index % SIDE)
}

pub const fn from_row_col(row: CellIndex, col: CellIndex) -> CellIndex {
    row * SIDE + col
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark placed by the move leaving snapshot `move_index`. X always moves first.
    pub const fn for_move(move_index: MoveIndex) -> Self {
        if move_index % 2 == 0 { Self::X } else { Self::O }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }
}

/// Immutable snapshot of the 3x3 grid.
///
/// Boards are `Copy`, a move always produces a new board through [`Board::with_mark`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT as usize],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; CELL_COUNT as usize],
    };

    pub const fn from_cells(cells: [Cell; CELL_COUNT as usize]) -> Self {
        Self { cells }
    }

    pub const fn is_valid_index(index: CellIndex) -> bool {
        index < CELL_COUNT
    }

    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT as usize] {
        &self.cells
    }

    /// A copy of this board with `mark` placed at `index`. The caller validates `index`.
    pub fn with_mark(&self, index: CellIndex, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[usize::from(index)] = Cell::Marked(mark);
        next
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterates over `(index, cell)` pairs of a single row.
    pub fn row(&self, row: CellIndex) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        (0..SIDE).map(move |col| {
            let index = from_row_col(row, col);
            (index, self[index])
        })
    }

    /// If `next` is this board with exactly one empty cell marked, returns that cell and mark.
    pub fn single_move_to(&self, next: &Board) -> Option<(CellIndex, Mark)> {
        let mut changed = None;
        for (index, (&before, &after)) in (0..CELL_COUNT).zip(self.cells.iter().zip(&next.cells)) {
            if before == after {
                continue;
            }
            match (before, after, changed) {
                (Cell::Empty, Cell::Marked(mark), None) => changed = Some((index, mark)),
                _ => return None,
            }
        }
        changed
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_alternate_starting_with_x() {
        assert_eq!(Mark::for_move(0), Mark::X);
        assert_eq!(Mark::for_move(1), Mark::O);
        assert_eq!(Mark::for_move(8), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn row_major_indexing() {
        assert_eq!(to_row_col(0), (0, 0));
        assert_eq!(to_row_col(5), (1, 2));
        assert_eq!(to_row_col(7), (2, 1));
        assert_eq!(from_row_col(2, 1), 7);
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let board = Board::EMPTY;
        let next = board.with_mark(4, Mark::X);

        assert!(board.is_empty());
        assert_eq!(next[4], Cell::Marked(Mark::X));
        assert_eq!(next.marked_count(), 1);
    }

    #[test]
    fn single_move_to_detects_one_new_mark_only() {
        let board = Board::EMPTY.with_mark(0, Mark::X);

        assert_eq!(board.single_move_to(&board.with_mark(4, Mark::O)), Some((4, Mark::O)));
        assert_eq!(board.single_move_to(&board), None);
        assert_eq!(
            board.single_move_to(&board.with_mark(4, Mark::O).with_mark(5, Mark::X)),
            None
        );
        // overwriting an existing mark is not a move
        assert_eq!(board.single_move_to(&Board::EMPTY.with_mark(0, Mark::O)), None);
    }

    #[test]
    fn row_iterates_cells_left_to_right() {
        let board = Board::EMPTY.with_mark(3, Mark::O);
        let row: alloc::vec::Vec<_> = board.row(1).collect();

        assert_eq!(
            row,
            [(3u8, Cell::Marked(Mark::O)), (4, Cell::Empty), (5, Cell::Empty)]
        );
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        assert_eq!(Board::EMPTY.cell_at(9), None);
        assert!(!Board::is_valid_index(9));
    }
}
