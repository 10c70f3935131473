use crate::*;

/// Every winning triple, in the order they are checked: rows top to bottom,
/// columns left to right, then both diagonals.
pub const LINES: [[CellIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First triple in [`LINES`] whose three cells carry the same mark.
pub fn winning_line(board: &Board) -> Option<[CellIndex; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let first = board[a];
        !first.is_empty() && first == board[b] && first == board[c]
    })
}

/// Mark occupying the first complete triple, if any.
pub fn compute_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board[a].mark())
}
