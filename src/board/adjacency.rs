//! Hex adjacency queries.
//!
//! Adjacency is undirected and computed arithmetically from the odd-row
//! offset layout: every cell touches its east/west neighbors plus two
//! diagonal neighbors in each of the rows above and below. Interior cells
//! have six neighbors, edge cells fewer; the hub has exactly its ring.

use super::cell::CellId;

/// Returns all cells adjacent to the given cell.
pub fn neighbors(cell: CellId) -> Vec<CellId> {
    let r = cell.row() as i8;
    let c = cell.col() as i8;
    // Odd rows are shifted right, so their diagonals lean to c+1.
    let shift: i8 = if r % 2 == 1 { 1 } else { -1 };

    let candidates = [
        (r, c - 1),
        (r, c + 1),
        (r - 1, c),
        (r - 1, c + shift),
        (r + 1, c),
        (r + 1, c + shift),
    ];

    candidates
        .iter()
        .filter_map(|&(row, col)| CellId::new(row, col))
        .collect()
}

/// Returns true if the two cells are adjacent. A cell is never adjacent
/// to itself.
pub fn is_adjacent(a: CellId, b: CellId) -> bool {
    a != b && neighbors(a).contains(&b)
}
