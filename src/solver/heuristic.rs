//! Manhattan-distance heuristic for A*

use crate::core::Board;

/// Sum of grid distances from each tile to its goal cell, ignoring the blank
///
/// Each move shifts one tile by one cell, so this never overestimates the
/// remaining cost.
///
/// # Examples
/// ```
/// use npuzzle_search::core::Board;
/// use npuzzle_search::solver::manhattan_distance;
///
/// let board = Board::new(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
/// assert_eq!(manhattan_distance(&board), 3);
/// ```
#[must_use]
pub fn manhattan_distance(board: &Board) -> usize {
    let m = board.dimension();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(index, &tile)| {
            let tile = usize::from(tile);
            (index / m).abs_diff(tile / m) + (index % m).abs_diff(tile % m)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;

    #[test]
    fn goal_has_zero_distance() {
        for m in 2..=5 {
            assert_eq!(manhattan_distance(&Board::goal(m).unwrap()), 0);
        }
    }

    #[test]
    fn blank_is_ignored() {
        // Only the blank and tile 1 swapped: tile 1 is one step away
        let board = Board::new(&[1, 0, 2, 3]).unwrap();
        assert_eq!(manhattan_distance(&board), 1);
    }

    #[test]
    fn known_value() {
        let board = Board::new(&[8, 1, 2, 0, 4, 3, 7, 6, 5]).unwrap();
        // 8: (0,0)->(2,2)=4, 3: (1,2)->(1,0)=2, 7: (2,0)->(2,1)=1, 6: (2,1)->(2,0)=1, 5: (2,2)->(1,2)=1
        assert_eq!(manhattan_distance(&board), 9);
    }

    #[test]
    fn single_move_changes_by_one() {
        let board = Board::new(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
        let h = manhattan_distance(&board);
        for (_, next) in board.successors() {
            assert_eq!(manhattan_distance(&next).abs_diff(h), 1);
        }
        let back = board.apply(Move::Up).unwrap();
        assert_eq!(manhattan_distance(&back), h - 1);
    }
}
