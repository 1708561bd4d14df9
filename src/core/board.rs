//! Sliding-tile board representation
//!
//! A Board is an immutable `m × m` grid of tiles stored row-major, with 0 as the blank.
//! Tiles live behind an `Arc` so a state can sit in the frontier, the explored set and
//! the search tree at once without copying.

use super::Move;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// Largest supported side length (tiles are stored as `u8`)
pub const MAX_DIMENSION: usize = 16;

/// An immutable N-puzzle configuration
///
/// Two boards are equal iff their tile sequences are equal.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Arc<[u8]>,
    dimension: usize,
    blank: usize,
}

/// Error type for malformed boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    NotSquare(usize),
    TooSmall(usize),
    TooLarge(usize),
    OutOfRange(usize),
    Duplicate(usize),
    Parse(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board has no tiles"),
            Self::NotSquare(len) => {
                write!(f, "Board must have a perfect-square number of tiles, got {len}")
            }
            Self::TooSmall(dim) => write!(f, "Board must be at least 2x2, got {dim}x{dim}"),
            Self::TooLarge(dim) => write!(
                f,
                "Board must be at most {MAX_DIMENSION}x{MAX_DIMENSION}, got {dim}x{dim}"
            ),
            Self::OutOfRange(value) => write!(f, "Tile {value} is out of range for this board"),
            Self::Duplicate(value) => write!(f, "Tile {value} appears more than once"),
            Self::Parse(token) => write!(f, "Cannot parse tile '{token}'"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Create a board from a flat row-major list of tiles
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The list is empty or its length is not a perfect square
    /// - The side length is below 2 or above [`MAX_DIMENSION`]
    /// - The values are not a permutation of `0..m²`
    ///
    /// # Examples
    /// ```
    /// use npuzzle_search::core::Board;
    ///
    /// let board = Board::new(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
    /// assert_eq!(board.dimension(), 3);
    /// assert_eq!(board.blank(), 5);
    ///
    /// assert!(Board::new(&[0, 1, 2]).is_err());
    /// assert!(Board::new(&[0, 1, 1, 3]).is_err());
    /// ```
    pub fn new(values: &[usize]) -> Result<Self, BoardError> {
        if values.is_empty() {
            return Err(BoardError::Empty);
        }

        let len = values.len();
        let dimension = len.isqrt();
        if dimension * dimension != len {
            return Err(BoardError::NotSquare(len));
        }
        if dimension < 2 {
            return Err(BoardError::TooSmall(dimension));
        }
        if dimension > MAX_DIMENSION {
            return Err(BoardError::TooLarge(dimension));
        }

        let mut seen = vec![false; len];
        let mut tiles = Vec::with_capacity(len);
        let mut blank = 0;
        for (index, &value) in values.iter().enumerate() {
            if value >= len {
                return Err(BoardError::OutOfRange(value));
            }
            if std::mem::replace(&mut seen[value], true) {
                return Err(BoardError::Duplicate(value));
            }
            if value == 0 {
                blank = index;
            }
            // Cast is safe: value < len <= MAX_DIMENSION² = 256
            tiles.push(value as u8);
        }

        Ok(Self {
            tiles: tiles.into(),
            dimension,
            blank,
        })
    }

    /// The solved board `0, 1, …, m²−1` for side length `dimension`
    ///
    /// # Errors
    /// Returns `BoardError` if the dimension is outside `2..=MAX_DIMENSION`.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        let values: Vec<usize> = (0..dimension * dimension).collect();
        Self::new(&values)
    }

    /// Side length `m`
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Index of the blank tile
    #[inline]
    #[must_use]
    pub const fn blank(&self) -> usize {
        self.blank
    }

    /// Row-major tile values
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Check if the tiles are in ascending order with the blank first
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &tile)| usize::from(tile) == index)
    }

    /// Index of the tile the blank would swap with, if the move stays on the grid
    fn target_of(&self, mv: Move) -> Option<usize> {
        let m = self.dimension;
        let (row, col) = (self.blank / m, self.blank % m);
        match mv {
            Move::Up => (row > 0).then(|| self.blank - m),
            Move::Down => (row + 1 < m).then(|| self.blank + m),
            Move::Left => (col > 0).then(|| self.blank - 1),
            Move::Right => (col + 1 < m).then(|| self.blank + 1),
        }
    }

    /// Slide the blank, returning the new board or `None` if the move leaves the grid
    #[must_use]
    pub fn apply(&self, mv: Move) -> Option<Self> {
        let target = self.target_of(mv)?;
        let mut tiles = self.tiles.to_vec();
        tiles.swap(self.blank, target);

        Some(Self {
            tiles: tiles.into(),
            dimension: self.dimension,
            blank: target,
        })
    }

    /// All legal successors in UDLR order
    ///
    /// # Examples
    /// ```
    /// use npuzzle_search::core::{Board, Move};
    ///
    /// // Blank in the top-left corner: only Down and Right are legal
    /// let board = Board::new(&[0, 1, 2, 3]).unwrap();
    /// let moves: Vec<Move> = board.successors().into_iter().map(|(mv, _)| mv).collect();
    /// assert_eq!(moves, vec![Move::Down, Move::Right]);
    /// ```
    #[must_use]
    pub fn successors(&self) -> Vec<(Move, Self)> {
        Move::ALL
            .into_iter()
            .filter_map(|mv| self.apply(mv).map(|board| (mv, board)))
            .collect()
    }

    /// Number of tile pairs out of order, ignoring the blank
    fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < tile)
                    .count()
            })
            .sum()
    }

    /// Check if the goal is reachable from this board
    ///
    /// Odd widths need an even inversion count. Even widths need inversions plus
    /// the blank's row to be even, since the goal has the blank on row 0.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if !self.dimension.is_multiple_of(2) {
            inversions.is_multiple_of(2)
        } else {
            (inversions + self.blank / self.dimension).is_multiple_of(2)
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse tiles separated by commas and/or whitespace, e.g. `"1,2,5,3,4,0,6,7,8"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| BoardError::Parse(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&values)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.dimension) {
            let cells: Vec<String> = row.iter().map(|tile| format!("{tile:>width$}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board(values: &[usize]) -> Board {
        Board::new(values).unwrap()
    }

    #[test]
    fn board_creation_valid() {
        let b = board(&[1, 2, 5, 3, 4, 0, 6, 7, 8]);
        assert_eq!(b.dimension(), 3);
        assert_eq!(b.blank(), 5);
        assert_eq!(b.tiles(), &[1, 2, 5, 3, 4, 0, 6, 7, 8]);
    }

    #[test]
    fn board_creation_rejects_bad_shapes() {
        assert_eq!(Board::new(&[]), Err(BoardError::Empty));
        assert_eq!(Board::new(&[0]), Err(BoardError::TooSmall(1)));
        assert_eq!(Board::new(&[0, 1, 2]), Err(BoardError::NotSquare(3)));
        let huge: Vec<usize> = (0..17 * 17).collect();
        assert_eq!(Board::new(&huge), Err(BoardError::TooLarge(17)));
    }

    #[test]
    fn board_creation_rejects_non_permutations() {
        assert_eq!(Board::new(&[0, 1, 2, 4]), Err(BoardError::OutOfRange(4)));
        assert_eq!(Board::new(&[0, 1, 1, 3]), Err(BoardError::Duplicate(1)));
    }

    #[test]
    fn largest_board_is_accepted() {
        let values: Vec<usize> = (0..MAX_DIMENSION * MAX_DIMENSION).collect();
        let b = board(&values);
        assert!(b.is_goal());
    }

    #[test]
    fn goal_detection() {
        assert!(Board::goal(3).unwrap().is_goal());
        assert!(board(&[0, 1, 2, 3]).is_goal());
        assert!(!board(&[1, 0, 2, 3]).is_goal());
        assert!(!board(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).is_goal());
    }

    #[test]
    fn successors_all_four_in_udlr_order() {
        // Blank in the centre
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let succ = b.successors();
        let moves: Vec<Move> = succ.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(moves, Move::ALL.to_vec());

        assert_eq!(succ[0].1.tiles(), &[1, 0, 3, 4, 2, 5, 6, 7, 8]);
        assert_eq!(succ[1].1.tiles(), &[1, 2, 3, 4, 7, 5, 6, 0, 8]);
        assert_eq!(succ[2].1.tiles(), &[1, 2, 3, 0, 4, 5, 6, 7, 8]);
        assert_eq!(succ[3].1.tiles(), &[1, 2, 3, 4, 5, 0, 6, 7, 8]);
    }

    #[test]
    fn successors_respect_edges() {
        // Blank in column 0 of row 1: no Left, no wraparound to the previous row
        let b = board(&[1, 2, 3, 0, 4, 5, 6, 7, 8]);
        let moves: Vec<Move> = b.successors().into_iter().map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Up, Move::Down, Move::Right]);

        // Blank bottom-right
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let moves: Vec<Move> = b.successors().into_iter().map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Up, Move::Left]);
    }

    #[test]
    fn apply_tracks_blank() {
        let b = board(&[1, 2, 5, 3, 4, 0, 6, 7, 8]);
        let up = b.apply(Move::Up).unwrap();
        assert_eq!(up.blank(), 2);
        assert_eq!(up.tiles(), &[1, 2, 0, 3, 4, 5, 6, 7, 8]);
        assert!(up.apply(Move::Up).is_none());
        assert!(up.apply(Move::Right).is_none());
        assert_eq!(up.apply(Move::Down).unwrap(), b);
    }

    #[test]
    fn equality_and_hash_by_tiles() {
        let a = board(&[1, 0, 2, 3]);
        let b = board(&[0, 1, 2, 3]).apply(Move::Right).unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&board(&[0, 1, 2, 3])));
    }

    #[test]
    fn solvability_parity() {
        assert!(board(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).is_solvable());
        assert!(!board(&[1, 0, 2, 3, 4, 5, 6, 8, 7]).is_solvable());
        assert!(board(&[1, 0, 2, 3]).is_solvable());
        assert!(!board(&[0, 2, 1, 3]).is_solvable());

        // Even width: the blank's row enters the parity
        let goal = Board::goal(4).unwrap();
        assert!(goal.is_solvable());
        assert!(goal.apply(Move::Down).unwrap().is_solvable());
        let mut swapped: Vec<usize> = (0..16).collect();
        swapped.swap(1, 2);
        assert!(!board(&swapped).is_solvable());
    }

    #[test]
    fn parse_from_str() {
        let b: Board = "1,2,5,3,4,0,6,7,8".parse().unwrap();
        assert_eq!(b.blank(), 5);

        let b: Board = " 3 1\n 2 0 ".parse().unwrap();
        assert_eq!(b.tiles(), &[3, 1, 2, 0]);

        assert_eq!(
            "1,x,0,2".parse::<Board>(),
            Err(BoardError::Parse("x".to_string()))
        );
    }

    #[test]
    fn display_grid() {
        let b = board(&[1, 2, 5, 3, 4, 0, 6, 7, 8]);
        assert_eq!(format!("{b}"), "1 2 5\n3 4 0\n6 7 8\n");

        let b = Board::goal(4).unwrap();
        assert!(format!("{b}").starts_with(" 0  1  2  3\n"));
    }
}
