//! Grid storage and the two group traversals the rules are built on.
//!
//! Points are `(row, col)` pairs with row 0 at the top. Adjacency is
//! orthogonal only: diagonal stones never belong to the same group.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::GameConfig;
use crate::constants::{COLUMN_LETTERS, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, MAX_VERTEX_SIZE};
use crate::error::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

pub type Point = (usize, usize);

/// Orthogonal neighbour offsets: north, east, south, west.
const OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A square grid of optional stones. `None` is an empty point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Self, GameError> {
        GameConfig::new(size)?;
        Ok(Self::empty(size))
    }

    /// Unchecked constructor; callers have already validated `size`.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Stone at `pt`, or `None` if the point is empty or off the board.
    pub fn get(&self, pt: Point) -> Option<Color> {
        if !self.contains(pt) {
            return None;
        }
        self.cells[self.idx(pt)]
    }

    pub(crate) fn set(&mut self, pt: Point, stone: Option<Color>) {
        let i = self.idx(pt);
        self.cells[i] = stone;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// In-bounds orthogonal neighbours of `pt`.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let n = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
            self.contains(n).then_some(n)
        })
    }

    /// Number of points holding `stone` (`None` counts empty points).
    pub fn count(&self, stone: Option<Color>) -> usize {
        self.cells.iter().filter(|&&c| c == stone).count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> {
        self.cells.chunks(self.size)
    }

    /// Flood-fill the group containing `start`, appending unvisited members
    /// to `out` and marking them in `visited` (one flag per point).
    ///
    /// Sharing `visited` across calls keeps a stone from being collected
    /// twice when several starting points belong to the same group.
    /// Returns the number of stones appended.
    pub(crate) fn collect_group(
        &self,
        start: Point,
        visited: &mut [bool],
        out: &mut Vec<Point>,
    ) -> usize {
        let Some(color) = self.get(start) else {
            return 0;
        };
        let mut stack = vec![start];
        let mut count = 0;
        while let Some(pt) = stack.pop() {
            let i = self.idx(pt);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            out.push(pt);
            count += 1;
            for n in self.neighbors(pt) {
                if !visited[self.idx(n)] && self.get(n) == Some(color) {
                    stack.push(n);
                }
            }
        }
        count
    }

    /// The maximal set of same-coloured, orthogonally connected stones
    /// containing `start`. Empty if `start` holds no stone.
    pub fn connected_group(&self, start: Point) -> BTreeSet<Point> {
        let mut visited = vec![false; self.cells.len()];
        let mut group = Vec::new();
        self.collect_group(start, &mut visited, &mut group);
        group.into_iter().collect()
    }

    /// True if the group containing `start` touches at least one empty point.
    ///
    /// Stops at the first liberty found. An empty `start` has no group and
    /// reports `false`.
    pub fn has_liberty(&self, start: Point) -> bool {
        let Some(color) = self.get(start) else {
            return false;
        };
        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];
        while let Some(pt) = stack.pop() {
            let i = self.idx(pt);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            for n in self.neighbors(pt) {
                match self.get(n) {
                    None => return true,
                    Some(c) if c == color && !visited[self.idx(n)] => stack.push(n),
                    _ => {}
                }
            }
        }
        false
    }

    /// Count the distinct empty points adjacent to the group containing `start`.
    pub fn liberties(&self, start: Point) -> usize {
        let mut visited = vec![false; self.cells.len()];
        let mut group = Vec::new();
        self.collect_group(start, &mut visited, &mut group);

        let mut seen = vec![false; self.cells.len()];
        let mut libs = 0;
        for &pt in &group {
            for n in self.neighbors(pt) {
                let i = self.idx(n);
                if self.get(n).is_none() && !seen[i] {
                    seen[i] = true;
                    libs += 1;
                }
            }
        }
        libs
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = cell.map_or(GLYPH_EMPTY, Color::glyph);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Text vertices
// =============================================================================

/// A move as written in text protocols: a point or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Point(Point),
}

/// Parse a vertex such as `"D4"` or `"pass"` on a board of the given size.
///
/// Columns are letters from the left, skipping `I`; row `1` is the bottom
/// row. Returns `None` for malformed or off-board vertices.
pub fn parse_vertex(s: &str, size: usize) -> Option<Vertex> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }

    let bytes = s.as_bytes();
    let letter = bytes.first()?.to_ascii_uppercase();
    let col = COLUMN_LETTERS.iter().position(|&c| c == letter)?;
    let number: usize = s.get(1..)?.parse().ok()?;

    if col >= size || number == 0 || number > size {
        return None;
    }
    Some(Vertex::Point((size - number, col)))
}

/// Format a vertex for text output. `None` if the point cannot be named
/// (off the board, or the board is wider than the column letters).
pub fn format_vertex(v: Vertex, size: usize) -> Option<String> {
    match v {
        Vertex::Pass => Some("pass".to_string()),
        Vertex::Point((row, col)) => {
            if row >= size || col >= size || size > MAX_VERTEX_SIZE {
                return None;
            }
            let letter = COLUMN_LETTERS[col] as char;
            Some(format!("{letter}{}", size - row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::empty(rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let stone = match ch {
                    'X' => Some(Color::Black),
                    'O' => Some(Color::White),
                    _ => None,
                };
                board.set((r, c), stone);
            }
        }
        board
    }

    #[test]
    fn test_new_rejects_small_sizes() {
        assert!(Board::new(1).is_err());
        assert!(Board::new(0).is_err());
        let board = Board::new(2).unwrap();
        assert_eq!(board.count(None), 4);
    }

    #[test]
    fn test_neighbors_at_corner_edge_and_center() {
        let board = Board::empty(5);
        assert_eq!(board.neighbors((0, 0)).count(), 2);
        assert_eq!(board.neighbors((0, 2)).count(), 3);
        assert_eq!(board.neighbors((2, 2)).count(), 4);
        assert_eq!(board.neighbors((4, 4)).count(), 2);
        let mut n: Vec<_> = board.neighbors((2, 2)).collect();
        n.sort();
        assert_eq!(n, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);
    }

    #[test]
    fn test_get_off_board_is_none() {
        let board = Board::empty(3);
        assert_eq!(board.get((3, 0)), None);
        assert_eq!(board.get((0, 7)), None);
    }

    #[test]
    fn test_connected_group_ignores_diagonals() {
        let board = board_from(&[
            "X....", //
            ".X...", //
            ".XX..", //
            ".....", //
            ".....",
        ]);
        assert_eq!(board.connected_group((0, 0)).len(), 1);
        let group = board.connected_group((1, 1));
        assert_eq!(group, BTreeSet::from([(1, 1), (2, 1), (2, 2)]));
    }

    #[test]
    fn test_connected_group_same_from_every_member() {
        let board = board_from(&[
            "OOO..", //
            "O.O..", //
            "OOO.X", //
            "....X", //
            "XX...",
        ]);
        let group = board.connected_group((0, 0));
        assert_eq!(group.len(), 8);
        for &pt in &group {
            assert_eq!(board.connected_group(pt), group);
        }
    }

    #[test]
    fn test_connected_group_of_empty_point_is_empty() {
        let board = Board::empty(4);
        assert!(board.connected_group((1, 1)).is_empty());
    }

    #[test]
    fn test_has_liberty_through_chain() {
        // The chain reaches an empty point only at its far end.
        let board = board_from(&[
            "XOOOO", //
            "OXXXO", //
            "OOOX.", //
            ".....", //
            ".....",
        ]);
        assert!(board.has_liberty((1, 1)));
        assert!(!board.has_liberty((0, 0)));
    }

    #[test]
    fn test_has_liberty_on_ring_without_outside_liberties() {
        // White ring enclosing a black stone, sealed by black outside.
        let board = board_from(&[
            "XXXXX", //
            "XOOOX", //
            "XOXOX", //
            "XOOOX", //
            "XXXX.",
        ]);
        assert!(!board.has_liberty((1, 1)));
        assert!(!board.has_liberty((2, 2)));
        assert!(board.has_liberty((0, 0)));
        assert_eq!(board.liberties((1, 1)), 0);
    }

    #[test]
    fn test_has_liberty_empty_point() {
        let board = Board::empty(3);
        assert!(!board.has_liberty((1, 1)));
    }

    #[test]
    fn test_liberties_counts_shared_points_once() {
        let board = board_from(&[
            "XX...", //
            ".....", //
            ".....", //
            ".....", //
            ".....",
        ]);
        // (0,2), (1,0), (1,1)
        assert_eq!(board.liberties((0, 0)), 3);
    }

    #[test]
    fn test_display() {
        let board = board_from(&["X.", ".O"]);
        assert_eq!(board.to_string(), "X . \n. O \n");
    }

    #[test]
    fn test_parse_vertex() {
        assert_eq!(parse_vertex("pass", 9), Some(Vertex::Pass));
        assert_eq!(parse_vertex("PASS", 9), Some(Vertex::Pass));
        assert_eq!(parse_vertex("A1", 9), Some(Vertex::Point((8, 0))));
        assert_eq!(parse_vertex("a9", 9), Some(Vertex::Point((0, 0))));
        assert_eq!(parse_vertex("J9", 9), Some(Vertex::Point((0, 8))));
        assert_eq!(parse_vertex("I5", 9), None);
        assert_eq!(parse_vertex("K1", 9), None);
        assert_eq!(parse_vertex("A0", 9), None);
        assert_eq!(parse_vertex("A10", 9), None);
        assert_eq!(parse_vertex("", 9), None);
        assert_eq!(parse_vertex("D", 9), None);
    }

    #[test]
    fn test_format_vertex_roundtrip() {
        for size in [2, 9, 16, 25] {
            for row in 0..size {
                for col in 0..size {
                    let v = Vertex::Point((row, col));
                    let s = format_vertex(v, size).unwrap();
                    assert_eq!(parse_vertex(&s, size), Some(v), "roundtrip failed for {s}");
                }
            }
        }
        assert_eq!(format_vertex(Vertex::Point((0, 0)), 26), None);
    }
}
