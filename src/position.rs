use core::fmt;
use smallvec::SmallVec;

/// A cell coordinate on the grid. Ordering is row-major, which is also the order used to break
/// ties between frontier entries of equal priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// The position one step away in `dir`, or [None] if that would underflow. Upper bounds are
    /// not known here and are checked by the grid.
    pub fn step(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Position::new(row, self.col)),
            Direction::Down => Some(Position::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Position::new(self.row, col)),
            Direction::Right => Some(Position::new(self.row, self.col + 1)),
        }
    }

    /// The von Neumann neighbourhood in the fixed [Direction::CARDINAL] order, without bounds
    /// checks beyond the lower edge.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Position; 4]> {
        Direction::CARDINAL
            .iter()
            .filter_map(|&dir| self.step(dir))
            .collect()
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if the two positions differ by exactly one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The direction of a single move from `self` to `next`.
    pub fn dir(&self, next: &Position) -> Option<Direction> {
        Direction::CARDINAL
            .iter()
            .copied()
            .find(|&dir| self.step(dir) == Some(*next))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Position {
        Position::new(row, col)
    }
}

/// A 4-connected move. Row indices grow downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour expansion order. Changing it changes which of several equal-priority neighbours
    /// is discovered first.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_order_and_lower_edge() {
        let p = Position::new(1, 1);
        let n = p.neumann_neighborhood();
        assert_eq!(
            n.as_slice(),
            &[
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2)
            ]
        );
        let corner = Position::new(0, 0);
        assert_eq!(
            corner.neumann_neighborhood().as_slice(),
            &[Position::new(1, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn row_major_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn direction_between_positions() {
        let p = Position::new(3, 3);
        assert_eq!(p.dir(&Position::new(2, 3)), Some(Direction::Up));
        assert_eq!(p.dir(&Position::new(4, 3)), Some(Direction::Down));
        assert_eq!(p.dir(&Position::new(3, 2)), Some(Direction::Left));
        assert_eq!(p.dir(&Position::new(3, 4)), Some(Direction::Right));
        assert_eq!(p.dir(&Position::new(4, 4)), None);
        assert_eq!(p.dir(&p), None);
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(Position::new(4, 2).to_string(), "(4, 2)");
        assert_eq!(Direction::Left.to_string(), "LEFT");
    }
}
