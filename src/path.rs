use core::fmt;
use itertools::Itertools;
use std::hash::Hash;

use crate::grid::Grid;
use crate::position::{Direction, Position};
use crate::FxIndexMap;

/// Walks parent indices back from `goal_index` until a node without a parent (the start) is
/// reached and returns the nodes in start-to-goal order.
pub fn reconstruct_path<N, V, F>(
    parents: &FxIndexMap<N, V>,
    mut parent: F,
    goal_index: usize,
) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(goal_index, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Ordered positions from start to goal, both inclusive. An empty path means the goal could not
/// be reached; a single position means start and goal coincide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Position>);

impl Path {
    pub fn new(positions: Vec<Position>) -> Path {
        Path(positions)
    }

    pub fn empty() -> Path {
        Path(Vec::new())
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.0
    }

    /// Number of positions, which is what the run log reports as the path length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Option<Position> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// Number of moves, one less than the number of positions.
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Each move as the direction taken and the position arrived at.
    pub fn steps(&self) -> impl Iterator<Item = (Direction, Position)> + '_ {
        self.0
            .iter()
            .tuple_windows()
            .filter_map(|(from, to)| from.dir(to).map(|dir| (dir, *to)))
    }

    /// Checks that the path runs from `start` to `goal` through open cells of `grid`, one
    /// 4-adjacent step at a time.
    pub fn is_valid_on(&self, grid: &Grid, start: Position, goal: Position) -> bool {
        self.start() == Some(start)
            && self.goal() == Some(goal)
            && self.0.iter().all(|p| grid.can_move_to(p))
            && self.0.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Path {
        Path(positions)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no path");
        }
        write!(f, "{}", self.0.iter().join(" -> "))
    }
}
