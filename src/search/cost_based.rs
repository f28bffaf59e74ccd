use crate::search::{Expansion, GridSolver};

/// A*: nodes are ordered by cost so far plus the Manhattan estimate, and a node reached by a
/// strictly cheaper route is queued again. Returns shortest paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct CostBasedSolver;

impl GridSolver for CostBasedSolver {
    fn priority(&self, cost: usize, estimate: usize) -> usize {
        cost + estimate
    }

    fn expansion(&self) -> Expansion {
        Expansion::OnImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::path::Path;
    use crate::position::Position;

    fn positions(v: &[(usize, usize)]) -> Vec<Position> {
        v.iter().map(|&(row, col)| Position::new(row, col)).collect()
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = Grid::new(1, 1);
        let start = Position::new(0, 0);
        let (path, cost) = CostBasedSolver.get_path_and_cost(&grid, start, start).unwrap();
        assert_eq!(path.positions(), &[start]);
        assert_eq!(cost, 0);
    }

    /// Asserts that the optimal 4 step solution is found.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  G|
        let grid: Grid = "s..\n.o.\n..g".parse().unwrap();
        let path = CostBasedSolver.get_path_single_goal(
            &grid,
            Position::new(0, 0),
            Position::new(2, 2),
        );
        assert_eq!(path.len(), 5);
        assert_eq!(CostBasedSolver.get_path_cost(&path), 4);
    }

    #[test]
    fn test_complex() {
        let mut grid = Grid::new(10, 10);
        for (row, col) in [(1, 1), (5, 0), (0, 5), (8, 8)] {
            grid.toggle_obstacle(Position::new(row, col)).unwrap();
        }
        let start = Position::new(0, 0);
        let goal = Position::new(7, 7);
        let (path, cost) = CostBasedSolver.get_path_and_cost(&grid, start, goal).unwrap();
        assert_eq!(path.len(), 15);
        assert_eq!(cost, 14);
        assert!(path.is_valid_on(&grid, start, goal));
    }

    /// Several routes share the optimal length; row-major tie-breaking picks the one that runs
    /// along the top row first.
    #[test]
    fn tie_break_is_pinned() {
        let grid = Grid::new(3, 4);
        let path = CostBasedSolver.get_path_single_goal(
            &grid,
            Position::new(0, 0),
            Position::new(2, 3),
        );
        assert_eq!(
            path,
            Path::new(positions(&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3)]))
        );
    }

    #[test]
    fn walled_goal_gives_empty_path() {
        let grid: Grid = "s....\n...o.\n..ogo\n...o.".parse().unwrap();
        assert!(CostBasedSolver
            .get_path_and_cost(&grid, Position::new(0, 0), Position::new(2, 3))
            .is_none());
        assert!(CostBasedSolver
            .get_path_single_goal(&grid, Position::new(0, 0), Position::new(2, 3))
            .is_empty());
    }
}
