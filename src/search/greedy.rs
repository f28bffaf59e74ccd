use crate::search::{Expansion, GridSolver};

/// Greedy best-first search: nodes are ordered by the Manhattan estimate alone and each node
/// keeps the predecessor it was first discovered from. Finds a path whenever one exists, but not
/// necessarily a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    fn priority(&self, _cost: usize, estimate: usize) -> usize {
        estimate
    }

    fn expansion(&self) -> Expansion {
        Expansion::Once
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::position::Position;
    use crate::search::CostBasedSolver;

    #[test]
    fn equal_start_goal() {
        let grid = Grid::new(2, 2);
        let p = Position::new(1, 0);
        assert_eq!(GreedySolver.get_path_single_goal(&grid, p, p).positions(), &[p]);
    }

    #[test]
    fn open_grid_heads_straight_for_goal() {
        let grid = Grid::new(4, 4);
        let path =
            GreedySolver.get_path_single_goal(&grid, Position::new(1, 1), Position::new(3, 3));
        let expected: Vec<Position> = [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)]
            .into_iter()
            .map(|(row, col)| Position::new(row, col))
            .collect();
        assert_eq!(path.positions(), expected.as_slice());
    }

    /// The estimate lures the search up and around the wall while the short route runs
    /// underneath it.
    #[test]
    fn longer_than_cost_based_behind_a_wall() {
        // |......|
        // |..#...|
        // |.G#...|
        // |..##..|
        // |....S.|
        let grid: Grid = "......\n..o...\n.go...\n..oo..\n....s.".parse().unwrap();
        let start = Position::new(4, 4);
        let goal = Position::new(2, 1);
        let greedy = GreedySolver.get_path_single_goal(&grid, start, goal);
        let optimal = CostBasedSolver.get_path_single_goal(&grid, start, goal);
        assert!(greedy.is_valid_on(&grid, start, goal));
        assert_eq!(optimal.len(), 6);
        assert_eq!(greedy.len(), 10);
        assert_eq!(
            greedy.positions()[..4],
            [
                Position::new(4, 4),
                Position::new(3, 4),
                Position::new(2, 4),
                Position::new(2, 3)
            ]
        );
    }

    /// (1, 2) is first reached from the start and later again from (0, 2), which is expanded
    /// before it. The first discovery keeps its predecessor, so the path never detours through
    /// the top row.
    #[test]
    fn first_discovery_fixes_predecessor() {
        // |G#..|
        // |...S|
        // |##..|
        let grid: Grid = "go..\n...s\noo..".parse().unwrap();
        let start = Position::new(1, 3);
        let goal = Position::new(0, 0);
        let path = GreedySolver.get_path_single_goal(&grid, start, goal);
        let expected: Vec<Position> = [(1, 3), (1, 2), (1, 1), (1, 0), (0, 0)]
            .into_iter()
            .map(|(row, col)| Position::new(row, col))
            .collect();
        assert_eq!(path.positions(), expected.as_slice());
    }

    #[test]
    fn walled_goal_gives_empty_path() {
        let grid: Grid = "s.o\n.oo\n.og".parse().unwrap();
        assert!(GreedySolver
            .get_path_single_goal(&grid, Position::new(0, 0), Position::new(2, 2))
            .is_empty());
    }
}
