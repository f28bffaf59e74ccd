use crate::position::Position;
use crate::EDGE_COST;

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) scaled by the edge
/// cost. Admissible and consistent on a uniform-cost 4-connected grid, which is what makes the
/// cost-based search return shortest paths.
pub fn manhattan_distance(a: &Position, b: &Position) -> usize {
    a.manhattan_distance(b) * EDGE_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_diagonal() {
        let a = Position::new(1, 4);
        let b = Position::new(3, 0);
        assert_eq!(manhattan_distance(&a, &b), 6);
        assert_eq!(manhattan_distance(&b, &a), 6);
        assert_eq!(manhattan_distance(&a, &a), 0);
    }

    /// Consistency along every edge: h(a) <= cost(a, b) + h(b).
    #[test]
    fn consistent_along_edges() {
        let goal = Position::new(2, 2);
        for row in 0..5 {
            for col in 0..5 {
                let p = Position::new(row, col);
                for n in p.neumann_neighborhood() {
                    assert!(
                        manhattan_distance(&p, &goal) <= EDGE_COST + manhattan_distance(&n, &goal)
                    );
                }
            }
        }
    }
}
