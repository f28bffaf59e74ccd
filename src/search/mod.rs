//! The informed-search skeleton shared by both algorithms, the [GridSolver] trait that
//! specializes it for a [Grid], and the [Algorithm] selector used by callers.
use core::fmt;
use std::hash::Hash;
use std::str::FromStr;

use fxhash::FxHashSet;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{info, warn};
use num_traits::Zero;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::frontier::{Frontier, FrontierEntry};
use crate::grid::Grid;
use crate::heuristic::manhattan_distance;
use crate::path::{reconstruct_path, Path};
use crate::position::Position;
use crate::{FxIndexMap, EDGE_COST};

pub mod cost_based;
pub mod greedy;

pub use cost_based::CostBasedSolver;
pub use greedy::GreedySolver;

/// What happens when a node that already has a recorded predecessor is reached again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// A strictly cheaper route replaces the recorded one and the node is queued again, even if
    /// it was already expanded.
    OnImprovement,
    /// The first discovery wins and every node is expanded at most once.
    Once,
}

/// Best-first search from `start` until `success` holds for a popped node. Nodes are ordered by
/// `priority(cost, heuristic(node))`, ties going to the smaller node. Returns the path including
/// both ends and its accumulated cost, or [None] once the frontier is exhausted.
pub fn informed_search<N, C, FN, IN, FH, FP, FS>(
    start: &N,
    expansion: Expansion,
    mut successors: FN,
    mut heuristic: FH,
    mut priority: FP,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Ord + Hash + Copy + fmt::Debug,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FP: FnMut(C, C) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut frontier: Frontier<N, C> = Frontier::new();
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    let mut finalized: FxHashSet<N> = FxHashSet::default();
    let mut expanded = 0_usize;

    parents.insert(*start, (usize::MAX, Zero::zero()));
    frontier.push(*start, priority(Zero::zero(), heuristic(start)));

    while let Some(FrontierEntry { node, .. }) = frontier.pop() {
        let (index, cost) = match parents.get_full(&node) {
            Some((index, _, &(_, cost))) => (index, cost),
            None => continue,
        };
        if success(&node) {
            info!("Reached {:?} after expanding {} nodes", node, expanded);
            let path = reconstruct_path(&parents, |&(p, _)| p, index);
            return Some((path, cost));
        }
        // A node is only queued again after its route improved, which also removes it from
        // the finalized set, so this only skips leftovers.
        if !finalized.insert(node) {
            continue;
        }
        expanded += 1;

        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            match parents.entry(successor) {
                Vacant(e) => {
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if expansion == Expansion::Once || e.get().1 <= new_cost {
                        continue;
                    }
                    e.insert((index, new_cost));
                    finalized.remove(&successor);
                }
            }
            frontier.push(successor, priority(new_cost, heuristic(&successor)));
        }
    }
    warn!(
        "Frontier exhausted after expanding {} nodes without reaching the goal",
        expanded
    );
    None
}

/// A search strategy over a [Grid]. Implementors choose the frontier ordering and the
/// re-expansion policy; the loop itself is [informed_search].
pub trait GridSolver {
    /// Frontier priority of a node reached at `cost` whose heuristic value is `estimate`.
    fn priority(&self, cost: usize, estimate: usize) -> usize;

    fn expansion(&self) -> Expansion;

    fn heuristic(&self, p1: &Position, p2: &Position) -> usize {
        manhattan_distance(p1, p2)
    }

    /// Open neighbours of `node` in up, down, left, right order, each at unit cost.
    fn successors(&self, grid: &Grid, node: &Position) -> SmallVec<[(Position, usize); 4]> {
        grid.neighbors(node)
            .into_iter()
            .map(|p| (p, EDGE_COST))
            .collect()
    }

    /// The path from `start` to `goal` together with its cost, or [None] if the goal cannot be
    /// reached. `start` and `goal` must be open cells of `grid`.
    fn get_path_and_cost(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Option<(Path, usize)> {
        informed_search(
            &start,
            self.expansion(),
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |cost, estimate| self.priority(cost, estimate),
            |point| *point == goal,
        )
        .map(|(v, c)| (Path::new(v), c))
    }

    /// Like [get_path_and_cost](Self::get_path_and_cost) but returns an empty [Path] when the
    /// goal cannot be reached.
    fn get_path_single_goal(&self, grid: &Grid, start: Position, goal: Position) -> Path {
        self.get_path_and_cost(grid, start, goal)
            .map(|(path, _)| path)
            .unwrap_or_default()
    }

    fn get_path_cost(&self, path: &Path) -> usize {
        path.edge_count() * EDGE_COST
    }
}

/// Selects which search a caller runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// A*: optimal, ordered by cost so far plus heuristic.
    CostBased,
    /// Greedy best-first: ordered by heuristic only, not necessarily optimal.
    Greedy,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::CostBased, Algorithm::Greedy];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::CostBased => "A*",
            Algorithm::Greedy => "Best First Search",
        }
    }

    /// File-name friendly form of [name](Self::name), e.g. `Astar`.
    pub fn file_stem(&self) -> String {
        self.name().replace('*', "star").replace(' ', "_")
    }

    /// Runs this algorithm without validating the scenario first.
    pub fn search(&self, grid: &Grid, start: Position, goal: Position) -> Path {
        match self {
            Algorithm::CostBased => CostBasedSolver.get_path_single_goal(grid, start, goal),
            Algorithm::Greedy => GreedySolver.get_path_single_goal(grid, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "a*" | "astar" | "a_star" | "cost_based" => Ok(Algorithm::CostBased),
            "best_first_search" | "best_first" | "greedy" => Ok(Algorithm::Greedy),
            _ => Err(Error::UnknownAlgorithm { name: s.to_owned() }),
        }
    }
}

/// Runs `algorithm` from `start` to `goal`. Both must be open cells of `grid`; an unreachable
/// goal yields an empty [Path].
pub fn search(grid: &Grid, start: Position, goal: Position, algorithm: Algorithm) -> Path {
    info!("Running {} from {} to {}", algorithm, start, goal);
    let path = algorithm.search(grid, start, goal);
    if path.is_empty() {
        info!("{} is not reachable from {}", goal, start);
    } else {
        info!("{} found a path of {} positions", algorithm, path.len());
    }
    path
}

/// Validates the start and goal placed on `grid` and runs `algorithm` between them.
pub fn find_path(grid: &Grid, algorithm: Algorithm) -> Result<Path> {
    let (start, goal) = grid.validate()?;
    Ok(search(grid, start, goal, algorithm))
}
