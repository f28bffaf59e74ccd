//! # pathhunter
//!
//! Informed search on a bounded 4-connected grid with obstacles. Two algorithms share one
//! best-first skeleton:
//! - [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) ([Algorithm::CostBased]), ordered
//!   by cost so far plus the Manhattan distance, which returns shortest paths;
//! - [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search)
//!   ([Algorithm::Greedy]), ordered by the Manhattan distance alone.
//!
//! Every move costs the same. Ties between equal priorities are broken in row-major order of the
//! positions, so repeated searches on the same grid return the same path. An unreachable goal is
//! reported as an empty [Path].
//!
//! ```
//! use pathhunter::{find_path, Algorithm, Grid};
//!
//! let grid: Grid = "s....\n.....\noooo.\n.....\n....g".parse().unwrap();
//! let path = find_path(&grid, Algorithm::CostBased).unwrap();
//! assert_eq!(path.len(), 9);
//! ```
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod path;
pub mod position;
pub mod report;
pub mod search;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

pub use error::{Error, Result};
pub use grid::{CellState, Grid};
pub use path::Path;
pub use position::{Direction, Position};
pub use report::{RunHistory, RunLog, RunRecord};
pub use search::{find_path, search, Algorithm, CostBasedSolver, GreedySolver, GridSolver};

/// Insertion-ordered map used for predecessor bookkeeping; entries are addressed by index.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Board height used by [Grid::default].
pub const DEFAULT_ROWS: usize = 15;
/// Board width used by [Grid::default].
pub const DEFAULT_COLS: usize = 15;
/// Cost of a single move between adjacent cells.
pub const EDGE_COST: usize = 1;
/// Directory the application writes run logs into.
pub const LOG_DIRECTORY: &str = "pathhunter_logs";
