use core::fmt;
use std::str::FromStr;

use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::position::Position;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    Goal,
    Obstacle,
}

impl CellState {
    /// Single character used in the run-log grid layout.
    pub fn as_char(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 's',
            CellState::Goal => 'g',
            CellState::Obstacle => 'o',
        }
    }

    fn from_char(c: char) -> Option<CellState> {
        match c {
            '.' => Some(CellState::Empty),
            's' | 'S' => Some(CellState::Start),
            'g' | 'G' => Some(CellState::Goal),
            'o' | 'O' | '#' => Some(CellState::Obstacle),
            _ => None,
        }
    }
}

/// [Grid] holds the [CellState] of every position in row-major order together with the cached
/// start and goal. At most one cell is the start and at most one is the goal; neither is ever an
/// obstacle at the same time. The search borrows the grid immutably, so it cannot change while a
/// search runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    start: Option<Position>,
    goal: Option<Position>,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
            start: None,
            goal: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    fn ix(&self, pos: &Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn is_in_bounds(&self, pos: &Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn check_bounds(&self, pos: &Position) -> Result<()> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                position: *pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn cell(&self, pos: &Position) -> Option<CellState> {
        if self.is_in_bounds(pos) {
            Some(self.cells[self.ix(pos)])
        } else {
            None
        }
    }

    pub fn is_obstacle(&self, pos: &Position) -> bool {
        self.cell(pos) == Some(CellState::Obstacle)
    }

    /// In bounds and not an obstacle.
    pub fn can_move_to(&self, pos: &Position) -> bool {
        matches!(self.cell(pos), Some(state) if state != CellState::Obstacle)
    }

    /// Up to four open neighbours of `pos`, always in up, down, left, right order.
    pub fn neighbors(&self, pos: &Position) -> SmallVec<[Position; 4]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(p))
            .collect()
    }

    fn set_cell(&mut self, pos: &Position, state: CellState) {
        let ix = self.ix(pos);
        self.cells[ix] = state;
    }

    /// Moves the start to `pos`. The previous start cell becomes empty, and placing the start on
    /// the goal removes the goal.
    pub fn set_start(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(&pos)?;
        if let Some(previous) = self.start.take() {
            self.set_cell(&previous, CellState::Empty);
        }
        if self.goal == Some(pos) {
            self.goal = None;
        }
        self.set_cell(&pos, CellState::Start);
        self.start = Some(pos);
        debug!("Start placed at {}", pos);
        Ok(())
    }

    /// Moves the goal to `pos`. The previous goal cell becomes empty, and placing the goal on the
    /// start removes the start.
    pub fn set_goal(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(&pos)?;
        if let Some(previous) = self.goal.take() {
            self.set_cell(&previous, CellState::Empty);
        }
        if self.start == Some(pos) {
            self.start = None;
        }
        self.set_cell(&pos, CellState::Goal);
        self.goal = Some(pos);
        debug!("Goal placed at {}", pos);
        Ok(())
    }

    /// Empty becomes obstacle and obstacle becomes empty. Start and goal cells are left alone.
    pub fn toggle_obstacle(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(&pos)?;
        let state = self.cells[self.ix(&pos)];
        match state {
            CellState::Empty => self.set_cell(&pos, CellState::Obstacle),
            CellState::Obstacle => self.set_cell(&pos, CellState::Empty),
            CellState::Start | CellState::Goal => return Ok(()),
        }
        debug!("Obstacle toggled at {}", pos);
        Ok(())
    }

    /// Marks `pos` as an obstacle if it is empty; used when painting obstacles.
    pub fn place_obstacle(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(&pos)?;
        if self.cell(&pos) == Some(CellState::Empty) {
            self.set_cell(&pos, CellState::Obstacle);
            debug!("Obstacle placed at {}", pos);
        }
        Ok(())
    }

    /// Clears `pos` if it holds an obstacle.
    pub fn clear_obstacle(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(&pos)?;
        if self.is_obstacle(&pos) {
            self.set_cell(&pos, CellState::Empty);
            debug!("Obstacle cleared at {}", pos);
        }
        Ok(())
    }

    /// Resets every cell to empty and forgets start and goal.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
        self.start = None;
        self.goal = None;
        debug!("Cleared {}x{} grid", self.rows, self.cols);
    }

    /// Checks that the grid describes a searchable scenario and returns its endpoints. Placing an
    /// endpoint replaces whatever the cell held, so an endpoint is never an obstacle.
    pub fn validate(&self) -> Result<(Position, Position)> {
        let start = self.start.ok_or(Error::MissingStart)?;
        let goal = self.goal.ok_or(Error::MissingGoal)?;
        Ok((start, goal))
    }

    /// Links every open cell to its open right and lower neighbour, which yields the
    /// 4-connected components of the open cells.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let point = Position::new(row, col);
                if !self.can_move_to(&point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                for p in [Position::new(row + 1, col), Position::new(row, col + 1)] {
                    if self.can_move_to(&p) {
                        components.union(parent_ix, self.ix(&p));
                    }
                }
            }
        }
        components
    }

    /// Checks if `a` and `b` are open cells on the same connected component.
    pub fn reachable(&self, a: &Position, b: &Position) -> bool {
        if self.can_move_to(a) && self.can_move_to(b) {
            self.components().equiv(self.ix(a), self.ix(b))
        } else {
            false
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|c| c.as_char().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses the layout written by [Display]; spaces are optional and `#` is also an obstacle.
    fn from_str(s: &str) -> Result<Grid> {
        let parse_err = |line: usize, message: String| Error::Parse { line, message };
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let line_no = line_no + 1;
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    CellState::from_char(c)
                        .ok_or_else(|| parse_err(line_no, format!("unknown cell {:?}", c)))
                })
                .collect::<Result<Vec<_>>>()?;
            if row.is_empty() {
                continue;
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(parse_err(
                        line_no,
                        format!("expected {} cells, found {}", first.len(), row.len()),
                    ));
                }
            }
            rows.push(row);
        }
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        if n_rows == 0 {
            return Err(parse_err(0, "grid has no rows".to_owned()));
        }
        let mut grid = Grid::new(n_rows, n_cols);
        for (row, states) in rows.into_iter().enumerate() {
            for (col, state) in states.into_iter().enumerate() {
                let pos = Position::new(row, col);
                let slot = match state {
                    CellState::Start => &mut grid.start,
                    CellState::Goal => &mut grid.goal,
                    _ => {
                        grid.set_cell(&pos, state);
                        continue;
                    }
                };
                if slot.is_some() {
                    return Err(parse_err(
                        row + 1,
                        format!("more than one {:?} cell", state),
                    ));
                }
                *slot = Some(pos);
                grid.set_cell(&pos, state);
            }
        }
        Ok(grid)
    }
}
