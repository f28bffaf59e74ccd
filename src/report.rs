//! Records of completed runs, the comparison of the two most recent ones and the plain-text run
//! log. Timing is measured by the caller around the search call and passed in here.
use chrono::Local;
use core::fmt;
use log::info;
use std::fs;
use std::path::{Path as FsPath, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::grid::Grid;
use crate::path::Path;
use crate::position::Position;
use crate::search::Algorithm;

#[derive(Clone, Debug, PartialEq)]
pub struct RunRecord {
    pub algorithm: Algorithm,
    pub start: Position,
    pub goal: Position,
    pub path: Path,
    pub elapsed: Duration,
}

impl RunRecord {
    pub fn new(
        algorithm: Algorithm,
        start: Position,
        goal: Position,
        path: Path,
        elapsed: Duration,
    ) -> RunRecord {
        RunRecord {
            algorithm,
            start,
            goal,
            path,
            elapsed,
        }
    }
}

/// Append-only list of completed runs.
#[derive(Clone, Debug, Default)]
pub struct RunHistory {
    runs: Vec<RunRecord>,
}

impl RunHistory {
    pub fn new() -> RunHistory {
        RunHistory::default()
    }

    pub fn push(&mut self, record: RunRecord) {
        self.runs.push(record);
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn latest(&self) -> Option<&RunRecord> {
        self.runs.last()
    }

    /// Mutable access to the newest record, for attaching the elapsed time once it is known.
    pub fn latest_mut(&mut self) -> Option<&mut RunRecord> {
        self.runs.last_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunRecord> {
        self.runs.iter()
    }

    /// The two most recent runs, oldest first. Comparing needs at least two runs.
    pub fn comparison(&self) -> Option<&[RunRecord]> {
        let n = self.runs.len();
        if n >= 2 {
            Some(&self.runs[n - 2..])
        } else {
            None
        }
    }

    /// Elapsed time of each compared run as a fraction of the slowest one. All fractions are
    /// zero if the slowest run took no time.
    pub fn relative_times(&self) -> Vec<(Algorithm, f64)> {
        let Some(runs) = self.comparison() else {
            return Vec::new();
        };
        let max = runs
            .iter()
            .map(|r| r.elapsed.as_secs_f64())
            .fold(0.0, f64::max);
        runs.iter()
            .map(|r| {
                let fraction = if max > 0.0 {
                    r.elapsed.as_secs_f64() / max
                } else {
                    0.0
                };
                (r.algorithm, fraction)
            })
            .collect()
    }
}

/// The text log written after a run: summary, grid layout and the movement sequence.
#[derive(Clone, Copy, Debug)]
pub struct RunLog<'a> {
    pub record: &'a RunRecord,
    pub grid: &'a Grid,
}

impl<'a> RunLog<'a> {
    pub fn new(record: &'a RunRecord, grid: &'a Grid) -> RunLog<'a> {
        RunLog { record, grid }
    }

    /// Writes the log into `dir` as `<algorithm>_<YYYYmmdd_HHMMSS>.txt`, creating the directory
    /// if needed, and returns the file path.
    pub fn write_to(&self, dir: &FsPath) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let file_name = format!(
            "{}_{}.txt",
            self.record.algorithm.file_stem(),
            Local::now().format("%Y%m%d_%H%M%S")
        );
        let file = dir.join(file_name);
        fs::write(&file, self.to_string())?;
        info!("Run log written to {}", file.display());
        Ok(file)
    }
}

impl fmt::Display for RunLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let record = self.record;
        writeln!(f, "Algorithm: {}", record.algorithm)?;
        writeln!(f, "Start Position: {}", record.start)?;
        writeln!(f, "Goal Position: {}", record.goal)?;
        writeln!(f, "Time Taken: {:.2} seconds", record.elapsed.as_secs_f64())?;
        writeln!(f, "Path Length: {} steps", record.path.len())?;
        writeln!(f, "\nGrid Layout:")?;
        write!(f, "{}", self.grid)?;
        writeln!(f, "\nMovement Sequence:")?;
        if let Some(first) = record.path.start() {
            writeln!(f, "Step 0: Start at {}", first)?;
        }
        for (i, (dir, to)) in record.path.steps().enumerate() {
            writeln!(f, "Step {}: Move {} to {}", i + 1, dir, to)?;
        }
        Ok(())
    }
}
