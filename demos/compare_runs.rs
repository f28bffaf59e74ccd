use pathhunter::{
    find_path, Algorithm, Grid, Position, RunHistory, RunLog, RunRecord, LOG_DIRECTORY,
};
use std::path::Path;
use std::time::Instant;

// Runs both searches on the same board, keeps a record of each run, writes their logs and
// prints how the two runs compare.
fn main() -> pathhunter::Result<()> {
    let mut grid = Grid::default();
    grid.set_start(Position::new(7, 1))?;
    grid.set_goal(Position::new(7, 13))?;
    for row in 2..13 {
        grid.place_obstacle(Position::new(row, 7))?;
    }
    for col in 4..8 {
        grid.place_obstacle(Position::new(2, col))?;
        grid.place_obstacle(Position::new(12, col))?;
    }
    println!("{}", grid);

    let (start, goal) = grid.validate()?;
    let mut history = RunHistory::new();
    for algorithm in Algorithm::ALL {
        let timer = Instant::now();
        let path = find_path(&grid, algorithm)?;
        let elapsed = timer.elapsed();
        if path.is_empty() {
            println!("{}: no path found, goal is surrounded by obstacles", algorithm);
            continue;
        }
        history.push(RunRecord::new(algorithm, start, goal, path, elapsed));
        if let Some(record) = history.latest() {
            let file = RunLog::new(record, &grid).write_to(Path::new(LOG_DIRECTORY))?;
            println!(
                "{}: {} positions, log at {}",
                algorithm,
                record.path.len(),
                file.display()
            );
        }
    }

    for (algorithm, fraction) in history.relative_times() {
        let bar = "#".repeat((fraction * 40.0).round() as usize);
        println!("{:>18} {}", algorithm.to_string(), bar);
    }
    Ok(())
}
