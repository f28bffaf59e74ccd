use pathhunter::{find_path, Algorithm, Grid, Position};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() -> pathhunter::Result<()> {
    let mut grid = Grid::new(3, 3);
    grid.toggle_obstacle(Position::new(1, 1))?;
    grid.set_start(Position::new(0, 0))?;
    grid.set_goal(Position::new(2, 2))?;
    println!("{}", grid);
    for algorithm in Algorithm::ALL {
        let path = find_path(&grid, algorithm)?;
        println!("{}:", algorithm);
        for (dir, p) in path.steps() {
            println!("  {} to {}", dir, p);
        }
    }
    Ok(())
}
