use grid_maze::Maze;
use grid_util::grid::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Regenerates and grows a maze a few times, showing how the trap quota
// scales with the grid area.

fn main() {
    let mut maze = Maze::with_rng(6, 6, StdRng::seed_from_u64(7)).unwrap();
    println!("{}x{} maze with {} traps:", maze.width(), maze.height(), maze.traps().len());
    println!("{}", maze);
    for _ in 0..4 {
        maze.grow().unwrap();
        println!("{}x{} maze with {} traps:", maze.width(), maze.height(), maze.traps().len());
        println!("{}", maze);
    }
    maze.regenerate().unwrap();
    println!("Refreshed at {}x{}:", maze.width(), maze.height());
    println!("{}", maze);
}
