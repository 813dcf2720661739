use grid_maze::Maze;
use grid_util::grid::Grid;

// In this example a path is found on a 3x3 maze with shape
//  ___
// |S# |
// | # |
// |  G|
//  ___
// where
// - # marks a trap
// - S marks the start
// - G marks the goal
//
// Cells have a 4-neighbourhood and the path detours around the trap column.

fn main() {
    let mut maze: Maze = Grid::new(3, 3, false);
    maze.set(1, 0, true);
    maze.set(1, 1, true);
    maze.update();
    println!("{}", maze);
    let path = maze.shortest_path().unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
