use grid_maze::{Maze, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread;
use std::time::Duration;

// Replays the shortest path on a freshly generated maze, moving the agent
// marker and printing the running reward table one move at a time.

fn main() {
    let mut maze =
        Maze::with_rng(DEFAULT_WIDTH, DEFAULT_HEIGHT, StdRng::seed_from_u64(42)).unwrap();
    let steps = match maze.playback() {
        Some(playback) => playback.collect::<Vec<_>>(),
        None => {
            println!("No path found!");
            return;
        }
    };
    maze.reset_agent();
    println!(
        "{:>4} {:>10} {:>8} {:>11}",
        "Step", "Position", "Reward", "Cumulative"
    );
    for step in steps {
        maze.agent = step.position;
        println!("{}", maze);
        println!(
            "{:>4} {:>10} {:>8.2} {:>11.2}",
            step.step,
            format!("({}, {})", step.position.x, step.position.y),
            step.reward,
            step.cumulative
        );
        thread::sleep(Duration::from_millis(250));
    }
}
