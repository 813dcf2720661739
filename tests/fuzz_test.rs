/// Fuzzes the maze model by checking for many randomly generated mazes that
/// a path is found exactly when the goal is part of the same connected
/// component as the start, and that every found path is a valid
/// trap-avoiding walk of at least Manhattan length.
use grid_maze::{trap_count, Maze};
use grid_util::grid::Grid;
use rand::prelude::*;

fn visualize_maze(maze: &Maze) {
    print!("{}", maze);
}

#[test]
fn fuzz() {
    const N_MAZES: u64 = 500;
    for n in 3..=10usize {
        for seed in 0..N_MAZES {
            let maze = Maze::with_rng(n, n, StdRng::seed_from_u64(seed)).unwrap();
            let reachable = maze.reachable(&maze.start, &maze.goal);
            let path = maze.shortest_path();
            // Show the maze if the component check and the search disagree
            if path.is_some() != reachable {
                visualize_maze(&maze);
            }
            assert!(path.is_some() == reachable);
            if let Some(path) = path {
                let mut current = maze.start;
                for p in &path {
                    let step = (p.x - current.x).abs() + (p.y - current.y).abs();
                    assert_eq!(step, 1);
                    assert!(!maze.is_trap(*p));
                    current = *p;
                }
                assert_eq!(current, maze.goal);
                let manhattan = (maze.goal.x + maze.goal.y) as usize;
                assert!(path.len() >= manhattan);
            }
        }
    }
}

#[test]
fn fuzz_invariants() {
    for seed in 0..200u64 {
        let mut maze = Maze::with_rng(6, 6, StdRng::seed_from_u64(seed)).unwrap();
        for _ in 0..3 {
            let (w, h) = (maze.width(), maze.height());
            let traps = maze.traps();
            assert_eq!(traps.len(), trap_count(w, h));
            assert!(!traps.contains(&maze.start));
            assert!(!traps.contains(&maze.goal));
            assert_eq!(maze.agent, maze.start);
            maze.grow().unwrap();
        }
        assert_eq!(maze.width(), 9);
        assert_eq!(maze.height(), 9);
    }
}
