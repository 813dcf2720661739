/// Fixed-layout checks: known paths on hand-built mazes and the reward
/// accounting of a full playback.
use grid_maze::Maze;
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

/// The middle column's top two cells are trapped, forcing a detour along the
/// left edge and the bottom row:
//  ___
// |S# |
// | # |
// |  G|
//  ___
#[test]
fn forced_detour_routes_around_the_trap_column() {
    let mut maze: Maze = Grid::new(3, 3, false);
    maze.set(1, 0, true);
    maze.set(1, 1, true);
    maze.update();
    let path = maze.shortest_path().unwrap();
    assert_eq!(
        path,
        vec![
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ]
    );
}

#[test]
fn trap_free_grid_walks_the_manhattan_distance() {
    let maze: Maze = Grid::new(5, 4, false);
    let path = maze.shortest_path().unwrap();
    assert_eq!(path.len(), (5 - 1) + (4 - 1));
}

#[test]
fn trap_wall_disconnects_the_goal() {
    let mut maze: Maze = Grid::new(4, 4, false);
    for y in 0..4 {
        maze.set(1, y, true);
    }
    maze.update();
    assert!(maze.unreachable(&maze.start, &maze.goal));
    assert!(maze.shortest_path().is_none());
    assert!(maze.playback().is_none());
}

#[test]
fn detour_playback_reward_table() {
    let mut maze: Maze = Grid::new(3, 3, false);
    maze.set(1, 0, true);
    maze.set(1, 1, true);
    maze.update();
    let steps: Vec<_> = maze.playback().unwrap().collect();
    assert_eq!(steps.len(), 4);
    // Three fresh open cells, then the goal payoff without the bonus.
    for step in &steps[..3] {
        assert!((step.reward - 0.4).abs() < 1e-9);
    }
    assert!((steps[3].reward - 9.9).abs() < 1e-9);
    assert!((steps[3].cumulative - 11.1).abs() < 1e-9);
}

#[test]
fn generated_maze_playback_matches_its_path() {
    let maze = Maze::with_rng(8, 8, StdRng::seed_from_u64(11)).unwrap();
    match maze.playback() {
        Some(playback) => {
            let steps: Vec<_> = playback.collect();
            let path = maze.shortest_path().unwrap();
            assert_eq!(steps.last().unwrap().position, maze.goal);
            assert_eq!(
                steps.iter().map(|s| s.position).collect::<Vec<_>>(),
                path
            );
        }
        None => assert!(maze.shortest_path().is_none()),
    }
}
