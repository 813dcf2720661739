//! # grid_maze
//!
//! A small interactive-maze model: a grid with randomly placed traps, a
//! fixed start and goal in opposite corners, breadth-first shortest paths
//! over the 4-connected grid and a per-step reward table for replaying a
//! path move by move. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists. Rendering, buttons
//! and pacing are left entirely to the caller; the [Playback] iterator
//! hands out one scored move at a time.

pub mod bfs;
pub mod maze;
pub mod playback;
pub mod reward;

pub use maze::{trap_count, Maze, MazeError, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use playback::{Playback, PlaybackStep};
