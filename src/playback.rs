//! Replays a shortest path one scored move at a time. The original
//! interactive loop drew the maze and slept between moves; here playback is a
//! plain iterator and pacing, rendering and moving the agent marker are left
//! to the caller.

use crate::maze::Maze;
use fxhash::FxHashSet;
use grid_util::point::Point;

/// One row of the reward table: the agent stepped onto `position` as move
/// number `step` (counted from 1), earning `reward` for a running total of
/// `cumulative`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackStep {
    pub step: usize,
    pub position: Point,
    pub reward: f64,
    pub cumulative: f64,
}

/// Lazy, finite iterator over the scored moves of a shortest path. Dropping
/// it mid-path and asking the maze for a new one restarts playback from the
/// beginning.
pub struct Playback<'a> {
    maze: &'a Maze,
    path: std::vec::IntoIter<Point>,
    visited: FxHashSet<Point>,
    cumulative: f64,
    step: usize,
}

impl Maze {
    /// Starts a playback over the current shortest path, or [None] when the
    /// goal cannot be reached. Checking for [None] up front is how callers
    /// are expected to handle the no-path case; it is not an error.
    pub fn playback(&self) -> Option<Playback<'_>> {
        let path = self.shortest_path()?;
        let mut visited = FxHashSet::default();
        visited.insert(self.start);
        Some(Playback {
            maze: self,
            path: path.into_iter(),
            visited,
            cumulative: 0.0,
            step: 0,
        })
    }
}

impl Iterator for Playback<'_> {
    type Item = PlaybackStep;

    fn next(&mut self) -> Option<PlaybackStep> {
        let position = self.path.next()?;
        // Score against the history first: a cell is novel the first time it
        // is stepped on, not after.
        let reward = self.maze.step_reward(position, &self.visited);
        self.visited.insert(position);
        self.cumulative += reward;
        self.step += 1;
        Some(PlaybackStep {
            step: self.step,
            position,
            reward,
            cumulative: self.cumulative,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.path.size_hint()
    }
}
