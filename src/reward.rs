//! Step scoring for path playback. Every move pays a small cost, traps and
//! the goal adjust it, and stepping somewhere new earns a bonus. All
//! adjustments are independent and additive.

use crate::maze::Maze;
use fxhash::FxHashSet;
use grid_util::point::Point;

/// Cost of taking any step.
pub const STEP_COST: f64 = -0.1;
/// Penalty added for stepping onto a trap.
pub const TRAP_PENALTY: f64 = -5.0;
/// Payoff added for reaching the goal cell.
pub const GOAL_REWARD: f64 = 10.0;
/// Bonus added for stepping onto a cell not seen before. The goal cell never
/// earns the bonus.
pub const EXPLORATION_BONUS: f64 = 0.5;

impl Maze {
    /// Scores a step onto `position` given the cells visited so far. Pure:
    /// neither the maze nor the visited set is touched, and positions are
    /// not bounds-checked.
    pub fn step_reward(&self, position: Point, visited: &FxHashSet<Point>) -> f64 {
        let mut reward = STEP_COST;
        if self.is_trap(position) {
            reward += TRAP_PENALTY;
        }
        if position == self.goal {
            reward += GOAL_REWARD;
        }
        if !visited.contains(&position) && position != self.goal {
            reward += EXPLORATION_BONUS;
        }
        reward
    }
}
