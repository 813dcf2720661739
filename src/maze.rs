use crate::bfs::bfs;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use thiserror::Error;

/// Base grid dimensions used by the original interactive maze.
pub const DEFAULT_WIDTH: usize = 6;
pub const DEFAULT_HEIGHT: usize = 6;

/// Minimum number of traps placed on any maze.
const MIN_TRAPS: usize = 3;
/// One trap per this many cells once the grid outgrows the minimum.
const TRAP_DENSITY: usize = 10;

/// Step directions in the order the search examines them: up, down, left,
/// right. The order fixes tie-breaking between equally short paths.
const STEP_DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Number of traps placed on a `width` x `height` maze.
pub fn trap_count(width: usize, height: usize) -> usize {
    MIN_TRAPS.max(width * height / TRAP_DENSITY)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The grid does not have enough non-start, non-goal cells to hold the
    /// requested number of traps.
    #[error("a {width}x{height} grid has {candidates} cells free for traps but {traps} are required")]
    InsufficientSpace {
        width: usize,
        height: usize,
        traps: usize,
        candidates: usize,
    },
}

/// [Maze] holds a trap layout as a [BoolGrid] ([true] marks a trap), the
/// fixed start and goal corners, the agent marker and a [UnionFind] over the
/// open cells of the 4-connected grid. Components give an immediate answer to
/// "is the goal cut off?" without flood-filling, and are rebuilt whenever the
/// traps are regenerated. Implements [Grid] by building on [BoolGrid] so
/// fixed layouts can be set up cell by cell.
#[derive(Clone, Debug)]
pub struct Maze {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    pub base_width: usize,
    pub base_height: usize,
    pub start: Point,
    pub goal: Point,
    pub agent: Point,
    rng: StdRng,
}

impl Maze {
    /// Creates a maze with an entropy-seeded trap layout.
    pub fn new(base_width: usize, base_height: usize) -> Result<Maze, MazeError> {
        Maze::with_rng(base_width, base_height, StdRng::from_entropy())
    }

    /// Creates a maze drawing its trap layout from the given generator,
    /// making generation reproducible.
    pub fn with_rng(
        base_width: usize,
        base_height: usize,
        rng: StdRng,
    ) -> Result<Maze, MazeError> {
        let mut maze = Maze {
            grid: BoolGrid::new(base_width, base_height, false),
            components: UnionFind::new(base_width * base_height),
            components_dirty: false,
            base_width,
            base_height,
            start: Point::new(0, 0),
            goal: Point::new(base_width as i32 - 1, base_height as i32 - 1),
            agent: Point::new(0, 0),
            rng,
        };
        maze.regenerate()?;
        Ok(maze)
    }

    /// Replaces the trap layout with a fresh uniform sample at the current
    /// base dimensions, rebuilds the components and puts the agent back on
    /// the start cell. Start and goal stay on opposite corners and are never
    /// sampled as traps.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        let (width, height) = (self.base_width, self.base_height);
        self.start = Point::new(0, 0);
        self.goal = Point::new(width as i32 - 1, height as i32 - 1);
        let mut candidates: Vec<Point> = Vec::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let p = Point::new(x, y);
                if p != self.start && p != self.goal {
                    candidates.push(p);
                }
            }
        }
        let traps = trap_count(width, height);
        if traps > candidates.len() {
            return Err(MazeError::InsufficientSpace {
                width,
                height,
                traps,
                candidates: candidates.len(),
            });
        }
        info!("Placing {} traps on a {}x{} grid", traps, width, height);
        self.grid = BoolGrid::new(width, height, false);
        for ix in sample(&mut self.rng, candidates.len(), traps) {
            let p = candidates[ix];
            self.grid.set(p.x as usize, p.y as usize, true);
        }
        self.generate_components();
        self.reset_agent();
        Ok(())
    }

    /// Grows the base dimensions by one cell in each axis and regenerates.
    /// Dimensions only ever grow; there is no upper bound here.
    pub fn grow(&mut self) -> Result<(), MazeError> {
        self.base_width += 1;
        self.base_height += 1;
        self.regenerate()
    }

    /// Puts the agent marker back on the start cell.
    pub fn reset_agent(&mut self) {
        self.agent = self.start;
    }

    /// Checks whether `pos` holds a trap. Out-of-bounds cells are not traps.
    pub fn is_trap(&self, pos: Point) -> bool {
        self.grid.point_in_bounds(pos) && self.grid.get_point(pos)
    }

    /// The current trap cells in row-major order.
    pub fn traps(&self) -> Vec<Point> {
        let mut traps = Vec::new();
        for y in 0..self.grid.height as i32 {
            for x in 0..self.grid.width as i32 {
                if self.grid.get(x as usize, y as usize) {
                    traps.push(Point::new(x, y));
                }
            }
        }
        traps
    }

    fn open_neighbours(&self, point: &Point) -> Vec<Point> {
        STEP_DIRECTIONS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.can_move_to(*p))
            .collect::<Vec<Point>>()
    }
    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Computes the shortest trap-avoiding path from the start corner to the
    /// goal corner on the 4-connected grid. The returned cells run from the
    /// cell after the start up to and including the goal; [None] means the
    /// goal sits on a different component and no path exists. Expansion is
    /// FIFO with neighbours enumerated up, down, left, right, so the result
    /// is deterministic for a fixed trap layout.
    pub fn shortest_path(&self) -> Option<Vec<Point>> {
        if self.unreachable(&self.start, &self.goal) {
            info!("{} is not reachable from {}", self.goal, self.start);
            return None;
        }
        let goal = self.goal;
        bfs(
            &self.start,
            |node| self.open_neighbours(node),
            |node| *node == goal,
        )
        .map(|(mut path, _length)| path.split_off(1))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let parent_ix = self.grid.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    let neighbours = vec![
                        Point::new(point.x, point.y + 1),
                        Point::new(point.x + 1, point.y),
                    ]
                    .into_iter()
                    .filter(|p| self.grid.point_in_bounds(*p) && !self.grid.get_point(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height as i32 {
            for x in 0..self.grid.width as i32 {
                let p = Point::new(x, y);
                let glyph = if p == self.agent {
                    'A'
                } else if p == self.start {
                    'S'
                } else if p == self.goal {
                    'G'
                } else if self.grid.get(x as usize, y as usize) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<bool> for Maze {
    /// Creates a maze with a uniform trap layout and no trap quota, intended
    /// for setting up fixed layouts cell by cell.
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut maze = Maze {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
            base_width: width,
            base_height: height,
            start: Point::new(0, 0),
            goal: Point::new(width as i32 - 1, height as i32 - 1),
            agent: Point::new(0, 0),
            rng: StdRng::seed_from_u64(0),
        };
        maze.generate_components();
        maze
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Places or clears a trap. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: usize, y: usize, trapped: bool) {
        let p = Point::new(x as i32, y as i32);
        if self.grid.get(x, y) != trapped && trapped {
            self.components_dirty = true;
        } else {
            for n in self.open_neighbours(&p) {
                self.components.union(
                    self.grid.get_ix(x, y),
                    self.grid.get_ix(n.x as usize, n.y as usize),
                );
            }
        }
        self.grid.set(x, y, trapped);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
