//! Greedy policy walk from the occupant's cell to the first terminal cell

use tracing::{debug, trace};

use crate::error::{Result, RouteError};
use crate::grid::{Grid, Position};
use crate::policy::{ActionSelector, Greedy, PolicyTable};

/// Unbounded sequence of positions visited by following the policy.
///
/// Yields the position after each move, including unchanged positions when a
/// move is blocked by the grid boundary. Stops once a terminal cell has been
/// yielded.
pub struct Walk<'a, S: ActionSelector = Greedy> {
    grid: &'a Grid,
    policy: &'a PolicyTable,
    selector: S,
    current: Position,
}

impl<'a> Walk<'a, Greedy> {
    pub fn new(grid: &'a Grid, policy: &'a PolicyTable, start: Position) -> Result<Self> {
        Walk::with_selector(grid, policy, start, Greedy)
    }
}

impl<'a, S: ActionSelector> Walk<'a, S> {
    /// Fails if the policy's shape differs from the grid's or `start` is off the grid
    pub fn with_selector(
        grid: &'a Grid,
        policy: &'a PolicyTable,
        start: Position,
        selector: S,
    ) -> Result<Self> {
        policy.check_dimensions(grid)?;
        if start.row >= grid.rows || start.col >= grid.cols {
            return Err(RouteError::StartOutOfBounds {
                start,
                rows: grid.rows,
                cols: grid.cols,
            });
        }
        Ok(Walk {
            grid,
            policy,
            selector,
            current: start,
        })
    }

    pub fn position(&self) -> Position {
        self.current
    }
}

impl<S: ActionSelector> Iterator for Walk<'_, S> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.grid.is_terminal(self.current) {
            return None;
        }
        let action = self.selector.select(&self.policy.preferences(self.current));
        let next = action.apply(self.current, self.grid);
        trace!(from = %self.current, to = %next, %action, "step");
        self.current = next;
        Some(next)
    }
}

/// Maximum number of moves before a walk is declared runaway
pub fn step_cap(grid: &Grid) -> usize {
    grid.rows * grid.cols * 4
}

/// Follow the policy greedily from `start` until a terminal cell is reached.
///
/// Returns the empty path when `start` is itself terminal. Otherwise the path
/// begins with `start` and ends with the terminal cell.
pub fn follow_path(grid: &Grid, start: Position, policy: &PolicyTable) -> Result<Vec<Position>> {
    follow_path_with(grid, start, policy, Greedy)
}

pub fn follow_path_with<S: ActionSelector>(
    grid: &Grid,
    start: Position,
    policy: &PolicyTable,
    selector: S,
) -> Result<Vec<Position>> {
    let mut walk = Walk::with_selector(grid, policy, start, selector)?;

    if grid.is_terminal(start) {
        debug!(%start, "start cell is terminal");
        return Ok(Vec::new());
    }

    let cap = step_cap(grid);
    let mut path = vec![start];

    while !grid.is_terminal(walk.position()) {
        if path.len() > cap {
            debug!(%start, last = %walk.position(), steps = cap, "walk hit step cap");
            return Err(RouteError::NoPathFound {
                start,
                last: walk.position(),
                steps: cap,
            });
        }
        match walk.next() {
            Some(pos) => path.push(pos),
            None => break,
        }
    }

    debug!(%start, end = %walk.position(), steps = path.len() - 1, "path found");
    Ok(path)
}
