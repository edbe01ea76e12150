//! Read-only per-cell action preference table

use std::fmt;
use std::path::Path;

use ndarray::{Array3, Axis};
use tracing::info;

use crate::error::{Result, RouteError};
use crate::grid::{Grid, Position};

/// Movement actions, in the fixed order used for tie-breaking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    pub fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Left => 3,
        }
    }

    /// Apply the move; a move off the grid leaves the position unchanged
    pub fn apply(self, pos: Position, grid: &Grid) -> Position {
        match self {
            Action::Up if pos.row > 0 => Position::new(pos.row - 1, pos.col),
            Action::Right if pos.col + 1 < grid.cols => Position::new(pos.row, pos.col + 1),
            Action::Down if pos.row + 1 < grid.rows => Position::new(pos.row + 1, pos.col),
            Action::Left if pos.col > 0 => Position::new(pos.row, pos.col - 1),
            _ => pos,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        };
        write!(f, "{}", name)
    }
}

/// Chooses an action from a cell's four preferences.
///
/// Only [`Greedy`] ships. An exploring selector would plug in here; the
/// follower itself stays deterministic for any deterministic selector.
pub trait ActionSelector {
    fn select(&self, preferences: &[f64; 4]) -> Action;
}

/// Highest preference wins; ties go to the earliest action in
/// up, right, down, left order. NaN never wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl ActionSelector for Greedy {
    fn select(&self, preferences: &[f64; 4]) -> Action {
        let mut best = Action::Up;
        let mut best_value = f64::NEG_INFINITY;
        for action in Action::ALL {
            let value = preferences[action.index()];
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best
    }
}

/// Dense rows x cols x 4 table of action preferences
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyTable {
    values: Array3<f64>,
}

impl PolicyTable {
    pub fn from_array(values: Array3<f64>) -> Result<Self> {
        let actions = values.len_of(Axis(2));
        if actions != Action::ALL.len() {
            return Err(RouteError::PolicyShape(actions));
        }
        Ok(PolicyTable { values })
    }

    /// Build from nested `[row][col][action]` preferences
    pub fn from_nested(nested: &[Vec<[f64; 4]>]) -> Result<Self> {
        let rows = nested.len();
        let cols = nested.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = nested.iter().position(|r| r.len() != cols) {
            return Err(RouteError::PolicyLoad(format!(
                "row {} has {} cells, expected {}",
                bad,
                nested[bad].len(),
                cols
            )));
        }
        let values = Array3::from_shape_fn((rows, cols, 4), |(r, c, a)| nested[r][c][a]);
        Self::from_array(values)
    }

    /// Same preferences in every cell
    pub fn uniform(rows: usize, cols: usize, preferences: [f64; 4]) -> Self {
        PolicyTable {
            values: Array3::from_shape_fn((rows, cols, 4), |(_, _, a)| preferences[a]),
        }
    }

    /// Load a table from a `.npy` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let table = match ext {
            "npy" => Self::load_npy(path)?,
            "json" => {
                let contents = std::fs::read_to_string(path)?;
                let nested: Vec<Vec<[f64; 4]>> = serde_json::from_str(&contents)
                    .map_err(|e| RouteError::PolicyLoad(format!("{}: {}", path.display(), e)))?;
                Self::from_nested(&nested)?
            }
            _ => {
                return Err(RouteError::PolicyLoad(format!(
                    "unsupported policy file {:?} (expected .npy or .json)",
                    path
                )))
            }
        };
        info!(
            path = %path.display(),
            rows = table.rows(),
            cols = table.cols(),
            "loaded policy table"
        );
        Ok(table)
    }

    fn load_npy(path: &Path) -> Result<Self> {
        let values = match ndarray_npy::read_npy::<_, Array3<f64>>(path) {
            Ok(values) => values,
            // Tables saved as float32 are widened
            Err(as_f64) => match ndarray_npy::read_npy::<_, Array3<f32>>(path) {
                Ok(values) => values.mapv(f64::from),
                Err(as_f32) => {
                    return Err(RouteError::PolicyLoad(format!(
                        "{}: not a 3-d float64 table ({}) nor a 3-d float32 table ({})",
                        path.display(),
                        as_f64,
                        as_f32
                    )))
                }
            },
        };
        Self::from_array(values)
    }

    pub fn rows(&self) -> usize {
        self.values.len_of(Axis(0))
    }

    pub fn cols(&self) -> usize {
        self.values.len_of(Axis(1))
    }

    /// Fail fast if the table's spatial shape differs from the grid's
    pub fn check_dimensions(&self, grid: &Grid) -> Result<()> {
        if self.rows() != grid.rows || self.cols() != grid.cols {
            return Err(RouteError::PolicyDimensionMismatch {
                grid_rows: grid.rows,
                grid_cols: grid.cols,
                policy_rows: self.rows(),
                policy_cols: self.cols(),
            });
        }
        Ok(())
    }

    /// Preferences at `pos`; panics if `pos` lies outside the table
    pub fn preferences(&self, pos: Position) -> [f64; 4] {
        let v = &self.values;
        [
            v[[pos.row, pos.col, 0]],
            v[[pos.row, pos.col, 1]],
            v[[pos.row, pos.col, 2]],
            v[[pos.row, pos.col, 3]],
        ]
    }
}
