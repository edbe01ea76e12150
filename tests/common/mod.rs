#![allow(dead_code)]

use exitmatrix::{Grid, Layout, PolicyTable, Position};
use ndarray::Array3;

/// Build a layout from one string per row, one char per cell
pub fn layout(rows: &[&str]) -> Layout {
    rows.iter()
        .map(|row| row.chars().map(|c| c.to_string()).collect())
        .collect()
}

/// Policy whose preferences at each cell come from `f(row, col)`
pub fn policy_from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> [f64; 4]) -> PolicyTable {
    let values = Array3::from_shape_fn((rows, cols, 4), |(r, c, a)| f(r, c)[a]);
    PolicyTable::from_array(values).unwrap()
}

pub const UP: [f64; 4] = [1.0, 0.0, 0.0, 0.0];
pub const RIGHT: [f64; 4] = [0.0, 1.0, 0.0, 0.0];
pub const DOWN: [f64; 4] = [0.0, 0.0, 1.0, 0.0];
pub const LEFT: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Render a grid's numeric values, for assertion messages
pub fn values_to_string(grid: &Grid) -> String {
    grid.values()
        .iter()
        .map(|row| row.iter().map(|v| format!("{:5}", v)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
