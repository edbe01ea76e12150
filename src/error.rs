//! Error types for route planning

use thiserror::Error;

use crate::grid::Position;

/// Which distinguished marker a layout got wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Occupant,
    Exit,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Occupant => write!(f, "occupant"),
            Marker::Exit => write!(f, "exit"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("invalid symbol {symbol:?} at ({row}, {col})")]
    InvalidSymbol { symbol: String, row: usize, col: usize },

    #[error("expected exactly one {marker} marker, found {count}")]
    MissingOrDuplicateMarker { marker: Marker, count: usize },

    #[error("layout is empty")]
    EmptyLayout,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedLayout { row: usize, expected: usize, found: usize },

    #[error(
        "policy table is {policy_rows}x{policy_cols} but grid is {grid_rows}x{grid_cols}"
    )]
    PolicyDimensionMismatch {
        grid_rows: usize,
        grid_cols: usize,
        policy_rows: usize,
        policy_cols: usize,
    },

    #[error("start {start} lies outside the {rows}x{cols} grid")]
    StartOutOfBounds {
        start: Position,
        rows: usize,
        cols: usize,
    },

    #[error("policy table must have 4 action values per cell, found {0}")]
    PolicyShape(usize),

    #[error("no terminal cell reached from {start} after {steps} steps (stuck near {last})")]
    NoPathFound {
        start: Position,
        last: Position,
        steps: usize,
    },

    #[error("failed to load policy table: {0}")]
    PolicyLoad(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for RouteError {
    fn from(e: toml::de::Error) -> Self {
        RouteError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
