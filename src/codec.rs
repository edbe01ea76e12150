//! Conversion between symbolic layouts and numeric grids

use tracing::debug;

use crate::cell::{CellKind, Symbol};
use crate::error::{Marker, Result, RouteError};
use crate::grid::{Grid, Position};

/// Raw layout as received from callers: one string per cell
pub type Layout = Vec<Vec<String>>;

/// Parsed layout, one symbol per cell
pub type SymbolGrid = Vec<Vec<Symbol>>;

/// Result of encoding a layout
#[derive(Debug, Clone)]
pub struct Encoded {
    pub grid: Grid,
    pub occupant: Position,
    pub exit: Position,
}

/// Parse a raw layout into symbols, checking it is non-empty and rectangular
pub fn parse_symbols<R: AsRef<[S]>, S: AsRef<str>>(layout: &[R]) -> Result<SymbolGrid> {
    let cols = layout.first().map(|r| r.as_ref().len()).unwrap_or(0);
    if layout.is_empty() || cols == 0 {
        return Err(RouteError::EmptyLayout);
    }

    let mut symbols = Vec::with_capacity(layout.len());
    for (row, line) in layout.iter().enumerate() {
        let line = line.as_ref();
        if line.len() != cols {
            return Err(RouteError::RaggedLayout {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        let parsed = line
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let cell = cell.as_ref();
                Symbol::parse(cell).ok_or_else(|| RouteError::InvalidSymbol {
                    symbol: cell.to_string(),
                    row,
                    col,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        symbols.push(parsed);
    }

    Ok(symbols)
}

/// Encode a layout into a numeric grid and locate the occupant and exit.
///
/// The layout must be non-empty and rectangular, every cell must be a
/// recognized symbol, and the occupant and exit markers must each appear
/// exactly once.
pub fn encode<R: AsRef<[S]>, S: AsRef<str>>(layout: &[R]) -> Result<Encoded> {
    let symbols = parse_symbols(layout)?;
    let rows = symbols.len();
    let cols = symbols[0].len();

    let mut cells = Vec::with_capacity(rows * cols);
    let mut occupants = Vec::new();
    let mut exits = Vec::new();

    for (row, line) in symbols.iter().enumerate() {
        for (col, &symbol) in line.iter().enumerate() {
            match symbol {
                Symbol::Occupant => occupants.push(Position::new(row, col)),
                Symbol::Exit => exits.push(Position::new(row, col)),
                _ => {}
            }
            cells.push(symbol.kind());
        }
    }

    let occupant = single_marker(Marker::Occupant, &occupants)?;
    let exit = single_marker(Marker::Exit, &exits)?;

    // rows * cols == cells.len() after the rectangular check
    let grid = Grid::from_cells(rows, cols, cells).ok_or(RouteError::EmptyLayout)?;
    debug!(rows, cols, %occupant, %exit, "encoded layout");

    Ok(Encoded {
        grid,
        occupant,
        exit,
    })
}

fn single_marker(marker: Marker, found: &[Position]) -> Result<Position> {
    match found {
        [pos] => Ok(*pos),
        _ => Err(RouteError::MissingOrDuplicateMarker {
            marker,
            count: found.len(),
        }),
    }
}

/// Decode a numeric grid back to symbols. Danger cells become hazards.
pub fn decode(grid: &Grid) -> SymbolGrid {
    grid.iter_rows()
        .map(|row| row.iter().map(|kind| kind.symbol()).collect())
        .collect()
}

/// Decode raw reward values, rejecting anything outside the five known values
pub fn decode_values(values: &[Vec<i32>]) -> Option<SymbolGrid> {
    values
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| CellKind::from_value(v).map(CellKind::symbol))
                .collect::<Option<Vec<_>>>()
        })
        .collect()
}

/// Turn parsed symbols back into the raw string layout
pub fn to_layout(symbols: &[Vec<Symbol>]) -> Layout {
    symbols
        .iter()
        .map(|row| row.iter().map(|&s| String::from(s)).collect())
        .collect()
}
