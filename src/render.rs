use crate::cell::Symbol;
use crate::codec::{decode, SymbolGrid};
use crate::grid::{Grid, Position};

/// Project the grid and route back into symbols.
///
/// Path cells become path markers, then the occupant and exit markers are
/// drawn on top. Every other cell keeps its decoded symbol.
pub fn render(grid: &Grid, path: &[Position], occupant: Position, exit: Position) -> SymbolGrid {
    let mut symbols = decode(grid);

    for pos in path {
        symbols[pos.row][pos.col] = Symbol::Path;
    }
    symbols[occupant.row][occupant.col] = Symbol::Occupant;
    symbols[exit.row][exit.col] = Symbol::Exit;

    symbols
}

/// Format path for display
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_path_positions() {
        assert_eq!(format_path(&[]), "No path");
        assert_eq!(
            format_path(&[Position::new(2, 0), Position::new(1, 0)]),
            "(2,0) -> (1,0)"
        );
    }
}
