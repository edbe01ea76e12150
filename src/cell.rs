use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-character markers used in floor layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Symbol {
    Exit,
    Fire,
    Obstacle,
    Open,
    /// Output overlay for cells on the computed route
    Path,
    /// Output overlay for the occupant's starting cell
    Occupant,
    /// Output rendering of a danger-zone cell
    Hazard,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Exit => 'S',
            Symbol::Fire => 'F',
            Symbol::Obstacle => '0',
            Symbol::Open => '.',
            Symbol::Path => 'P',
            Symbol::Occupant => 'U',
            Symbol::Hazard => 'Z',
        }
    }

    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'S' => Some(Symbol::Exit),
            'F' => Some(Symbol::Fire),
            '0' => Some(Symbol::Obstacle),
            '.' => Some(Symbol::Open),
            'P' => Some(Symbol::Path),
            'U' => Some(Symbol::Occupant),
            'Z' => Some(Symbol::Hazard),
            _ => None,
        }
    }

    /// Parse a layout cell; the cell must be exactly one recognized char
    pub fn parse(cell: &str) -> Option<Symbol> {
        let mut chars = cell.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::from_char(c),
            _ => None,
        }
    }

    /// Cell kind this symbol encodes to. Overlays and hazards encode to open
    /// space; danger is only ever derived from fire.
    pub fn kind(self) -> CellKind {
        match self {
            Symbol::Exit => CellKind::Exit,
            Symbol::Fire => CellKind::Fire,
            Symbol::Obstacle => CellKind::Obstacle,
            Symbol::Open | Symbol::Path | Symbol::Occupant | Symbol::Hazard => CellKind::Open,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<String> for Symbol {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::parse(&value).ok_or_else(|| format!("unrecognized symbol {:?}", value))
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.as_char().to_string()
    }
}

/// What a grid cell is, and therefore its reward value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Exit,
    Fire,
    Obstacle,
    Open,
    Danger,
}

impl CellKind {
    pub fn value(self) -> i32 {
        match self {
            CellKind::Exit => 100,
            CellKind::Fire => -10,
            CellKind::Obstacle => -100,
            CellKind::Open => -1,
            CellKind::Danger => -5,
        }
    }

    pub fn from_value(value: i32) -> Option<CellKind> {
        match value {
            100 => Some(CellKind::Exit),
            -10 => Some(CellKind::Fire),
            -100 => Some(CellKind::Obstacle),
            -1 => Some(CellKind::Open),
            -5 => Some(CellKind::Danger),
            _ => None,
        }
    }

    /// Symbol shown when decoding a grid back to a layout
    pub fn symbol(self) -> Symbol {
        match self {
            CellKind::Exit => Symbol::Exit,
            CellKind::Fire => Symbol::Fire,
            CellKind::Obstacle => Symbol::Obstacle,
            CellKind::Open => Symbol::Open,
            CellKind::Danger => Symbol::Hazard,
        }
    }

    /// A walk stops on exit, fire and obstacle cells
    pub fn is_terminal(self) -> bool {
        matches!(self, CellKind::Exit | CellKind::Fire | CellKind::Obstacle)
    }
}
