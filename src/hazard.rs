//! Danger-zone derivation around fire cells

use std::collections::BTreeSet;

use tracing::debug;

use crate::cell::CellKind;
use crate::grid::{Grid, Position};

/// Cells orthogonally adjacent to fire that are not fire, exit or obstacle.
///
/// Membership is collected as a set before anything is overwritten, so the
/// result does not depend on the order fire cells are visited in.
pub fn danger_zone(grid: &Grid) -> BTreeSet<Position> {
    let mut zone = BTreeSet::new();

    for fire in grid.positions_of(CellKind::Fire) {
        for neighbor in grid.neighbors(fire) {
            if !grid.get(neighbor).is_terminal() {
                zone.insert(neighbor);
            }
        }
    }

    zone
}

/// Mark every danger-zone cell in place and return the marked set
pub fn expand(grid: &mut Grid) -> BTreeSet<Position> {
    let zone = danger_zone(grid);
    for &pos in &zone {
        grid.set(pos, CellKind::Danger);
    }
    debug!(cells = zone.len(), "expanded danger zone");
    zone
}

/// Functional variant of [`expand`]
pub fn expanded(grid: &Grid) -> Grid {
    let mut out = grid.clone();
    expand(&mut out);
    out
}
