//! Per-request route planning: encode, expand hazards, follow the policy, render

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::codec::{encode, to_layout, Layout, SymbolGrid};
use crate::error::Result;
use crate::follower::follow_path;
use crate::grid::{Grid, Position};
use crate::hazard::expand;
use crate::policy::PolicyTable;
use crate::render::render;

/// Everything derived from one incoming layout. Built fresh per request.
#[derive(Debug, Clone)]
pub struct RouteContext {
    pub grid: Grid,
    pub occupant: Position,
    pub exit: Position,
    pub danger: BTreeSet<Position>,
}

impl RouteContext {
    /// Encode the layout and mark the danger zone
    pub fn from_layout<R: AsRef<[S]>, S: AsRef<str>>(layout: &[R]) -> Result<Self> {
        let encoded = encode(layout)?;
        let mut grid = encoded.grid;
        let danger = expand(&mut grid);
        Ok(RouteContext {
            grid,
            occupant: encoded.occupant,
            exit: encoded.exit,
            danger,
        })
    }

    pub fn follow(&self, policy: &PolicyTable) -> Result<Vec<Position>> {
        follow_path(&self.grid, self.occupant, policy)
    }

    pub fn render(&self, path: &[Position]) -> SymbolGrid {
        render(&self.grid, path, self.occupant, self.exit)
    }
}

/// A planned route
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub symbols: SymbolGrid,
    pub path: Vec<Position>,
    pub occupant: Position,
    pub exit: Position,
    pub danger_cells: usize,
}

impl RouteOutcome {
    pub fn layout(&self) -> Layout {
        to_layout(&self.symbols)
    }

    /// Whether the walk ended on the exit rather than fire or an obstacle
    pub fn reaches_exit(&self) -> bool {
        self.path.last() == Some(&self.exit)
    }
}

/// Plan an evacuation route for `layout` using `policy`.
///
/// Either the full rendered route is returned or an error; never a partial grid.
pub fn plan_route<R: AsRef<[S]>, S: AsRef<str>>(
    layout: &[R],
    policy: &PolicyTable,
) -> Result<RouteOutcome> {
    let ctx = RouteContext::from_layout(layout)?;
    let path = ctx.follow(policy)?;
    let symbols = ctx.render(&path);

    info!(
        occupant = %ctx.occupant,
        exit = %ctx.exit,
        steps = path.len().saturating_sub(1),
        danger_cells = ctx.danger.len(),
        "planned route"
    );

    Ok(RouteOutcome {
        symbols,
        path,
        occupant: ctx.occupant,
        exit: ctx.exit,
        danger_cells: ctx.danger.len(),
    })
}

/// Request body accepted by the surrounding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub layout: Layout,
}

/// Response body returned by the surrounding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub updated_space: Layout,
    pub status: String,
}

impl From<&RouteOutcome> for RouteResponse {
    fn from(outcome: &RouteOutcome) -> Self {
        RouteResponse {
            updated_space: outcome.layout(),
            status: "successful".to_string(),
        }
    }
}
