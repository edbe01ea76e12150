pub mod cell;
pub mod codec;
pub mod config;
pub mod error;
pub mod follower;
pub mod grid;
pub mod hazard;
pub mod layout;
pub mod pipeline;
pub mod policy;
pub mod render;

pub use cell::{CellKind, Symbol};
pub use codec::{decode, encode, parse_symbols, Encoded, Layout, SymbolGrid};
pub use error::{Marker, Result, RouteError};
pub use follower::{follow_path, Walk};
pub use grid::{Grid, Position};
pub use hazard::expand;
pub use pipeline::{plan_route, RouteContext, RouteOutcome, RouteResponse};
pub use policy::{Action, ActionSelector, Greedy, PolicyTable};
pub use render::render;
