pub mod error;
pub mod types;

pub use error::{IslandError, Result};
pub use types::{CellState, Color, IslandId, LAND_COLOR, SEA_COLOR};
