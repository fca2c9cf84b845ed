pub mod generator;
pub mod store;

pub use generator::{generate, DEFAULT_LAND_THRESHOLD};
pub use store::Grid;
