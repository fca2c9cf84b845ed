pub mod core;
pub mod grid;
pub mod discovery;
pub mod session;
pub mod config;
pub mod view;
