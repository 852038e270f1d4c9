pub mod actions;
pub mod app;
pub mod defs;
pub mod error;
pub mod generator;
pub mod paths;
pub mod sizes;
