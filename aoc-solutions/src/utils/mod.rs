//! Helpers shared by several days

pub mod grid;
pub mod toposort;
