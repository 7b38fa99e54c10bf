//! Command implementations for algotrace

pub mod analysis;
pub mod dijkstra;
pub mod dispatch;
pub mod list;
pub mod render;
pub mod sort;
pub mod traverse;
pub mod tree;
