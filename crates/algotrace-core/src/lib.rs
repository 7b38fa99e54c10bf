//! Algotrace Core Library
//!
//! Engines that turn classic data structure and algorithm operations into
//! ordered step logs, plus the models, configuration and error types they
//! share.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod graph;
pub mod list;
pub mod logging;
pub mod sort;
pub mod trace;
pub mod tree;
