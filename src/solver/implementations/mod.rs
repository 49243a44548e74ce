//! Solver implementations for particular problem formats.

pub mod default;
