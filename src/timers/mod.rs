//! Nested wall-clock timers for solver setup and solve phases.
//!
//! Timers are keyed by static strings and nest according to the order
//! in which they are started.   The [`timeit!`] and [`notimeit!`] macros
//! are used internally to time a block, or to exclude a block (e.g. progress
//! printing) from all running timers.

mod timers;
pub use self::timers::*;
