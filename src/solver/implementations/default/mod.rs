#![allow(non_snake_case)]

mod info;
mod info_print;
mod kktsystem;
mod problemdata;
mod residuals;
mod settings;
mod solution;
mod solver;
mod variables;

//export flattened
pub use info::*;
pub use kktsystem::*;
pub use problemdata::*;
pub use residuals::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
pub use variables::*;
