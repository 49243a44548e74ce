//! hsdlp solver main module.
//!
//! This module contains the main types and traits for the hsdlp solver.
//!
//! The solver comes with a [default implementation](crate::solver::implementations::default)
//! of all required traits.   This produces a solver for linear programs in the
//! standard form described in the top level [API page](crate), and is the
//! appropriate choice for nearly all users.
//!
//! It is also possible to implement a custom solver by defining a collection
//! of custom types that together implement all of the required core
//! [traits](crate::solver::core::traits) for objects in the core solver.

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//user facing traits required to interact with solver
pub use crate::solver::core::{IPSolver, SolverError, SolverStatus};

//user facing traits required to define new implementations
pub use crate::solver::core::traits;
pub use crate::solver::core::{CoreSettings, SettingsError};

//If we had implementations for multiple alternative
//problem formats, they would live here.   Since we
//only have default, it is exposed at the top level
//in the use statements directly below instead.

pub use crate::solver::implementations::default;
pub use crate::solver::implementations::default::*;
