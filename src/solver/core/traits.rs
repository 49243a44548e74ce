//! Required traits for types providing an hsdlp solver implementation.
//!
//! This module defines the core traits that must be implemented by a collection
//! of mutually associated data types to make a solver for a particular problem
//! format.
//!
//! In nearly all cases there is no need for a user to implement these traits.
//! Instead, users should use the collection of types that are provided
//! in the [Default solver implementation](crate::solver::implementations::default),
//! which collectively implement support for standard form linear programs.

use super::{CoreSettings, SolverStatus};
use crate::algebra::*;
use crate::timers::*;

/// Data for a linear program.

pub trait ProblemData<T: FloatT> {
    type V: Variables<T>;

    /// Number of (rows, columns) of the constraint matrix
    fn dims(&self) -> (usize, usize);
}

/// Variables for a linear program in homogeneous form.
///
/// The same type is used to hold the iterate, the step direction
/// and the right hand side of the Newton system.

pub trait Variables<T: FloatT> {
    type D: ProblemData<T>;
    type R: Residuals<T>;
    type SE: Settings<T>;

    /// Compute the complementarity measure.

    fn calc_mu(&self) -> T;

    /// Compute the Newton RHS for the predictor (affine) step.

    fn affine_step_rhs(&mut self, residuals: &Self::R, variables: &Self);

    /// Compute the Newton RHS for the corrector step, given the
    /// predictor direction `step`, centering parameter `γ` and
    /// complementarity measure `μ`.

    fn combined_step_rhs(&mut self, residuals: &Self::R, variables: &Self, step: &Self, γ: T, μ: T);

    /// Compute the maximum step length in the given step direction
    /// that keeps the iterate nonnegative, scaled by `α0`.

    fn calc_step_length(&self, step_lhs: &Self, α0: T) -> T;

    /// Update the variables in the given step direction, scaled by `α`.
    fn add_step(&mut self, step_lhs: &Self, α: T);

    /// Set the variables to the canonical starting point.
    fn unit_initialization(&mut self);

    /// Overwrite values with those from another object
    fn copy_from(&mut self, src: &Self);

    /// True if every entry is finite
    fn is_finite(&self) -> bool;
}

/// Residuals for a linear program in homogeneous form.

pub trait Residuals<T: FloatT> {
    type D: ProblemData<T>;
    type V: Variables<T>;

    /// Compute residuals for the given variables.
    ///
    fn update(&mut self, variables: &Self::V, data: &Self::D);
}

/// Newton system solver object.

pub trait KKTSystem<T: FloatT> {
    type D: ProblemData<T>;
    type V: Variables<T>;
    type SE: Settings<T>;
    type E: std::error::Error;

    /// Update the linear system with the current iterate and refactor.
    /// Also computes the parts of the solution that do not depend on the RHS.

    fn update(&mut self, data: &Self::D, variables: &Self::V) -> Result<(), Self::E>;

    /// Solve the Newton system for the given RHS.

    fn solve(
        &mut self,
        step_lhs: &mut Self::V,
        step_rhs: &Self::V,
        data: &Self::D,
        variables: &Self::V,
    ) -> Result<(), Self::E>;
}

/// Printing functions for the solver's Info

pub trait InfoPrint<T>
where
    T: FloatT,
{
    type D: ProblemData<T>;
    type SE: Settings<T>;

    /// Print the solver configuration, e.g. settings etc.
    /// This function is called once at the start of the solve.
    fn print_configuration(&mut self, settings: &Self::SE, data: &Self::D)
        -> std::io::Result<()>;

    /// Print a header to appear at the top of progress information.
    fn print_status_header(&mut self, settings: &Self::SE) -> std::io::Result<()>;

    /// Print solver progress information.   Called once per iteration.
    fn print_status(&mut self, settings: &Self::SE) -> std::io::Result<()>;

    /// Print solver final status and other exit information, including
    /// the solve timer breakdown.   Called at solver termination.
    fn print_footer(&mut self, settings: &Self::SE, timers: &Timers) -> std::io::Result<()>;
}

/// Progress information for the solver.

pub trait Info<T>: InfoPrint<T>
where
    T: FloatT,
{
    type V: Variables<T>;
    type R: Residuals<T>;

    /// Reset internal data, particularly solve timers.
    fn reset(&mut self, timers: &mut Timers);

    /// Compute final values before solver termination
    fn finalize(&mut self, timers: &mut Timers);

    /// Update solver progress information
    fn update(&mut self, data: &Self::D, variables: &Self::V, residuals: &Self::R, timers: &Timers);

    /// Return `true` if termination conditions have been reached.
    fn check_termination(&mut self, residuals: &Self::R, settings: &Self::SE, iter: u32) -> bool;

    /// Record some of the top level solver's choice of various
    /// scalars. `μ = ` complementarity measure.  `α = ` computed step length.
    /// `γ = ` centering parameter.
    fn save_scalars(&mut self, μ: T, α: T, γ: T, iter: u32);

    /// Report or update termination status
    fn get_status(&self) -> SolverStatus;
    fn set_status(&mut self, status: SolverStatus);
}

/// Solution for a linear program.

pub trait Solution<T: FloatT> {
    type D: ProblemData<T>;
    type V: Variables<T>;
    type I: Info<T>;
    type SE: Settings<T>;

    /// Compute solution from the Variables at solver termination
    fn finalize(&mut self, data: &Self::D, variables: &Self::V, info: &Self::I, settings: &Self::SE);
}

/// Settings for a linear program.
///
/// Implementors of this trait can define any internal or problem
/// specific settings they wish.   They must, however, also maintain
/// a settings object of type [`CoreSettings`](crate::solver::core::CoreSettings)
/// and return this to the solver internally.

pub trait Settings<T: FloatT> {
    /// Return the core settings.
    fn core(&self) -> &CoreSettings<T>;

    /// Return the core settings (mutably).
    fn core_mut(&mut self) -> &mut CoreSettings<T>;

    /// Check that the settings are valid.
    fn validate(&self) -> Result<(), super::SettingsError>;
}
