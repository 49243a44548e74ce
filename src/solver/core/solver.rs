use self::internal::*;
use super::callbacks::{Callback, SolverCallbacks};
use super::traits::*;
use super::SettingsError;
use crate::algebra::*;
use crate::timers::*;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated with a solution.
    Solved,
    /// Iteration limit reached before solution or infeasibility certificate found.
    MaxIterations,
    /// Problem is infeasible.  The dual iterate is a certificate of infeasibility.
    Infeasible,
    /// Problem is unbounded.  The primal iterate is an improving ray.
    Unbounded,
    /// Solver terminated with a numerical error
    NumericalError,
    /// Time limit reached before solution or infeasibility certificate found.
    MaxTime,
    /// Solver terminated by the user supplied termination callback.
    CallbackTerminated,
}

impl SolverStatus {
    /// Integer status code.   `0` on success, positive on any other
    /// terminal status and `-1` if the solver has not run.
    pub fn code(&self) -> i32 {
        match self {
            SolverStatus::Unsolved => -1,
            SolverStatus::Solved => 0,
            SolverStatus::MaxIterations => 1,
            SolverStatus::Infeasible => 2,
            SolverStatus::Unbounded => 3,
            SolverStatus::NumericalError => 4,
            SolverStatus::MaxTime => 5,
            SolverStatus::CallbackTerminated => 6,
        }
    }

    /// Human readable description of the termination status
    pub fn message(&self) -> &'static str {
        match self {
            SolverStatus::Unsolved => "Solver has not been run.",
            SolverStatus::Solved => "Optimization terminated successfully.",
            SolverStatus::MaxIterations => {
                "The iteration limit was reached before the algorithm converged."
            }
            SolverStatus::Infeasible => {
                "The algorithm terminated successfully and determined that the problem is infeasible."
            }
            SolverStatus::Unbounded => {
                "The algorithm terminated successfully and determined that the problem is unbounded."
            }
            SolverStatus::NumericalError => {
                "Numerical difficulties were encountered before the problem converged. \
                 Check that the constraint matrix has full row rank."
            }
            SolverStatus::MaxTime => "The time limit was reached before the algorithm converged.",
            SolverStatus::CallbackTerminated => {
                "The solve was terminated by the user supplied callback."
            }
        }
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        matches!(*self, SolverStatus::Infeasible | SolverStatus::Unbounded)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------
// Solver construction errors
// ---------------------------------

/// Error type returned by solver construction
#[derive(Error, Debug)]
pub enum SolverError {
    /// Problem data has incompatible dimensions
    #[error("Dimension mismatch: expected {field} length {expected}, got {actual}")]
    DataDimension {
        /// Name of the offending input
        field: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },
    /// Constraint matrix is not a valid CSC matrix
    #[error("Bad constraint matrix: {0}")]
    SparseFormat(#[from] SparseFormatError),
    /// Problem data contains infinite or NaN values
    #[error("Problem data contains non-finite values")]
    NonFiniteData,
    /// Settings failed validation
    #[error("Bad settings: {0}")]
    Settings(#[from] SettingsError),
}

// ---------------------------------
// top level solver container type
// ---------------------------------

// The top-level solver.

// This trait is defined with a collection of mutually interacting associated types.
// See the [`DefaultSolver`](crate::solver::implementations::default) for an example.

pub struct Solver<D, V, R, K, I, SO, SE> {
    pub data: D,
    pub variables: V,
    pub residuals: R,
    pub kktsystem: K,
    pub step_lhs: V,
    pub step_rhs: V,
    pub info: I,
    pub solution: SO,
    pub settings: SE,
    pub timers: Option<Timers>,
    pub(crate) callbacks: SolverCallbacks<I>,
}

impl<D, V, R, K, I, SO, SE> Solver<D, V, R, K, I, SO, SE> {
    /// Set a termination callback.   The callback is called once per
    /// iteration before any work is done, and the solve terminates with
    /// status [`CallbackTerminated`](SolverStatus::CallbackTerminated)
    /// if it returns `true`.
    pub fn set_termination_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&I) -> bool + Send + 'static,
    {
        self.callbacks.termination_callback = Callback::Rust(Box::new(callback));
    }

    /// Remove any termination callback
    pub fn unset_termination_callback(&mut self) {
        self.callbacks.termination_callback = Callback::None;
    }
}

// ---------------------------------
// IPSolver trait and its standard implementation.
// ---------------------------------

/// An interior point solver implementing a predictor-corrector scheme

// Only the main solver function lives in IPSolver, since this is the
// only publicly facing trait we want to give the solver.   Additional
// internal functionality for the top level solver object is implemented
// for the IPSolverInternals trait below, upon which IPSolver depends

pub trait IPSolver<T, D, V, R, K, I, SO, SE> {
    /// Run the solver
    fn solve(&mut self);
}

impl<T, D, V, R, K, I, SO, SE> IPSolver<T, D, V, R, K, I, SO, SE>
    for Solver<D, V, R, K, I, SO, SE>
where
    T: FloatT,
    D: ProblemData<T, V = V>,
    V: Variables<T, D = D, R = R, SE = SE>,
    R: Residuals<T, D = D, V = V>,
    K: KKTSystem<T, D = D, V = V, SE = SE>,
    I: Info<T, D = D, V = V, R = R, SE = SE>,
    SO: Solution<T, D = D, V = V, I = I, SE = SE>,
    SE: Settings<T>,
{
    fn solve(&mut self) {
        // various initializations
        let mut iter: u32 = 0;
        let mut γ = T::zero();
        let mut α = T::zero();
        let mut μ;

        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();

        // solver release info, solver config
        // problem dimensions etc.  Print failures
        // never interrupt the solve.
        notimeit! {timers; {
            let _ = self.info.print_configuration(&self.settings, &self.data);
            let _ = self.info.print_status_header(&self.settings);
        }}

        self.info.reset(&mut timers);

        timeit! {timers => "solve"; {

        // start from the canonical point x = z = 1, y = 0, τ = κ = 1
        self.variables.unit_initialization();

        timeit!{timers => "IP iteration"; {

        // ----------
        // main loop
        // ----------

        loop {

            //update the residuals
            //--------------
            self.residuals.update(&self.variables, &self.data);

            //calculate complementarity measure
            //--------------
            μ = self.variables.calc_mu();

            // record scalar values from most recent iteration.
            // This captures μ at iteration zero.
            self.info.save_scalars(μ, α, γ, iter);

            // convergence check and printing
            // --------------
            self.info.update(
                &self.data,
                &self.variables,
                &self.residuals,&timers);

            notimeit!{timers; {
                let _ = self.info.print_status(&self.settings);
            }}

            if self.info.check_termination(&self.residuals, &self.settings, iter) {
                break;
            }

            // user termination check before any work
            if self.callbacks.check_termination(&self.info) {
                self.info.set_status(SolverStatus::CallbackTerminated);
                break;
            }

            //increment counter here because we only count
            //iterations that produce a KKT update
            iter += 1;

            // Update the Newton system and the constant parts of its solution.
            // --------------
            let mut is_kkt_solve_success;
            timeit!{timers => "kkt update"; {
                is_kkt_solve_success = self.kktsystem.update(&self.data, &self.variables).is_ok();
            }} // end "kkt update" timer

            // calculate the predictor step
            // --------------
            if is_kkt_solve_success {
                self.step_rhs
                    .affine_step_rhs(&self.residuals, &self.variables);

                timeit!{timers => "kkt solve"; {
                    is_kkt_solve_success = self.kktsystem.solve(
                        &mut self.step_lhs,
                        &self.step_rhs,
                        &self.data,
                        &self.variables,
                    ).is_ok();
                }}  //end "kkt solve affine" timer
            }

            // corrector step only on predictor step success
            if is_kkt_solve_success {

                //calculate trial step length and centering parameter
                // --------------
                α = self.variables.calc_step_length(&self.step_lhs, T::one());
                γ = self.centering_parameter(α);

                // calculate the corrector step
                // --------------
                self.step_rhs.combined_step_rhs(
                    &self.residuals,
                    &self.variables,
                    &self.step_lhs,
                    γ,
                    μ,
                );

                timeit!{timers => "kkt solve" ; {
                    is_kkt_solve_success = self.kktsystem.solve(
                        &mut self.step_lhs,
                        &self.step_rhs,
                        &self.data,
                        &self.variables,
                    ).is_ok();
                }} //end "kkt solve"
            }

            // numerical failure is terminal
            if !is_kkt_solve_success {
                α = T::zero();
                self.info.set_status(SolverStatus::NumericalError);
                break;
            }

            // compute final step length and update the current iterate
            // --------------
            α = self.variables.calc_step_length(
                &self.step_lhs,
                self.settings.core().max_step_fraction,
            );
            self.variables.add_step(&self.step_lhs, α);

            if !self.variables.is_finite() {
                self.info.set_status(SolverStatus::NumericalError);
                break;
            }

        } //end loop
        // ----------
        // ----------

        }} //end "IP iteration" timer

        }} // end "solve" timer

        // a failed iteration didn't get its scalars
        // recorded, so capture them and print one last line
        if self.info.get_status() == SolverStatus::NumericalError {
            self.info.save_scalars(μ, α, γ, iter);
            notimeit! {timers; {let _ = self.info.print_status(&self.settings);}}
        }

        //store final solution, timing etc
        self.info.finalize(&mut timers);

        self.solution
            .finalize(&self.data, &self.variables, &self.info, &self.settings);

        let _ = self.info.print_footer(&self.settings, &timers);

        //stow the timers back into Option in the solver struct
        self.timers.replace(timers);
    }
}

// Encapsulate the internal helpers trait in a private module
// so it doesn't get exported
mod internal {
    use super::*;

    pub(super) trait IPSolverInternals<T> {
        /// Compute a centering parameter
        fn centering_parameter(&self, α: T) -> T;
    }

    impl<T, D, V, R, K, I, SO, SE> IPSolverInternals<T> for Solver<D, V, R, K, I, SO, SE>
    where
        T: FloatT,
        SE: Settings<T>,
    {
        fn centering_parameter(&self, α: T) -> T {
            // γ = (1-α)²·min(β, 1-α)
            let β = self.settings.core().centering_cap;
            let s = T::one() - α;
            s * s * T::min(β, s)
        }
    }
}
