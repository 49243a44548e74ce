use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use crate::solver::core::{traits::Info, SolverStatus};
use crate::timers::*;

/// Standard-form solver type implementing the [`Info`](crate::solver::core::traits::Info) and [`InfoPrint`](crate::solver::core::traits::InfoPrint) traits
///
/// The convergence indicators are normalized by their values at the
/// canonical starting point x = z = 1, y = 0, τ = κ = 1.

#[derive(Default, Debug)]
pub struct DefaultInfo<T> {
    /// complementarity measure
    pub μ: T,
    /// centering parameter of the most recent step
    pub gamma: T,
    /// length of the most recent step
    pub step_length: T,
    pub iterations: u32,

    /// relative primal infeasibility
    pub rho_p: T,
    /// relative dual infeasibility
    pub rho_d: T,
    /// relative duality gap |c'x - b'y|/(τ + |b'y|)
    pub rho_A: T,
    /// relative homogeneous gap residual
    pub rho_g: T,
    /// relative complementarity
    pub rho_mu: T,
    /// objective estimate c'x/τ
    pub obj: T,

    // homogenization scalars and b'y, used for
    // infeasibility classification
    pub τ: T,
    pub κ: T,
    pub dot_by: T,

    pub solve_time: f64,
    pub status: SolverStatus,

    // target stream for printing
    pub(crate) stream: PrintTarget,
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Info<T> for DefaultInfo<T>
where
    T: FloatT,
{
    type V = DefaultVariables<T>;
    type R = DefaultResiduals<T>;

    fn reset(&mut self, timers: &mut Timers) {
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.solve_time = 0f64;

        timers.reset_timer("solve");
    }

    fn finalize(&mut self, timers: &mut Timers) {
        self.solve_time = timers.total_time().as_secs_f64();
    }

    fn update(
        &mut self,
        data: &DefaultProblemData<T>,
        variables: &DefaultVariables<T>,
        residuals: &DefaultResiduals<T>,
        timers: &Timers,
    ) {
        let τ = variables.τ;
        let by = residuals.dot_by;
        let cx = residuals.dot_cx;

        self.rho_p = residuals.rp.norm() / T::max(T::one(), data.norm_rp0);
        self.rho_d = residuals.rd.norm() / T::max(T::one(), data.norm_rd0);
        self.rho_A = T::abs(cx - by) / (τ + T::abs(by));
        self.rho_g = T::abs(residuals.rg) / T::max(T::one(), data.abs_rg0);
        self.rho_mu = self.μ / data.μ0;
        self.obj = cx / τ;

        self.τ = τ;
        self.κ = variables.κ;
        self.dot_by = by;

        // solve time so far (includes setup)
        self.solve_time = timers.total_time().as_secs_f64();
    }

    fn check_termination(
        &mut self,
        _residuals: &DefaultResiduals<T>,
        settings: &DefaultSettings<T>,
        iter: u32,
    ) -> bool {
        let tol = settings.tol;

        //  optimality or infeasibility
        // ---------------------
        if self.is_solved(tol) {
            self.status = SolverStatus::Solved;
        } else if self.is_degenerate(tol) {
            // sign of b'y tells infeasibility from unboundedness
            if self.dot_by > tol {
                self.status = SolverStatus::Infeasible;
            } else {
                self.status = SolverStatus::Unbounded;
            }
        }

        // time or iteration limits
        // ----------------------
        if self.status == SolverStatus::Unsolved {
            if iter >= settings.max_iter {
                self.status = SolverStatus::MaxIterations;
            } else if self.solve_time > settings.time_limit {
                self.status = SolverStatus::MaxTime;
            }
        }

        // return TRUE if we settled on a final status
        self.status != SolverStatus::Unsolved
    }

    fn save_scalars(&mut self, μ: T, α: T, γ: T, iter: u32) {
        self.μ = μ;
        self.step_length = α;
        self.gamma = γ;
        self.iterations = iter;
    }

    fn get_status(&self) -> SolverStatus {
        self.status
    }

    fn set_status(&mut self, status: SolverStatus) {
        self.status = status;
    }
}

// Utility functions for convergence checking

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    fn is_solved(&self, tol: T) -> bool {
        self.rho_p <= tol && self.rho_d <= tol && self.rho_A <= tol
    }

    // τ has collapsed relative to κ while the homogeneous
    // residuals or the complementarity have vanished
    fn is_degenerate(&self, tol: T) -> bool {
        let (τ, κ) = (self.τ, self.κ);

        let residuals_vanished = self.rho_p < tol
            && self.rho_d < tol
            && self.rho_g < tol
            && τ < tol * T::max(T::one(), κ);

        let complementarity_vanished = self.rho_mu < tol && τ < tol * T::min(T::one(), κ);

        residuals_vanished || complementarity_vanished
    }
}
