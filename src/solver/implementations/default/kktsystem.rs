#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::traits::KKTSystem;
use itertools::izip;
use thiserror::Error;

/// Error type returned by Newton system updates and solves
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KKTSolveError {
    /// The scaling x/z is not finite and positive
    #[error("Scaling x/z is not finite and positive")]
    NonFiniteScaling,
    /// A solve produced infinite or NaN values
    #[error("Linear system solution is not finite")]
    NonFiniteSolution,
    /// The normal equations could not be factored
    #[error("Normal equations factorization failed: {0}")]
    Factorization(#[from] DenseFactorizationError),
}

/// Standard-form solver type implementing the [`KKTSystem`](crate::solver::core::traits::KKTSystem) trait
///
/// The Newton system is reduced to the normal equations
/// `M = A*diag(x/z)*A'`, factored once per iteration.

pub struct DefaultKKTSystem<T> {
    // normal equations matrix and its factorization
    M: Matrix<T>,
    cholesky: CholeskyEngine<T>,

    // the scaling diag(x/z)
    d: Vec<T>,

    // solution for the constant RHS (c,b)
    p: Vec<T>,
    q: Vec<T>,

    // work vectors for assembling the reduced RHS
    workx: Vec<T>,
    workn: Vec<T>,
}

impl<T> DefaultKKTSystem<T>
where
    T: FloatT,
{
    pub fn new(data: &DefaultProblemData<T>) -> Self {
        let (m, n) = (data.m, data.n);

        Self {
            M: Matrix::zeros((m, m)),
            cholesky: CholeskyEngine::new(m),
            d: vec![T::zero(); n],
            p: vec![T::zero(); n],
            q: vec![T::zero(); m],
            workx: vec![T::zero(); n],
            workn: vec![T::zero(); n],
        }
    }
}

// Solve the reduced system
//
//     [ -diag(d)  A' ] [u]   [r1]
//     [     A     0  ] [v] = [r2]
//
// via v = M⁻¹(r2 + A*diag(d)*r1) and u = diag(d)*(A'v - r1),
// using the current factorization of M.

#[allow(clippy::too_many_arguments)]
fn solve_reduced<T: FloatT>(
    A: &CscMatrix<T>,
    d: &[T],
    cholesky: &CholeskyEngine<T>,
    work: &mut [T],
    r1: &[T],
    r2: &[T],
    u: &mut [T],
    v: &mut [T],
) -> Result<(), KKTSolveError> {
    // v = M \ (r2 + A*(d.*r1))
    work.copy_from(r1);
    work.hadamard(d);
    v.copy_from(r2);
    A.gemv(v, work, T::one(), T::one());
    cholesky.solve(v)?;

    // u = d.*(A'*v - r1)
    u.copy_from(r1);
    A.t().gemv(u, v, T::one(), -T::one());
    u.hadamard(d);

    Ok(())
}

impl<T> KKTSystem<T> for DefaultKKTSystem<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;
    type SE = DefaultSettings<T>;
    type E = KKTSolveError;

    fn update(
        &mut self,
        data: &DefaultProblemData<T>,
        variables: &DefaultVariables<T>,
    ) -> Result<(), KKTSolveError> {
        // scaling d = x./z
        for (d, &x, &z) in izip!(&mut self.d, &variables.x, &variables.z) {
            *d = x / z;
        }
        if !self.d.iter().all(|&d| d.is_finite() && d > T::zero()) {
            return Err(KKTSolveError::NonFiniteScaling);
        }

        // assemble and factor M = A*diag(d)*A'
        data.A.scaled_gram_into(&mut self.M, &self.d);
        self.cholesky.cholesky(&self.M)?;

        // constant part of the solution, (p,q) for RHS (c,b)
        solve_reduced(
            &data.A,
            &self.d,
            &self.cholesky,
            &mut self.workn,
            &data.c,
            &data.b,
            &mut self.p,
            &mut self.q,
        )?;

        if !(self.p.is_finite() && self.q.is_finite()) {
            return Err(KKTSolveError::NonFiniteSolution);
        }

        Ok(())
    }

    fn solve(
        &mut self,
        lhs: &mut DefaultVariables<T>,
        rhs: &DefaultVariables<T>,
        data: &DefaultProblemData<T>,
        variables: &DefaultVariables<T>,
    ) -> Result<(), KKTSolveError> {
        let (x, z) = (&variables.x, &variables.z);
        let (τ, κ) = (variables.τ, variables.κ);
        let (c, b) = (&data.c, &data.b);

        // reduced RHS r1 = r̂_d - r̂_xz./x, with r2 = r̂_p
        for (r1, &rd, &rxz, &xi) in izip!(&mut self.workx, &rhs.x, &rhs.z, x) {
            *r1 = rd - rxz / xi;
        }

        // (u,v) are written directly into (dx,dy)
        solve_reduced(
            &data.A,
            &self.d,
            &self.cholesky,
            &mut self.workn,
            &self.workx,
            &rhs.y,
            &mut lhs.x,
            &mut lhs.y,
        )?;

        // dτ = (r̂_g + r̂_τκ/τ - (-c'u + b'v)) / (κ/τ + (-c'p + b'q))
        let num = rhs.τ + rhs.κ / τ - (-c.dot(&lhs.x) + b.dot(&lhs.y));
        let den = κ / τ + (-c.dot(&self.p) + b.dot(&self.q));
        let dτ = num / den;

        if !dτ.is_finite() {
            return Err(KKTSolveError::NonFiniteSolution);
        }

        // dx = u + p*dτ, dy = v + q*dτ
        lhs.x.axpby(dτ, &self.p, T::one());
        lhs.y.axpby(dτ, &self.q, T::one());

        // dz = (r̂_xz - z.*dx)./x
        for (dz, &rxz, &zi, &dx, &xi) in izip!(&mut lhs.z, &rhs.z, z, &lhs.x, x) {
            *dz = (rxz - zi * dx) / xi;
        }

        // dκ = (r̂_τκ - κ*dτ)/τ
        lhs.τ = dτ;
        lhs.κ = (rhs.κ - κ * dτ) / τ;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::core::traits::{Residuals, Variables};

    #[test]
    fn test_reduced_solve() {
        // square nonsingular A, d = 1, so u = A'v - r1 and Av = r2 + A*r1
        let A = CscMatrix::<f64>::from(&[
            [2., 1.], //
            [0., 1.], //
        ]);
        let d = vec![1., 1.];
        let mut M = Matrix::zeros((2, 2));
        A.scaled_gram_into(&mut M, &d);

        let mut chol = CholeskyEngine::new(2);
        chol.cholesky(&M).unwrap();

        let r1 = vec![1., -1.];
        let r2 = vec![0., 2.];
        let mut u = vec![0.; 2];
        let mut v = vec![0.; 2];
        let mut work = vec![0.; 2];
        solve_reduced(&A, &d, &chol, &mut work, &r1, &r2, &mut u, &mut v).unwrap();

        // check both block rows of the reduced system
        let mut row1 = u.clone();
        row1.negate();
        A.t().gemv(&mut row1, &v, 1., 1.);
        assert!(row1.norm_inf_diff(&r1) < 1e-12);

        let mut row2 = vec![0.; 2];
        A.gemv(&mut row2, &u, 1., 0.);
        assert!(row2.norm_inf_diff(&r2) < 1e-12);
    }

    #[test]
    fn test_newton_direction() {
        // the predictor direction satisfies the linearized equations
        let A = CscMatrix::<f64>::from(&[
            [1., 1., 0.], //
            [1., 0., 1.], //
        ]);
        let b = vec![2., 3.];
        let c = vec![1., 2., 3.];
        let data = DefaultProblemData::new(&A, &b, &c);

        let mut vars = DefaultVariables::new(3, 2);
        vars.unit_initialization();
        vars.x = vec![0.5, 2., 1.5];
        vars.z = vec![1., 0.25, 3.];
        vars.τ = 1.5;
        vars.κ = 0.5;

        let mut res = DefaultResiduals::new(3, 2);
        res.update(&vars, &data);

        let mut rhs = DefaultVariables::new(3, 2);
        rhs.affine_step_rhs(&res, &vars);

        let mut kkt = DefaultKKTSystem::new(&data);
        let mut step = DefaultVariables::new(3, 2);
        kkt.update(&data, &vars).unwrap();
        kkt.solve(&mut step, &rhs, &data, &vars).unwrap();

        // A*dx - b*dτ = r_p
        let mut e = vec![0.; 2];
        A.gemv(&mut e, &step.x, 1., 0.);
        e.axpby(-step.τ, &b, 1.);
        e.axpby(-1., &res.rp, 1.);
        assert!(e.norm_inf() < 1e-10);

        // A'dy + dz - c*dτ = r_d
        let mut e = vec![0.; 3];
        A.t().gemv(&mut e, &step.y, -1., 0.);
        e.axpby(-1., &step.z, 1.);
        e.axpby(step.τ, &c, 1.);
        e.axpby(1., &res.rd, 1.);
        assert!(e.norm_inf() < 1e-10);

        // b'dy - c'dx - dκ = r_g
        let e: f64 = b.dot(&step.y) - c.dot(&step.x) - step.κ - res.rg;
        assert!(e.abs() < 1e-10);

        // z.*dx + x.*dz = -x.*z
        for i in 0..3 {
            let e: f64 = vars.z[i] * step.x[i] + vars.x[i] * step.z[i] + vars.x[i] * vars.z[i];
            assert!(e.abs() < 1e-10);
        }

        // κ*dτ + τ*dκ = -τκ
        let e: f64 = vars.κ * step.τ + vars.τ * step.κ + vars.τ * vars.κ;
        assert!(e.abs() < 1e-10);
    }

    #[test]
    fn test_singular_normal_equations() {
        // zero row in A makes M singular
        let A = CscMatrix::<f64>::from(&[
            [1., 1., 1.], //
            [0., 0., 0.], //
        ]);
        let data = DefaultProblemData::new(&A, &[1., 0.], &[1., 1., 1.]);
        let mut vars = DefaultVariables::new(3, 2);
        vars.unit_initialization();

        let mut kkt = DefaultKKTSystem::new(&data);
        assert_eq!(
            kkt.update(&data, &vars),
            Err(KKTSolveError::Factorization(
                DenseFactorizationError::Cholesky(2)
            ))
        );

        vars.z[0] = 0.;
        assert_eq!(
            kkt.update(&data, &vars),
            Err(KKTSolveError::NonFiniteScaling)
        );
    }
}
