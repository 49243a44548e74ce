#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::{traits::ProblemData, SolverError};

// ---------------
// Data type for default problem format
// ---------------

/// Standard-form solver type implementing the [`ProblemData`](crate::solver::core::traits::ProblemData) trait

pub struct DefaultProblemData<T> {
    pub A: CscMatrix<T>,
    pub b: Vec<T>,
    pub c: Vec<T>,
    pub n: usize,
    pub m: usize,

    // residual norms at the canonical starting point,
    // used to normalize the convergence indicators
    pub norm_rp0: T,
    pub norm_rd0: T,
    pub abs_rg0: T,
    pub μ0: T,
}

impl<T> DefaultProblemData<T>
where
    T: FloatT,
{
    pub fn new(A: &CscMatrix<T>, b: &[T], c: &[T]) -> Self {
        // dimension checks will have already been
        // performed during problem setup, so skip here

        let A = A.clone();
        let b = b.to_vec();
        let c = c.to_vec();
        let (m, n) = A.size();

        // residuals at x = z = 1, y = 0, τ = κ = 1
        // r_p0 = b - A*1
        let ones = vec![T::one(); n];
        let mut rp0 = b.clone();
        A.gemv(&mut rp0, &ones, -T::one(), T::one());

        // r_d0 = c - 1
        let mut rd0 = c.clone();
        rd0.scalarop(|ci| ci - T::one());

        // r_g0 = 1 + c'*1
        let rg0 = T::one() + c.iter().fold(T::zero(), |acc, &ci| acc + ci);

        // μ0 = (x'z + τκ)/(n+1) = 1
        let μ0 = T::one();

        Self {
            A,
            b,
            c,
            n,
            m,
            norm_rp0: rp0.norm(),
            norm_rd0: rd0.norm(),
            abs_rg0: rg0.abs(),
            μ0,
        }
    }
}

impl<T> ProblemData<T> for DefaultProblemData<T>
where
    T: FloatT,
{
    type V = DefaultVariables<T>;

    fn dims(&self) -> (usize, usize) {
        (self.m, self.n)
    }
}

// ---------------
// input checks, performed before any solver workspace is allocated
// ---------------

pub(crate) fn check_problem_data<T: FloatT>(
    A: &CscMatrix<T>,
    b: &[T],
    c: &[T],
) -> Result<(), SolverError> {
    A.check_format()?;

    let (m, n) = A.size();
    if b.len() != m {
        return Err(SolverError::DataDimension {
            field: "b",
            expected: m,
            actual: b.len(),
        });
    }
    if c.len() != n {
        return Err(SolverError::DataDimension {
            field: "c",
            expected: n,
            actual: c.len(),
        });
    }
    if A.has_nonfinite() || !b.is_finite() || !c.is_finite() {
        return Err(SolverError::NonFiniteData);
    }

    Ok(())
}

#[test]
fn test_reference_residuals() {
    let A = CscMatrix::from(&[
        [1., 1., 0.], //
        [0., 1., 1.], //
    ]);
    let b = vec![3., 1.];
    let c = vec![2., 0., 1.];

    let data = DefaultProblemData::new(&A, &b, &c);
    assert_eq!(data.dims(), (2, 3));

    // r_p0 = [1,-1], r_d0 = [1,-1,0], r_g0 = 4
    assert!((data.norm_rp0 - f64::sqrt(2.)).abs() < 1e-15);
    assert!((data.norm_rd0 - f64::sqrt(2.)).abs() < 1e-15);
    assert_eq!(data.abs_rg0, 4.);
    assert_eq!(data.μ0, 1.);
}

#[test]
fn test_check_problem_data() {
    let A = CscMatrix::from(&[[1., 1., 0.], [0., 1., 1.]]);
    assert!(check_problem_data(&A, &[1., 1.], &[1., 1., 1.]).is_ok());

    assert!(matches!(
        check_problem_data(&A, &[1.], &[1., 1., 1.]),
        Err(SolverError::DataDimension { field: "b", .. })
    ));
    assert!(matches!(
        check_problem_data(&A, &[1., 1.], &[1., 1.]),
        Err(SolverError::DataDimension { field: "c", .. })
    ));
    assert!(matches!(
        check_problem_data(&A, &[1., f64::NAN], &[1., 1., 1.]),
        Err(SolverError::NonFiniteData)
    ));

    let mut B = A.clone();
    B.rowval[0] = 5;
    assert!(matches!(
        check_problem_data(&B, &[1., 1.], &[1., 1., 1.]),
        Err(SolverError::SparseFormat(SparseFormatError::BadRowval))
    ));
}
