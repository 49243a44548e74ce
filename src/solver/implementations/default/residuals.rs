#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::traits::Residuals;

// ---------------
// Residuals type for default problem format
// ---------------

/// Standard-form solver type implementing the [`Residuals`](crate::solver::core::traits::Residuals) trait

pub struct DefaultResiduals<T> {
    // the homogeneous residuals
    /// primal residual bτ - Ax
    pub rp: Vec<T>,
    /// dual residual cτ - A'y - z
    pub rd: Vec<T>,
    /// gap residual κ + c'x - b'y
    pub rg: T,

    // various inner products
    pub dot_cx: T,
    pub dot_by: T,
    pub dot_xz: T,
}

impl<T> DefaultResiduals<T>
where
    T: FloatT,
{
    pub fn new(n: usize, m: usize) -> Self {
        let rp = vec![T::zero(); m];
        let rd = vec![T::zero(); n];

        Self {
            rp,
            rd,
            rg: T::zero(),
            dot_cx: T::zero(),
            dot_by: T::zero(),
            dot_xz: T::zero(),
        }
    }
}

impl<T> Residuals<T> for DefaultResiduals<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;

    fn update(&mut self, variables: &DefaultVariables<T>, data: &DefaultProblemData<T>) {
        // various products used multiple times
        let cx = data.c.dot(&variables.x);
        let by = data.b.dot(&variables.y);
        let xz = variables.x.dot(&variables.z);
        let τ = variables.τ;

        //Same as:  rp .= b*τ - A*x
        self.rp.scalarop_from(|bi| bi * τ, &data.b);
        data.A.gemv(&mut self.rp, &variables.x, -T::one(), T::one());

        //Same as:  rd .= c*τ - A'*y - z
        self.rd.waxpby(τ, &data.c, -T::one(), &variables.z);
        data.A
            .t()
            .gemv(&mut self.rd, &variables.y, -T::one(), T::one());

        self.rg = variables.κ + cx - by;

        //save local versions
        self.dot_cx = cx;
        self.dot_by = by;
        self.dot_xz = xz;
    }
}

#[test]
fn test_residuals_update() {
    let A = CscMatrix::from(&[
        [1., 2., 0.], //
        [0., 1., 1.], //
    ]);
    let b = vec![3., 4.];
    let c = vec![1., 1., 2.];
    let data = DefaultProblemData::new(&A, &b, &c);

    let mut vars = DefaultVariables::new(3, 2);
    vars.x = vec![1., 1., 2.];
    vars.y = vec![1., -1.];
    vars.z = vec![0.5, 0.5, 0.5];
    vars.τ = 2.;
    vars.κ = 0.25;

    let mut res = DefaultResiduals::new(3, 2);
    res.update(&vars, &data);

    // rp = [6,8] - [3,3]
    assert_eq!(res.rp, vec![3., 5.]);
    // rd = [2,2,4] - [1,1,-1] - 0.5
    assert_eq!(res.rd, vec![0.5, 0.5, 4.5]);
    // rg = 0.25 + 6 - (-1)
    assert_eq!(res.rg, 7.25);
    assert_eq!(res.dot_xz, 2.);
}
