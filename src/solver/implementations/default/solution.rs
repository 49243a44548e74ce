use super::*;
use crate::{
    algebra::*,
    solver::core::{traits::Solution, SolverStatus},
};
use itertools::izip;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Standard-form solver type implementing the [`Solution`](crate::solver::core::traits::Solution) trait
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct DefaultSolution<T> {
    /// primal solution
    pub x: Vec<T>,
    /// equality constraint multipliers
    pub y: Vec<T>,
    /// reduced costs
    pub z: Vec<T>,
    /// final solver status
    pub status: SolverStatus,
    /// description of the final solver status
    pub message: String,
    /// primal objective value c'x.  NaN if the problem
    /// was found to be infeasible or unbounded
    pub obj_val: T,
    /// solve time in seconds
    pub solve_time: f64,
    /// number of iterations
    pub iterations: u32,
    /// relative primal residual
    pub r_prim: T,
    /// relative dual residual
    pub r_dual: T,
}

impl<T> DefaultSolution<T>
where
    T: FloatT,
{
    /// Create a new `DefaultSolution` object
    pub fn new(n: usize, m: usize) -> Self {
        let x = vec![T::zero(); n];
        let y = vec![T::zero(); m];
        let z = vec![T::zero(); n];

        Self {
            x,
            y,
            z,
            status: SolverStatus::Unsolved,
            message: SolverStatus::Unsolved.message().to_string(),
            obj_val: T::nan(),
            solve_time: 0f64,
            iterations: 0,
            r_prim: T::nan(),
            r_dual: T::nan(),
        }
    }
}

impl<T> Solution<T> for DefaultSolution<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;
    type I = DefaultInfo<T>;
    type SE = DefaultSettings<T>;

    fn finalize(
        &mut self,
        data: &DefaultProblemData<T>,
        variables: &DefaultVariables<T>,
        info: &DefaultInfo<T>,
        settings: &DefaultSettings<T>,
    ) {
        self.status = info.status;
        self.message = info.status.message().to_string();

        // unscale the homogeneous variables
        let τinv = T::recip(variables.τ);
        self.x.scalarop_from(|x| x * τinv, &variables.x);
        self.y.scalarop_from(|y| y * τinv, &variables.y);
        self.z.scalarop_from(|z| z * τinv, &variables.z);

        // clean up near-zero primal noise
        let tol = settings.tol;
        for x in self.x.iter_mut() {
            if *x < tol {
                *x = T::zero();
            }
        }

        if info.status.is_infeasible() {
            self.obj_val = T::nan();
        } else {
            self.obj_val = izip!(&data.c, &self.x).fold(T::zero(), |acc, (&c, &x)| acc + c * x);
        }

        self.iterations = info.iterations;
        self.r_prim = info.rho_p;
        self.r_dual = info.rho_d;
        self.solve_time = info.solve_time;
    }
}

#[test]
fn test_solution_finalize() {
    let A = crate::algebra::CscMatrix::<f64>::from(&[[1., 1., 1.]]);
    let data = DefaultProblemData::new(&A, &[1.], &[1., 2., 3.]);

    let mut vars = DefaultVariables::new(3, 1);
    vars.x = vec![2., 1e-10, -1e-12];
    vars.y = vec![4.];
    vars.z = vec![0., 2., 4.];
    vars.τ = 2.;

    let info = DefaultInfo {
        status: SolverStatus::Solved,
        iterations: 7,
        ..DefaultInfo::new()
    };

    let mut sol = DefaultSolution::<f64>::new(3, 1);
    sol.finalize(&data, &vars, &info, &DefaultSettings::default());

    assert_eq!(sol.x, vec![1., 0., 0.]);
    assert_eq!(sol.y, vec![2.]);
    assert_eq!(sol.z, vec![0., 1., 2.]);
    assert_eq!(sol.obj_val, 1.);
    assert_eq!(sol.iterations, 7);
    assert_eq!(sol.status.code(), 0);
    assert_eq!(sol.message, SolverStatus::Solved.message());

    // no objective for a certificate
    let info = DefaultInfo {
        status: SolverStatus::Unbounded,
        ..DefaultInfo::new()
    };
    sol.finalize(&data, &vars, &info, &DefaultSettings::default());
    assert!(sol.obj_val.is_nan());
}
