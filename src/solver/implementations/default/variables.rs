use super::*;
use crate::algebra::*;
use crate::solver::core::traits::Variables;
use itertools::izip;

// ---------------
// Variables type for default problem format
// ---------------

/// Standard-form solver type implementing the [`Variables`](crate::solver::core::traits::Variables) trait
///
/// When used as the right hand side of the Newton system, the fields
/// hold the (possibly scaled) residuals instead:
///
/// | field | RHS meaning |
/// |---|---|
/// | `x` | dual residual r̂_d |
/// | `y` | primal residual r̂_p |
/// | `z` | complementarity residual r̂_xz |
/// | `τ` | gap residual r̂_g |
/// | `κ` | homogeneous complementarity residual r̂_τκ |
#[derive(Clone, PartialEq)]
pub struct DefaultVariables<T> {
    /// primal variables
    pub x: Vec<T>,
    /// equality constraint multipliers
    pub y: Vec<T>,
    /// reduced costs
    pub z: Vec<T>,
    /// homogenization scalar τ
    pub τ: T,
    /// homogenization scalar κ
    pub κ: T,
}

impl<T: std::fmt::Display + std::fmt::Debug> std::fmt::Debug for DefaultVariables<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x: {:?}\ny: {:?}\nz: {:?}\nτ: {:?}\nκ: {:?}\n",
            self.x, self.y, self.z, self.τ, self.κ
        )
    }
}

impl<T> DefaultVariables<T>
where
    T: FloatT,
{
    /// Create a new `DefaultVariables` object
    pub fn new(n: usize, m: usize) -> Self {
        let x = vec![T::zero(); n];
        let y = vec![T::zero(); m];
        let z = vec![T::zero(); n];
        let τ = T::one();
        let κ = T::one();

        Self { x, y, z, τ, κ }
    }
}

impl<T> Variables<T> for DefaultVariables<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type R = DefaultResiduals<T>;
    type SE = DefaultSettings<T>;

    fn calc_mu(&self) -> T {
        let denom: T = (self.x.len() + 1).as_T();
        (self.x.dot(&self.z) + self.τ * self.κ) / denom
    }

    fn affine_step_rhs(&mut self, residuals: &DefaultResiduals<T>, variables: &DefaultVariables<T>) {
        self.x.copy_from(&residuals.rd);
        self.y.copy_from(&residuals.rp);
        self.τ = residuals.rg;

        // r̂_xz = -x∘z, r̂_τκ = -τκ
        for (r, &x, &z) in izip!(&mut self.z, &variables.x, &variables.z) {
            *r = -x * z;
        }
        self.κ = -variables.τ * variables.κ;
    }

    fn combined_step_rhs(
        &mut self,
        residuals: &DefaultResiduals<T>,
        variables: &DefaultVariables<T>,
        step: &DefaultVariables<T>,
        γ: T,
        μ: T,
    ) {
        let η = T::one() - γ;
        let γμ = γ * μ;

        self.x.scalarop_from(|r| η * r, &residuals.rd);
        self.y.scalarop_from(|r| η * r, &residuals.rp);
        self.τ = η * residuals.rg;

        // second order correction uses the predictor direction
        for (r, &x, &z, &dx, &dz) in izip!(
            &mut self.z,
            &variables.x,
            &variables.z,
            &step.x,
            &step.z
        ) {
            *r = γμ - x * z - dx * dz;
        }
        self.κ = γμ - variables.τ * variables.κ - step.τ * step.κ;
    }

    fn calc_step_length(&self, step: &DefaultVariables<T>, α0: T) -> T {
        let αx = ratio_test(&self.x, &step.x, α0);
        let αz = ratio_test(&self.z, &step.z, α0);
        let ατ = ratio_test(&[self.τ], &[step.τ], α0);
        let ακ = ratio_test(&[self.κ], &[step.κ], α0);

        [αx, αz, ατ, ακ]
            .iter()
            .fold(T::one(), |α, &αi| T::min(α, αi))
    }

    fn add_step(&mut self, step: &DefaultVariables<T>, α: T) {
        self.x.axpby(α, &step.x, T::one());
        self.y.axpby(α, &step.y, T::one());
        self.z.axpby(α, &step.z, T::one());
        self.τ += α * step.τ;
        self.κ += α * step.κ;
    }

    fn unit_initialization(&mut self) {
        self.x.set(T::one());
        self.y.set(T::zero());
        self.z.set(T::one());
        self.τ = T::one();
        self.κ = T::one();
    }

    fn copy_from(&mut self, src: &DefaultVariables<T>) {
        self.x.copy_from(&src.x);
        self.y.copy_from(&src.y);
        self.z.copy_from(&src.z);
        self.τ = src.τ;
        self.κ = src.κ;
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && self.τ.is_finite()
            && self.κ.is_finite()
    }
}

// largest fraction α0 of the step that keeps `v + α*dv` nonnegative.
// A block with no decreasing entries yields α0.
fn ratio_test<T: FloatT>(v: &[T], dv: &[T], α0: T) -> T {
    let min_ratio = v
        .iter()
        .zip(dv)
        .filter(|&(_, &d)| d < T::zero())
        .map(|(&vi, &d)| vi / -d)
        .fold(None, |acc: Option<T>, r| {
            Some(acc.map_or(r, |a| T::min(a, r)))
        });

    match min_ratio {
        Some(r) => α0 * r,
        None => α0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vars() -> DefaultVariables<f64> {
        let mut v = DefaultVariables::new(3, 1);
        v.unit_initialization();
        v
    }

    #[test]
    fn test_unit_initialization() {
        let v = test_vars();
        assert_eq!(v.x, vec![1.; 3]);
        assert_eq!(v.y, vec![0.]);
        assert_eq!(v.z, vec![1.; 3]);
        assert_eq!((v.τ, v.κ), (1., 1.));
        assert_eq!(v.calc_mu(), 1.);
        assert!(v.is_finite());
    }

    #[test]
    fn test_step_length() {
        let v = test_vars();
        let mut dv = DefaultVariables::new(3, 1);

        // no decreasing component: full step margin
        dv.x = vec![1., 0., 2.];
        dv.z = vec![0., 0., 0.];
        assert_eq!(v.calc_step_length(&dv, 1.), 1.);
        assert_eq!(v.calc_step_length(&dv, 0.9), 0.9);

        // x[1] hits zero at α = 0.25
        dv.x = vec![1., -4., -2.];
        assert_eq!(v.calc_step_length(&dv, 1.), 0.25);
        assert_eq!(v.calc_step_length(&dv, 0.5), 0.125);

        // τ is the binding constraint
        dv.x = vec![0.; 3];
        dv.τ = -10.;
        assert_eq!(v.calc_step_length(&dv, 1.), 0.1);

        // κ alone
        dv.τ = 0.;
        dv.κ = -0.5;
        assert_eq!(v.calc_step_length(&dv, 1.), 1.);
    }

    #[test]
    fn test_add_step() {
        let mut v = test_vars();
        let mut dv = DefaultVariables::new(3, 1);
        dv.x = vec![1., 2., 3.];
        dv.y = vec![-1.];
        dv.z = vec![-1., -1., -1.];
        dv.τ = 2.;
        dv.κ = -1.;

        v.add_step(&dv, 0.5);
        assert_eq!(v.x, vec![1.5, 2., 2.5]);
        assert_eq!(v.y, vec![-0.5]);
        assert_eq!(v.z, vec![0.5; 3]);
        assert_eq!((v.τ, v.κ), (2., 0.5));

        v.x[0] = f64::NAN;
        assert!(!v.is_finite());
    }
}
