#![allow(non_snake_case)]

use crate::algebra::{DenseFactorizationError, FloatT, Matrix, ShapedMatrix, VectorMath};

/// Dense symmetric positive definite factorization and solve
pub trait FactorCholesky {
    type T: FloatT;

    /// Compute a Cholesky factorization `A = L*L'` using only the
    /// upper triangle of `A`.  Fails on the first pivot that is not
    /// strictly positive and finite.
    fn cholesky(&mut self, A: &Matrix<Self::T>) -> Result<(), DenseFactorizationError>;

    /// Solve `A*x = b` in place using a previously computed factor.
    fn solve(&self, b: &mut [Self::T]) -> Result<(), DenseFactorizationError>;
}

/// Native dense Cholesky engine for the normal equations.
pub struct CholeskyEngine<T> {
    /// lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
    is_factored: bool,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        let L = Matrix::<T>::zeros((n, n));
        Self {
            L,
            is_factored: false,
        }
    }
}

impl<T> FactorCholesky for CholeskyEngine<T>
where
    T: FloatT,
{
    type T = T;

    fn cholesky(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError> {
        if A.size() != self.L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        self.is_factored = false;
        self.L.data_mut().set(T::zero());
        let L = &mut self.L;
        let n = L.nrows();

        // column oriented (left looking) factorization
        for j in 0..n {
            let mut d = A[(j, j)];
            for k in 0..j {
                d -= L[(j, k)] * L[(j, k)];
            }
            if !(d > T::zero()) || !d.is_finite() {
                return Err(DenseFactorizationError::Cholesky(j + 1));
            }
            let ljj = d.sqrt();
            L[(j, j)] = ljj;

            for i in (j + 1)..n {
                // A[(j,i)] is the upper triangle copy of A[(i,j)]
                let mut s = A[(j, i)];
                for k in 0..j {
                    s -= L[(i, k)] * L[(j, k)];
                }
                L[(i, j)] = s / ljj;
            }
        }

        self.is_factored = true;
        Ok(())
    }

    fn solve(&self, b: &mut [T]) -> Result<(), DenseFactorizationError> {
        if !self.is_factored {
            return Err(DenseFactorizationError::NotFactored);
        }
        let L = &self.L;
        let n = L.nrows();
        if b.len() != n {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        // forward solve L*w = b
        for i in 0..n {
            let mut s = b[i];
            for k in 0..i {
                s -= L[(i, k)] * b[k];
            }
            b[i] = s / L[(i, i)];
        }

        // backward solve L'*x = w
        for i in (0..n).rev() {
            let mut s = b[i];
            for k in (i + 1)..n {
                s -= L[(k, i)] * b[k];
            }
            b[i] = s / L[(i, i)];
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cholesky() {
        #[rustfmt::skip]
        let S = Matrix::from(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

        let mut eng = CholeskyEngine::<f64>::new(3);
        assert!(eng.cholesky(&S).is_ok());

        // L*L' should reproduce S
        let L = &eng.L;
        for i in 0..3 {
            for j in 0..3 {
                let mut v = 0.0;
                for k in 0..3 {
                    v += L[(i, k)] * L[(j, k)];
                }
                assert!((v - S[(i, j)]).abs() < 1e-12);
            }
        }

        // S*[1,2,3] = [16, 28, 26]
        let mut b = vec![16., 28., 26.];
        eng.solve(&mut b).unwrap();
        assert!(b.norm_inf_diff(&[1., 2., 3.]) < 1e-12);
    }

    #[test]
    fn test_cholesky_upper_only() {
        // strict lower triangle is ignored
        #[rustfmt::skip]
        let S = Matrix::from(
            &[[ 4., 2.],
              [99., 5.]]);

        let mut eng = CholeskyEngine::<f64>::new(2);
        assert!(eng.cholesky(&S).is_ok());
        assert_eq!(eng.L[(0, 0)], 2.);
        assert_eq!(eng.L[(1, 0)], 1.);
        assert_eq!(eng.L[(1, 1)], 2.);
    }

    #[test]
    fn test_cholesky_failures() {
        #[rustfmt::skip]
        let S = Matrix::from(
            &[[ 1., 0.],
              [ 0., 0.]]);

        let mut eng = CholeskyEngine::<f64>::new(2);
        assert_eq!(eng.cholesky(&S), Err(DenseFactorizationError::Cholesky(2)));

        let mut b = vec![1., 1.];
        assert_eq!(eng.solve(&mut b), Err(DenseFactorizationError::NotFactored));

        let S = Matrix::from(&[[f64::NAN]]);
        let mut eng = CholeskyEngine::<f64>::new(1);
        assert_eq!(eng.cholesky(&S), Err(DenseFactorizationError::Cholesky(1)));

        let S = Matrix::<f64>::zeros((3, 3));
        assert_eq!(
            eng.cholesky(&S),
            Err(DenseFactorizationError::IncompatibleDimension)
        );
    }
}
