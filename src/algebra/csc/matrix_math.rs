use crate::algebra::*;
use std::iter::zip;

impl<T: FloatT> MatrixVectorMultiply for CscMatrix<T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_axpby_N(self, y, x, a, b);
    }
}

impl<T: FloatT> MatrixVectorMultiply for Adjoint<'_, CscMatrix<T>> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_axpby_T(self.src, y, x, a, b);
    }
}

impl<T: FloatT> CscMatrix<T> {
    /// Assemble the upper triangle of the dense product `A*diag(d)*A'`
    /// into `M`, overwriting its previous contents.  The strict lower
    /// triangle of `M` is left at zero.
    ///
    /// # Panics
    /// Panics if `d` does not have one entry per column of `A`, or if
    /// `M` is not square with one row per row of `A`.
    pub fn scaled_gram_into(&self, M: &mut Matrix<T>, d: &[T]) {
        assert_eq!(d.len(), self.n);
        assert_eq!(M.size(), (self.m, self.m));

        M.data_mut().set(T::zero());

        for (col, &dcol) in d.iter().enumerate() {
            let first = self.colptr[col];
            let last = self.colptr[col + 1];
            let rows = &self.rowval[first..last];
            let vals = &self.nzval[first..last];

            // rows are sorted within each column, so (ri,rk) with
            // k >= i always lands in the upper triangle
            for (i, (&ri, &vi)) in zip(rows, vals).enumerate() {
                let dvi = dcol * vi;
                for (&rk, &vk) in zip(&rows[i..], &vals[i..]) {
                    M[(ri, rk)] += dvi * vk;
                }
            }
        }
    }
}

fn _scale_output<T: FloatT>(y: &mut [T], b: T) {
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == -T::one() {
        y.negate();
    } else if b != T::one() {
        y.scale(b);
    }
}

// sparse matrix-vector multiply, no transpose
#[allow(non_snake_case)]
fn _csc_axpby_N<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    _scale_output(y, b);

    if a == T::zero() {
        return;
    }

    assert_eq!(x.len(), A.n);
    assert_eq!(y.len(), A.m);

    for (j, &xj) in x.iter().enumerate() {
        let axj = a * xj;
        for k in A.colptr[j]..A.colptr[j + 1] {
            y[A.rowval[k]] += A.nzval[k] * axj;
        }
    }
}

// sparse matrix-vector multiply, transposed
#[allow(non_snake_case)]
fn _csc_axpby_T<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    _scale_output(y, b);

    if a == T::zero() {
        return;
    }

    assert_eq!(x.len(), A.m);
    assert_eq!(y.len(), A.n);

    for (j, yj) in y.iter_mut().enumerate() {
        let mut acc = T::zero();
        for k in A.colptr[j]..A.colptr[j + 1] {
            acc += A.nzval[k] * x[A.rowval[k]];
        }
        *yj += a * acc;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_matrix() -> CscMatrix<f64> {
        CscMatrix::from(&[
            [1., 0., 2., 0.], //
            [0., 3., 0., 4.], //
            [5., 0., 0., 6.], //
        ])
    }

    #[test]
    fn test_gemv() {
        let A = test_matrix();
        let x = vec![1., 2., 3., 4.];
        let mut y = vec![1., 1., 1.];

        A.gemv(&mut y, &x, 2., -1.);
        assert_eq!(y, vec![13., 43., 57.]);

        let x = vec![1., 2., 3.];
        let mut y = vec![1.; 4];
        A.t().gemv(&mut y, &x, 1., 0.);
        assert_eq!(y, vec![16., 6., 2., 26.]);
    }

    #[test]
    fn test_scaled_gram() {
        let A = test_matrix();
        let d = vec![1., 2., 0.5, 1.];
        let mut M = Matrix::zeros((3, 3));
        A.scaled_gram_into(&mut M, &d);

        // A*diag(d)*A', upper triangle only
        assert_eq!(M[(0, 0)], 1. + 0.5 * 4.);
        assert_eq!(M[(0, 1)], 0.);
        assert_eq!(M[(0, 2)], 5.);
        assert_eq!(M[(1, 1)], 2. * 9. + 16.);
        assert_eq!(M[(1, 2)], 24.);
        assert_eq!(M[(2, 2)], 25. + 36.);
        assert_eq!(M[(2, 0)], 0.);
    }
}
