use crate::algebra::{FloatT, MatrixShape, ShapedMatrix};
use std::ops::{Index, IndexMut};

/// Dense matrix in column major format
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    #[inline]
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

/// Construct a dense matrix from a row-major array
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    #[allow(non_snake_case)]
    fn from(rows: &[[T; N]; M]) -> Matrix<T> {
        let mut A = Matrix::zeros((M, N));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                A[(i, j)] = v;
            }
        }
        A
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_indexing() {
        // [ 1.0  4.0  7.0 ]
        // [ 2.0  5.0  8.0 ]
        let A = Matrix::from(&[[1.0, 4.0, 7.0], [2.0, 5.0, 8.0]]);

        assert_eq!(A.size(), (2, 3));
        assert_eq!(A.data(), &[1., 2., 4., 5., 7., 8.]);
        assert_eq!(A[(1, 0)], 2.0);
        assert_eq!(A[(0, 2)], 7.0);
        assert_eq!(A.index_linear((1, 2)), 5);
    }

    #[test]
    fn test_matrix_zeros() {
        let mut Z = Matrix::<f64>::zeros((3, 3));
        assert!(Z.is_square());
        assert!(Z.data().iter().all(|&v| v == 0.0));

        Z.data_mut()[4] = 2.0;
        assert_eq!(Z[(1, 1)], 2.0);
    }
}
