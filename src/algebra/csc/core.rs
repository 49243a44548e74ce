#![allow(non_snake_case)]

use crate::algebra::{Adjoint, FloatT, MatrixShape, ShapedMatrix, SparseFormatError};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use hsdlp::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// // or, equivalently, from a dense array
/// let B = CscMatrix::from(&[
///     [1., 3., 5.],
///     [2., 0., 6.],
///     [0., 4., 7.],
/// ]);
/// assert_eq!(A, B);
/// ```
///

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds or that data is arranged
    /// such that entries within each column appear in order of increasing
    /// row index.   Use [`check_format`](CscMatrix::check_format) for that.
    ///
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// To make an m x n matrix of zeros, use
    /// ```no_run
    /// use hsdlp::algebra::CscMatrix;
    /// let m = 3;
    /// let n = 4;
    /// let A : CscMatrix<f64> = CscMatrix::spalloc(m,n,0);
    /// ```
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// transpose
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
        }

        Ok(())
    }

    /// True if any stored value is infinite or NaN
    pub fn has_nonfinite(&self) -> bool {
        self.nzval.iter().any(|v| !v.is_finite())
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
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

/// Construct a sparse matrix from a dense row-major array, dropping
/// exact zeros.
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for CscMatrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> CscMatrix<T> {
        let mut colptr = Vec::with_capacity(N + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for col in 0..N {
            for (row, vals) in rows.iter().enumerate() {
                let v = vals[col];
                if v != T::zero() {
                    rowval.push(row);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }

        CscMatrix::new(M, N, colptr, rowval, nzval)
    }
}

#[test]
fn test_csc_from_dense() {
    let A = CscMatrix::from(&[
        [1., 0., 3.], //
        [0., 2., 4.], //
    ]);

    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.colptr, vec![0, 1, 2, 4]);
    assert_eq!(A.rowval, vec![0, 1, 0, 1]);
    assert_eq!(A.nzval, vec![1., 2., 3., 4.]);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_csc_check_format() {
    let mut A = CscMatrix::<f64>::from(&[
        [1., 0., 0.], //
        [0., 1., 0.], //
        [0., 0., 1.], //
    ]);
    assert!(A.check_format().is_ok());

    A.rowval[1] = 3;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowval));

    let B = CscMatrix {
        m: 2,
        n: 1,
        colptr: vec![0, 2],
        rowval: vec![1, 0],
        nzval: vec![1., 1.],
    };
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowOrdering));

    let C = CscMatrix {
        m: 2,
        n: 1,
        colptr: vec![0, 2],
        rowval: vec![0],
        nzval: vec![1.],
    };
    assert_eq!(C.check_format(), Err(SparseFormatError::IncompatibleDimension));
}
