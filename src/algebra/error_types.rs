use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}

/// Error type returned by dense factorization routines.  Cholesky
/// failures report the 1-based index of the first failing pivot,
/// following the LAPACK `potrf` convention.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DenseFactorizationError {
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    /// Matrix and factorization workspace disagree in size
    IncompatibleDimension,
    #[error("Cholesky factorization failed at pivot {0}")]
    /// Matrix is not numerically positive definite
    Cholesky(usize),
    #[error("No valid factorization available")]
    /// A solve was requested before a successful factorization
    NotFactored,
}
