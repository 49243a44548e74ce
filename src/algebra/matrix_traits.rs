use crate::algebra::MatrixShape;

/// Shape information common to all matrix types and views
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// orientation of the matrix (normal or transposed view)
    fn shape(&self) -> MatrixShape;
    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if the matrix is square
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
