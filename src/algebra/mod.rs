//! Linear algebra types and operations used by the solver.
//!
//! Problem data is supplied in compressed sparse column format via
//! [`CscMatrix`](crate::algebra::CscMatrix).  Internally the solver forms
//! the dense normal equations matrix once per iteration and factors it with
//! a native Cholesky engine.
//!
//! All vector operations are implemented on slices of types implementing
//! [`FloatT`](crate::algebra::FloatT) through the
//! [`VectorMath`](crate::algebra::VectorMath) trait.

// first import and flatten the solver's collection
// of core numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

// matrix implementations
mod adjoint;
mod csc;
mod dense;
pub use csc::*;
pub use dense::*;

// vector implementations
mod vecmath;
