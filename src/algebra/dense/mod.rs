mod cholesky;
mod core;
pub use self::cholesky::*;
pub use self::core::*;
