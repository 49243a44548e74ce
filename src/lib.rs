//!  __hsdlp__ is a Rust implementation of a homogeneous self-dual interior point
//!  method for linear programs in standard form:
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & c^T x\\\\\[2ex\]
//!  \text{subject to} & Ax = b \\\\\[1ex\]
//!         & x \geq 0
//!  \end{array}
//! $$
//!
//! with decision variables
//! $x \in \mathbb{R}^n$
//! and data
//! $A \in \mathbb{R}^{m \times n}$,
//! $b \in \mathbb{R}^m$ and
//! $c \in \mathbb{R}^n$.
//!
//! ## Features
//!
//! * __Infeasibility detection__: The solver iterates on a homogeneous embedding
//!   of the primal and dual problems, so that optimal, infeasible and unbounded
//!   problems are all detected from the same sequence of Newton steps.
//!
//! * __Predictor-corrector steps__: Each iteration factors the normal equations
//!   `A*diag(x/z)*A'` once and reuses the factorization for a predictor and a
//!   second-order corrector direction.
//!
//! * __No warm start required__: Every solve starts from the same canonical point,
//!   so repeated solves of the same data give identical results.
//!
//! The solution returned is generally an interior point of the optimal face,
//! not a vertex.
//!
//! # Example
//!
//! ```
//! use hsdlp::algebra::*;
//! use hsdlp::solver::*;
//!
//! // minimize -x₁ - 2x₂ s.t. x₁ + x₂ + x₃ = 4, x₁ + 3x₂ + x₄ = 6
//! let A = CscMatrix::<f64>::from(&[
//!     [1., 1., 1., 0.], //
//!     [1., 3., 0., 1.], //
//! ]);
//! let b = [4., 6.];
//! let c = [-1., -2., 0., 0.];
//!
//! let settings = DefaultSettingsBuilder::default()
//!     .verbose(false)
//!     .build()
//!     .unwrap();
//!
//! let mut solver = DefaultSolver::new(&A, &b, &c, settings).unwrap();
//! solver.solve();
//!
//! assert_eq!(solver.solution.status, SolverStatus::Solved);
//! assert!((solver.solution.obj_val + 5.).abs() < 1e-6);
//! ```

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub mod timers;
