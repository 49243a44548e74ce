use super::*;
use crate::solver::core::{
    callbacks::SolverCallbacks, traits::Settings, IPSolver, Solver, SolverError,
};

use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::timers::*;
use std::io::Write;

/// Solver for linear programs in standard form

pub type DefaultSolver<T = f64> = Solver<
    DefaultProblemData<T>,
    DefaultVariables<T>,
    DefaultResiduals<T>,
    DefaultKKTSystem<T>,
    DefaultInfo<T>,
    DefaultSolution<T>,
    DefaultSettings<T>,
>;

impl<T> DefaultSolver<T>
where
    T: FloatT,
{
    /// Create a solver for the problem
    ///
    /// minimize c'x subject to Ax = b, x ≥ 0
    ///
    /// Problem data and settings are checked before any
    /// workspace is allocated.
    pub fn new(
        A: &CscMatrix<T>,
        b: &[T],
        c: &[T],
        settings: DefaultSettings<T>,
    ) -> Result<Self, SolverError> {
        settings.validate()?;
        check_problem_data(A, b, c)?;

        let mut timers = Timers::default();
        let mut output;

        timeit! {timers => "setup"; {

        let info = DefaultInfo::<T>::new();
        let data = DefaultProblemData::<T>::new(A,b,c);
        let variables = DefaultVariables::<T>::new(data.n,data.m);
        let residuals = DefaultResiduals::<T>::new(data.n,data.m);

        let kktsystem;
        timeit!{timers => "kktinit"; {
            kktsystem = DefaultKKTSystem::<T>::new(&data);
        }}

        // work variables for assembling step direction LHS/RHS
        let step_rhs  = DefaultVariables::<T>::new(data.n,data.m);
        let step_lhs  = DefaultVariables::<T>::new(data.n,data.m);

        // user facing results go here.
        let solution = DefaultSolution::<T>::new(data.n,data.m);

        output = Self{data,variables,residuals,kktsystem,step_lhs,
             step_rhs,info,solution,settings,timers: None,
             callbacks: SolverCallbacks::default()};

        }} //end "setup" timer.

        //now that the timer is finished we can swap our
        //timer object into the solver structure
        output.timers.replace(timers);

        Ok(output)
    }
}

impl<T> ConfigurablePrintTarget for DefaultSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}

/// Solve the linear program
///
/// minimize c'x subject to Ax = b, x ≥ 0
///
/// in a single call, returning the solution record.
///
/// ```
/// use hsdlp::algebra::*;
/// use hsdlp::solver::*;
///
/// let A = CscMatrix::<f64>::from(&[[1., 1.]]);
/// let b = [1.];
/// let c = [1., 2.];
///
/// let solution = solve_lp(&A, &b, &c, DefaultSettings::default()).unwrap();
/// assert_eq!(solution.status, SolverStatus::Solved);
/// assert!((solution.obj_val - 1.).abs() < 1e-6);
/// ```
pub fn solve_lp<T: FloatT>(
    A: &CscMatrix<T>,
    b: &[T],
    c: &[T],
    settings: DefaultSettings<T>,
) -> Result<DefaultSolution<T>, SolverError> {
    let mut solver = DefaultSolver::new(A, b, c, settings)?;
    solver.solve();
    Ok(solver.solution)
}
