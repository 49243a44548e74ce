#![allow(non_snake_case)]

#[cfg(test)]
mod callback_test {

    use hsdlp::solver::DefaultInfo;
    use hsdlp::{algebra::*, solver::*};

    // setup a custom termination function
    fn callback_r(info: &DefaultInfo<f64>) -> bool {
        if info.iterations < 3 {
            println!("tick");
            false //continue
        } else {
            println!("BOOM!\n");
            true // stop
        }
    }

    #[test]
    fn test_callbacks() {
        // minimize x₁ + 2x₂ + 4x₃ s.t. x₁ + x₂ + x₃ = 1, x₁ - x₃ = 0.2
        let A = CscMatrix::from(&[
            [1., 1., 1.],  //
            [1., 0., -1.], //
        ]);
        let b = [1., 0.2];
        let c = [1., 2., 4.];

        let settings = DefaultSettings::default();
        let mut solver = DefaultSolver::new(&A, &b, &c, settings).unwrap();

        solver.set_termination_callback(callback_r);
        solver.solve();
        assert_eq!(solver.solution.status, SolverStatus::CallbackTerminated);
        assert_eq!(solver.solution.status.code(), 6);
        assert_eq!(solver.solution.iterations, 3);

        // turn it off and run again
        solver.unset_termination_callback();
        solver.solve();
        assert_eq!(solver.solution.status, SolverStatus::Solved);

        // a closure that terminates immediately
        solver.set_termination_callback(|_info: &DefaultInfo<f64>| true);
        solver.solve();
        assert_eq!(solver.solution.status, SolverStatus::CallbackTerminated);
        assert_eq!(solver.solution.iterations, 0);
    }
}
