#![allow(non_snake_case)]

use hsdlp::{algebra::*, io::ConfigurablePrintTarget, solver::*};

fn test_print_solver() -> DefaultSolver<f64> {
    let A = CscMatrix::from(&[[1., 1.]]);
    let b = [1.];
    let c = [1., 2.];
    let settings = DefaultSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    DefaultSolver::new(&A, &b, &c, settings).unwrap()
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.solve();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.solve();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("hsdlp v"));
    assert!(result.contains("nnz(A)        = 2"));
    assert!(result.contains("Terminated with status = Solved"));

    // timer breakdown follows the solve time
    assert!(result.contains("\nsetup : "));
    assert!(result.contains("\n    IP iteration : "));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("hsdlp v"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("hsdlp v"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.solve();
    // no output
    assert!(solver.get_print_buffer().is_err());
}

#[test]
fn test_quiet_by_default() {
    let A = CscMatrix::from(&[[1., 1.]]);
    let mut solver = DefaultSolver::new(&A, &[1.], &[1., 2.], DefaultSettings::default()).unwrap();
    solver.print_to_buffer();
    solver.solve();
    assert_eq!(solver.get_print_buffer().unwrap(), "");
}
