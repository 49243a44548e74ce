#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]
use hsdlp::{algebra::*, solver::*};

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> (CscMatrix<f64>, Vec<f64>, Vec<f64>) {
    let A = CscMatrix::<f64>::spalloc(4, 6, 0);
    let b = vec![0.; 4];
    let c = vec![0.; 6];
    (A, b, c)
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks

    let (A, b, c) = api_dim_check_data();

    let settings = DefaultSettings::default();
    assert!(DefaultSolver::new(&A, &b, &c, settings).is_ok());
}

#[test]
fn api_dim_check_bad_b() {
    let (A, _b, c) = api_dim_check_data();
    let b = vec![0.; 5];

    let settings = DefaultSettings::default();
    let result = DefaultSolver::new(&A, &b, &c, settings);
    assert!(matches!(
        result,
        Err(SolverError::DataDimension {
            field: "b",
            expected: 4,
            actual: 5
        })
    ));
}

#[test]
fn api_dim_check_bad_c() {
    let (A, b, _c) = api_dim_check_data();
    let c = vec![0.; 3];

    let settings = DefaultSettings::default();
    let result = DefaultSolver::new(&A, &b, &c, settings);
    assert!(matches!(
        result,
        Err(SolverError::DataDimension {
            field: "c",
            expected: 6,
            actual: 3
        })
    ));
}

#[test]
fn api_dim_check_bad_A_cols() {
    let (_A, b, c) = api_dim_check_data();
    let A = CscMatrix::<f64>::spalloc(4, 5, 0);

    let settings = DefaultSettings::default();
    assert!(DefaultSolver::new(&A, &b, &c, settings).is_err());
}

#[test]
fn api_dim_check_bad_A_format() {
    let (_A, b, c) = api_dim_check_data();

    // colptr has the wrong length
    let A = CscMatrix {
        m: 4,
        n: 6,
        colptr: vec![0; 4],
        rowval: vec![],
        nzval: vec![],
    };

    let settings = DefaultSettings::default();
    let result = DefaultSolver::new(&A, &b, &c, settings);
    assert!(matches!(result, Err(SolverError::SparseFormat(_))));
}

#[test]
fn api_bad_settings() {
    let (A, b, c) = api_dim_check_data();

    let settings = DefaultSettings {
        max_step_fraction: 2.0,
        ..DefaultSettings::default()
    };
    let result = DefaultSolver::new(&A, &b, &c, settings);
    assert!(matches!(
        result,
        Err(SolverError::Settings(SettingsError::BadFieldValue(
            "max_step_fraction"
        )))
    ));
}

#[test]
fn api_nonfinite_data() {
    let (A, _b, c) = api_dim_check_data();
    let b = vec![0., f64::INFINITY, 0., 0.];

    let settings = DefaultSettings::default();
    let result = DefaultSolver::new(&A, &b, &c, settings);
    assert!(matches!(result, Err(SolverError::NonFiniteData)));
}
