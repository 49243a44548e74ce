#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use hsdlp::{algebra::*, solver::*};

    let A = CscMatrix {
        m: 1,
        n: 2,
        colptr: vec![0, 1, 2],
        rowval: vec![0, 0],
        nzval: vec![1.0, 1.0],
    };
    let b = [1.0];
    let c = [1.0, 2.0];

    // non-finite floats don't survive JSON, so use a finite time limit
    let settings = DefaultSettingsBuilder::default()
        .max_iter(50)
        .time_limit(100.)
        .build()
        .unwrap();

    // settings round trip
    let json = serde_json::to_string(&settings).unwrap();
    let settings2: DefaultSettings<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, settings2);

    // missing fields take their defaults
    let settings3: DefaultSettings<f64> = serde_json::from_str(r#"{"tol": 1e-6}"#).unwrap();
    assert_eq!(settings3.tol, 1e-6);
    assert_eq!(settings3.max_iter, 1000);

    // problem data round trip
    let json = serde_json::to_string(&A).unwrap();
    let A2: CscMatrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(A, A2);

    let solution = solve_lp(&A2, &b, &c, settings2).unwrap();
    assert_eq!(solution.status, SolverStatus::Solved);

    // solution record round trip
    let json = serde_json::to_string(&solution).unwrap();
    let solution2: DefaultSolution<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(solution.x, solution2.x);
    assert_eq!(solution2.status, SolverStatus::Solved);
}
