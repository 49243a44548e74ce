#![allow(non_snake_case)]

// larger seeded problems, only run with the "bench" feature
#[cfg(feature = "bench")]
mod random_lp {

    use hsdlp::{algebra::*, solver::*};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // random m×n problem with known optimal support of size m
    fn random_complementary_lp(seed: u64, m: usize, n: usize) -> (CscMatrix<f64>, Vec<f64>, Vec<f64>, f64) {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut colptr = vec![0];
        let mut rowval = vec![];
        let mut nzval = vec![];
        for j in 0..n {
            for i in 0..m {
                // sparse random entries, with a strong diagonal
                // on the first m columns
                let mut v = 0.;
                if rng.gen_bool(0.3) {
                    v = rng.gen_range(-1.0..1.0);
                }
                if i == j {
                    v += 4.;
                }
                if v != 0. {
                    rowval.push(i);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }
        let A = CscMatrix::new(m, n, colptr, rowval, nzval);

        let x: Vec<f64> = (0..n)
            .map(|j| if j < m { rng.gen_range(0.5..2.0) } else { 0. })
            .collect();
        let z: Vec<f64> = (0..n)
            .map(|j| if j < m { 0. } else { rng.gen_range(0.5..2.0) })
            .collect();
        let y: Vec<f64> = (0..m).map(|_| rng.gen_range(-1.0..1.0)).collect();

        let mut b = vec![0.; m];
        A.gemv(&mut b, &x, 1., 0.);
        let mut c = z;
        A.t().gemv(&mut c, &y, 1., 1.);
        let obj = b.dot(&y);

        (A, b, c, obj)
    }

    #[test]
    fn test_random_lp_batch() {
        for seed in 0..20 {
            let (A, b, c, obj) = random_complementary_lp(seed, 40, 100);

            let sol = solve_lp(&A, &b, &c, DefaultSettings::default()).unwrap();

            assert_eq!(sol.status, SolverStatus::Solved, "seed {}", seed);
            assert!((sol.obj_val - obj).abs() <= 1e-6 * (1. + obj.abs()));
        }
    }
}
