use criterion::{criterion_group, criterion_main, Criterion};
use rand::random;

use chol64::{
    linalg::{
        cholesky::llt::{compute::cholesky_into, solve::solve_in_place},
        triangular_solve::solve_triangular_in_place,
    },
    Mat, Side, SymMat, TriMat, Trans,
};

fn random_positive_definite(n: usize) -> SymMat {
    let r = Mat::from_fn(n, n, |_, _| random::<f64>());
    SymMat::from_fn(n, |i, j| {
        let mut acc = if i == j { n as f64 } else { 0.0 };
        for k in 0..n {
            acc += r.read(k, i) * r.read(k, j);
        }
        acc
    })
}

pub fn cholesky(c: &mut Criterion) {
    for n in [16, 64, 128, 256, 512] {
        let a = random_positive_definite(n);

        for (name, side) in [("lower", Side::Lower), ("upper", Side::Upper)] {
            c.bench_function(&format!("llt-{name}-{n}"), |b| {
                let mut factor = TriMat::with_dim(n);
                b.iter(|| {
                    cholesky_into(&mut factor, &a, side).ok();
                })
            });

            let mut factor = TriMat::new();
            if cholesky_into(&mut factor, &a, side).is_err() {
                continue;
            }

            c.bench_function(&format!("llt-solve-{name}-{n}"), |b| {
                let rhs = Mat::from_fn(n, 8, |_, _| random::<f64>());
                let mut x = rhs.clone();
                b.iter(|| {
                    x.copy_from(rhs.as_ref());
                    solve_in_place(&factor, x.as_mut());
                })
            });

            c.bench_function(&format!("trsm-{name}-{n}"), |b| {
                let rhs = Mat::from_fn(n, 8, |_, _| random::<f64>());
                let mut x = rhs.clone();
                b.iter(|| {
                    x.copy_from(rhs.as_ref());
                    solve_triangular_in_place(&factor, Trans::No, x.as_mut());
                })
            });
        }
    }
}

criterion_group!(benches, cholesky);
criterion_main!(benches);
