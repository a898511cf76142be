//! The Cholesky decomposition of a symmetric positive definite matrix $A$ is such that:
//! $$A = LL^\top = U^\top U,$$
//! where $L$ is a lower triangular matrix, and $U = L^\top$ is an upper triangular matrix.
//!
//! Either factor can be computed, depending on the [`Side`](crate::Side) requested from
//! [`compute::cholesky_into`].

/// Computing the decomposition.
pub mod compute;
/// Reconstructing the inverse of the original matrix from the decomposition.
pub mod inverse;
/// Reconstructing the original matrix from the decomposition.
pub mod reconstruct;
/// Solving a linear system using the decomposition.
pub mod solve;

/// This error signifies that the LLT decomposition could not be computed due to the matrix not
/// being numerically positive definite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CholeskyError {
    /// The dimension of the first square non positive-definite top-left corner of the input
    /// matrix.
    pub non_positive_definite_minor: usize,
}

impl core::fmt::Display for CholeskyError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "matrix is not positive definite: leading minor of order {} is not positive definite",
            self.non_positive_definite_minor,
        )
    }
}

impl std::error::Error for CholeskyError {}

#[cfg(test)]
mod tests {
    use super::{compute::*, inverse::*, reconstruct::*, solve::*};
    use crate::{mat, Col, Mat, Side, SymMat, TriMat, TriState};
    use assert_approx_eq::assert_approx_eq;
    use rand::prelude::*;

    fn random_positive_definite(rng: &mut StdRng, n: usize) -> SymMat {
        let r = Mat::from_fn(n, n, |_, _| rng.gen::<f64>());
        SymMat::from_fn(n, |i, j| {
            let mut acc = if i == j { 1.0 } else { 0.0 };
            for k in 0..n {
                acc += r.read(k, i) * r.read(k, j);
            }
            acc
        })
    }

    fn max_abs(a: &Mat) -> f64 {
        let mut acc = 0.0f64;
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                acc = acc.max(a.read(i, j).abs());
            }
        }
        acc
    }

    fn mul(a: &Mat, b: &Mat) -> Mat {
        Mat::from_fn(a.nrows(), b.ncols(), |i, j| {
            (0..a.ncols()).map(|k| a.read(i, k) * b.read(k, j)).sum()
        })
    }

    #[test]
    fn test_roundtrip() {
        let rng = &mut StdRng::seed_from_u64(0);
        for n in [1, 2, 5, 50] {
            for side in [Side::Lower, Side::Upper] {
                let a = random_positive_definite(rng, n);
                let a_dense = a.to_dense();
                let tol = 1e-10 * max_abs(&a_dense);

                let mut factor = TriMat::new();
                cholesky_into(&mut factor, &a, side).unwrap();
                assert!(factor.state() == TriState::Populated(side));
                assert!(factor.dim() == n);

                let f = factor.to_dense();
                let f_t = Mat::from_fn(n, n, |i, j| f.read(j, i));
                let product = match side {
                    Side::Lower => mul(&f, &f_t),
                    Side::Upper => mul(&f_t, &f),
                };

                let mut reconstructed = Mat::new();
                reconstruct(&mut reconstructed, &factor);

                for i in 0..n {
                    for j in 0..n {
                        assert_approx_eq!(product.read(i, j), a_dense.read(i, j), tol);
                        assert_approx_eq!(reconstructed.read(i, j), a_dense.read(i, j), tol);
                    }
                }
            }
        }
    }

    #[test]
    fn both_sides_agree() {
        let rng = &mut StdRng::seed_from_u64(1);
        let n = 8;
        let a = random_positive_definite(rng, n);

        let mut l = TriMat::new();
        let mut u = TriMat::new();
        cholesky_into(&mut l, &a, Side::Lower).unwrap();
        cholesky_into(&mut u, &a, Side::Upper).unwrap();

        for i in 0..n {
            for j in 0..n {
                assert_approx_eq!(l.read(i, j), u.read(j, i), 1e-12);
            }
        }
    }

    #[test]
    fn known_factor() {
        let a = SymMat::from_upper(mat![[4.0, 2.0], [0.0, 10.0]].as_ref());
        let mut l = TriMat::new();
        assert!(factorize(&mut l, &a, false));

        assert_approx_eq!(l.read(0, 0), 2.0);
        assert_approx_eq!(l.read(1, 0), 1.0);
        assert_approx_eq!(l.read(1, 1), 3.0);
        assert!(l.read(0, 1) == 0.0);
    }

    #[test]
    fn not_positive_definite() {
        let a = SymMat::from_upper(mat![[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]].as_ref());

        for side in [Side::Lower, Side::Upper] {
            let mut factor = TriMat::with_dim(3);
            let err = cholesky_into(&mut factor, &a, side).unwrap_err();

            assert!(err.non_positive_definite_minor == 2);
            assert!(factor.state() == TriState::Uninitialized);
            assert!(factor.dim() == 0);
        }

        let mut factor = TriMat::new();
        assert!(!factorize(&mut factor, &a, true));
        assert!(factor.state() == TriState::Uninitialized);
    }

    #[test]
    fn one_by_one() {
        let mut a = SymMat::zeros(1);
        a.write(0, 0, 9.0);

        for side in [Side::Lower, Side::Upper] {
            let mut factor = TriMat::new();
            cholesky_into(&mut factor, &a, side).unwrap();
            assert!(factor.read(0, 0) == 3.0);

            let mut x = Mat::new();
            solve(&mut x, &factor, mat![[18.0]].as_ref());
            assert_approx_eq!(x.read(0, 0), 2.0);
        }
    }

    #[test]
    fn failure_resets_populated_target() {
        let rng = &mut StdRng::seed_from_u64(5);
        let good = random_positive_definite(rng, 3);
        let bad = SymMat::from_upper(mat![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -2.0]].as_ref());

        let mut factor = TriMat::new();
        cholesky_into(&mut factor, &good, Side::Upper).unwrap();
        assert!(factor.state() == TriState::Populated(Side::Upper));

        let err = cholesky_into(&mut factor, &bad, Side::Lower).unwrap_err();
        assert!(err.non_positive_definite_minor == 3);
        assert!(factor.state() == TriState::Uninitialized);
        assert!(factor.dim() == 0);

        // an uninitialized target accepts any dimension again
        cholesky_into(&mut factor, &random_positive_definite(rng, 5), Side::Lower).unwrap();
        assert!(factor.dim() == 5);
    }

    #[test]
    fn solve_zero_column_rhs() {
        let rng = &mut StdRng::seed_from_u64(6);
        let a = random_positive_definite(rng, 4);
        let mut factor = TriMat::new();
        cholesky_into(&mut factor, &a, Side::Lower).unwrap();

        let mut b = Mat::zeros(4, 0);
        solve_in_place(&factor, b.as_mut());
        assert!(b.nrows() == 4);
        assert!(b.ncols() == 0);
    }

    #[test]
    fn nan_pivot_fails() {
        let mut a = SymMat::zeros(2);
        a.write(0, 0, f64::NAN);
        a.write(1, 1, 1.0);

        let mut factor = TriMat::new();
        let err = cholesky_into(&mut factor, &a, Side::Lower).unwrap_err();
        assert!(err.non_positive_definite_minor == 1);
        assert!(factor.dim() == 0);
    }

    #[test]
    fn empty_matrix() {
        let a = SymMat::new();
        let mut factor = TriMat::new();
        assert!(factorize(&mut factor, &a, true));
        assert!(factor.state() == TriState::Populated(Side::Upper));
        assert!(factor.dim() == 0);
        assert!(det(&factor) == 1.0);
        assert!(log_det(&factor) == 0.0);
    }

    #[test]
    fn reuse_target_with_other_orientation() {
        let rng = &mut StdRng::seed_from_u64(2);
        let a = random_positive_definite(rng, 4);

        let mut factor = TriMat::new();
        cholesky_into(&mut factor, &a, Side::Lower).unwrap();
        cholesky_into(&mut factor, &a, Side::Upper).unwrap();

        assert!(factor.side() == Some(Side::Upper));
        // no leftover from the lower factor
        assert!(factor.as_storage().read(3, 0) == 0.0);

        let mut fresh = TriMat::new();
        cholesky_into(&mut fresh, &a, Side::Upper).unwrap();
        assert!(factor == fresh);
    }

    #[test]
    #[should_panic(expected = "cholesky target has the wrong dimension")]
    fn wrong_target_dim() {
        let a = SymMat::from_fn(3, |i, j| if i == j { 1.0 } else { 0.0 });
        let mut factor = TriMat::with_dim(2);
        cholesky_into(&mut factor, &a, Side::Lower).ok();
    }

    #[test]
    fn test_solve() {
        let rng = &mut StdRng::seed_from_u64(3);
        for n in [1, 3, 20] {
            for side in [Side::Lower, Side::Upper] {
                let a = random_positive_definite(rng, n);
                let a_dense = a.to_dense();
                let b = Mat::from_fn(n, 3, |_, _| rng.gen::<f64>());

                let mut factor = TriMat::new();
                cholesky_into(&mut factor, &a, side).unwrap();

                let mut x = Mat::new();
                solve(&mut x, &factor, b.as_ref());

                let mut x_in_place = b.clone();
                solve_in_place(&factor, x_in_place.as_mut());
                assert!(x == x_in_place);

                let ax = mul(&a_dense, &x);
                for i in 0..n {
                    for j in 0..3 {
                        assert_approx_eq!(ax.read(i, j), b.read(i, j), 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn solve_vector_rhs() {
        let a = SymMat::from_upper(mat![[4.0, 2.0], [0.0, 10.0]].as_ref());
        let mut factor = TriMat::new();
        cholesky_into(&mut factor, &a, Side::Upper).unwrap();

        // A × [1, 2] = [8, 22]
        let mut x = Col::with_inc(2, 2);
        x.write(0, 0, 8.0);
        x.write(1, 0, 22.0);
        solve_in_place(&factor, x.as_mut());

        assert_approx_eq!(x.read(0, 0), 1.0);
        assert_approx_eq!(x.read(1, 0), 2.0);
    }

    #[test]
    #[should_panic(expected = "invalid triangle")]
    fn solve_without_factor() {
        let factor = TriMat::with_dim(2);
        let mut b = Mat::zeros(2, 1);
        solve_in_place(&factor, b.as_mut());
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn solve_wrong_rhs() {
        let factor = TriMat::from_fn(2, Side::Lower, |_, _| 1.0);
        let mut x = Mat::new();
        solve(&mut x, &factor, Mat::zeros(3, 1).as_ref());
    }

    #[test]
    fn test_inverse() {
        let rng = &mut StdRng::seed_from_u64(4);
        for side in [Side::Lower, Side::Upper] {
            let n = 10;
            let a = random_positive_definite(rng, n);

            let mut factor = TriMat::new();
            cholesky_into(&mut factor, &a, side).unwrap();

            let mut inv = Mat::new();
            invert(&mut inv, &factor);

            let prod = mul(&a.to_dense(), &inv);
            for i in 0..n {
                for j in 0..n {
                    let target = if i == j { 1.0 } else { 0.0 };
                    assert_approx_eq!(prod.read(i, j), target, 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_det() {
        // det = 4 * 10 - 2 * 2
        let a = SymMat::from_upper(mat![[4.0, 2.0], [0.0, 10.0]].as_ref());
        let mut factor = TriMat::new();
        cholesky_into(&mut factor, &a, Side::Lower).unwrap();

        assert_approx_eq!(det(&factor), 36.0, 1e-12);
        assert_approx_eq!(log_det(&factor), 36.0f64.ln(), 1e-12);
    }

    #[test]
    fn error_display() {
        let err = CholeskyError {
            non_positive_definite_minor: 3,
        };
        assert!(err.to_string().contains("order 3"));
    }
}
