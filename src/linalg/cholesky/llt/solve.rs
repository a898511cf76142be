use crate::{
    assert,
    backend::{Kernels, Native},
    Mat, MatMut, MatRef, Side, TriMat, Trans,
};
use reborrow::*;

/// Given the Cholesky factor of a matrix $A$, solves the equation $A X = B$, and stores the
/// result in `rhs`, which initially holds $B$.
///
/// # Panics
/// Panics if any of the following conditions are violated:
/// * `factor` is populated.
/// * `rhs.nrows() == factor.dim()`.
#[track_caller]
pub fn solve_in_place(factor: &TriMat, rhs: MatMut<'_>) {
    solve_in_place_with_kernels(&Native, factor, rhs)
}

/// Same as [`solve_in_place`], with the primitive operations going through `kernels`.
#[track_caller]
pub fn solve_in_place_with_kernels(kernels: &impl Kernels, factor: &TriMat, rhs: MatMut<'_>) {
    let side = factor.expect_side();
    let n = factor.dim();
    assert!(rhs.nrows() == n, "dimension mismatch");

    log::trace!("cholesky solve: dim={n}, nrhs={}, side={side:?}", rhs.ncols());

    #[cfg(feature = "perf-warn")]
    if rhs.row_stride() != rhs.ncols() && crate::__perf_warn!(SOLVE_WARN) {
        log::warn!(target: "chol64_perf", "Cholesky solve prefers unpadded right-hand sides. Found row stride {} for {} columns.", rhs.row_stride(), rhs.ncols());
    }

    let mut rhs = rhs;
    let a = factor.as_storage();

    match side {
        // A = UᵀU
        Side::Upper => {
            kernels.trsm_left(Trans::Yes, side, 1.0, a, rhs.rb_mut());
            kernels.trsm_left(Trans::No, side, 1.0, a, rhs);
        }
        // A = LLᵀ
        Side::Lower => {
            kernels.trsm_left(Trans::No, side, 1.0, a, rhs.rb_mut());
            kernels.trsm_left(Trans::Yes, side, 1.0, a, rhs);
        }
    }
}

/// Given the Cholesky factor of a matrix $A$, solves the equation $A X = B$, and stores the
/// result in `dst`. `rhs` is left untouched.
///
/// `dst` is allocated if it is empty, and must otherwise have the same dimensions as `rhs`.
///
/// # Panics
/// Panics if any of the following conditions are violated:
/// * `factor` is populated.
/// * `rhs.nrows() == factor.dim()`.
/// * `dst` is empty, or has the same dimensions as `rhs`.
#[track_caller]
pub fn solve(dst: &mut Mat, factor: &TriMat, rhs: MatRef<'_>) {
    solve_with_kernels(&Native, dst, factor, rhs)
}

/// Same as [`solve`], with the primitive operations going through `kernels`.
#[track_caller]
pub fn solve_with_kernels(kernels: &impl Kernels, dst: &mut Mat, factor: &TriMat, rhs: MatRef<'_>) {
    factor.expect_side();
    assert!(rhs.nrows() == factor.dim(), "dimension mismatch");

    dst.copy_from(rhs);
    solve_in_place_with_kernels(kernels, factor, dst.as_mut());
}
