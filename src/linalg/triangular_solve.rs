//! Triangular solve module.
//!
//! Solves $\operatorname{op}(A) X = B$ for a triangular matrix $A$ stored in a [`TriMat`], where
//! $\operatorname{op}(A)$ is either $A$ or $A^\top$.

use crate::{
    assert,
    backend::{Kernels, Native},
    Mat, MatMut, MatRef, TriMat, Trans,
};

/// Solves $\operatorname{op}(A) X = B$, and stores the result in `rhs`, which initially holds
/// $B$.
///
/// # Panics
/// Panics if any of the following conditions are violated:
/// * `a` is populated.
/// * `rhs.nrows() == a.dim()`.
#[track_caller]
pub fn solve_triangular_in_place(a: &TriMat, trans: Trans, rhs: MatMut<'_>) {
    solve_triangular_in_place_with_kernels(&Native, a, trans, rhs)
}

/// Same as [`solve_triangular_in_place`], with the primitive operations going through `kernels`.
#[track_caller]
pub fn solve_triangular_in_place_with_kernels(
    kernels: &impl Kernels,
    a: &TriMat,
    trans: Trans,
    rhs: MatMut<'_>,
) {
    let side = a.expect_side();
    assert!(rhs.nrows() == a.dim(), "dimension mismatch");

    log::trace!(
        "triangular solve: dim={}, nrhs={}, side={side:?}, trans={trans:?}",
        a.dim(),
        rhs.ncols(),
    );

    kernels.trsm_left(trans, side, 1.0, a.as_storage(), rhs);
}

/// Solves $\operatorname{op}(A) X = B$, and stores the result in `dst`. `rhs` is left untouched.
///
/// `dst` is allocated if it is empty, and must otherwise have the same dimensions as `rhs`.
///
/// # Panics
/// Panics if any of the following conditions are violated:
/// * `a` is populated.
/// * `rhs.nrows() == a.dim()`.
/// * `dst` is empty, or has the same dimensions as `rhs`.
#[track_caller]
pub fn solve_triangular(dst: &mut Mat, a: &TriMat, trans: Trans, rhs: MatRef<'_>) {
    solve_triangular_with_kernels(&Native, dst, a, trans, rhs)
}

/// Same as [`solve_triangular`], with the primitive operations going through `kernels`.
#[track_caller]
pub fn solve_triangular_with_kernels(
    kernels: &impl Kernels,
    dst: &mut Mat,
    a: &TriMat,
    trans: Trans,
    rhs: MatRef<'_>,
) {
    a.expect_side();
    assert!(rhs.nrows() == a.dim(), "dimension mismatch");

    dst.copy_from(rhs);
    solve_triangular_in_place_with_kernels(kernels, a, trans, dst.as_mut());
}
