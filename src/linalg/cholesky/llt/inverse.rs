use super::solve::solve_in_place_with_kernels;
use crate::{
    backend::{Kernels, Native},
    Mat, TriMat,
};

/// Computes the inverse of the matrix $A$ from its Cholesky factor, and stores the result in
/// `dst`.
///
/// `dst` is allocated if it is empty, and must otherwise be `factor.dim()×factor.dim()`.
///
/// # Panics
/// Panics if any of the following conditions are violated:
/// * `factor` is populated.
/// * `dst` is empty, or has dimensions `(factor.dim(), factor.dim())`.
#[track_caller]
pub fn invert(dst: &mut Mat, factor: &TriMat) {
    invert_with_kernels(&Native, dst, factor)
}

/// Same as [`invert`], with the primitive operations going through `kernels`.
#[track_caller]
pub fn invert_with_kernels(kernels: &impl Kernels, dst: &mut Mat, factor: &TriMat) {
    factor.expect_side();
    let n = factor.dim();
    dst.reuse_as(n, n);

    dst.fill(0.0);
    for i in 0..n {
        unsafe { dst.write_unchecked(i, i, 1.0) };
    }
    solve_in_place_with_kernels(kernels, factor, dst.as_mut());
}

/// Returns the natural logarithm of the determinant of the matrix $A$, computed from its
/// Cholesky factor.
///
/// # Panics
/// Panics if `factor` is not populated.
#[track_caller]
pub fn log_det(factor: &TriMat) -> f64 {
    factor.expect_side();
    let mut acc = 0.0;
    for i in 0..factor.dim() {
        acc += unsafe { factor.read_unchecked(i, i) }.ln();
    }
    2.0 * acc
}

/// Returns the determinant of the matrix $A$, computed from its Cholesky factor.
///
/// The result may overflow for large matrices, in which case [`log_det`] should be used instead.
///
/// # Panics
/// Panics if `factor` is not populated.
#[track_caller]
pub fn det(factor: &TriMat) -> f64 {
    factor.expect_side();
    let mut prod = 1.0;
    for i in 0..factor.dim() {
        prod *= unsafe { factor.read_unchecked(i, i) };
    }
    prod * prod
}
