pub use super::CholeskyError;
use crate::{
    backend::{Kernels, Native},
    Side, SymMat, TriMat,
};
use reborrow::*;

/// Computes the Cholesky factor of the symmetric positive definite matrix `a`, and stores it in
/// `target`.
///
/// If `side` is [`Side::Lower`], the factor is the lower triangular matrix $L$ such that
/// $A = LL^\top$. If it is [`Side::Upper`], the factor is the upper triangular matrix $U$ such that
/// $A = U^\top U$.
///
/// `target` may be uninitialized, in which case it is allocated, or have the same dimension as
/// `a`, in which case its storage is reused regardless of its previous orientation.
///
/// On failure, `target` is reset to the uninitialized state, and the returned error holds the
/// order of the first leading minor of `a` that is not positive definite.
///
/// # Panics
/// Panics if `target` is not uninitialized and `target.dim() != a.dim()`.
#[track_caller]
pub fn cholesky_into(target: &mut TriMat, a: &SymMat, side: Side) -> Result<(), CholeskyError> {
    cholesky_into_with_kernels(&Native, target, a, side)
}

/// Same as [`cholesky_into`], with the primitive operations going through `kernels`.
#[track_caller]
// NaN pivots must take the failure path
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn cholesky_into_with_kernels(
    kernels: &impl Kernels,
    target: &mut TriMat,
    a: &SymMat,
    side: Side,
) -> Result<(), CholeskyError> {
    let n = a.dim();
    target.prepare(n, side);

    log::trace!("cholesky factorization: dim={n}, side={side:?}");

    let mut factor = target.as_storage_mut();
    let row_stride = factor.row_stride();

    for j in 0..n {
        let mut d = 0.0;

        for k in 0..j {
            let data = factor.rb().as_slice();
            // the first k entries of the rows (lower) or columns (upper) k and j of the factor
            let s = match side {
                Side::Lower => kernels.dot(k, data, k * row_stride, 1, data, j * row_stride, 1),
                Side::Upper => kernels.dot(k, data, k, row_stride, data, j, row_stride),
            };

            unsafe {
                let value = (a.read_unchecked(j, k) - s) / factor.read_unchecked(k, k);
                match side {
                    Side::Lower => factor.write_unchecked(j, k, value),
                    Side::Upper => factor.write_unchecked(k, j, value),
                }
                d += value * value;
            }
        }

        d = unsafe { a.read_unchecked(j, j) } - d;

        if !(d > 0.0) {
            log::debug!(
                "cholesky factorization failed: leading minor of order {} is not positive definite (pivot={d})",
                j + 1,
            );
            target.reset();
            return Err(CholeskyError {
                non_positive_definite_minor: j + 1,
            });
        }

        unsafe { factor.write_unchecked(j, j, f64::max(d, 0.0).sqrt()) };
    }

    Ok(())
}

/// Computes the Cholesky factor of `a` into `target`, and returns `true` on success.
///
/// The factor is upper triangular if `upper` is `true`, and lower triangular otherwise. See
/// [`cholesky_into`] for the details.
///
/// # Panics
/// Panics if `target` is not uninitialized and `target.dim() != a.dim()`.
#[track_caller]
pub fn factorize(target: &mut TriMat, a: &SymMat, upper: bool) -> bool {
    let side = if upper { Side::Upper } else { Side::Lower };
    cholesky_into(target, a, side).is_ok()
}
