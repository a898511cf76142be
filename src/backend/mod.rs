//! Primitive kernels.
//!
//! The factorization and the solvers are written against the [`Kernels`] trait rather than a
//! concrete implementation, so that an optimized backend can be plugged in by the caller. The
//! [`Native`] backend is always available and is the one used by the functions that don't take a
//! `kernels` argument.

use crate::{assert, debug_assert, MatMut, MatRef, Side, Trans};
use core::iter::zip;

/// Dense primitives the factorization and the solvers are built on.
pub trait Kernels {
    /// Returns `sum(x[x_offset + i * incx] * y[y_offset + i * incy])` for `i` in `0..n`.
    ///
    /// # Panics
    /// Implementations must panic if `n > 0` and either of the following conditions is violated:
    /// * `incx > 0 && incy > 0`.
    /// * the last accessed element of each slice is in bounds.
    fn dot(
        &self,
        n: usize,
        x: &[f64],
        x_offset: usize,
        incx: usize,
        y: &[f64],
        y_offset: usize,
        incy: usize,
    ) -> f64;

    /// Overwrites `b` with the solution `X` of `op(A) × X = alpha × B`, where `A` is a triangular
    /// matrix with a non-unit diagonal whose `side` half is stored in `a`, and `op(A)` is `A` or
    /// its transpose depending on `trans`.
    ///
    /// The other half of `a` is not accessed.
    ///
    /// # Panics
    /// Implementations must panic if any of the following conditions is violated:
    /// * `a.nrows() == a.ncols()`.
    /// * `b.nrows() == a.nrows()`.
    fn trsm_left(&self, trans: Trans, side: Side, alpha: f64, a: MatRef<'_>, b: MatMut<'_>);
}

/// Built-in kernels, dispatched at runtime to the best instruction set available.
#[derive(Copy, Clone, Debug, Default)]
pub struct Native;

struct DotContiguous<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl pulp::WithSimd for DotContiguous<'_> {
    type Output = f64;

    #[inline(always)]
    fn with_simd<S: pulp::Simd>(self, simd: S) -> Self::Output {
        let Self { x, y } = self;
        debug_assert!(x.len() == y.len());

        let (x_head, x_tail) = S::f64s_as_simd(x);
        let (y_head, y_tail) = S::f64s_as_simd(y);

        let mut acc0 = simd.f64s_splat(0.0);
        let mut acc1 = simd.f64s_splat(0.0);

        let (x_head2, x_head1) = pulp::as_arrays::<2, _>(x_head);
        let (y_head2, y_head1) = pulp::as_arrays::<2, _>(y_head);

        for ([x0, x1], [y0, y1]) in zip(x_head2, y_head2) {
            acc0 = simd.f64s_mul_add_e(*x0, *y0, acc0);
            acc1 = simd.f64s_mul_add_e(*x1, *y1, acc1);
        }
        for (x0, y0) in zip(x_head1, y_head1) {
            acc0 = simd.f64s_mul_add_e(*x0, *y0, acc0);
        }

        let mut acc = simd.f64s_reduce_sum(simd.f64s_add(acc0, acc1));
        for (x0, y0) in zip(x_tail, y_tail) {
            acc += *x0 * *y0;
        }
        acc
    }
}

#[inline(always)]
fn row_mut(data: &mut [f64], row_stride: usize, ncols: usize, row: usize) -> &mut [f64] {
    let start = row * row_stride;
    &mut data[start..start + ncols]
}

// dst -= factor * src, on two distinct rows of the same buffer
#[inline(always)]
fn sub_scaled_row(
    data: &mut [f64],
    row_stride: usize,
    ncols: usize,
    dst: usize,
    src: usize,
    factor: f64,
) {
    debug_assert!(dst != src);
    let (dst, src) = if dst > src {
        let (head, tail) = data.split_at_mut(dst * row_stride);
        (&mut tail[..ncols], &head[src * row_stride..][..ncols])
    } else {
        let (head, tail) = data.split_at_mut(src * row_stride);
        (&mut head[dst * row_stride..][..ncols], &tail[..ncols])
    };
    for (d, s) in zip(dst, src) {
        *d -= factor * *s;
    }
}

impl Kernels for Native {
    #[track_caller]
    fn dot(
        &self,
        n: usize,
        x: &[f64],
        x_offset: usize,
        incx: usize,
        y: &[f64],
        y_offset: usize,
        incy: usize,
    ) -> f64 {
        if n == 0 {
            return 0.0;
        }
        assert!(all(incx > 0, incy > 0), "vector increment must be positive");
        assert!(
            all(
                x_offset + (n - 1) * incx < x.len(),
                y_offset + (n - 1) * incy < y.len(),
            ),
            "buffer is too small for the requested dimensions",
        );

        if incx == 1 && incy == 1 {
            pulp::Arch::new().dispatch(DotContiguous {
                x: &x[x_offset..x_offset + n],
                y: &y[y_offset..y_offset + n],
            })
        } else {
            let mut acc = 0.0;
            for i in 0..n {
                acc += x[x_offset + i * incx] * y[y_offset + i * incy];
            }
            acc
        }
    }

    #[track_caller]
    fn trsm_left(&self, trans: Trans, side: Side, alpha: f64, a: MatRef<'_>, b: MatMut<'_>) {
        assert!(
            all(a.nrows() == a.ncols(), b.nrows() == a.nrows()),
            "dimension mismatch",
        );

        let n = b.nrows();
        let ncols = b.ncols();
        let row_stride = b.row_stride();
        if n == 0 || ncols == 0 {
            return;
        }
        let data = b.as_slice_mut();

        // an upper matrix is stored as the transpose of a lower one
        let forward = Trans::from(side == Side::Upper).compose(trans) == Trans::No;
        let op = |i: usize, k: usize| -> f64 {
            unsafe {
                match trans {
                    Trans::No => a.read_unchecked(i, k),
                    Trans::Yes => a.read_unchecked(k, i),
                }
            }
        };

        pulp::Arch::new().dispatch(|| {
            if alpha != 1.0 {
                for i in 0..n {
                    for x in row_mut(data, row_stride, ncols, i) {
                        *x *= alpha;
                    }
                }
            }

            if forward {
                for i in 0..n {
                    for k in 0..i {
                        sub_scaled_row(data, row_stride, ncols, i, k, op(i, k));
                    }
                    let diag = op(i, i);
                    for x in row_mut(data, row_stride, ncols, i) {
                        *x /= diag;
                    }
                }
            } else {
                for i in (0..n).rev() {
                    for k in i + 1..n {
                        sub_scaled_row(data, row_stride, ncols, i, k, op(i, k));
                    }
                    let diag = op(i, i);
                    for x in row_mut(data, row_stride, ncols, i) {
                        *x /= diag;
                    }
                }
            }
        });
    }
}
