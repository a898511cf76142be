//! Symmetric matrices.
//!
//! A [`SymMat`] stores an `n×n` symmetric matrix in a strided buffer. Only the upper triangular
//! part (diagonal included) is ever read or written: every accessor maps `(row, col)` to
//! `(min(row, col), max(row, col))` before touching the buffer, so `(i, j)` and `(j, i)` are the
//! same element and cannot drift apart.

use crate::{
    debug_assert,
    mat::{assert_in_bounds, Mat, MatRef},
};
use core::fmt::Debug;

/// Heap allocated symmetric matrix.
#[derive(Clone, Default, PartialEq)]
pub struct SymMat {
    inner: Mat,
}

#[inline(always)]
fn canonicalize(row: usize, col: usize) -> (usize, usize) {
    if row > col {
        (col, row)
    } else {
        (row, col)
    }
}

impl SymMat {
    /// Returns an empty symmetric matrix of dimension `0`.
    #[inline]
    pub fn new() -> Self {
        Self { inner: Mat::new() }
    }

    /// Returns a new `dim×dim` symmetric matrix filled with zeros.
    #[inline]
    pub fn zeros(dim: usize) -> Self {
        Self {
            inner: Mat::zeros(dim, dim),
        }
    }

    /// Returns a new `dim×dim` symmetric matrix, filled with the provided function.
    ///
    /// `f` is only called for `(i, j)` with `i <= j`. The values for `i > j` are mirrored.
    pub fn from_fn(dim: usize, f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut f = f;
        Self {
            inner: Mat::from_fn(dim, dim, |i, j| if i <= j { f(i, j) } else { 0.0 }),
        }
    }

    /// Returns a new symmetric matrix built from the upper triangular part of `src`.
    ///
    /// The strictly lower triangular part of `src` is not accessed.
    ///
    /// # Panics
    /// The function panics if `src` is not square.
    #[track_caller]
    pub fn from_upper(src: MatRef<'_>) -> Self {
        crate::assert!(src.nrows() == src.ncols(), "symmetric matrix must be square");
        Self::from_fn(src.nrows(), |i, j| src.read(i, j))
    }

    /// Returns the dimension of the matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.inner.nrows()
    }

    /// Returns a view over the underlying storage.
    ///
    /// Only the upper triangular part of the view is meaningful.
    #[inline]
    pub fn as_storage(&self) -> MatRef<'_> {
        self.inner.as_ref()
    }

    /// Reads the element at `(row, col)`, which is also the element at `(col, row)`.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn read_unchecked(&self, row: usize, col: usize) -> f64 {
        let (row, col) = canonicalize(row, col);
        self.inner.read_unchecked(row, col)
    }

    /// Reads the element at `(row, col)`, which is also the element at `(col, row)`, with bound
    /// checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> f64 {
        assert_in_bounds(row, col, self.dim(), self.dim());
        unsafe { self.read_unchecked(row, col) }
    }

    /// Writes the element at `(row, col)` and `(col, row)`.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn write_unchecked(&mut self, row: usize, col: usize, value: f64) {
        let (row, col) = canonicalize(row, col);
        debug_assert!(row <= col);
        self.inner.write_unchecked(row, col, value);
    }

    /// Writes the element at `(row, col)` and `(col, row)`, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    #[inline(always)]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        assert_in_bounds(row, col, self.dim(), self.dim());
        unsafe { self.write_unchecked(row, col, value) };
    }

    /// Returns the full dense matrix, with both triangular halves filled in.
    pub fn to_dense(&self) -> Mat {
        Mat::from_fn(self.dim(), self.dim(), |i, j| unsafe {
            self.read_unchecked(i, j)
        })
    }
}

impl Debug for SymMat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.to_dense().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;
    use crate::mat;

    #[test]
    fn coherent_write() {
        let mut a = SymMat::zeros(3);
        a.write(2, 0, 4.0);

        assert!(a.read(2, 0) == 4.0);
        assert!(a.read(0, 2) == 4.0);

        a.write(0, 2, -1.0);
        assert!(a.read(2, 0) == -1.0);
        assert!(a.read(0, 2) == -1.0);
    }

    #[test]
    fn only_upper_half_is_stored() {
        let mut a = SymMat::zeros(2);
        a.write(1, 0, 3.0);

        let storage = a.as_storage();
        assert!(storage.read(0, 1) == 3.0);
        assert!(storage.read(1, 0) == 0.0);
    }

    #[test]
    fn from_upper_ignores_lower() {
        let src = mat![[1.0, 2.0], [99.0, 3.0]];
        let a = SymMat::from_upper(src.as_ref());

        assert!(a.to_dense() == mat![[1.0, 2.0], [2.0, 3.0]]);
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn read_row_at_dim() {
        let a = SymMat::zeros(2);
        a.read(2, 0);
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn read_col_at_dim() {
        let a = SymMat::zeros(2);
        a.read(0, 2);
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn read_row_wrapped_negative() {
        let a = SymMat::zeros(2);
        a.read(usize::MAX, 1);
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn write_col_wrapped_negative() {
        let mut a = SymMat::zeros(2);
        a.write(1, usize::MAX, 1.0);
    }
}
