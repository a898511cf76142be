//! Column vectors.
//!
//! A [`Col`] is a dense matrix with a single column. Its elements are `inc` slots apart in the
//! underlying buffer, which makes it a [`Mat`] with a row stride of `inc`, so it can be passed
//! anywhere a matrix view is expected through [`Col::as_ref`] and [`Col::as_mut`].

use crate::{
    assert,
    mat::{Mat, MatMut, MatRef},
};
use core::fmt::Debug;

/// Heap allocated column vector.
#[derive(Clone, Default, PartialEq)]
pub struct Col {
    inner: Mat,
}

impl Col {
    /// Returns an empty column of dimension `0`.
    #[inline]
    pub fn new() -> Self {
        Self { inner: Mat::new() }
    }

    /// Returns a new column vector with `nrows` elements, filled with the provided function.
    #[inline]
    pub fn from_fn(nrows: usize, f: impl FnMut(usize) -> f64) -> Self {
        let mut f = f;
        Self {
            inner: Mat::from_fn(nrows, 1, |i, _| f(i)),
        }
    }

    /// Returns a new column vector with `nrows` elements, filled with zeros.
    #[inline]
    pub fn zeros(nrows: usize) -> Self {
        Self::from_fn(nrows, |_| 0.0)
    }

    /// Returns a new zeroed column vector with `nrows` elements stored `inc` slots apart.
    ///
    /// # Panics
    /// The function panics if `inc == 0`.
    #[track_caller]
    pub fn with_inc(nrows: usize, inc: usize) -> Self {
        assert!(inc > 0, "vector increment must be positive");
        Self {
            inner: Mat::with_row_stride(nrows, 1, inc),
        }
    }

    /// Returns the number of rows of the vector.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    /// Returns the number of columns of the vector, always `1`.
    #[inline]
    pub fn ncols(&self) -> usize {
        1
    }

    /// Returns the number of slots between two consecutive elements.
    #[inline]
    pub fn inc(&self) -> usize {
        self.inner.row_stride()
    }

    /// Returns a view over the vector, as an `nrows×1` matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        self.inner.as_ref()
    }

    /// Returns a mutable view over the vector, as an `nrows×1` matrix.
    #[inline]
    pub fn as_mut(&mut self) -> MatMut<'_> {
        self.inner.as_mut()
    }

    /// Consumes the vector and returns it as an `nrows×1` matrix.
    #[inline]
    pub fn into_mat(self) -> Mat {
        self.inner
    }

    /// Reads the element at `row`.
    ///
    /// # Safety
    /// The behavior is undefined if `row >= self.nrows()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn read_unchecked(&self, row: usize) -> f64 {
        self.inner.read_unchecked(row, 0)
    }

    /// Reads the element at `(row, col)`, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col == 0`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.nrows(), "row index out of bounds");
        assert!(col == 0, "column index out of bounds");
        unsafe { self.read_unchecked(row) }
    }

    /// Writes the element at `row`.
    ///
    /// # Safety
    /// The behavior is undefined if `row >= self.nrows()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn write_unchecked(&mut self, row: usize, value: f64) {
        self.inner.write_unchecked(row, 0, value)
    }

    /// Writes the element at `(row, col)`, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col == 0`.
    #[inline(always)]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.nrows(), "row index out of bounds");
        assert!(col == 0, "column index out of bounds");
        unsafe { self.write_unchecked(row, value) }
    }
}

impl Debug for Col {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries((0..self.nrows()).map(|i| unsafe { self.read_unchecked(i) }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn strided_elements() {
        let mut x = Col::with_inc(3, 2);
        x.write(1, 0, 5.0);
        x.write(2, 0, 7.0);

        assert!(x.inc() == 2);
        assert!(x.read(0, 0) == 0.0);
        assert!(x.read(1, 0) == 5.0);
        assert!(x.as_ref().as_slice() == &[0.0, 0.0, 5.0, 0.0, 7.0]);
        assert!(x.as_ref().read(2, 0) == 7.0);
    }

    #[test]
    fn into_mat() {
        let x = Col::from_fn(3, |i| i as f64);
        let m = x.into_mat();
        assert!(m.nrows() == 3);
        assert!(m.ncols() == 1);
        assert!(m.read(2, 0) == 2.0);
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn read_nonzero_col() {
        let x = Col::zeros(3);
        x.read(0, 1);
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn write_nonzero_col() {
        let mut x = Col::zeros(3);
        x.write(0, 1, 1.0);
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn read_row_at_dim() {
        let x = Col::zeros(3);
        x.read(3, 0);
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn read_row_wrapped_negative() {
        let x = Col::zeros(3);
        x.read(usize::MAX, 0);
    }
}
