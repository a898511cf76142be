use super::{assert_in_bounds, assert_valid_layout};
use crate::debug_assert;
use core::fmt::Debug;
use reborrow::*;

/// Immutable view over a matrix, similar to an immutable reference to a 2D strided [prim@slice].
#[derive(Copy, Clone)]
pub struct MatRef<'a> {
    pub(super) data: &'a [f64],
    pub(super) nrows: usize,
    pub(super) ncols: usize,
    pub(super) row_stride: usize,
}

impl<'short> Reborrow<'short> for MatRef<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        *self
    }
}

impl<'short> ReborrowMut<'short> for MatRef<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        *self
    }
}

impl IntoConst for MatRef<'_> {
    type Target = Self;

    #[inline]
    fn into_const(self) -> Self::Target {
        self
    }
}

impl<'a> MatRef<'a> {
    /// Returns the number of rows of the matrix.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns of the matrix.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the number of slots between the starts of two consecutive rows.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Returns the underlying buffer, padding included.
    #[inline]
    pub fn as_slice(self) -> &'a [f64] {
        self.data
    }

    /// Returns row `row` as a contiguous slice of length `self.ncols()`.
    ///
    /// # Panics
    /// The function panics if `row >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn row(self, row: usize) -> &'a [f64] {
        crate::assert!(row < self.nrows, "row index out of bounds");
        if self.ncols == 0 {
            return &[];
        }
        let start = row * self.row_stride;
        &self.data[start..start + self.ncols]
    }

    /// Reads the value of the element at the given indices.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn read_unchecked(&self, row: usize, col: usize) -> f64 {
        debug_assert!(all(row < self.nrows, col < self.ncols));
        *self.data.get_unchecked(row * self.row_stride + col)
    }

    /// Reads the value of the element at the given indices, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> f64 {
        assert_in_bounds(row, col, self.nrows, self.ncols);
        unsafe { self.read_unchecked(row, col) }
    }
}

/// Creates a `MatRef` from a slice holding a row-major matrix without padding.
///
/// # Panics
/// The function panics if `slice.len() < nrows * ncols`.
#[track_caller]
#[inline]
pub fn from_row_major_slice(slice: &[f64], nrows: usize, ncols: usize) -> MatRef<'_> {
    from_row_major_slice_with_stride(slice, nrows, ncols, ncols)
}

/// Creates a `MatRef` from a slice holding a row-major matrix, with rows starting `row_stride`
/// slots apart.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `row_stride >= ncols`.
/// * `slice` is long enough to hold the last row.
#[track_caller]
#[inline]
pub fn from_row_major_slice_with_stride(
    slice: &[f64],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
) -> MatRef<'_> {
    assert_valid_layout(slice.len(), nrows, ncols, row_stride);
    MatRef {
        data: slice,
        nrows,
        ncols,
        row_stride,
    }
}

impl Debug for MatRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct DebugRow<'a>(&'a [f64]);

        impl Debug for DebugRow<'_> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        let mut list = f.debug_list();
        for i in 0..self.nrows {
            list.entry(&DebugRow(self.row(i)));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn strided_layout() {
        let data = [1.0, 2.0, -1.0, 3.0, 4.0, -1.0, 5.0, 6.0];
        let m = from_row_major_slice_with_stride(&data, 3, 2, 3);

        assert!(m.read(0, 1) == 2.0);
        assert!(m.read(1, 0) == 3.0);
        assert!(m.read(2, 1) == 6.0);
        assert!(m.row(1) == &[3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "row stride must be at least the number of columns")]
    fn stride_too_small() {
        let data = [0.0; 4];
        let _ = from_row_major_slice_with_stride(&data, 2, 2, 1);
    }

    #[test]
    #[should_panic(expected = "buffer is too small")]
    fn buffer_too_small() {
        let data = [0.0; 5];
        let _ = from_row_major_slice_with_stride(&data, 2, 2, 4);
    }
}
