use super::{assert_in_bounds, assert_valid_layout, MatRef};
use crate::{assert, debug_assert};
use core::fmt::Debug;
use reborrow::*;

/// Mutable view over a matrix, similar to a mutable reference to a 2D strided [prim@slice].
///
/// # Note
///
/// Unlike a `MatRef`, a `MatMut` is not `Copy`, which means it can be moved out of when passed to
/// a function by value. Use [`reborrow::ReborrowMut::rb_mut`] to lend it for a shorter lifetime
/// instead.
///
/// ```
/// use chol64::{Mat, MatMut, MatRef};
/// use chol64::reborrow::*;
///
/// fn takes_matmut(view: MatMut<'_>) {}
/// fn takes_matref(view: MatRef<'_>) {}
///
/// let mut matrix = Mat::zeros(2, 2);
/// let mut view = matrix.as_mut();
///
/// takes_matmut(view.rb_mut());
/// takes_matmut(view.rb_mut());
/// takes_matref(view.rb());
/// takes_matmut(view);
/// ```
pub struct MatMut<'a> {
    pub(super) data: &'a mut [f64],
    pub(super) nrows: usize,
    pub(super) ncols: usize,
    pub(super) row_stride: usize,
}

impl<'short> Reborrow<'short> for MatMut<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        MatRef {
            data: &*self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
        }
    }
}

impl<'short> ReborrowMut<'short> for MatMut<'_> {
    type Target = MatMut<'short>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        MatMut {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
        }
    }
}

impl<'a> IntoConst for MatMut<'a> {
    type Target = MatRef<'a>;

    #[inline]
    fn into_const(self) -> Self::Target {
        MatRef {
            data: self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
        }
    }
}

impl<'a> MatMut<'a> {
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
    pub fn as_slice_mut(self) -> &'a mut [f64] {
        self.data
    }

    /// Returns row `row` as a mutable contiguous slice of length `self.ncols()`.
    ///
    /// # Panics
    /// The function panics if `row >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn row_mut(self, row: usize) -> &'a mut [f64] {
        assert!(row < self.nrows, "row index out of bounds");
        let MatMut {
            data,
            ncols,
            row_stride,
            ..
        } = self;
        if ncols == 0 {
            return &mut [];
        }
        let start = row * row_stride;
        &mut data[start..start + ncols]
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
        self.rb().read_unchecked(row, col)
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
        self.rb().read(row, col)
    }

    /// Writes the value to the element at the given indices.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn write_unchecked(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(all(row < self.nrows, col < self.ncols));
        *self.data.get_unchecked_mut(row * self.row_stride + col) = value;
    }

    /// Writes the value to the element at the given indices, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        assert_in_bounds(row, col, self.nrows, self.ncols);
        unsafe { self.write_unchecked(row, col, value) };
    }

    /// Copies the values from `other` into `self`.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `self.nrows() == other.nrows()`.
    /// * `self.ncols() == other.ncols()`.
    #[track_caller]
    pub fn copy_from(&mut self, other: MatRef<'_>) {
        assert!(
            all(self.nrows == other.nrows(), self.ncols == other.ncols()),
            "dimension mismatch",
        );
        for i in 0..self.nrows {
            self.rb_mut().row_mut(i).copy_from_slice(other.row(i));
        }
    }

    /// Fills the elements of `self` with `constant`.
    pub fn fill(&mut self, constant: f64) {
        for i in 0..self.nrows {
            self.rb_mut().row_mut(i).fill(constant);
        }
    }
}

/// Creates a `MatMut` from a mutable slice holding a row-major matrix without padding.
///
/// # Panics
/// The function panics if `slice.len() < nrows * ncols`.
#[track_caller]
#[inline]
pub fn from_row_major_slice_mut(slice: &mut [f64], nrows: usize, ncols: usize) -> MatMut<'_> {
    from_row_major_slice_with_stride_mut(slice, nrows, ncols, ncols)
}

/// Creates a `MatMut` from a mutable slice holding a row-major matrix, with rows starting
/// `row_stride` slots apart.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `row_stride >= ncols`.
/// * `slice` is long enough to hold the last row.
#[track_caller]
#[inline]
pub fn from_row_major_slice_with_stride_mut(
    slice: &mut [f64],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
) -> MatMut<'_> {
    assert_valid_layout(slice.len(), nrows, ncols, row_stride);
    MatMut {
        data: slice,
        nrows,
        ncols,
        row_stride,
    }
}

impl Debug for MatMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.rb().fmt(f)
    }
}
