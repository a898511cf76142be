use super::{assert_in_bounds, min_len, MatMut, MatRef};
use crate::assert;
use core::fmt::Debug;

/// Heap allocated matrix, stored in row-major order.
///
/// # Note
///
/// The row stride of a `Mat` is at least its number of columns. Matrices created with
/// [`Mat::with_row_stride`] may have padding slots at the end of each row, which are never read.
#[derive(Clone)]
pub struct Mat {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
    row_stride: usize,
}

impl Default for Mat {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Mat {
    /// Returns an empty matrix of dimension `0×0`.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols: 0,
            row_stride: 0,
        }
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with the provided function.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> f64) -> Self {
        Self::from_fn_with_row_stride(nrows, ncols, ncols, f)
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with zeros.
    #[inline]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| 0.0)
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with zeros, except the main
    /// diagonal which is filled with ones.
    #[inline]
    #[doc(alias = "eye")]
    pub fn identity(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Returns a new zeroed matrix with dimensions `(nrows, ncols)`, whose rows start `row_stride`
    /// slots apart.
    ///
    /// # Panics
    /// The function panics if `row_stride < ncols`.
    #[track_caller]
    pub fn with_row_stride(nrows: usize, ncols: usize, row_stride: usize) -> Self {
        Self::from_fn_with_row_stride(nrows, ncols, row_stride, |_, _| 0.0)
    }

    #[track_caller]
    fn from_fn_with_row_stride(
        nrows: usize,
        ncols: usize,
        row_stride: usize,
        f: impl FnMut(usize, usize) -> f64,
    ) -> Self {
        assert!(
            row_stride >= ncols,
            "row stride must be at least the number of columns",
        );
        let mut f = f;
        let mut data = vec![0.0; min_len(nrows, ncols, row_stride)];
        for i in 0..nrows {
            for j in 0..ncols {
                data[i * row_stride + j] = f(i, j);
            }
        }
        Self {
            data,
            nrows,
            ncols,
            row_stride,
        }
    }

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

    /// Returns `true` if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    /// Returns a view over the matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        MatRef {
            data: &self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
        }
    }

    /// Returns a mutable view over the matrix.
    #[inline]
    pub fn as_mut(&mut self) -> MatMut<'_> {
        MatMut {
            data: &mut self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
        }
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
        self.as_ref().read_unchecked(row, col)
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

    /// Writes the value to the element at the given indices.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn write_unchecked(&mut self, row: usize, col: usize, value: f64) {
        self.as_mut().write_unchecked(row, col, value);
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

    /// Makes `self` a zeroed `nrows×ncols` matrix if it is empty, and otherwise checks that it
    /// already has these dimensions, leaving its contents untouched.
    ///
    /// # Panics
    /// The function panics if `self` is not empty and its dimensions differ from
    /// `(nrows, ncols)`.
    #[track_caller]
    pub fn reuse_as(&mut self, nrows: usize, ncols: usize) {
        if self.is_empty() {
            *self = Self::zeros(nrows, ncols);
        } else {
            assert!(
                all(self.nrows == nrows, self.ncols == ncols),
                "dimension mismatch",
            );
        }
    }

    /// Copies the values from `other` into `self`, allocating `self` first if it is empty.
    ///
    /// # Panics
    /// The function panics if `self` is not empty and its dimensions differ from `other`'s.
    #[track_caller]
    pub fn copy_from(&mut self, other: MatRef<'_>) {
        self.reuse_as(other.nrows(), other.ncols());
        self.as_mut().copy_from(other);
    }

    /// Fills the elements of `self` with `constant`.
    #[inline]
    pub fn fill(&mut self, constant: f64) {
        self.as_mut().fill(constant);
    }

    /// Drops the elements of the matrix and sets its dimensions to `0×0`.
    ///
    /// The allocation is kept for later reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
        self.nrows = 0;
        self.ncols = 0;
        self.row_stride = 0;
    }
}

impl PartialEq for Mat {
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows
            && self.ncols == other.ncols
            && (0..self.nrows).all(|i| self.as_ref().row(i) == other.as_ref().row(i))
    }
}

impl Debug for Mat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_ref().fmt(f)
    }
}
