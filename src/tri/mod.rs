//! Triangular matrices.
//!
//! A [`TriMat`] stores an `n×n` triangular matrix with an explicitly stored (non-unit) diagonal.
//! Its [`TriState`] records whether it has storage yet, and which half is active.
//!
//! Reading is total: elements strictly on the inactive side of the diagonal read as `0.0`.
//! Writing is partial: [`TriMat::write`] panics for elements on the inactive side, even if they
//! are in range.

use crate::{
    assert, debug_assert,
    mat::{assert_in_bounds, Mat, MatMut, MatRef},
    Side,
};
use core::fmt::Debug;

/// Lifecycle of the storage behind a [`TriMat`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriState {
    /// No storage, dimension `0`.
    Uninitialized,
    /// Zeroed `n×n` storage, no active half yet.
    Empty,
    /// `n×n` storage whose `Side` half holds the matrix.
    Populated(Side),
}

/// Heap allocated triangular matrix.
#[derive(Clone, PartialEq)]
pub struct TriMat {
    inner: Mat,
    state: TriState,
}

impl Default for TriMat {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn is_active(side: Side, row: usize, col: usize) -> bool {
    match side {
        Side::Upper => row <= col,
        Side::Lower => row >= col,
    }
}

impl TriMat {
    /// Returns an uninitialized triangular matrix of dimension `0`.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Mat::new(),
            state: TriState::Uninitialized,
        }
    }

    /// Returns a zeroed `dim×dim` triangular matrix with no active half.
    ///
    /// Such a matrix can be used as the target of a factorization, which picks the half.
    #[inline]
    pub fn with_dim(dim: usize) -> Self {
        Self {
            inner: Mat::zeros(dim, dim),
            state: TriState::Empty,
        }
    }

    /// Returns a zeroed `dim×dim` triangular matrix whose `side` half is active.
    #[inline]
    pub fn zeros(dim: usize, side: Side) -> Self {
        Self {
            inner: Mat::zeros(dim, dim),
            state: TriState::Populated(side),
        }
    }

    /// Returns a new `dim×dim` triangular matrix whose `side` half is active, filled with the
    /// provided function.
    ///
    /// `f` is only called for elements of the active half.
    pub fn from_fn(dim: usize, side: Side, f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut f = f;
        Self {
            inner: Mat::from_fn(dim, dim, |i, j| {
                if is_active(side, i, j) {
                    f(i, j)
                } else {
                    0.0
                }
            }),
            state: TriState::Populated(side),
        }
    }

    /// Returns a new triangular matrix built from the `side` half of `src`, diagonal included.
    ///
    /// The other half of `src` is not accessed.
    ///
    /// # Panics
    /// The function panics if `src` is not square.
    #[track_caller]
    pub fn from_mat(src: MatRef<'_>, side: Side) -> Self {
        assert!(src.nrows() == src.ncols(), "triangular matrix must be square");
        Self::from_fn(src.nrows(), side, |i, j| unsafe { src.read_unchecked(i, j) })
    }

    /// Returns the dimension of the matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.inner.nrows()
    }

    /// Returns the state of the matrix.
    #[inline]
    pub fn state(&self) -> TriState {
        self.state
    }

    /// Returns the active half, or `None` if the matrix is not populated.
    #[inline]
    pub fn side(&self) -> Option<Side> {
        match self.state {
            TriState::Populated(side) => Some(side),
            TriState::Uninitialized | TriState::Empty => None,
        }
    }

    /// Returns the active half.
    ///
    /// # Panics
    /// The function panics if the matrix is not populated.
    #[inline]
    #[track_caller]
    pub fn expect_side(&self) -> Side {
        match self.state {
            TriState::Populated(side) => side,
            TriState::Uninitialized | TriState::Empty => {
                panic!("invalid triangle")
            }
        }
    }

    /// Returns a view over the underlying storage.
    ///
    /// Only the active half of the view is meaningful.
    #[inline]
    pub fn as_storage(&self) -> MatRef<'_> {
        self.inner.as_ref()
    }

    /// Returns a mutable view over the underlying storage.
    ///
    /// Writing to the inactive half through this view breaks the invariants of the matrix.
    #[inline]
    pub(crate) fn as_storage_mut(&mut self) -> MatMut<'_> {
        self.inner.as_mut()
    }

    /// Makes `self` a zeroed `dim×dim` matrix whose `side` half is active.
    ///
    /// An uninitialized matrix is allocated, any other matrix must already have dimension `dim`
    /// and is overwritten in place.
    ///
    /// # Panics
    /// The function panics if `self` is not uninitialized and `self.dim() != dim`.
    #[track_caller]
    pub(crate) fn prepare(&mut self, dim: usize, side: Side) {
        match self.state {
            TriState::Uninitialized => self.inner = Mat::zeros(dim, dim),
            TriState::Empty | TriState::Populated(_) => {
                assert!(
                    self.dim() == dim,
                    "cholesky target has the wrong dimension",
                );
                self.inner.fill(0.0);
            }
        }
        self.state = TriState::Populated(side);
    }

    /// Drops the elements of the matrix and returns it to the uninitialized state.
    #[inline]
    pub fn reset(&mut self) {
        self.inner.clear();
        self.state = TriState::Uninitialized;
    }

    /// Reads the element at `(row, col)`.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    /// * `(row, col)` is in the active half, or the matrix is not populated.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn read_unchecked(&self, row: usize, col: usize) -> f64 {
        debug_assert!(self.side().is_none_or(|side| is_active(side, row, col)));
        self.inner.read_unchecked(row, col)
    }

    /// Reads the element at `(row, col)`, with bound checks.
    ///
    /// Elements strictly on the inactive side of the diagonal are `0.0`. A matrix that is not
    /// populated reads as zero everywhere.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> f64 {
        assert_in_bounds(row, col, self.dim(), self.dim());
        match self.state {
            TriState::Populated(side) if !is_active(side, row, col) => 0.0,
            _ => unsafe { self.inner.read_unchecked(row, col) },
        }
    }

    /// Writes the element at `(row, col)`.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    /// * the matrix is populated and `(row, col)` is in its active half.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn write_unchecked(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(self.side().is_some_and(|side| is_active(side, row, col)));
        self.inner.write_unchecked(row, col, value);
    }

    /// Writes the element at `(row, col)`, with bound checks.
    ///
    /// # Panics
    /// The function panics unless all of the following conditions hold:
    /// * `row < self.dim()`.
    /// * `col < self.dim()`.
    /// * the matrix is populated.
    /// * `(row, col)` is in the active half, diagonal included.
    #[inline(always)]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        assert_in_bounds(row, col, self.dim(), self.dim());
        let side = self.expect_side();
        assert!(
            is_active(side, row, col),
            "triangular write outside the active half",
        );
        unsafe { self.write_unchecked(row, col, value) };
    }

    /// Returns the full dense matrix, with the inactive half filled with zeros.
    pub fn to_dense(&self) -> Mat {
        Mat::from_fn(self.dim(), self.dim(), |i, j| self.read(i, j))
    }
}

impl Debug for TriMat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TriMat")
            .field("state", &self.state)
            .field("data", &self.to_dense())
            .finish()
    }
}
