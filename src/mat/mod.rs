//! Strided dense storage.
//!
//! All matrices in this crate are stored in row-major order in a flat buffer. Consecutive rows
//! start `row_stride` slots apart, with `row_stride >= ncols`, so the element at `(row, col)` lives
//! at offset `row * row_stride + col`. Padding slots between the end of a row and the start of the
//! next one are never read or written.
//!
//! Let us consider a 3×2 matrix with a row stride of 3
//!
//! ```notcode
//!  0 │ 1
//! ───┼───
//!  2 │ 3
//! ───┼───
//!  4 │ 5
//! ```
//! The memory representation of the data held by such a matrix looks like the following:
//!
//! ```notcode
//! 0 1 X 2 3 X 4 5
//! ```
//!
//! where X represents padding elements.

use crate::assert;

mod matmut;
mod matown;
mod matref;

pub use matmut::{from_row_major_slice_mut, from_row_major_slice_with_stride_mut, MatMut};
pub use matown::Mat;
pub use matref::{from_row_major_slice, from_row_major_slice_with_stride, MatRef};

/// Minimum buffer length holding a `nrows×ncols` matrix with the given row stride.
#[inline]
pub(crate) fn min_len(nrows: usize, ncols: usize, row_stride: usize) -> usize {
    if nrows == 0 || ncols == 0 {
        0
    } else {
        (nrows - 1) * row_stride + ncols
    }
}

#[track_caller]
#[inline]
pub(crate) fn assert_valid_layout(len: usize, nrows: usize, ncols: usize, row_stride: usize) {
    assert!(row_stride >= ncols, "row stride must be at least the number of columns");
    assert!(
        len >= min_len(nrows, ncols, row_stride),
        "buffer is too small for the requested dimensions",
    );
}

#[track_caller]
#[inline(always)]
pub(crate) fn assert_in_bounds(row: usize, col: usize, nrows: usize, ncols: usize) {
    assert!(row < nrows, "row index out of bounds");
    assert!(col < ncols, "column index out of bounds");
}
