//! `chol64` is the factorization core of a dense `f64` linear algebra library.
//!
//! It contains:
//! - strided matrix storage ([`Mat`], [`MatRef`], [`MatMut`]) and the vector specialization
//!   [`Col`],
//! - structured views over that storage: [`SymMat`] for symmetric matrices and [`TriMat`] for
//!   triangular ones,
//! - the Cholesky decomposition of symmetric positive definite matrices
//!   ([`linalg::cholesky::llt`]),
//! - triangular solves ([`linalg::triangular_solve`]),
//! - the primitive kernels the above are built on, behind the [`backend::Kernels`] trait.
//!
//! # Example
//! ```
//! use chol64::{
//!     linalg::solvers::{Llt, Solver},
//!     mat, Side, SymMat,
//! };
//!
//! let a = SymMat::from_fn(2, |i, j| [[4.0, 2.0], [2.0, 3.0]][i][j]);
//! let llt = Llt::try_new(&a, Side::Lower).unwrap();
//!
//! let b = mat![[2.0], [1.0]];
//! let x = llt.solve(b.as_ref());
//!
//! assert!((4.0 * x.read(0, 0) + 2.0 * x.read(1, 0) - 2.0).abs() < 1e-12);
//! assert!((2.0 * x.read(0, 0) + 3.0 * x.read(1, 0) - 1.0).abs() < 1e-12);
//! ```

#![allow(clippy::too_many_arguments)]
#![warn(rust_2018_idioms)]

use equator::{assert, debug_assert};

pub mod backend;
pub mod col;
pub mod linalg;
pub mod mat;
pub mod sym;
pub mod tri;

pub use reborrow;

pub use col::Col;
pub use mat::{Mat, MatMut, MatRef};
pub use sym::SymMat;
pub use tri::{TriMat, TriState};

/// Specifies whether the triangular lower or upper part of a matrix should be accessed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Lower half should be accessed.
    Lower,
    /// Upper half should be accessed.
    Upper,
}

/// Whether a matrix should be implicitly transposed when used as an operand or not.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trans {
    /// Do transpose.
    Yes,
    /// Do not transpose.
    No,
}

impl Trans {
    /// Combine `self` and `other` to create a new transposition object.
    #[inline]
    pub fn compose(self, other: Trans) -> Trans {
        if self == other {
            Trans::No
        } else {
            Trans::Yes
        }
    }
}

impl From<bool> for Trans {
    #[inline]
    fn from(trans: bool) -> Self {
        if trans {
            Trans::Yes
        } else {
            Trans::No
        }
    }
}

/// Creates a [`Mat`] containing the arguments, given row by row.
///
/// ```
/// use chol64::mat;
///
/// let matrix = mat![
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ];
///
/// assert_eq!(matrix.nrows(), 2);
/// assert_eq!(matrix.ncols(), 3);
/// assert_eq!(matrix.read(0, 2), 3.0);
/// assert_eq!(matrix.read(1, 0), 4.0);
/// ```
#[macro_export]
macro_rules! mat {
    () => {
        {
            compile_error!("number of columns in the matrix is ambiguous");
        }
    };

    ($([$($v:expr),* $(,)?] ),* $(,)?) => {
        {
            let rows: &[&[f64]] = &[$(&[$(($v) as f64),*]),*];
            let nrows = rows.len();
            let ncols = rows[0].len();
            $crate::mat::Mat::from_fn(nrows, ncols, |i, j| rows[i][j])
        }
    };
}

#[cfg(feature = "perf-warn")]
#[macro_export]
#[doc(hidden)]
macro_rules! __perf_warn {
    ($name: ident) => {{
        #[inline(always)]
        #[allow(non_snake_case)]
        fn $name() -> &'static ::core::sync::atomic::AtomicBool {
            static $name: ::core::sync::atomic::AtomicBool =
                ::core::sync::atomic::AtomicBool::new(false);
            &$name
        }
        ::core::matches!(
            $name().compare_exchange(
                false,
                true,
                ::core::sync::atomic::Ordering::Relaxed,
                ::core::sync::atomic::Ordering::Relaxed,
            ),
            Ok(_)
        )
    }};
}
