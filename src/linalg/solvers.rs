use crate::{
    linalg::cholesky::llt::{compute, inverse, reconstruct, solve},
    Mat, MatMut, MatRef, Side, SymMat, TriMat,
};

pub use crate::linalg::cholesky::llt::CholeskyError;

/// Object-safe interface of a decomposition that can solve linear systems.
pub trait Solver {
    /// Solves the equation `self * X = rhs`, and stores the result in `rhs`.
    fn solve_in_place(&self, rhs: MatMut<'_>);
    /// Solves the equation `self * X = rhs`, and returns the result.
    fn solve(&self, rhs: MatRef<'_>) -> Mat;
    /// Reconstructs the original matrix using the decomposition.
    fn reconstruct(&self) -> Mat;
    /// Computes the inverse of the original matrix using the decomposition.
    fn inverse(&self) -> Mat;
}

const _: () = {
    fn __assert_object_safe() {
        let _: Option<&dyn Solver> = None;
    }
};

/// Cholesky decomposition.
#[derive(Clone, Debug)]
pub struct Llt {
    factor: TriMat,
}

impl Llt {
    /// Returns the Cholesky factorization of the input matrix, or an error if the matrix is not
    /// positive definite.
    ///
    /// The factorization is such that $A = LL^\top$ if `side` is [`Side::Lower`], and
    /// $A = U^\top U$ if it is [`Side::Upper`].
    #[track_caller]
    pub fn try_new(matrix: &SymMat, side: Side) -> Result<Self, CholeskyError> {
        let mut factor = TriMat::new();
        compute::cholesky_into(&mut factor, matrix, side)?;
        Ok(Self { factor })
    }

    /// Returns the dimension of the decomposed matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.factor.dim()
    }

    /// Returns the triangular factor.
    #[inline]
    pub fn factor(&self) -> &TriMat {
        &self.factor
    }

    /// Consumes the decomposition and returns its triangular factor.
    #[inline]
    pub fn into_factor(self) -> TriMat {
        self.factor
    }

    /// Returns the determinant of the decomposed matrix.
    pub fn det(&self) -> f64 {
        inverse::det(&self.factor)
    }

    /// Returns the natural logarithm of the determinant of the decomposed matrix.
    pub fn log_det(&self) -> f64 {
        inverse::log_det(&self.factor)
    }
}

impl Solver for Llt {
    #[track_caller]
    fn solve_in_place(&self, rhs: MatMut<'_>) {
        solve::solve_in_place(&self.factor, rhs);
    }

    #[track_caller]
    fn solve(&self, rhs: MatRef<'_>) -> Mat {
        let mut dst = Mat::new();
        solve::solve(&mut dst, &self.factor, rhs);
        dst
    }

    fn reconstruct(&self) -> Mat {
        let mut dst = Mat::new();
        reconstruct::reconstruct(&mut dst, &self.factor);
        dst
    }

    fn inverse(&self) -> Mat {
        let mut dst = Mat::new();
        inverse::invert(&mut dst, &self.factor);
        dst
    }
}
