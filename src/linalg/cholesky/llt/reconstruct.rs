use crate::{
    backend::{Kernels, Native},
    Mat, Side, TriMat,
};

/// Computes the matrix $A$ from its Cholesky factor, and stores the result in `dst`.
///
/// The result is $LL^\top$ for a lower factor $L$, and $U^\top U$ for an upper factor $U$. Both
/// halves of `dst` are filled.
///
/// `dst` is allocated if it is empty, and must otherwise be `factor.dim()×factor.dim()`.
///
/// # Panics
/// Panics if any of the following conditions are violated:
/// * `factor` is populated.
/// * `dst` is empty, or has dimensions `(factor.dim(), factor.dim())`.
#[track_caller]
pub fn reconstruct(dst: &mut Mat, factor: &TriMat) {
    reconstruct_with_kernels(&Native, dst, factor)
}

/// Same as [`reconstruct`], with the primitive operations going through `kernels`.
#[track_caller]
pub fn reconstruct_with_kernels(kernels: &impl Kernels, dst: &mut Mat, factor: &TriMat) {
    let side = factor.expect_side();
    let n = factor.dim();
    dst.reuse_as(n, n);

    let f = factor.as_storage();
    let data = f.as_slice();
    let row_stride = f.row_stride();

    for i in 0..n {
        for j in i..n {
            // only the first i + 1 entries of row/column i are nonzero
            let value = match side {
                Side::Lower => kernels.dot(i + 1, data, i * row_stride, 1, data, j * row_stride, 1),
                Side::Upper => kernels.dot(i + 1, data, i, row_stride, data, j, row_stride),
            };
            unsafe {
                dst.write_unchecked(i, j, value);
                dst.write_unchecked(j, i, value);
            }
        }
    }
}
