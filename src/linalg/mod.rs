//! Linear algebra module.
//!
//! Contains the low level routines, which write their output into a caller provided destination,
//! and the [`solvers`] module, which wraps them into an owned decomposition object.
//!
//! # Kernels
//! Every low level routine has a `_with_kernels` variant taking a [`Kernels`](crate::backend::Kernels)
//! implementation, through which all the floating point work is done. The variants without the
//! suffix use [`Native`](crate::backend::Native).

pub mod cholesky;
pub mod solvers;
pub mod triangular_solve;
