//! # Linear algebra primitives
//!
//! Sparse data is stored as a collection of (index, value) tuples.

/// An index with a value, one element of a sparse row or column.
pub type SparseTuple<F> = (usize, F);
