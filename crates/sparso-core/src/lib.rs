//! # sparso-core
//!
//! Dense N-dimensional tensor storage for the SpaRSo stack.
//!
//! This crate provides the dense side of the sparse-encoding pipeline:
//!
//! - **Dense tensor representation** ([`DenseND`]) with row-major layout and views
//! - **Element access** with bounds checking (no unsafe code)
//! - **Occupancy reduction** ([`any_nonzero`]) used by the fiber encoders in
//!   `sparso-csf` to decide whether a sub-tensor is worth descending into
//!
//! ## SciRS2 Integration
//!
//! All array operations use `scirs2-core`. Direct use of `ndarray` or
//! `num-traits` is forbidden per the SciRS2 integration policy.
//!
//! ## Quick Start
//!
//! ```
//! use sparso_core::DenseND;
//!
//! let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//! assert_eq!(tensor.rank(), 3);
//! assert!(!tensor.any_nonzero());
//!
//! let data = vec![0.0, 1.0, 0.0, 2.0];
//! let tensor = DenseND::from_vec(data, &[2, 2]).unwrap();
//! assert!(tensor.any_nonzero());
//! ```

#![deny(warnings)]

pub mod dense;


pub use dense::{any_nonzero, DenseND};
