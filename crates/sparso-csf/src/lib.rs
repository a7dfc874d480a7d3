//! # sparso-csf
//!
//! Compressed Sparse Fiber (CSF) encoding for SpaRSo.
//!
//! CSF is a hierarchical sparse tensor format that generalizes CSR/CSC to N
//! dimensions. Each axis is encoded independently as either *dense* (every
//! coordinate present, implicit by fixed stride) or *sparse* (only coordinates
//! leading to non-zero data, via an explicit position/index segment pair).
//!
//! This crate provides:
//! - Per-axis density selection ([`DensityMode`])
//! - The level encoding produced per axis ([`LevelEncoding`])
//! - The encoder itself ([`encode`] / [`encode_with`]) with a configurable
//!   index width
//! - The caller-facing output structure ([`CsfTensor`])
//!
//! # Example
//!
//! The matrix from the TACO paper, with both axes sparse:
//!
//! ```
//! use sparso_core::DenseND;
//! use sparso_csf::{encode, DensityMode};
//!
//! let tensor = DenseND::from_vec(
//!     vec![
//!         6.0, 0.0, 9.0, 8.0, //
//!         0.0, 0.0, 0.0, 0.0, //
//!         5.0, 0.0, 0.0, 7.0,
//!     ],
//!     &[3, 4],
//! )
//! .unwrap();
//!
//! let csf = encode(&tensor, &[DensityMode::Sparse, DensityMode::Sparse]).unwrap();
//!
//! // Rows 0 and 2 are the only non-empty fibers of the outer axis.
//! assert_eq!(csf.position(0), &[0, 2]);
//! assert_eq!(csf.index(0), &[0, 2]);
//! assert_eq!(csf.position(1), &[0, 3, 5]);
//! assert_eq!(csf.index(1), &[0, 2, 3, 0, 3]);
//! assert_eq!(csf.values(), &[6.0, 9.0, 8.0, 5.0, 7.0]);
//! ```

#![deny(warnings)]

pub mod csf;
pub mod encode;
pub mod error;

pub use csf::{CsfTensor, DensityMode, LevelEncoding};
pub use encode::{encode, encode_with, EncodeOptions, IndexWidth};
pub use error::{CsfError, CsfResult};
