//! Property-based tests for CSF encoding
//!
//! These tests use proptest to verify the structural invariants of the CSF
//! format and correctness of the encoding against a dense baseline, across
//! random shapes, contents, and per-axis density modes.

use proptest::prelude::*;
use sparso_core::DenseND;
use sparso_csf::{encode, CsfTensor, DensityMode};

// ============================================================================
// Test Utilities
// ============================================================================

// Type alias for the generated tensor strategy to reduce signature noise
type TensorData = (Vec<usize>, Vec<f64>, Vec<DensityMode>);

fn mode_strategy() -> impl Strategy<Value = DensityMode> {
    prop_oneof![Just(DensityMode::Dense), Just(DensityMode::Sparse)]
}

/// Generate a random shape (1-4D), matching row-major data biased toward
/// zeros, and one density mode per axis.
fn tensor_strategy() -> impl Strategy<Value = TensorData> {
    prop::collection::vec(1usize..6, 1..=4).prop_flat_map(|shape| {
        let total: usize = shape.iter().product();
        let rank = shape.len();
        let element = prop_oneof![3 => Just(0.0), 1 => -100.0..100.0f64];
        (
            Just(shape),
            prop::collection::vec(element, total..=total),
            prop::collection::vec(mode_strategy(), rank..=rank),
        )
    })
}

/// Number of encoder calls that reached each level, reconstructed from the
/// encoding itself: the root is one call, a dense level fans out by its
/// extent, and a sparse level fans out by its recorded index entries.
fn calls_per_level(csf: &CsfTensor<f64>) -> Vec<usize> {
    let mut calls = vec![0usize; csf.rank()];
    calls[0] = 1;
    for level in 1..csf.rank() {
        calls[level] = match csf.modes()[level - 1] {
            DensityMode::Dense => calls[level - 1] * csf.shape()[level - 1],
            DensityMode::Sparse => csf.index(level - 1).len(),
        };
    }
    calls
}

/// Reconstruct the dense tensor a CSF encoding describes.
///
/// Decoding is deliberately not part of the library surface; this baseline
/// walker exists only to check that encoding preserves the non-zero pattern
/// exactly, with zeros reappearing at skipped or dense-but-present positions.
fn densify(csf: &CsfTensor<f64>) -> DenseND<f64> {
    let shape = csf.shape().to_vec();
    let total: usize = shape.iter().product();

    let mut strides = vec![1usize; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }

    let mut out = vec![0.0; total];
    let mut cursor = 0usize;
    walk(csf, 0, 0, 0, &strides, &mut out, &mut cursor);
    assert_eq!(cursor, csf.values().len(), "every stored value is consumed");

    DenseND::from_vec(out, &shape).unwrap()
}

fn walk(
    csf: &CsfTensor<f64>,
    level: usize,
    fiber: usize,
    offset: usize,
    strides: &[usize],
    out: &mut [f64],
    cursor: &mut usize,
) {
    let leaf = level + 1 == csf.rank();

    let emit = |c: usize, child_fiber: usize, out: &mut [f64], cursor: &mut usize| {
        let child_offset = offset + c * strides[level];
        if leaf {
            out[child_offset] = csf.values()[*cursor];
            *cursor += 1;
        } else {
            walk(csf, level + 1, child_fiber, child_offset, strides, out, cursor);
        }
    };

    match csf.modes()[level] {
        DensityMode::Dense => {
            let extent = csf.shape()[level];
            for c in 0..extent {
                emit(c, fiber * extent + c, out, cursor);
            }
        }
        DensityMode::Sparse => {
            let start = csf.position(level)[fiber];
            let end = csf.position(level)[fiber + 1];
            for k in start..end {
                emit(csf.index(level)[k], k, out, cursor);
            }
        }
    }
}

// ============================================================================
// Structural Invariants
// ============================================================================

proptest! {
    /// Property: position arrays are non-decreasing at every level.
    #[test]
    fn prop_position_monotone((shape, data, modes) in tensor_strategy()) {
        let tensor = DenseND::from_vec(data, &shape).unwrap();
        let csf = encode(&tensor, &modes).unwrap();

        for level in 0..csf.rank() {
            for pair in csf.position(level).windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
    }

    /// Property: dense levels keep their fixed stride and carry no index,
    /// regardless of data content.
    #[test]
    fn prop_dense_shape_conservation((shape, data, modes) in tensor_strategy()) {
        let tensor = DenseND::from_vec(data, &shape).unwrap();
        let csf = encode(&tensor, &modes).unwrap();

        for level in 0..csf.rank() {
            if modes[level] == DensityMode::Dense {
                prop_assert_eq!(csf.position(level), &[shape[level]]);
                prop_assert!(csf.index(level).is_empty());
            }
        }
    }

    /// Property: within every segment, index entries are strictly increasing
    /// and below the axis extent.
    #[test]
    fn prop_index_ordered_within_segments((shape, data, modes) in tensor_strategy()) {
        let tensor = DenseND::from_vec(data, &shape).unwrap();
        let csf = encode(&tensor, &modes).unwrap();

        for level in 0..csf.rank() {
            if modes[level] != DensityMode::Sparse {
                continue;
            }
            let position = csf.position(level);
            let index = csf.index(level);
            for segment in position.windows(2) {
                let entries = &index[segment[0]..segment[1]];
                for pair in entries.windows(2) {
                    prop_assert!(pair[0] < pair[1]);
                }
                for &entry in entries {
                    prop_assert!(entry < shape[level]);
                }
            }
        }
    }

    /// Property: a sparse level records one boundary per call reaching it,
    /// and its position tail accounts for every index entry.
    #[test]
    fn prop_segment_count_invariant((shape, data, modes) in tensor_strategy()) {
        let tensor = DenseND::from_vec(data, &shape).unwrap();
        let csf = encode(&tensor, &modes).unwrap();
        let calls = calls_per_level(&csf);

        for level in 0..csf.rank() {
            if modes[level] != DensityMode::Sparse {
                continue;
            }
            prop_assert_eq!(csf.position(level).len() - 1, calls[level]);
            prop_assert_eq!(
                *csf.position(level).last().unwrap(),
                csf.index(level).len()
            );
        }
    }

    /// Property: the stored value count matches the innermost axis's mode —
    /// the exact non-zero count for a sparse leaf, one full stride per leaf
    /// call for a dense leaf.
    #[test]
    fn prop_value_count_match((shape, data, modes) in tensor_strategy()) {
        let tensor = DenseND::from_vec(data.clone(), &shape).unwrap();
        let csf = encode(&tensor, &modes).unwrap();
        let calls = calls_per_level(&csf);

        match modes[csf.rank() - 1] {
            DensityMode::Sparse => {
                let nonzeros = data.iter().filter(|&&v| v != 0.0).count();
                prop_assert_eq!(csf.nnz(), nonzeros);
            }
            DensityMode::Dense => {
                prop_assert_eq!(csf.nnz(), calls[csf.rank() - 1] * shape[csf.rank() - 1]);
            }
        }
    }
}

// ============================================================================
// Dense Baseline Comparison
// ============================================================================

proptest! {
    /// Property: re-densifying an encoding reproduces the input exactly.
    /// Values pass through verbatim, so equality is exact, not approximate.
    #[test]
    fn prop_densify_roundtrip((shape, data, modes) in tensor_strategy()) {
        let tensor = DenseND::from_vec(data.clone(), &shape).unwrap();
        let csf = encode(&tensor, &modes).unwrap();
        let restored = densify(&csf);

        prop_assert_eq!(restored.shape(), tensor.shape());
        prop_assert_eq!(restored.as_slice(), tensor.as_slice());
    }

    /// Property: an all-dense encoding is the row-major flattening.
    #[test]
    fn prop_all_dense_is_flattening((shape, data, _) in tensor_strategy()) {
        let tensor = DenseND::from_vec(data.clone(), &shape).unwrap();
        let modes = vec![DensityMode::Dense; shape.len()];
        let csf = encode(&tensor, &modes).unwrap();

        prop_assert_eq!(csf.values(), data.as_slice());
    }
}
