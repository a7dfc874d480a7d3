//! CSF encoder: depth-first fiber compression of dense tensors
//!
//! The encoder walks the input tensor once, outermost axis first, building
//! one [`LevelEncoding`] per axis plus the flat leaf value buffer. At each
//! sparse level it only descends into sub-tensors that contain non-zero data,
//! so all-zero fibers contribute nothing to the output — that pruning is what
//! makes the encoding compressed rather than relabeled.
//!
//! Construction is a single synchronous call tree with no I/O and no shared
//! state; recursion depth equals the tensor rank.
//!
//! # Complexity
//!
//! - **Time**: O(total elements) per sparse level for the occupancy tests,
//!   O(total elements) for the leaf sweep
//! - **Memory**: O(number of fibers per level) + O(stored leaf values)

use scirs2_core::ndarray_ext::{ArrayView, Axis, IxDyn};
use scirs2_core::numeric::Float;
use sparso_core::{any_nonzero, DenseND};

use crate::csf::{CsfTensor, DensityMode, LevelEncoding};
use crate::error::{CsfError, CsfResult};

/// Integer width used to address `position` and `index` entries
///
/// Entries are held as `usize` in memory; the configured width bounds the
/// values they may take and is enforced before traversal begins. 32-bit
/// addressing is sufficient for all realistic tensor sizes and matches the
/// format's on-disk convention; 64-bit is an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexWidth {
    /// 32-bit entries (the default)
    #[default]
    U32,
    /// 64-bit entries
    U64,
}

impl IndexWidth {
    /// Width in bits, for diagnostics.
    pub fn bits(self) -> u8 {
        match self {
            IndexWidth::U32 => 32,
            IndexWidth::U64 => 64,
        }
    }

    /// Largest value an entry of this width can hold.
    fn limit(self) -> u128 {
        match self {
            IndexWidth::U32 => u32::MAX as u128,
            IndexWidth::U64 => u64::MAX as u128,
        }
    }
}

/// Options for [`encode_with`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Addressing width for `position`/`index` entries
    pub index_width: IndexWidth,
}

/// Encodes a dense tensor into CSF form with the default options.
///
/// One density mode per axis, in the tensor's axis order (outermost first).
/// See [`encode_with`] for the full contract.
///
/// # Examples
///
/// ```
/// use sparso_core::DenseND;
/// use sparso_csf::{encode, DensityMode};
///
/// let tensor = DenseND::from_vec(vec![0.0, 5.0, 0.0, 0.0], &[2, 2]).unwrap();
/// let csf = encode(&tensor, &[DensityMode::Sparse, DensityMode::Sparse]).unwrap();
/// assert_eq!(csf.values(), &[5.0]);
/// ```
pub fn encode<T: Float>(tensor: &DenseND<T>, modes: &[DensityMode]) -> CsfResult<CsfTensor<T>> {
    encode_with(tensor, modes, EncodeOptions::default())
}

/// Encodes a dense tensor into CSF form.
///
/// The tensor is read through a view and never mutated; the returned
/// [`CsfTensor`] is owned exclusively by the caller.
///
/// All precondition checks run before traversal begins: on error nothing is
/// constructed and no partial state is observable.
///
/// # Errors
///
/// - [`CsfError::EmptyShape`] for rank-0 tensors
/// - [`CsfError::ShapeMismatch`] if `modes.len() != tensor.rank()`
/// - [`CsfError::InvalidExtent`] if any axis has extent 0
/// - [`CsfError::NumericOverflow`] if the element count exceeds what the
///   configured [`IndexWidth`] can address
///
/// # Examples
///
/// ```
/// use sparso_core::DenseND;
/// use sparso_csf::{encode_with, DensityMode, EncodeOptions, IndexWidth};
///
/// let tensor = DenseND::<f64>::ones(&[2, 3]);
/// let options = EncodeOptions { index_width: IndexWidth::U64 };
/// let csf = encode_with(&tensor, &[DensityMode::Dense, DensityMode::Sparse], options).unwrap();
/// assert_eq!(csf.nnz(), 6);
/// ```
pub fn encode_with<T: Float>(
    tensor: &DenseND<T>,
    modes: &[DensityMode],
    options: EncodeOptions,
) -> CsfResult<CsfTensor<T>> {
    validate(tensor.shape(), modes, options.index_width)?;

    let mut builder = CsfBuilder::new(tensor.shape(), modes);
    builder.encode_fiber(&tensor.view(), 0);
    Ok(builder.finish(tensor.shape().to_vec(), modes.to_vec()))
}

/// Precondition checks, run once before traversal.
fn validate(shape: &[usize], modes: &[DensityMode], width: IndexWidth) -> CsfResult<()> {
    if shape.is_empty() {
        return Err(CsfError::EmptyShape);
    }
    if modes.len() != shape.len() {
        return Err(CsfError::ShapeMismatch {
            rank: shape.len(),
            modes: modes.len(),
        });
    }
    for (axis, &extent) in shape.iter().enumerate() {
        if extent == 0 {
            return Err(CsfError::InvalidExtent { axis });
        }
    }

    // The largest position entry is bounded by the element count, and every
    // index entry is bounded by its axis extent, which the element count
    // dominates once all extents are non-zero.
    let elements: u128 = shape.iter().map(|&e| e as u128).product();
    if elements > width.limit() {
        return Err(CsfError::NumericOverflow {
            elements,
            width: width.bits(),
        });
    }

    Ok(())
}

/// Mutable accumulation state threaded through the recursive walk.
///
/// A single builder is passed by reference into every call rather than
/// merging partial structures on the way back up; each call appends exactly
/// one `position` boundary at its own sparse level.
struct CsfBuilder<'a, T> {
    extents: &'a [usize],
    modes: &'a [DensityMode],
    levels: Vec<LevelEncoding>,
    values: Vec<T>,
}

impl<'a, T: Float> CsfBuilder<'a, T> {
    /// Level-descriptor setup: one empty buffer per axis, per its mode.
    fn new(extents: &'a [usize], modes: &'a [DensityMode]) -> Self {
        let levels = extents
            .iter()
            .zip(modes)
            .map(|(&extent, &mode)| LevelEncoding::empty(mode, extent))
            .collect();

        Self {
            extents,
            modes,
            levels,
            values: Vec::new(),
        }
    }

    /// Encodes one fiber: the sub-tensor reached by the coordinates fixed so
    /// far, with `level` naming the axis its leading dimension belongs to.
    fn encode_fiber(&mut self, fiber: &ArrayView<'_, T, IxDyn>, level: usize) {
        let extent = self.extents[level];

        if level + 1 < self.extents.len() {
            match self.modes[level] {
                DensityMode::Dense => {
                    for c in 0..extent {
                        let child = fiber.index_axis(Axis(0), c);
                        self.encode_fiber(&child, level + 1);
                    }
                }
                DensityMode::Sparse => {
                    let mut nonempty = 0;
                    for c in 0..extent {
                        let child = fiber.index_axis(Axis(0), c);
                        if any_nonzero(&child) {
                            self.levels[level].index.push(c);
                            nonempty += 1;
                            self.encode_fiber(&child, level + 1);
                        }
                    }
                    self.push_boundary(level, nonempty);
                }
            }
        } else {
            // Leaf axis: scalars land in the value buffer, no further calls.
            match self.modes[level] {
                DensityMode::Dense => {
                    for c in 0..extent {
                        self.values.push(fiber[[c]]);
                    }
                }
                DensityMode::Sparse => {
                    let mut nonempty = 0;
                    for c in 0..extent {
                        let value = fiber[[c]];
                        if !value.is_zero() {
                            self.levels[level].index.push(c);
                            self.values.push(value);
                            nonempty += 1;
                        }
                    }
                    self.push_boundary(level, nonempty);
                }
            }
        }
    }

    /// Appends this call's segment boundary: previous tail plus the number of
    /// non-empty children found under the current parent fiber.
    fn push_boundary(&mut self, level: usize, nonempty: usize) {
        let position = &mut self.levels[level].position;
        let tail = *position.last().unwrap();
        position.push(tail + nonempty);
    }

    /// Output assembly. The walk runs in caller axis order, so the levels are
    /// already outermost-first and packaging is a pure move.
    fn finish(self, shape: Vec<usize>, modes: Vec<DensityMode>) -> CsfTensor<T> {
        CsfTensor::new(shape, modes, self.levels, self.values)
    }
}
