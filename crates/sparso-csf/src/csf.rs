//! CSF (Compressed Sparse Fiber) format types
//!
//! # Overview
//!
//! CSF stores an N-dimensional tensor as a tree of fibers, one tree level per
//! axis, outermost axis first. Each level is encoded according to its
//! [`DensityMode`]:
//!
//! - **Dense**: every coordinate `0..extent` is present implicitly; the level
//!   carries only the fixed stride (`position = [extent]`, no index array).
//! - **Sparse**: only coordinates whose subtree contains non-zero data are
//!   present, recorded explicitly in a CSR-style position/index segment pair.
//!
//! # Structure
//!
//! For the matrix `[[6,0,9,8],[0,0,0,0],[5,0,0,7]]` with both axes sparse:
//!
//! - Level 0 (rows): `position = [0, 2]`, `index = [0, 2]`
//!   (rows 0 and 2 are the only non-empty fibers under the root)
//! - Level 1 (columns, leaf): `position = [0, 3, 5]`, `index = [0, 2, 3, 0, 3]`
//! - `values = [6, 9, 8, 5, 7]`
//!
//! Within each `position` segment the `index` entries are strictly
//! increasing, and `position` itself is non-decreasing with one boundary
//! appended per parent fiber.

use scirs2_core::numeric::Float;
use sparso_core::DenseND;

use crate::encode::encode;
use crate::error::CsfResult;

/// Per-axis storage mode
///
/// A closed two-case choice: the mode set is fixed, so the encoder branches
/// on it once per recursive call rather than dispatching through a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityMode {
    /// Every coordinate is stored implicitly; zeros are kept.
    Dense,
    /// Only coordinates leading to non-zero data are stored explicitly.
    Sparse,
}

/// The encoding of one tensor axis
///
/// - `position`: non-decreasing prefix-sum segment boundaries. For a sparse
///   axis it grows by one entry per parent fiber visited; for a dense axis it
///   is pinned to `[extent]` and never grows.
/// - `index`: the coordinates actually present, strictly increasing within
///   each segment. Empty and unused for dense axes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelEncoding {
    pub position: Vec<usize>,
    pub index: Vec<usize>,
}

impl LevelEncoding {
    /// Empty descriptor for one axis, per its density mode.
    ///
    /// Sparse axes start with the single root boundary `[0]`; dense axes are
    /// fully described up front by their fixed stride `[extent]`.
    pub(crate) fn empty(mode: DensityMode, extent: usize) -> Self {
        match mode {
            DensityMode::Sparse => Self {
                position: vec![0],
                index: Vec::new(),
            },
            DensityMode::Dense => Self {
                position: vec![extent],
                index: Vec::new(),
            },
        }
    }

    /// Number of parent segments delimited by `position`.
    ///
    /// Zero for dense levels, where presence is implicit.
    pub fn segments(&self) -> usize {
        self.position.len().saturating_sub(1)
    }
}

/// CSF (Compressed Sparse Fiber) tensor
///
/// The output of [`encode`]: one [`LevelEncoding`] per axis in the caller's
/// axis order (outermost first) plus the flat, depth-first-ordered leaf
/// values. Immutable once constructed.
///
/// # Type Parameters
///
/// - `T`: Element type (must implement `Float` from scirs2_core)
///
/// # Examples
///
/// ```
/// use sparso_core::DenseND;
/// use sparso_csf::{CsfTensor, DensityMode};
///
/// let tensor = DenseND::from_vec(vec![0.0, 3.0, 0.0, 0.0], &[2, 2]).unwrap();
/// let csf = CsfTensor::from_dense(&tensor, &[DensityMode::Sparse, DensityMode::Sparse]).unwrap();
///
/// assert_eq!(csf.shape(), &[2, 2]);
/// assert_eq!(csf.nnz(), 1);
/// assert_eq!(csf.values(), &[3.0]);
/// ```
#[derive(Debug, Clone)]
pub struct CsfTensor<T> {
    /// Shape of the source tensor
    shape: Vec<usize>,
    /// Density mode per axis, matching the caller's axis order
    modes: Vec<DensityMode>,
    /// Level encodings, outermost axis first
    levels: Vec<LevelEncoding>,
    /// Stored leaf values in depth-first traversal order
    values: Vec<T>,
}

impl<T: Float> CsfTensor<T> {
    pub(crate) fn new(
        shape: Vec<usize>,
        modes: Vec<DensityMode>,
        levels: Vec<LevelEncoding>,
        values: Vec<T>,
    ) -> Self {
        Self {
            shape,
            modes,
            levels,
            values,
        }
    }

    /// Encodes a dense tensor with the given per-axis density modes.
    ///
    /// Convenience constructor delegating to [`encode`] with the default
    /// 32-bit index width.
    pub fn from_dense(tensor: &DenseND<T>, modes: &[DensityMode]) -> CsfResult<Self> {
        encode(tensor, modes)
    }

    /// Returns the shape of the source tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the density mode of each axis.
    #[inline]
    pub fn modes(&self) -> &[DensityMode] {
        &self.modes
    }

    /// Returns all level encodings, outermost axis first.
    #[inline]
    pub fn levels(&self) -> &[LevelEncoding] {
        &self.levels
    }

    /// Returns the level encoding for the specified axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= rank`.
    #[inline]
    pub fn level(&self, axis: usize) -> &LevelEncoding {
        &self.levels[axis]
    }

    /// Returns the position array for the specified axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= rank`.
    #[inline]
    pub fn position(&self, axis: usize) -> &[usize] {
        &self.levels[axis].position
    }

    /// Returns the index array for the specified axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= rank`.
    #[inline]
    pub fn index(&self, axis: usize) -> &[usize] {
        &self.levels[axis].index
    }

    /// Returns the stored leaf values in depth-first traversal order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the number of stored leaf values.
    ///
    /// When the innermost axis is `Sparse` this is exactly the count of
    /// non-zero scalars; a `Dense` innermost axis stores zeros too.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the stored fraction (stored leaf values / total elements).
    pub fn density(&self) -> f64 {
        let total: usize = self.shape.iter().product();
        if total == 0 {
            return 0.0;
        }
        self.values.len() as f64 / total as f64
    }
}
