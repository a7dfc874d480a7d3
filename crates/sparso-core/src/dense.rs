//! Dense tensor implementation with views
//!
//! This module provides the core `DenseND<T>` type for dense N-dimensional
//! tensor storage, plus the occupancy reduction the sparse encoders build on.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.
//! Direct use of `ndarray` is forbidden per the SciRS2 integration policy.

use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};
use scirs2_core::numeric::Num;
use std::fmt;

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// This is the primary dense tensor type in SpaRSo. Tensors use C-contiguous
/// (row-major) memory layout; all indexing is bounds-checked.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Examples
///
/// ```
/// use sparso_core::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing ndarray
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array;
    /// use sparso_core::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(vec![2, 3]);
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Returns
    ///
    /// A tensor with the specified shape, or an error if dimensions don't match
    ///
    /// # Examples
    ///
    /// ```
    /// use sparso_core::DenseND;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a tensor filled with a constant value
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a tensor of zeros with the given shape
    ///
    /// # Examples
    ///
    /// ```
    /// use sparso_core::DenseND;
    ///
    /// let tensor = DenseND::<f32>::zeros(&[3, 4]);
    /// assert_eq!(tensor.len(), 12);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Create a tensor of ones with the given shape
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// Get the rank (number of dimensions) of this tensor
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get the shape of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use sparso_core::DenseND;
    ///
    /// let tensor = DenseND::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.shape(), &[2, 3, 4]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get an immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Get a reference to the element at the specified index without panicking.
    ///
    /// Returns `None` if the index is out of bounds or has incorrect
    /// dimensionality.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparso_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_elem(&[3, 4], 5.0);
    ///
    /// assert_eq!(tensor.get(&[0, 0]), Some(&5.0));
    /// assert_eq!(tensor.get(&[10, 10]), None);
    /// assert_eq!(tensor.get(&[0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }

        for (i, &idx) in index.iter().enumerate() {
            if idx >= self.shape()[i] {
                return None;
            }
        }

        Some(&self.data[IxDyn(index)])
    }

    /// Get a reference to the underlying data as a slice
    ///
    /// The slice is in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparso_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 3]);
    /// assert_eq!(tensor.as_slice().len(), 6);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice().expect("Data should be contiguous")
    }

    /// Test whether any element of this tensor differs from the additive
    /// identity.
    ///
    /// This is the reduction the sparse fiber encoders use to decide whether
    /// a sub-tensor is worth descending into.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparso_core::DenseND;
    ///
    /// let mut data = vec![0.0; 6];
    /// data[4] = 3.0;
    /// let tensor = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert!(tensor.any_nonzero());
    ///
    /// let zeros = DenseND::<f64>::zeros(&[2, 3]);
    /// assert!(!zeros.any_nonzero());
    /// ```
    pub fn any_nonzero(&self) -> bool {
        any_nonzero(&self.view())
    }
}

/// Test whether any element of a view differs from the additive identity.
///
/// Exact comparison against `T::zero()`, not a threshold test: an element
/// counts as present unless it equals zero.
///
/// # Examples
///
/// ```
/// use sparso_core::{any_nonzero, DenseND};
///
/// let tensor = DenseND::from_vec(vec![0.0, 0.0, 1.0, 0.0], &[2, 2]).unwrap();
/// assert!(any_nonzero(&tensor.view()));
/// ```
pub fn any_nonzero<T: Num>(view: &ArrayView<'_, T, IxDyn>) -> bool {
    view.iter().any(|v| !v.is_zero())
}

impl<T> std::ops::Index<&[usize]> for DenseND<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("data", &self.data)
            .finish()
    }
}
