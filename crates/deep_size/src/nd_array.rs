//! Rectangular arrays of any rank.
//!
//! Rust has no built-in multi-dimensional array; nested vectors are jagged
//! rank-1 arrays of references. `NdArray` stores one row-major buffer with
//! its dimensions, and is measured with an `8 * rank` header like any other
//! array.

use crate::error::SizeError;
use crate::shape::{DeepSize, Referent, Sequence, Shape, SlotKind};
use crate::visited::Identity;

/// Dimensions that cannot describe the supplied elements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("dimensions {dims:?} hold {expected} elements, got {actual}")]
    LengthMismatch {
        dims: Vec<usize>,
        expected: usize,
        actual: usize,
    },
    #[error("dimensions {dims:?} overflow usize")]
    TooLarge { dims: Vec<usize> },
}

/// Row-major rectangular array.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T> {
    dims: Vec<usize>,
    data: Vec<T>,
}

impl<T> NdArray<T> {
    /// Wrap `data` with the given dimensions.
    pub fn from_vec(dims: Vec<usize>, data: Vec<T>) -> Result<Self, ShapeError> {
        let expected = element_count(&dims)?;
        if expected != data.len() {
            return Err(ShapeError::LengthMismatch {
                dims,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// An array with every element set to `value`.
    pub fn filled(dims: Vec<usize>, value: T) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        let count = element_count(&dims)?;
        Ok(Self {
            dims,
            data: vec![value; count],
        })
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at a multi-dimensional index, or `None` if out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(&self.dims) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        self.data.get(offset)
    }
}

fn element_count(dims: &[usize]) -> Result<usize, ShapeError> {
    dims.iter()
        .try_fold(1_usize, |count, &dim| count.checked_mul(dim))
        .ok_or_else(|| ShapeError::TooLarge {
            dims: dims.to_vec(),
        })
}

impl<T: DeepSize> DeepSize for NdArray<T> {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::Reference
    }

    fn shape(&self) -> Shape<'_> {
        let identity = Identity::of_allocation(self.data.as_slice());
        Shape::Reference(Some(Referent::array(self, identity)))
    }
}

impl<T: DeepSize> Sequence for NdArray<T> {
    fn rank(&self) -> usize {
        self.dims.len()
    }

    fn element_count(&self) -> usize {
        self.data.len()
    }

    fn element_kind(&self) -> SlotKind {
        T::slot_kind()
    }

    fn for_each_element(
        &self,
        visit: &mut dyn FnMut(&dyn DeepSize) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        for item in &self.data {
            visit(item)?;
        }
        Ok(())
    }
}
