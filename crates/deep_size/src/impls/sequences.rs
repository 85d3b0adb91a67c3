//! Fixed arrays, slices and vectors.
//!
//! `[T; N]` is embedded by value. Every other sequence is a reference slot
//! to its element buffer; buffers are tracked by data address, so a slice
//! borrowing a vector's elements counts them once.

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::SizeError;
use crate::shape::{DeepSize, Referent, Sequence, Shape, SlotKind};
use crate::visited::Identity;

pub(super) fn visit_slice<T: DeepSize>(
    items: &[T],
    visit: &mut dyn FnMut(&dyn DeepSize) -> Result<(), SizeError>,
) -> Result<(), SizeError> {
    for item in items {
        visit(item)?;
    }
    Ok(())
}

impl<T: DeepSize, const N: usize> DeepSize for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(self)
    }
}

impl<T: DeepSize, const N: usize> Sequence for [T; N] {
    fn element_count(&self) -> usize {
        N
    }

    fn element_kind(&self) -> SlotKind {
        T::slot_kind()
    }

    fn for_each_element(
        &self,
        visit: &mut dyn FnMut(&dyn DeepSize) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit_slice(self, visit)
    }
}

/// Reference-slot sequences backed by one contiguous slice.
macro_rules! impl_slice_handle {
    ($($ty:ty => $identity:expr),* $(,)?) => {$(
        impl<T: DeepSize> DeepSize for $ty {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::Reference
            }

            fn shape(&self) -> Shape<'_> {
                let identity: fn(&[T]) -> Option<Identity> = $identity;
                Shape::Reference(Some(Referent::array(self, identity(&self[..]))))
            }
        }

        impl<T: DeepSize> Sequence for $ty {
            fn element_count(&self) -> usize {
                self.len()
            }

            fn element_kind(&self) -> SlotKind {
                T::slot_kind()
            }

            fn for_each_element(
                &self,
                visit: &mut dyn FnMut(&dyn DeepSize) -> Result<(), SizeError>,
            ) -> Result<(), SizeError> {
                visit_slice(&self[..], visit)
            }
        }
    )*};
}

impl_slice_handle! {
    &[T] => Identity::of_allocation,
    Vec<T> => Identity::of_allocation,
    Box<[T]> => Identity::of_allocation,
    Rc<[T]> => |items| Some(Identity::of(items)),
    Arc<[T]> => |items| Some(Identity::of(items)),
}

impl<T: DeepSize> DeepSize for VecDeque<T> {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::Reference
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(Referent::array(self, Some(Identity::storage_of(self)))))
    }
}

impl<T: DeepSize> Sequence for VecDeque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn element_kind(&self) -> SlotKind {
        T::slot_kind()
    }

    fn for_each_element(
        &self,
        visit: &mut dyn FnMut(&dyn DeepSize) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        let (front, back) = self.as_slices();
        visit_slice(front, visit)?;
        visit_slice(back, visit)
    }
}
