//! Pointers to sized values.
//!
//! `Rc` and `Arc` share their target, so it is tracked by allocation and
//! counted once however many handles reach it. `Box` and borrows use the
//! owned rule: tracked unless zero-sized. Weak handles are not followed.

use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::shape::{DeepSize, Referent, Shape, SlotKind};

impl<T: DeepSize> DeepSize for &T {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::Reference
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(Referent::owned(*self)))
    }
}

impl<T: DeepSize> DeepSize for &mut T {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::Reference
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(Referent::owned(&**self)))
    }
}

impl<T: DeepSize> DeepSize for Box<T> {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::Reference
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(Referent::owned(&**self)))
    }
}

impl<T: DeepSize> DeepSize for Rc<T> {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::Reference
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(Referent::shared(&**self)))
    }
}

impl<T: DeepSize> DeepSize for Arc<T> {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::Reference
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Reference(Some(Referent::shared(&**self)))
    }
}

impl<T: ?Sized> DeepSize for rc::Weak<T> {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::NativeWidth
    }

    fn shape(&self) -> Shape<'_> {
        Shape::NativeWidth
    }
}

impl<T: ?Sized> DeepSize for sync::Weak<T> {
    #[inline]
    fn slot_kind() -> SlotKind {
        SlotKind::NativeWidth
    }

    fn shape(&self) -> Shape<'_> {
        Shape::NativeWidth
    }
}
