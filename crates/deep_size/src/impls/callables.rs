//! Function pointers and boxed closures.
//!
//! A callable costs one slot for its captured target and one for its entry
//! point. What the closure captures is not followed. Function pointers are
//! measured per slot; closures behind `Rc`/`Arc` are tracked by allocation
//! so a shared closure counts once.

use std::rc::Rc;
use std::sync::Arc;

use crate::shape::{DeepSize, Referent, Shape, SlotKind, Target};
use crate::visited::Identity;

fn boxed_callable<F: ?Sized>(callable: &F) -> Shape<'_> {
    Shape::Reference(Some(Referent {
        identity: Identity::of_allocation(callable),
        target: Target::Function,
    }))
}

fn shared_callable<F: ?Sized>(callable: &F) -> Shape<'_> {
    Shape::Reference(Some(Referent {
        identity: Some(Identity::of(callable)),
        target: Target::Function,
    }))
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> DeepSize for fn($($arg),*) -> R {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::Reference
            }

            fn shape(&self) -> Shape<'_> {
                Shape::Function
            }
        }

        impl_callable!(@handle boxed_callable, Box<dyn Fn($($arg),*) -> R + 'f>; $($arg),*);
        impl_callable!(@handle boxed_callable, Box<dyn FnMut($($arg),*) -> R + 'f>; $($arg),*);
        impl_callable!(@handle boxed_callable, Box<dyn FnOnce($($arg),*) -> R + 'f>; $($arg),*);
        impl_callable!(@handle boxed_callable, Box<dyn Fn($($arg),*) -> R + Send + Sync + 'f>; $($arg),*);
        impl_callable!(@handle shared_callable, Rc<dyn Fn($($arg),*) -> R + 'f>; $($arg),*);
        impl_callable!(@handle shared_callable, Arc<dyn Fn($($arg),*) -> R + Send + Sync + 'f>; $($arg),*);
    };
    (@handle $shape:ident, $ty:ty; $($arg:ident),*) => {
        impl<'f, R, $($arg),*> DeepSize for $ty {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::Reference
            }

            fn shape(&self) -> Shape<'_> {
                $shape(&**self)
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
