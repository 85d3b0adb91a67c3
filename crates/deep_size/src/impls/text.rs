//! String-like values.
//!
//! Every text handle is a reference slot to a character buffer. Owned
//! buffers are tracked by their data address so that a `&str` borrowing the
//! same bytes counts them once; empty buffers are never tracked.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::shape::{DeepSize, Referent, Shape, SlotKind};
use crate::visited::Identity;

fn owned_text(text: &str) -> Shape<'_> {
    Shape::Reference(Some(Referent::text(text, Identity::of_allocation(text))))
}

fn shared_text(text: &str) -> Shape<'_> {
    Shape::Reference(Some(Referent::text(text, Some(Identity::of(text)))))
}

macro_rules! impl_text {
    ($($ty:ty => $shape:ident),* $(,)?) => {$(
        impl DeepSize for $ty {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::Reference
            }

            fn shape(&self) -> Shape<'_> {
                $shape(self)
            }
        }
    )*};
}

impl_text! {
    &str => owned_text,
    String => owned_text,
    Box<str> => owned_text,
    Cow<'_, str> => owned_text,
    Rc<str> => shared_text,
    Arc<str> => shared_text,
}
