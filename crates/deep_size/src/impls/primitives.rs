//! Size-table primitives, atomics and native-width handles.

use core::ptr::NonNull;
use core::sync::atomic;

use crate::shape::{DeepSize, Shape, SlotKind};
use crate::table::PrimitiveKind;

macro_rules! impl_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl DeepSize for $ty {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::Primitive(PrimitiveKind::$kind)
            }

            #[inline]
            fn shape(&self) -> Shape<'_> {
                Shape::Primitive(PrimitiveKind::$kind)
            }
        }
    )*};
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    u8 => U8,
    char => Char,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    f32 => F32,
    i64 => I64,
    u64 => U64,
    f64 => F64,
    i128 => Decimal,
    u128 => Decimal,
    isize => Isize,
    usize => Usize,
}

#[cfg(target_has_atomic = "8")]
impl_primitive! {
    atomic::AtomicBool => Bool,
    atomic::AtomicI8 => I8,
    atomic::AtomicU8 => U8,
}

#[cfg(target_has_atomic = "16")]
impl_primitive! {
    atomic::AtomicI16 => I16,
    atomic::AtomicU16 => U16,
}

#[cfg(target_has_atomic = "32")]
impl_primitive! {
    atomic::AtomicI32 => I32,
    atomic::AtomicU32 => U32,
}

#[cfg(target_has_atomic = "64")]
impl_primitive! {
    atomic::AtomicI64 => I64,
    atomic::AtomicU64 => U64,
}

#[cfg(target_has_atomic = "ptr")]
impl_primitive! {
    atomic::AtomicIsize => Isize,
    atomic::AtomicUsize => Usize,
}

// Raw pointers are charged one slot and never followed.
macro_rules! impl_native_width {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: ?Sized> DeepSize for $ty {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::NativeWidth
            }

            #[inline]
            fn shape(&self) -> Shape<'_> {
                Shape::NativeWidth
            }
        }
    )*};
}

impl_native_width!(*const T, *mut T, NonNull<T>);
