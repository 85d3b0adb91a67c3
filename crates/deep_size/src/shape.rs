//! Type descriptors consumed by the size walker.
//!
//! Rust has no runtime reflection, so every measurable type describes itself
//! through [`DeepSize`]:
//!
//! - [`DeepSize::slot_kind`] is the *static* classification of a slot holding
//!   the type (a field or an array element). It decides how the slot is
//!   charged before any value is inspected.
//! - [`DeepSize::shape`] is the *runtime* view of one value: its [`Category`]
//!   plus borrowed access to whatever it contains.
//!
//! Aggregates enumerate their fields through [`Aggregate`], arrays their
//! elements through [`Sequence`]. `#[derive(DeepSize)]` generates both for
//! user types.

use crate::error::SizeError;
use crate::table::{PrimitiveKind, REFERENCE_WIDTH};
use crate::visited::Identity;

/// A measurable type.
pub trait DeepSize {
    /// How a slot of this type is charged inside an aggregate or array.
    ///
    /// Defaults to [`SlotKind::Value`]: the value is embedded in place and
    /// measured without cycle tracking.
    fn slot_kind() -> SlotKind
    where
        Self: Sized,
    {
        SlotKind::Value
    }

    /// Runtime shape of this value.
    fn shape(&self) -> Shape<'_>;
}

/// Structured value whose size is the sum of its field costs.
pub trait Aggregate {
    /// Name of the type at this level of the hierarchy.
    fn type_name(&self) -> &'static str;

    /// Visit the fields declared at this level, in declaration order.
    ///
    /// Fields inherited from [`Aggregate::base`] are *not* visited here.
    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError>;

    /// The embedded ancestor, if this type extends another aggregate.
    fn base(&self) -> Option<&dyn Aggregate> {
        None
    }
}

/// Array-like value with a rank and homogeneous elements.
pub trait Sequence {
    /// Number of dimensions.
    fn rank(&self) -> usize {
        1
    }

    /// Total number of elements across all dimensions.
    fn element_count(&self) -> usize;

    /// Slot kind shared by every element.
    fn element_kind(&self) -> SlotKind;

    /// Visit every element. Only called for [`SlotKind::Value`] and
    /// [`SlotKind::Reference`] elements.
    fn for_each_element(
        &self,
        visit: &mut dyn FnMut(&dyn DeepSize) -> Result<(), SizeError>,
    ) -> Result<(), SizeError>;
}

/// Category tag produced by classifying a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Primitive,
    NativeWidth,
    Enumeration,
    FunctionReference,
    Array,
    Aggregate,
}

/// Static classification of a field or element slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Fixed width from the size table.
    Primitive(PrimitiveKind),
    /// Raw pointer or other native-width handle that is not followed.
    NativeWidth,
    /// Fieldless enum with the given underlying integer width.
    Enumeration { width: u64 },
    /// Embedded by value: measured in place, never cycle-tracked.
    Value,
    /// Pointer-sized slot to a separately addressable, possibly shared value.
    Reference,
}

impl SlotKind {
    /// Width of slots whose cost does not depend on the value.
    #[inline]
    pub const fn fixed_width(self) -> Option<u64> {
        match self {
            SlotKind::Primitive(kind) => Some(kind.width()),
            SlotKind::NativeWidth => Some(REFERENCE_WIDTH),
            SlotKind::Enumeration { width } => Some(width),
            SlotKind::Value | SlotKind::Reference => None,
        }
    }
}

/// Runtime view of a value.
pub enum Shape<'a> {
    /// Character sequence, charged as a header plus a UTF-16 buffer.
    Text(&'a str),
    Primitive(PrimitiveKind),
    NativeWidth,
    Enumeration { width: u64 },
    /// Callable value: one slot for the target, one for the entry point.
    Function,
    Array(&'a dyn Sequence),
    Aggregate(&'a dyn Aggregate),
    /// Indirection to another value; `None` is a null reference.
    Reference(Option<Referent<'a>>),
}

impl Shape<'_> {
    /// Category tag, or `None` for text and indirections, which the walker
    /// routes before classification.
    pub fn category(&self) -> Option<Category> {
        match self {
            Shape::Primitive(_) => Some(Category::Primitive),
            Shape::NativeWidth => Some(Category::NativeWidth),
            Shape::Enumeration { .. } => Some(Category::Enumeration),
            Shape::Function => Some(Category::FunctionReference),
            Shape::Array(_) => Some(Category::Array),
            Shape::Aggregate(_) => Some(Category::Aggregate),
            Shape::Text(_) | Shape::Reference(_) => None,
        }
    }
}

/// The value behind a reference, with the identity used for cycle tracking.
pub struct Referent<'a> {
    /// `None` leaves the target untracked.
    pub identity: Option<Identity>,
    pub target: Target<'a>,
}

impl<'a> Referent<'a> {
    /// Target of a shared pointer (`Rc`, `Arc`): always tracked, so every
    /// handle to the same allocation counts it once.
    pub fn shared<T: DeepSize>(target: &'a T) -> Self {
        Self {
            identity: Some(Identity::of(target)),
            target: Target::Value(target),
        }
    }

    /// Target of an owning or borrowed pointer. Zero-sized targets are left
    /// untracked since their dangling addresses coincide.
    pub fn owned<T: DeepSize>(target: &'a T) -> Self {
        Self {
            identity: Identity::of_allocation(target),
            target: Target::Value(target),
        }
    }

    /// Character data owned by a string-like handle.
    pub fn text(text: &'a str, identity: Option<Identity>) -> Self {
        Self {
            identity,
            target: Target::Text(text),
        }
    }

    /// Elements owned by an array-like handle.
    pub fn array(sequence: &'a dyn Sequence, identity: Option<Identity>) -> Self {
        Self {
            identity,
            target: Target::Array(sequence),
        }
    }
}

/// What a [`Referent`] points at.
///
/// Unsized targets (`str`, `[T]`) cannot be passed as `&dyn DeepSize`, so
/// they travel as their own variants.
pub enum Target<'a> {
    Value(&'a dyn DeepSize),
    Text(&'a str),
    Array(&'a dyn Sequence),
    /// Callable behind a pointer; its captured state is not followed.
    Function,
}

impl<'a> Target<'a> {
    /// Shape of the pointed-at value.
    pub fn shape(&self) -> Shape<'a> {
        match *self {
            Target::Value(value) => value.shape(),
            Target::Text(text) => Shape::Text(text),
            Target::Array(sequence) => Shape::Array(sequence),
            Target::Function => Shape::Function,
        }
    }
}

/// One declared field of an aggregate.
pub struct Field<'a> {
    pub name: &'static str,
    pub kind: SlotKind,
    pub value: FieldValue<'a>,
}

/// What a [`Field`] carries besides its kind.
pub enum FieldValue<'a> {
    /// The value occupying the slot.
    Present(&'a dyn DeepSize),
    /// Nothing to inspect: the slot costs what its kind costs when empty.
    Fixed,
    /// The value exists but could not be read; fatal for by-value slots.
    Unreadable,
}

impl<'a> Field<'a> {
    pub fn new<T: DeepSize>(name: &'static str, value: &'a T) -> Self {
        Self {
            name,
            kind: T::slot_kind(),
            value: FieldValue::Present(value),
        }
    }

    /// A field whose cost depends only on its kind, with no value behind it.
    /// An empty reference slot costs one reference and an empty by-value
    /// slot costs nothing.
    pub fn fixed(name: &'static str, kind: SlotKind) -> Self {
        Self {
            name,
            kind,
            value: FieldValue::Fixed,
        }
    }

    /// A field whose value could not be read.
    pub fn missing(name: &'static str, kind: SlotKind) -> Self {
        Self {
            name,
            kind,
            value: FieldValue::Unreadable,
        }
    }
}

#[cfg(test)]
mod tests;
