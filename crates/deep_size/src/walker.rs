//! The size walker: classification and recursive measurement.
//!
//! Walks a value graph described by [`DeepSize`] shapes and sums one byte
//! count. Values reached through reference slots carry an [`Identity`] and
//! are recorded in the visited set before their children are measured, so
//! cyclic and shared graphs count each instance once. Values embedded by
//! value carry no identity and are never tracked.
//!
//! # Cost model
//!
//! | shape | bytes |
//! |-------|-------|
//! | text | `REFERENCE_WIDTH + 4 + 4 + 2 * utf16_len` |
//! | primitive | size table width |
//! | native width | `REFERENCE_WIDTH` |
//! | enumeration | underlying integer width |
//! | function | `2 * REFERENCE_WIDTH` |
//! | array | `8 * rank` + element slots |
//! | aggregate | sum of field slots across the hierarchy |
//!
//! A reference slot costs `REFERENCE_WIDTH` plus its target, which is free
//! when null or already visited.

use crate::error::{SizeError, SizeResult};
use crate::shape::{
    Aggregate, DeepSize, Field, FieldValue, Referent, Sequence, Shape, SlotKind,
};
use crate::stack::with_stack;
use crate::table::REFERENCE_WIDTH;
use crate::visited::{Identity, VisitedSet};

/// One lower bound and one length per array dimension.
const ARRAY_HEADER_PER_RANK: u64 = 2 * 4;

/// Array-length and string-length slots of a text value.
const TEXT_LENGTH_FIELDS: u64 = 4 + 4;

/// Bytes per UTF-16 code unit.
const TEXT_UNIT_WIDTH: u64 = 2;

/// Recursive measurement state for one logical measurement.
///
/// A walker owns its visited set. Measuring several roots with the same
/// walker yields their combined footprint, with instances shared between
/// roots counted once; use a fresh walker (or [`crate::deep_size`]) for
/// independent measurements.
#[derive(Debug, Default)]
pub struct SizeWalker {
    visited: VisitedSet,
}

impl SizeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure `value` and everything reachable from it.
    ///
    /// The root is tracked like any referenced instance but is charged no
    /// slot of its own.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(root = core::any::type_name::<T>())
    )]
    pub fn measure_root<T: DeepSize>(&mut self, value: &T) -> SizeResult {
        let total = self.measure(value, Some(Identity::of(value)))?;
        tracing::debug!(total, visited = self.visited.len(), "measured root");
        Ok(total)
    }

    /// Instances counted so far.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    fn measure(&mut self, value: &dyn DeepSize, identity: Option<Identity>) -> SizeResult {
        if !self.enter(identity) {
            return Ok(0);
        }
        self.measure_shape(value.shape())
    }

    /// Record a tracked instance. Returns `false` if it was already counted.
    fn enter(&mut self, identity: Option<Identity>) -> bool {
        let Some(identity) = identity else {
            return true;
        };
        if self.visited.insert(identity) {
            return true;
        }
        tracing::trace!(
            type_name = identity.type_name(),
            address = identity.address(),
            bytes = identity.bytes(),
            "already counted"
        );
        false
    }

    fn measure_shape(&mut self, shape: Shape<'_>) -> SizeResult {
        with_stack(|| match shape {
            Shape::Text(text) => Ok(text_size(text)),
            Shape::Primitive(kind) => Ok(kind.width()),
            Shape::NativeWidth => Ok(REFERENCE_WIDTH),
            Shape::Enumeration { width } => Ok(width),
            Shape::Function => Ok(2 * REFERENCE_WIDTH),
            Shape::Array(sequence) => self.measure_array(sequence),
            Shape::Aggregate(aggregate) => self.measure_aggregate(aggregate),
            Shape::Reference(None) => Ok(0),
            Shape::Reference(Some(referent)) => self.follow(referent),
        })
    }

    fn follow(&mut self, referent: Referent<'_>) -> SizeResult {
        if !self.enter(referent.identity) {
            return Ok(0);
        }
        self.measure_shape(referent.target.shape())
    }

    /// Cost of one present field or element slot.
    fn measure_slot(&mut self, kind: SlotKind, value: &dyn DeepSize) -> SizeResult {
        if let Some(width) = kind.fixed_width() {
            return Ok(width);
        }
        match kind {
            SlotKind::Reference => Ok(REFERENCE_WIDTH + self.measure(value, None)?),
            _ => self.measure(value, None),
        }
    }

    fn measure_array(&mut self, sequence: &dyn Sequence) -> SizeResult {
        let header = ARRAY_HEADER_PER_RANK * sequence.rank() as u64;
        let kind = sequence.element_kind();
        if let Some(width) = kind.fixed_width() {
            return Ok(header + sequence.element_count() as u64 * width);
        }

        let mut total = header;
        sequence.for_each_element(&mut |element| {
            total += self.measure_slot(kind, element)?;
            Ok(())
        })?;
        Ok(total)
    }

    /// Sum the fields of every level, most-derived first.
    fn measure_aggregate(&mut self, aggregate: &dyn Aggregate) -> SizeResult {
        let mut total = 0;
        let mut level = Some(aggregate);
        while let Some(current) = level {
            current.for_each_field(&mut |field| {
                total += match field.value {
                    FieldValue::Present(value) => self.measure_slot(field.kind, value)?,
                    FieldValue::Fixed => empty_slot_width(field.kind).unwrap_or(0),
                    FieldValue::Unreadable => unreadable_field_size(current.type_name(), &field)?,
                };
                Ok(())
            })?;
            level = current.base();
        }
        Ok(total)
    }
}

/// Cost of a slot with nothing in it, or `None` for a by-value slot, whose
/// cost is its value.
fn empty_slot_width(kind: SlotKind) -> Option<u64> {
    match kind {
        SlotKind::Reference => Some(REFERENCE_WIDTH),
        _ => kind.fixed_width(),
    }
}

/// Cost of a field whose value could not be read.
fn unreadable_field_size(type_name: &'static str, field: &Field<'_>) -> SizeResult {
    empty_slot_width(field.kind).ok_or_else(|| {
        tracing::debug!(type_name, field = field.name, "by-value field has no value");
        SizeError::MissingValue {
            type_name,
            field: field.name,
        }
    })
}

fn text_size(text: &str) -> u64 {
    REFERENCE_WIDTH + TEXT_LENGTH_FIELDS + text.encode_utf16().count() as u64 * TEXT_UNIT_WIDTH
}
