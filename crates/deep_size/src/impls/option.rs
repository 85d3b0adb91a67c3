//! `Option` and `Result`.
//!
//! `Option` of a reference slot is a nullable reference: `None` is null.
//! Over any other slot it is a by-value aggregate of a presence flag and,
//! when present, the value. `Result` is a by-value aggregate of its flag and
//! whichever side is set.

use crate::error::SizeError;
use crate::shape::{Aggregate, DeepSize, Field, Shape, SlotKind};
use crate::table::PrimitiveKind;

const FLAG: SlotKind = SlotKind::Primitive(PrimitiveKind::Bool);

impl<T: DeepSize> DeepSize for Option<T> {
    fn slot_kind() -> SlotKind {
        match T::slot_kind() {
            SlotKind::Reference => SlotKind::Reference,
            _ => SlotKind::Value,
        }
    }

    fn shape(&self) -> Shape<'_> {
        if T::slot_kind() != SlotKind::Reference {
            return Shape::Aggregate(self);
        }
        match self {
            Some(value) => value.shape(),
            None => Shape::Reference(None),
        }
    }
}

impl<T: DeepSize> Aggregate for Option<T> {
    fn type_name(&self) -> &'static str {
        "Option"
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit(Field::fixed("is_some", FLAG))?;
        if let Some(value) = self {
            visit(Field::new("value", value))?;
        }
        Ok(())
    }
}

impl<T: DeepSize, E: DeepSize> DeepSize for Result<T, E> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl<T: DeepSize, E: DeepSize> Aggregate for Result<T, E> {
    fn type_name(&self) -> &'static str {
        "Result"
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit(Field::fixed("is_ok", FLAG))?;
        match self {
            Ok(value) => visit(Field::new("ok", value)),
            Err(error) => visit(Field::new("err", error)),
        }
    }
}
