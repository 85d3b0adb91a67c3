//! Interior-mutable containers.
//!
//! All are by-value aggregates around their value; the lock-carrying ones add
//! one native-width state slot. Values are read without blocking: a cell that
//! is mutably borrowed or locked reports its value as absent, which is fatal
//! for the by-value slot. For a lock held by another thread this outcome
//! depends on timing.

use std::cell::{Cell, RefCell};
use std::sync::{Mutex, RwLock, TryLockError};

use crate::error::SizeError;
use crate::shape::{Aggregate, DeepSize, Field, Shape, SlotKind};

impl<T: DeepSize + Copy> DeepSize for Cell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl<T: DeepSize + Copy> Aggregate for Cell<T> {
    fn type_name(&self) -> &'static str {
        "Cell"
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit(Field::new("value", &self.get()))
    }
}

impl<T: DeepSize> DeepSize for RefCell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl<T: DeepSize> Aggregate for RefCell<T> {
    fn type_name(&self) -> &'static str {
        "RefCell"
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit(Field::fixed("borrow", SlotKind::NativeWidth))?;
        match self.try_borrow() {
            Ok(value) => visit(Field::new("value", &*value)),
            Err(_) => visit(Field::missing("value", T::slot_kind())),
        }
    }
}

impl<T: DeepSize> DeepSize for Mutex<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl<T: DeepSize> Aggregate for Mutex<T> {
    fn type_name(&self) -> &'static str {
        "Mutex"
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit(Field::fixed("lock", SlotKind::NativeWidth))?;
        // A poisoned value is still intact and measurable.
        match self.try_lock() {
            Ok(guard) => visit(Field::new("data", &*guard)),
            Err(TryLockError::Poisoned(poisoned)) => {
                visit(Field::new("data", &*poisoned.into_inner()))
            }
            Err(TryLockError::WouldBlock) => visit(Field::missing("data", T::slot_kind())),
        }
    }
}

impl<T: DeepSize> DeepSize for RwLock<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl<T: DeepSize> Aggregate for RwLock<T> {
    fn type_name(&self) -> &'static str {
        "RwLock"
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit(Field::fixed("lock", SlotKind::NativeWidth))?;
        match self.try_read() {
            Ok(guard) => visit(Field::new("data", &*guard)),
            Err(TryLockError::Poisoned(poisoned)) => {
                visit(Field::new("data", &*poisoned.into_inner()))
            }
            Err(TryLockError::WouldBlock) => visit(Field::missing("data", T::slot_kind())),
        }
    }
}
