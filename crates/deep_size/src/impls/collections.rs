//! Maps and sets.
//!
//! Each is a reference slot to an entry array. Map entries are by-value
//! `{ key, value }` aggregates; set elements keep their own slot kind.
//! Bucket and node overhead is not modelled.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::SizeError;
use crate::shape::{Aggregate, DeepSize, Field, Referent, Sequence, Shape, SlotKind};
use crate::visited::Identity;

/// One key/value pair, borrowed from the map during the walk.
struct Entry<'a, K, V> {
    key: &'a K,
    value: &'a V,
}

impl<K: DeepSize, V: DeepSize> DeepSize for Entry<'_, K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl<K: DeepSize, V: DeepSize> Aggregate for Entry<'_, K, V> {
    fn type_name(&self) -> &'static str {
        "Entry"
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        visit(Field::new("key", self.key))?;
        visit(Field::new("value", self.value))
    }
}

macro_rules! impl_map {
    ($($map:ident < K, V $(, $hasher:ident)? >),* $(,)?) => {$(
        impl<K: DeepSize, V: DeepSize $(, $hasher)?> DeepSize for $map<K, V $(, $hasher)?> {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::Reference
            }

            fn shape(&self) -> Shape<'_> {
                Shape::Reference(Some(Referent::array(self, Some(Identity::storage_of(self)))))
            }
        }

        impl<K: DeepSize, V: DeepSize $(, $hasher)?> Sequence for $map<K, V $(, $hasher)?> {
            fn element_count(&self) -> usize {
                self.len()
            }

            fn element_kind(&self) -> SlotKind {
                SlotKind::Value
            }

            fn for_each_element(
                &self,
                visit: &mut dyn FnMut(&dyn DeepSize) -> Result<(), SizeError>,
            ) -> Result<(), SizeError> {
                for (key, value) in self {
                    visit(&Entry { key, value })?;
                }
                Ok(())
            }
        }
    )*};
}

impl_map!(HashMap<K, V, S>, BTreeMap<K, V>);

macro_rules! impl_set {
    ($($set:ident < T $(, $hasher:ident)? >),* $(,)?) => {$(
        impl<T: DeepSize $(, $hasher)?> DeepSize for $set<T $(, $hasher)?> {
            #[inline]
            fn slot_kind() -> SlotKind {
                SlotKind::Reference
            }

            fn shape(&self) -> Shape<'_> {
                Shape::Reference(Some(Referent::array(self, Some(Identity::storage_of(self)))))
            }
        }

        impl<T: DeepSize $(, $hasher)?> Sequence for $set<T $(, $hasher)?> {
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
                for item in self {
                    visit(item)?;
                }
                Ok(())
            }
        }
    )*};
}

impl_set!(HashSet<T, S>, BTreeSet<T>);
