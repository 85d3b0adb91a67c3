//! Tuples, unit and marker types: by-value aggregates.

use core::marker::PhantomData;

use crate::error::SizeError;
use crate::shape::{Aggregate, DeepSize, Field, Shape};

macro_rules! impl_tuple {
    ($($name:ident . $index:tt),+) => {
        impl<$($name: DeepSize),+> DeepSize for ($($name,)+) {
            fn shape(&self) -> Shape<'_> {
                Shape::Aggregate(self)
            }
        }

        impl<$($name: DeepSize),+> Aggregate for ($($name,)+) {
            fn type_name(&self) -> &'static str {
                core::any::type_name::<Self>()
            }

            fn for_each_field(
                &self,
                visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
            ) -> Result<(), SizeError> {
                $(visit(Field::new(stringify!($index), &self.$index))?;)+
                Ok(())
            }
        }
    };
}

impl_tuple!(A.0);
impl_tuple!(A.0, B.1);
impl_tuple!(A.0, B.1, C.2);
impl_tuple!(A.0, B.1, C.2, D.3);
impl_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

impl<T: ?Sized> DeepSize for PhantomData<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl<T: ?Sized> Aggregate for PhantomData<T> {
    fn type_name(&self) -> &'static str {
        "PhantomData"
    }

    fn for_each_field(
        &self,
        _visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        Ok(())
    }
}

impl DeepSize for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Aggregate(self)
    }
}

impl Aggregate for () {
    fn type_name(&self) -> &'static str {
        "()"
    }

    fn for_each_field(
        &self,
        _visit: &mut dyn FnMut(Field<'_>) -> Result<(), SizeError>,
    ) -> Result<(), SizeError> {
        Ok(())
    }
}
