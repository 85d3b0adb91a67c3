//! Deep in-memory size estimation.
//!
//! Measures a value together with everything reachable from it through
//! references, container elements and aggregate fields, and returns one
//! approximate byte count. Cyclic graphs terminate and shared instances
//! count once.
//!
//! # Model
//!
//! Sizes follow a managed-runtime object model rather than Rust's exact
//! layout: references cost [`REFERENCE_WIDTH`], strings are a header plus a
//! UTF-16 buffer, arrays carry an `8 * rank` header, and callables cost two
//! pointers. Padding and allocator overhead are not modelled.
//!
//! # Usage
//!
//! ```text
//! #[derive(DeepSize)]
//! struct Node {
//!     value: i32,
//!     next: Option<Rc<RefCell<Node>>>,
//! }
//!
//! let bytes = node.deep_size()?;
//! ```
//!
//! Types describe themselves through [`DeepSize`]; `#[derive(DeepSize)]`
//! (default `derive` feature) generates the descriptor for structs and enums.
//! Mark an embedded ancestor with `#[deep_size(base)]` to have its fields
//! walked as inherited fields, and exclude a field with `#[deep_size(skip)]`.

mod error;
mod impls;
mod nd_array;
mod shape;
mod stack;
mod table;
mod visited;
mod walker;

#[cfg(test)]
mod test_helpers;

pub use error::{SizeError, SizeResult};
pub use nd_array::{NdArray, ShapeError};
pub use shape::{
    Aggregate, Category, DeepSize, Field, FieldValue, Referent, Sequence, Shape, SlotKind,
    Target,
};
pub use table::{PrimitiveKind, REFERENCE_WIDTH, SIZE_TABLE};
pub use visited::{Identity, VisitedSet};
pub use walker::SizeWalker;

#[cfg(feature = "derive")]
pub use deep_size_macros::DeepSize;

/// Measure `value` and everything reachable from it.
///
/// Each call uses its own visited set, so calls are independent even over
/// overlapping graphs.
///
/// # Errors
///
/// Measurement never blocks. A `RefCell` that is mutably borrowed, or a
/// `Mutex`/`RwLock` that is write-locked (by this thread or any other) while
/// the walk reaches it, cannot be read and yields
/// [`SizeError::MissingValue`]. With locks shared across threads the result
/// therefore depends on timing; retry, or measure while no writer holds the
/// lock.
pub fn deep_size<T: DeepSize>(value: &T) -> SizeResult {
    SizeWalker::new().measure_root(value)
}

/// Method-call form of [`deep_size`].
pub trait DeepSizeExt: DeepSize {
    fn deep_size(&self) -> SizeResult;
}

impl<T: DeepSize> DeepSizeExt for T {
    fn deep_size(&self) -> SizeResult {
        crate::deep_size(self)
    }
}
