//! Derive macro for `deep_size`.
//!
//! Generates the `DeepSize` descriptor of a struct or enum so the size walker
//! can enumerate its fields.
//!
//! ```text
//! #[derive(DeepSize)]
//! struct Employee {
//!     #[deep_size(base)]
//!     person: Person,
//!     salary: u64,
//!     manager: Option<Rc<Employee>>,
//!     #[deep_size(skip)]
//!     cache: Scratch,
//! }
//! ```
//!
//! - Structs (named, tuple or unit) become aggregates whose fields are
//!   visited in declaration order.
//! - Fieldless enums become enumerations of their `#[repr]` integer width,
//!   or of `size_of::<Self>()` without one.
//! - Enums with data are aggregates of the active variant's fields.
//! - Unions are rejected.

mod derive;
mod utils;

use proc_macro::TokenStream;

/// Derive `deep_size::DeepSize` (and `deep_size::Aggregate` for aggregates).
///
/// # Field attributes
///
/// - `#[deep_size(base)]` - The field embeds the parent level of an
///   inheritance hierarchy. It is returned from `Aggregate::base` instead of
///   being visited, so its fields count as inherited fields. At most one per
///   struct; its type must implement `Aggregate`.
/// - `#[deep_size(skip)]` - The field is not measured.
///
/// Type parameters gain a `DeepSize` bound.
#[proc_macro_derive(DeepSize, attributes(deep_size))]
pub fn derive_deep_size(input: TokenStream) -> TokenStream {
    derive::derive_deep_size(input)
}
