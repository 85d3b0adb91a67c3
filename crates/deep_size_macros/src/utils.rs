//! Attribute parsing and field helpers shared by the derive.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Attribute, Field, Fields, GenericParam, Generics, Member};

/// How a field takes part in measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRole {
    Measured,
    /// Embedded parent level, reported through `Aggregate::base`.
    Base,
    Skipped,
}

/// Parse the `#[deep_size(...)]` attributes of a field.
pub fn field_role(field: &Field) -> syn::Result<FieldRole> {
    let mut role = FieldRole::Measured;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("deep_size")) {
        attr.parse_nested_meta(|meta| {
            let next = if meta.path.is_ident("base") {
                FieldRole::Base
            } else if meta.path.is_ident("skip") {
                FieldRole::Skipped
            } else {
                return Err(meta.error("expected `base` or `skip`"));
            };
            if role != FieldRole::Measured {
                return Err(meta.error("a field takes at most one of `base` and `skip`"));
            }
            role = next;
            Ok(())
        })?;
    }
    Ok(role)
}

/// Reject `#[deep_size(...)]` on the type itself.
pub fn reject_container_attrs(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|a| a.path().is_ident("deep_size")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "#[deep_size(...)] is only supported on fields",
        )),
        None => Ok(()),
    }
}

/// Accessor and reported name of each field: `name` for named fields, the
/// position for tuple fields.
pub fn members(fields: &Fields) -> impl Iterator<Item = (&Field, Member, String)> {
    fields.iter().enumerate().map(|(index, field)| match &field.ident {
        Some(ident) => (field, Member::Named(ident.clone()), ident.unraw().to_string()),
        None => (field, Member::from(index), index.to_string()),
    })
}

/// Add a `DeepSize` bound to every type parameter.
pub fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::deep_size::DeepSize));
        }
    }
    generics
}

/// Discriminant width declared by an integer `#[repr]`, if any.
pub fn repr_width(attrs: &[Attribute]) -> syn::Result<Option<TokenStream2>> {
    let mut width = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            let name = meta.path.get_ident().map(ToString::to_string);
            let bytes = match name.as_deref() {
                Some("u8" | "i8") => Some(quote!(1)),
                Some("u16" | "i16") => Some(quote!(2)),
                Some("u32" | "i32") => Some(quote!(4)),
                Some("u64" | "i64") => Some(quote!(8)),
                Some("u128" | "i128") => Some(quote!(16)),
                Some("usize" | "isize") => Some(quote!(::deep_size::REFERENCE_WIDTH)),
                _ => None,
            };
            // `align(N)`, `packed(N)`
            if meta.input.peek(syn::token::Paren) {
                let _args;
                syn::parenthesized!(_args in meta.input);
            }
            if bytes.is_some() {
                width = bytes;
            }
            Ok(())
        })?;
    }
    Ok(width)
}
