//! `DeepSize` derive implementation.
//!
//! Generated code refers to the runtime crate as `::deep_size`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Fields, Member};

use crate::utils::{
    add_trait_bounds, field_role, members, reject_container_attrs, repr_width, FieldRole,
};

/// Main entry point for the `DeepSize` derive macro.
pub fn derive_deep_size(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_deep_size_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

pub(crate) fn derive_deep_size_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    reject_container_attrs(&input.attrs)?;
    match &input.data {
        Data::Struct(data) => derive_struct(input, &data.fields),
        Data::Enum(data) if is_fieldless(data) => derive_fieldless_enum(input),
        Data::Enum(data) => derive_data_enum(input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "DeepSize derive does not support unions",
        )),
    }
}

fn is_fieldless(data: &DataEnum) -> bool {
    data.variants
        .iter()
        .all(|variant| matches!(variant.fields, Fields::Unit))
}

/// Aggregate over the declared fields, with an optional base level.
fn derive_struct(input: &DeriveInput, fields: &Fields) -> syn::Result<TokenStream2> {
    let mut visits = Vec::new();
    let mut base: Option<Member> = None;

    for (field, member, label) in members(fields) {
        match field_role(field)? {
            FieldRole::Measured => visits.push(quote! {
                visit(::deep_size::Field::new(#label, &self.#member))?;
            }),
            FieldRole::Base if base.is_some() => {
                return Err(syn::Error::new_spanned(
                    field,
                    "at most one field can be marked #[deep_size(base)]",
                ));
            }
            FieldRole::Base => base = Some(member),
            FieldRole::Skipped => {}
        }
    }

    let base_fn = base.map(|member| {
        quote! {
            fn base(&self) -> ::core::option::Option<&dyn ::deep_size::Aggregate> {
                ::core::option::Option::Some(&self.#member)
            }
        }
    });

    let body = quote! {
        #(#visits)*
        ::core::result::Result::Ok(())
    };
    Ok(aggregate_impls(input, visits.is_empty(), &body, base_fn))
}

/// Aggregate over the fields of whichever variant is active.
fn derive_data_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream2> {
    let mut arms = Vec::new();
    let mut any_visits = false;

    for variant in &data.variants {
        let variant_name = &variant.ident;
        let mut bindings = Vec::new();
        let mut visits = Vec::new();

        for (index, (field, member, label)) in members(&variant.fields).enumerate() {
            let measured = match field_role(field)? {
                FieldRole::Measured => true,
                FieldRole::Skipped => false,
                FieldRole::Base => {
                    return Err(syn::Error::new_spanned(
                        field,
                        "#[deep_size(base)] is only supported on struct fields",
                    ));
                }
            };
            let binding = format_ident!("field_{}", index);
            if measured {
                visits.push(quote! {
                    visit(::deep_size::Field::new(#label, #binding))?;
                });
                bindings.push(quote!(#member: #binding));
            } else {
                bindings.push(quote!(#member: _));
            }
        }

        any_visits |= !visits.is_empty();
        arms.push(quote! {
            Self::#variant_name { #(#bindings,)* } => { #(#visits)* }
        });
    }

    let body = quote! {
        match self {
            #(#arms)*
        }
        ::core::result::Result::Ok(())
    };
    Ok(aggregate_impls(input, !any_visits, &body, None))
}

/// `DeepSize` + `Aggregate` impls sharing one generic signature.
fn aggregate_impls(
    input: &DeriveInput,
    no_visits: bool,
    body: &TokenStream2,
    base_fn: Option<TokenStream2>,
) -> TokenStream2 {
    let name = &input.ident;
    let type_name = name.to_string();
    let generics = add_trait_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let visit = if no_visits {
        format_ident!("_visit")
    } else {
        format_ident!("visit")
    };

    quote! {
        impl #impl_generics ::deep_size::DeepSize for #name #ty_generics #where_clause {
            fn shape(&self) -> ::deep_size::Shape<'_> {
                ::deep_size::Shape::Aggregate(self)
            }
        }

        impl #impl_generics ::deep_size::Aggregate for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn for_each_field(
                &self,
                #visit: &mut dyn ::core::ops::FnMut(
                    ::deep_size::Field<'_>,
                ) -> ::core::result::Result<(), ::deep_size::SizeError>,
            ) -> ::core::result::Result<(), ::deep_size::SizeError> {
                #body
            }

            #base_fn
        }
    }
}

/// Fixed-width enumeration of the declared or native discriminant size.
fn derive_fieldless_enum(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let width = repr_width(&input.attrs)?
        .unwrap_or_else(|| quote!(::core::mem::size_of::<Self>() as u64));

    Ok(quote! {
        impl #impl_generics ::deep_size::DeepSize for #name #ty_generics #where_clause {
            #[inline]
            fn slot_kind() -> ::deep_size::SlotKind {
                ::deep_size::SlotKind::Enumeration { width: #width }
            }

            #[inline]
            fn shape(&self) -> ::deep_size::Shape<'_> {
                ::deep_size::Shape::Enumeration { width: #width }
            }
        }
    })
}

#[cfg(test)]
mod tests;
