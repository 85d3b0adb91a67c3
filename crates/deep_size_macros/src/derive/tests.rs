use pretty_assertions::assert_eq;
use syn::{parse_quote, DeriveInput};

use super::derive_deep_size_impl;

fn expand(input: &DeriveInput) -> String {
    match derive_deep_size_impl(input) {
        Ok(tokens) => tokens.to_string(),
        Err(err) => panic!("derive failed: {err}"),
    }
}

fn error(input: &DeriveInput) -> String {
    match derive_deep_size_impl(input) {
        Ok(tokens) => panic!("expected an error, got {tokens}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_struct_visits_fields_in_order() {
    let input: DeriveInput = parse_quote! {
        struct Point {
            x: i32,
            y: i32,
        }
    };
    let output = expand(&input);
    let x = output.find("\"x\"");
    let y = output.find("\"y\"");
    assert!(x.is_some() && y.is_some());
    assert!(x < y);
    assert!(output.contains("\"Point\""));
    assert!(!output.contains("fn base"));
}

#[test]
fn test_tuple_struct_fields_use_positions() {
    let input: DeriveInput = parse_quote! {
        struct Pair(u8, String);
    };
    let output = expand(&input);
    assert!(output.contains("\"0\""));
    assert!(output.contains("\"1\""));
}

#[test]
fn test_raw_identifier_reports_plain_name() {
    let input: DeriveInput = parse_quote! {
        struct Token {
            r#type: u8,
        }
    };
    assert!(expand(&input).contains("\"type\""));
}

#[test]
fn test_unit_struct_ignores_visitor() {
    let input: DeriveInput = parse_quote! {
        struct Marker;
    };
    assert!(expand(&input).contains("_visit"));
}

#[test]
fn test_base_field_is_not_visited() {
    let input: DeriveInput = parse_quote! {
        struct Dog {
            #[deep_size(base)]
            animal: Animal,
            name: String,
        }
    };
    let output = expand(&input);
    assert!(output.contains("fn base"));
    assert!(!output.contains("\"animal\""));
    assert!(output.contains("\"name\""));
}

#[test]
fn test_skipped_field_is_not_visited() {
    let input: DeriveInput = parse_quote! {
        struct Cached {
            value: u64,
            #[deep_size(skip)]
            scratch: Vec<u8>,
        }
    };
    assert!(!expand(&input).contains("\"scratch\""));
}

#[test]
fn test_type_parameters_gain_bound() {
    let input: DeriveInput = parse_quote! {
        struct Wrapper<T> {
            inner: T,
        }
    };
    let output = expand(&input);
    assert!(output.contains("T : :: deep_size :: DeepSize"));
}

#[test]
fn test_fieldless_enum_uses_repr_width() {
    let input: DeriveInput = parse_quote! {
        #[repr(u16)]
        enum Suit {
            Hearts,
            Spades,
        }
    };
    let output = expand(&input);
    assert!(output.contains("Enumeration { width : 2 }"));
    assert!(!output.contains("Aggregate"));
}

#[test]
fn test_fieldless_enum_without_repr_uses_layout() {
    let input: DeriveInput = parse_quote! {
        #[repr(C, align(4))]
        enum Flag {
            On,
            Off,
        }
    };
    assert!(expand(&input).contains("size_of"));
}

#[test]
fn test_data_enum_matches_variants() {
    let input: DeriveInput = parse_quote! {
        enum Expr {
            Literal(i64),
            Binary { left: Box<Expr>, right: Box<Expr> },
            Empty,
        }
    };
    let output = expand(&input);
    assert!(output.contains("match self"));
    assert!(output.contains("\"left\""));
    assert!(output.contains("\"right\""));
    assert!(output.contains("Self :: Empty { }"));
}

#[test]
fn test_union_is_rejected() {
    let input: DeriveInput = parse_quote! {
        union Bits {
            int: u32,
            float: f32,
        }
    };
    assert_eq!(error(&input), "DeepSize derive does not support unions");
}

#[test]
fn test_two_bases_are_rejected() {
    let input: DeriveInput = parse_quote! {
        struct Both {
            #[deep_size(base)]
            left: Left,
            #[deep_size(base)]
            right: Right,
        }
    };
    assert_eq!(
        error(&input),
        "at most one field can be marked #[deep_size(base)]"
    );
}

#[test]
fn test_unknown_field_attribute_is_rejected() {
    let input: DeriveInput = parse_quote! {
        struct Odd {
            #[deep_size(weight = 3)]
            value: u8,
        }
    };
    assert_eq!(error(&input), "expected `base` or `skip`");
}

#[test]
fn test_conflicting_field_attributes_are_rejected() {
    let input: DeriveInput = parse_quote! {
        struct Odd {
            #[deep_size(base, skip)]
            value: Parent,
        }
    };
    assert_eq!(
        error(&input),
        "a field takes at most one of `base` and `skip`"
    );
}

#[test]
fn test_base_in_enum_variant_is_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Shape {
            Circle {
                #[deep_size(base)]
                parent: Parent,
            },
        }
    };
    assert_eq!(
        error(&input),
        "#[deep_size(base)] is only supported on struct fields"
    );
}

#[test]
fn test_container_attribute_is_rejected() {
    let input: DeriveInput = parse_quote! {
        #[deep_size(skip)]
        struct Whole {
            value: u8,
        }
    };
    assert_eq!(error(&input), "#[deep_size(...)] is only supported on fields");
}
