use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_fixed_width_by_kind() {
    assert_eq!(
        SlotKind::Primitive(PrimitiveKind::I16).fixed_width(),
        Some(2)
    );
    assert_eq!(SlotKind::NativeWidth.fixed_width(), Some(REFERENCE_WIDTH));
    assert_eq!(SlotKind::Enumeration { width: 4 }.fixed_width(), Some(4));
    assert_eq!(SlotKind::Value.fixed_width(), None);
    assert_eq!(SlotKind::Reference.fixed_width(), None);
}

#[test]
fn test_default_slot_kind_is_value() {
    assert_eq!(<(u8, u8)>::slot_kind(), SlotKind::Value);
    assert_eq!(<[u8; 3]>::slot_kind(), SlotKind::Value);
    assert_eq!(String::slot_kind(), SlotKind::Reference);
    assert_eq!(
        u64::slot_kind(),
        SlotKind::Primitive(PrimitiveKind::U64)
    );
}

#[test]
fn test_field_new_takes_kind_from_type() {
    let count = 3_u32;
    let field = Field::new("count", &count);
    assert_eq!(field.name, "count");
    assert_eq!(field.kind, SlotKind::Primitive(PrimitiveKind::U32));
    assert!(matches!(field.value, FieldValue::Present(_)));

    let label = String::from("x");
    assert_eq!(Field::new("label", &label).kind, SlotKind::Reference);
}

#[test]
fn test_fixed_and_missing_fields_are_distinct() {
    let flag = Field::fixed("flag", SlotKind::Primitive(PrimitiveKind::Bool));
    assert!(matches!(flag.value, FieldValue::Fixed));

    let missing = Field::missing("inner", SlotKind::Value);
    let fixed = Field::fixed("inner", SlotKind::Value);
    assert!(matches!(fixed.value, FieldValue::Fixed));
    assert_eq!(missing.kind, SlotKind::Value);
    assert!(matches!(missing.value, FieldValue::Unreadable));
}

#[test]
fn test_shared_referent_is_always_tracked() {
    let unit = Rc::new(());
    let referent = Referent::shared(&*unit);
    assert_eq!(referent.identity, Some(Identity::of(&*unit)));
}

#[test]
fn test_owned_referent_skips_zero_sized_targets() {
    let value = 5_u16;
    assert_eq!(
        Referent::owned(&value).identity,
        Some(Identity::of(&value))
    );
    assert_eq!(Referent::owned(&()).identity, None);
}

#[test]
fn test_target_shape_matches_variant() {
    let value = 1_u8;
    assert_eq!(
        Target::Value(&value).shape().category(),
        Some(Category::Primitive)
    );
    assert_eq!(
        Target::Function.shape().category(),
        Some(Category::FunctionReference)
    );
    assert!(matches!(Target::Text("ab").shape(), Shape::Text("ab")));
    let items = [1_u8, 2];
    assert_eq!(
        Target::Array(&items).shape().category(),
        Some(Category::Array)
    );
}
