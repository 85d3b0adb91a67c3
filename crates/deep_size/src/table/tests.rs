use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_table_order_matches_discriminants() {
    for (index, kind) in PrimitiveKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, index, "{} out of order", kind.name());
    }
}

#[test]
fn test_fixed_widths() {
    assert_eq!(PrimitiveKind::Bool.width(), 1);
    assert_eq!(PrimitiveKind::I8.width(), 1);
    assert_eq!(PrimitiveKind::U8.width(), 1);
    assert_eq!(PrimitiveKind::Char.width(), 2);
    assert_eq!(PrimitiveKind::I16.width(), 2);
    assert_eq!(PrimitiveKind::U16.width(), 2);
    assert_eq!(PrimitiveKind::I32.width(), 4);
    assert_eq!(PrimitiveKind::U32.width(), 4);
    assert_eq!(PrimitiveKind::F32.width(), 4);
    assert_eq!(PrimitiveKind::I64.width(), 8);
    assert_eq!(PrimitiveKind::U64.width(), 8);
    assert_eq!(PrimitiveKind::F64.width(), 8);
    assert_eq!(PrimitiveKind::Decimal.width(), 16);
}

#[test]
fn test_native_width_follows_target() {
    let pointer = core::mem::size_of::<*const u8>() as u64;
    assert_eq!(REFERENCE_WIDTH, pointer);
    assert_eq!(PrimitiveKind::Isize.width(), pointer);
    assert_eq!(PrimitiveKind::Usize.width(), pointer);
}
