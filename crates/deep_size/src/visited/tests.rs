use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_identity_is_by_address_not_value() {
    let a = String::from("same");
    let b = String::from("same");

    assert_eq!(Identity::of(&a), Identity::of(&a));
    assert_ne!(Identity::of(&a), Identity::of(&b));
}

#[test]
fn test_identity_distinguishes_struct_from_first_field() {
    struct Outer {
        first: u64,
    }
    let outer = Outer { first: 7 };

    let whole = Identity::of(&outer);
    let field = Identity::of(&outer.first);
    assert_eq!(whole.address(), field.address());
    assert_ne!(whole, field);
}

#[test]
fn test_zero_sized_allocations_have_no_identity() {
    let empty: Vec<u32> = Vec::new();
    assert_eq!(Identity::of_allocation(empty.as_slice()), None);
    assert_eq!(Identity::of_allocation(""), None);
    assert!(Identity::of_allocation("x").is_some());
}

#[test]
fn test_insert_reports_first_visit_only() {
    let value = 5_u32;
    let mut visited = VisitedSet::new();
    assert!(visited.is_empty());

    assert!(visited.insert(Identity::of(&value)));
    assert!(!visited.insert(Identity::of(&value)));
    assert!(visited.contains(Identity::of(&value)));
    assert_eq!(visited.len(), 1);
}

#[test]
fn test_storage_identity_differs_from_owner() {
    let owner = std::collections::VecDeque::from([1_u8, 2, 3]);
    let storage = Identity::storage_of(&owner);

    assert_eq!(storage.address(), Identity::of(&owner).address());
    assert_ne!(storage, Identity::of(&owner));
    assert_eq!(storage, Identity::storage_of(&owner));
}

#[test]
fn test_prefix_slice_differs_from_whole_buffer() {
    let text = String::from("abcdef");
    let whole = Identity::of(text.as_str());
    let prefix = Identity::of(&text[..1]);

    assert_eq!(whole.address(), prefix.address());
    assert_eq!((whole.bytes(), prefix.bytes()), (6, 1));
    assert_ne!(whole, prefix);
    assert_eq!(whole, Identity::of(&text[..]));

    let items = vec![1_u64; 100];
    assert_ne!(Identity::of(&items[..1]), Identity::of(items.as_slice()));
}
