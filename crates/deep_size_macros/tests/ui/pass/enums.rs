//! Fieldless and data-carrying enums.

use std::rc::Rc;

use deep_size::{DeepSize, SlotKind};

#[derive(Clone, Copy, DeepSize)]
#[repr(u8)]
pub enum Color {
    Red,
    Green,
}

#[derive(DeepSize)]
pub enum Tree {
    Leaf(Color),
    Node { left: Rc<Tree>, right: Rc<Tree> },
    Empty,
}

fn main() {
    assert_eq!(Color::slot_kind(), SlotKind::Enumeration { width: 1 });
    assert_eq!(deep_size::deep_size(&Color::Green), Ok(1));

    let leaf = Rc::new(Tree::Leaf(Color::Red));
    let tree = Tree::Node {
        left: Rc::clone(&leaf),
        right: leaf,
    };
    let pointer = deep_size::REFERENCE_WIDTH;
    assert_eq!(deep_size::deep_size(&tree), Ok(2 * pointer + 1));
    assert_eq!(deep_size::deep_size(&Tree::Empty), Ok(0));
}
