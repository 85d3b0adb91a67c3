//! Three-level hierarchy through `#[deep_size(base)]`.

use deep_size::{Aggregate, DeepSize};

#[derive(DeepSize)]
pub struct Shape {
    pub id: u32,
}

#[derive(DeepSize)]
pub struct Polygon {
    #[deep_size(base)]
    pub shape: Shape,
    pub sides: u8,
}

#[derive(DeepSize)]
pub struct Square(#[deep_size(base)] Polygon, f64);

fn main() {
    let square = Square(
        Polygon {
            shape: Shape { id: 7 },
            sides: 4,
        },
        2.0,
    );
    assert_eq!(square.type_name(), "Square");
    assert!(square.base().is_some());
    assert_eq!(deep_size::deep_size(&square), Ok(8 + 1 + 4));
}
