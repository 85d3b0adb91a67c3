//! Named-field struct with a skipped field.

use deep_size::{DeepSize, DeepSizeExt};

#[derive(DeepSize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    #[deep_size(skip)]
    pub scratch: Vec<u8>,
}

fn main() {
    let point = Point {
        x: 1,
        y: 2,
        scratch: vec![0; 64],
    };
    assert_eq!(point.deep_size(), Ok(8));
}
