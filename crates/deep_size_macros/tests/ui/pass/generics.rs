//! Generic and lifetime parameters.

use std::marker::PhantomData;

use deep_size::DeepSize;

#[derive(DeepSize)]
pub struct Labelled<'a, T> {
    pub label: &'a str,
    pub value: T,
    pub marker: PhantomData<T>,
}

#[derive(DeepSize)]
pub struct Unit;

fn main() {
    let labelled = Labelled {
        label: "ab",
        value: 3_u16,
        marker: PhantomData,
    };
    let pointer = deep_size::REFERENCE_WIDTH;
    assert_eq!(
        deep_size::deep_size(&labelled),
        Ok(pointer + (pointer + 8 + 4) + 2)
    );
    assert_eq!(deep_size::deep_size(&Unit), Ok(0));
}
