//! `DeepSize` descriptors for `core`, `alloc` and `std` types.

mod callables;
mod cells;
mod collections;
mod option;
mod pointers;
mod primitives;
mod sequences;
mod text;
mod tuples;
