//! Primitive kinds and their fixed byte widths.
//!
//! Widths follow a managed-runtime object model: `char` is a UTF-16 code
//! unit (2 bytes) and the 128-bit integers stand in for a 16-byte decimal.
//! Native-width integers cost one pointer.

/// Width of one reference slot on the compilation target.
pub const REFERENCE_WIDTH: u64 = core::mem::size_of::<usize>() as u64;

/// Primitive value kinds known to the size table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrimitiveKind {
    Bool,
    I8,
    U8,
    /// UTF-16 code unit.
    Char,
    I16,
    U16,
    I32,
    U32,
    F32,
    I64,
    U64,
    F64,
    /// 16-byte wide numeric (`i128`, `u128`).
    Decimal,
    Isize,
    Usize,
}

impl PrimitiveKind {
    /// Number of primitive kinds.
    pub const COUNT: usize = 15;

    /// All kinds, in table order.
    pub const ALL: [PrimitiveKind; Self::COUNT] = [
        PrimitiveKind::Bool,
        PrimitiveKind::I8,
        PrimitiveKind::U8,
        PrimitiveKind::Char,
        PrimitiveKind::I16,
        PrimitiveKind::U16,
        PrimitiveKind::I32,
        PrimitiveKind::U32,
        PrimitiveKind::F32,
        PrimitiveKind::I64,
        PrimitiveKind::U64,
        PrimitiveKind::F64,
        PrimitiveKind::Decimal,
        PrimitiveKind::Isize,
        PrimitiveKind::Usize,
    ];

    /// Fixed width in bytes. O(1) table lookup.
    #[inline]
    pub const fn width(self) -> u64 {
        SIZE_TABLE[self as usize]
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::Char => "char",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::F32 => "f32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::F64 => "f64",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::Isize => "isize",
            PrimitiveKind::Usize => "usize",
        }
    }
}

/// Byte width per [`PrimitiveKind`], indexed by discriminant.
pub const SIZE_TABLE: [u64; PrimitiveKind::COUNT] = [
    1,               // Bool
    1,               // I8
    1,               // U8
    2,               // Char
    2,               // I16
    2,               // U16
    4,               // I32
    4,               // U32
    4,               // F32
    8,               // I64
    8,               // U64
    8,               // F64
    16,              // Decimal
    REFERENCE_WIDTH, // Isize
    REFERENCE_WIDTH, // Usize
];

#[cfg(test)]
mod tests;
