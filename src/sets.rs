//! Ready-made candidate sets.

use alloc::string::String;

use crate::type_set;

type_set! {
    /// The default candidate set of [`Variant`](crate::Variant).
    ///
    /// | Ordinal | Type     |
    /// |---------|----------|
    /// | 0       | `char`   |
    /// | 1       | `i16`    |
    /// | 2       | `i32`    |
    /// | 3       | `i64`    |
    /// | 4       | `i128`   |
    /// | 5       | `usize`  |
    /// | 6       | `u8`     |
    /// | 7       | `u16`    |
    /// | 8       | `u32`    |
    /// | 9       | `u64`    |
    /// | 10      | `u128`   |
    /// | 11      | `f64`    |
    /// | 12      | `String` (text) |
    pub Primitives: char, i16, i32, i64, i128, usize, u8, u16, u32, u64, u128, f64, String;
}
