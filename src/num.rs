//! Numbers and numerics.

use num_traits as nt;
use std::fmt;

/// Gathers the traits a vector component type must support: the arithmetic
/// operations, zero and one, copying and textual representation.
pub trait Scalar: nt::Num + Copy + fmt::Debug + fmt::Display {
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:literal, $one:literal);+ $(;)?) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )+
    };
}

impl_scalar!(
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    u128 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
);
