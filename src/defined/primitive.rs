// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// Standard usings
use std::fmt::{Debug, Display};

// Super usings
use super::repr::{Repr, Value};

/// A fixed-width primitive that may back an enumerated type. This is implemented for
/// every member of [Repr] and nothing else, so generic checks are bounded at compile time.
pub trait Primitive: Copy + Debug + Display + PartialEq + Send + Sync + 'static {
    /// The representation tag for this primitive.
    const REPR: Repr;

    /// Widen this primitive into the common 64-bit domain.
    fn widen(self) -> Value;
}

macro_rules! unsigned_primitive {
    ($($ty:ty => $repr:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const REPR: Repr = Repr::$repr;

                #[inline]
                fn widen(self) -> Value {
                    Value::Unsigned(self as u64)
                }
            }
        )*
    };
}

macro_rules! signed_primitive {
    ($($ty:ty => $repr:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const REPR: Repr = Repr::$repr;

                #[inline]
                fn widen(self) -> Value {
                    Value::Signed(self as i64)
                }
            }
        )*
    };
}

unsigned_primitive! {
    bool => Bool,
    char => Char,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

signed_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn widened<T: Primitive>(value: T) -> (Repr, Value) {
        (T::REPR, value.widen())
    }

    #[rstest]
    #[case::bool(widened(true), (Repr::Bool, Value::Unsigned(1)))]
    #[case::char(widened('a'), (Repr::Char, Value::Unsigned(97)))]
    #[case::u8(widened(u8::MAX), (Repr::U8, Value::Unsigned(255)))]
    #[case::u16(widened(4u16), (Repr::U16, Value::Unsigned(4)))]
    #[case::u32(widened(u32::MAX), (Repr::U32, Value::Unsigned(4294967295)))]
    #[case::u64(widened(u64::MAX), (Repr::U64, Value::Unsigned(u64::MAX)))]
    #[case::i8(widened(-1i8), (Repr::I8, Value::Signed(-1)))]
    #[case::i16(widened(i16::MIN), (Repr::I16, Value::Signed(-32768)))]
    #[case::i32(widened(i32::MIN), (Repr::I32, Value::Signed(-2147483648)))]
    #[case::i64(widened(i64::MAX), (Repr::I64, Value::Signed(i64::MAX)))]
    fn test_widen(#[case] actual: (Repr, Value), #[case] expected: (Repr, Value)) {
        assert_eq!(actual, expected);
        assert_eq!(actual.0.is_signed(), matches!(actual.1, Value::Signed(_)));
    }
}
