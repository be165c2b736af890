// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// Standard usings
use std::fmt;
use std::str::FromStr;

// Super usings
use super::error::{Error, Result};

/// The closed set of underlying representations an enumerated type may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Repr {
    /// `bool`, widened to 0 or 1.
    Bool,
    /// `char`, widened to its Unicode scalar value.
    Char,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
}

impl Repr {
    /// All supported representation names, in the form accepted by [Repr::from_str].
    pub const NAMES: &'static [&'static str] = &[
        "bool", "char", "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64",
    ];

    /// Resolve an integer representation from its signedness and width in bits.
    ///
    /// ```
    /// use libenumcheck::defined::Repr;
    ///
    /// assert_eq!(Repr::from_width(true, 32).unwrap(), Repr::I32);
    /// assert!(Repr::from_width(false, 24).is_err());
    /// ```
    pub fn from_width(signed: bool, bits: u32) -> Result<Repr> {
        match (signed, bits) {
            (false, 8) => Ok(Repr::U8),
            (false, 16) => Ok(Repr::U16),
            (false, 32) => Ok(Repr::U32),
            (false, 64) => Ok(Repr::U64),
            (true, 8) => Ok(Repr::I8),
            (true, 16) => Ok(Repr::I16),
            (true, 32) => Ok(Repr::I32),
            (true, 64) => Ok(Repr::I64),
            _ => Err(Error::UnsupportedRepresentation {
                repr: format!("{}{}", if signed { "i" } else { "u" }, bits),
            }),
        }
    }

    /// Whether values of this representation widen into the signed 64-bit domain.
    pub fn is_signed(&self) -> bool {
        matches!(self, Repr::I8 | Repr::I16 | Repr::I32 | Repr::I64)
    }

    /// Width of the representation in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Repr::Bool | Repr::U8 | Repr::I8 => 8,
            Repr::U16 | Repr::I16 => 16,
            Repr::Char | Repr::U32 | Repr::I32 => 32,
            Repr::U64 | Repr::I64 => 64,
        }
    }

    /// Parse text as a value of this representation and widen it into the common domain.
    /// Text that does not fit the width is rejected rather than truncated. Surrounding
    /// whitespace is ignored except for `char`, where it may be the value itself.
    pub fn parse(&self, input: &str) -> Result<Value> {
        let trimmed = input.trim();
        let parsed = match self {
            Repr::Bool => trimmed.parse::<bool>().ok().map(|v| Value::Unsigned(v as u64)),
            Repr::Char => input.parse::<char>().ok().map(|v| Value::Unsigned(v as u64)),
            Repr::U8 => trimmed.parse::<u8>().ok().map(|v| Value::Unsigned(v.into())),
            Repr::U16 => trimmed.parse::<u16>().ok().map(|v| Value::Unsigned(v.into())),
            Repr::U32 => trimmed.parse::<u32>().ok().map(|v| Value::Unsigned(v.into())),
            Repr::U64 => trimmed.parse::<u64>().ok().map(Value::Unsigned),
            Repr::I8 => trimmed.parse::<i8>().ok().map(|v| Value::Signed(v.into())),
            Repr::I16 => trimmed.parse::<i16>().ok().map(|v| Value::Signed(v.into())),
            Repr::I32 => trimmed.parse::<i32>().ok().map(|v| Value::Signed(v.into())),
            Repr::I64 => trimmed.parse::<i64>().ok().map(Value::Signed),
        };
        parsed.ok_or_else(|| Error::Parse {
            input: input.to_owned(),
            repr: self.to_string(),
        })
    }
}

impl FromStr for Repr {
    type Err = Error;

    /// Handles converting a Rust primitive type name to a Repr. Anything else, including
    /// 128-bit integers, is an Error::UnsupportedRepresentation.
    ///
    /// ```
    /// # use std::str::FromStr;
    /// let repr = libenumcheck::defined::Repr::from_str("u16");
    /// assert_eq!(repr.unwrap(), libenumcheck::defined::Repr::U16);
    /// ```
    fn from_str(s: &str) -> Result<Repr> {
        match s {
            "bool" => Ok(Repr::Bool),
            "char" => Ok(Repr::Char),
            "u8" => Ok(Repr::U8),
            "u16" => Ok(Repr::U16),
            "u32" => Ok(Repr::U32),
            "u64" => Ok(Repr::U64),
            "i8" => Ok(Repr::I8),
            "i16" => Ok(Repr::I16),
            "i32" => Ok(Repr::I32),
            "i64" => Ok(Repr::I64),
            _ => Err(Error::UnsupportedRepresentation { repr: s.to_owned() }),
        }
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Repr::Bool => "bool",
            Repr::Char => "char",
            Repr::U8 => "u8",
            Repr::U16 => "u16",
            Repr::U32 => "u32",
            Repr::U64 => "u64",
            Repr::I8 => "i8",
            Repr::I16 => "i16",
            Repr::I32 => "i32",
            Repr::I64 => "i64",
        };
        f.write_str(name)
    }
}

/// A candidate or constant widened into the common 64-bit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// Unsigned, boolean and character representations.
    Unsigned(u64),
    /// Signed representations.
    Signed(i64),
}

impl Value {
    /// The raw flag bits of this value, or `None` when a signed value is negative and so
    /// can never take part in a flag combination.
    pub fn flag_bits(&self) -> Option<u64> {
        match *self {
            Value::Unsigned(bits) => Some(bits),
            Value::Signed(bits) if bits >= 0 => Some(bits as u64),
            Value::Signed(_) => None,
        }
    }

    /// Whether this is a negative signed value.
    pub fn is_negative(&self) -> bool {
        matches!(*self, Value::Signed(bits) if bits < 0)
    }

    pub(crate) fn as_signed(&self) -> i64 {
        match *self {
            Value::Unsigned(bits) => bits as i64,
            Value::Signed(bits) => bits,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(bits) => write!(f, "{}", bits),
            Value::Signed(bits) => write!(f, "{}", bits),
        }
    }
}
