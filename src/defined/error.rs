// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// stdlib usings
use std::result;

// extern usings
use thiserror::Error;

/// Custom Result wrapper to simplify usage.
pub type Result<T> = result::Result<T, Error>;

/// Represents the failures that can occur while deciding whether a value is defined for
/// an enumerated type.
#[derive(Error, Debug, Clone, PartialEq, Eq, PartialOrd)]
pub enum Error {
    /// A negative candidate was checked against a signed flag-style type.
    #[error("the value '{value}' must be greater-than or equal to zero")]
    OutOfRange {
        /// The offending candidate.
        value: i64,
    },
    /// A signed flag-style type declares a negative constant, which makes the type itself
    /// impossible to validate as a set of flags.
    #[error("cannot validate flags with a declared constant '{constant}' that is less-than zero")]
    InvalidConfiguration {
        /// The first negative constant found in declaration order.
        constant: i64,
    },
    /// The underlying representation is not one of the supported fixed-width types.
    #[error("unsupported underlying representation: {repr}")]
    UnsupportedRepresentation {
        /// The representation as requested by the caller.
        repr: String,
    },
    /// The value is neither a declared constant nor a valid combination of flags.
    #[error("the type '{type_name}' value '{value}' is not defined or does not contain a valid bit combination")]
    InvalidValue {
        /// Name of the enumerated type.
        type_name: String,
        /// Textual form of the offending value.
        value: String,
    },
    /// Text that could not be read as a value of the representation.
    #[error("failed to parse '{input}' as {repr}")]
    Parse {
        /// The rejected text.
        input: String,
        /// Name of the representation it was parsed against.
        repr: String,
    },
}
