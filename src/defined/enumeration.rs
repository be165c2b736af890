// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

use super::flags;
use super::primitive::Primitive;
use super::Result;

/// A type restricted to a fixed, author declared set of integer constants.
///
/// The declaration replaces runtime reflection: the author lists every constant in
/// declaration order and states whether the constants are meant to be combined as flags.
///
/// # Example
/// ```
/// use libenumcheck::defined::Enumeration;
///
/// #[derive(Clone, Copy)]
/// struct Perms(u8);
///
/// impl Enumeration for Perms {
///     type Repr = u8;
///     const NAME: &'static str = "Perms";
///     const FLAGS: bool = true;
///     const CONSTANTS: &'static [u8] = &[0, 1, 2, 4];
///
///     fn repr(&self) -> u8 {
///         self.0
///     }
/// }
///
/// assert!(Perms(6).is_defined().unwrap());
/// assert!(Perms(9).ensure_defined().is_err());
/// ```
pub trait Enumeration {
    /// The underlying representation of the type.
    type Repr: Primitive;

    /// The type name reported in [super::Error::InvalidValue].
    const NAME: &'static str;

    /// Whether the constants are combined via bitwise OR.
    const FLAGS: bool = false;

    /// Every declared constant, in declaration order.
    const CONSTANTS: &'static [Self::Repr];

    /// The raw value held by this instance.
    fn repr(&self) -> Self::Repr;

    /// Whether this value is declared, or a valid combination of declared flags.
    fn is_defined(&self) -> Result<bool> {
        Self::is_defined_repr(self.repr())
    }

    /// Returns [super::Error::InvalidValue] when [Enumeration::is_defined] is false.
    fn ensure_defined(&self) -> Result<()> {
        flags::ensure_defined(self.repr(), Self::CONSTANTS, Self::FLAGS, Self::NAME)
    }

    /// Check a raw value against this type's declaration before wrapping it.
    fn is_defined_repr(raw: Self::Repr) -> Result<bool> {
        flags::is_defined(raw, Self::CONSTANTS, Self::FLAGS)
    }
}
