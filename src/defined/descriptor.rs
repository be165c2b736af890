// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

use super::error::{Error, Result};
use super::flags;
use super::repr::{Repr, Value};

/// The declaration of an enumerated type that is only known at run time.
///
/// The representation is resolved once on construction, every constant and candidate is then
/// parsed with it so all values handed to the decision share one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: String,
    repr: Repr,
    flags: bool,
    constants: Vec<Value>,
}

impl Descriptor {
    /// Build a descriptor from the textual form of its constants, in declaration order.
    ///
    /// # Example
    /// ```
    /// use libenumcheck::defined::{Descriptor, Repr};
    ///
    /// let perms = Descriptor::new("Perms", Repr::U32, true, &["0", "1", "2", "4"]).unwrap();
    /// assert!(perms.is_defined("5").unwrap());
    /// assert!(perms.ensure_defined("8").is_err());
    /// ```
    pub fn new<S>(name: &str, repr: Repr, flags: bool, constants: &[S]) -> Result<Descriptor>
    where
        S: AsRef<str>,
    {
        let constants = constants
            .iter()
            .map(|constant| repr.parse(constant.as_ref()))
            .collect::<Result<Vec<Value>>>()?;
        Ok(Descriptor {
            name: name.to_owned(),
            repr,
            flags,
            constants,
        })
    }

    /// The type name reported in [Error::InvalidValue].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The representation every value is parsed with.
    pub fn repr(&self) -> Repr {
        self.repr
    }

    /// Whether the constants combine as bit flags.
    pub fn flags(&self) -> bool {
        self.flags
    }

    /// The parsed constants, in declaration order.
    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    /// Parse `candidate` with this descriptor's representation.
    pub fn parse(&self, candidate: &str) -> Result<Value> {
        self.repr.parse(candidate)
    }

    /// Whether `candidate` is declared, or a valid combination of declared flags.
    pub fn is_defined(&self, candidate: &str) -> Result<bool> {
        let value = self.parse(candidate)?;
        flags::decide(value, self.constants.iter().copied(), self.flags)
    }

    /// Returns [Error::InvalidValue] when [Descriptor::is_defined] is false.
    pub fn ensure_defined(&self, candidate: &str) -> Result<()> {
        let value = self.parse(candidate)?;
        if flags::decide(value, self.constants.iter().copied(), self.flags)? {
            Ok(())
        } else {
            Err(Error::InvalidValue {
                type_name: self.name.clone(),
                value: value.to_string(),
            })
        }
    }
}
