// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

use super::descriptor::Descriptor;
use super::enumeration::Enumeration;
use super::error::{Error, Result};
use super::primitive::Primitive;
use super::repr::Repr;

/// Runs definedness checks while reporting their outcome to a logger. The results are exactly
/// those of the underlying pure operations.
#[derive(Clone)]
pub struct Checker {
    logger: slog::Logger,
}

impl Checker {
    /// Create a checker reporting to a child of `logger`.
    pub fn new(logger: &slog::Logger) -> Checker {
        Checker {
            logger: logger.new(o!("module" => "checker")),
        }
    }

    /// Check a statically declared enumeration value.
    pub fn check<E>(&self, value: &E) -> Result<bool>
    where
        E: Enumeration,
    {
        let raw = value.repr();
        let result = value.is_defined();
        self.report(E::NAME, &raw.to_string(), E::FLAGS, <E::Repr as Primitive>::REPR, &result);
        result
    }

    /// Like [Checker::check], escalating an undefined value to [Error::InvalidValue].
    pub fn ensure<E>(&self, value: &E) -> Result<()>
    where
        E: Enumeration,
    {
        if self.check(value)? {
            Ok(())
        } else {
            Err(Error::InvalidValue {
                type_name: E::NAME.to_owned(),
                value: value.repr().to_string(),
            })
        }
    }

    /// Check the textual `candidate` against a runtime descriptor.
    pub fn check_descriptor(&self, descriptor: &Descriptor, candidate: &str) -> Result<bool> {
        let result = descriptor.is_defined(candidate);
        self.report(
            descriptor.name(),
            candidate,
            descriptor.flags(),
            descriptor.repr(),
            &result,
        );
        result
    }

    /// Like [Checker::check_descriptor], escalating an undefined value to
    /// [Error::InvalidValue] carrying the parsed, normalized value.
    pub fn ensure_descriptor(&self, descriptor: &Descriptor, candidate: &str) -> Result<()> {
        if self.check_descriptor(descriptor, candidate)? {
            Ok(())
        } else {
            descriptor.ensure_defined(candidate)
        }
    }

    fn report(&self, name: &str, value: &str, flags: bool, repr: Repr, result: &Result<bool>) {
        let repr = repr.to_string();
        match result {
            Ok(true) => {
                debug!(self.logger, "Value is defined.";
                    "type" => name, "value" => value, "repr" => repr, "flags" => flags);
            }
            Ok(false) => {
                debug!(self.logger, "Value is not defined.";
                    "type" => name, "value" => value, "repr" => repr, "flags" => flags);
            }
            Err(e @ Error::InvalidConfiguration { .. }) => {
                error!(self.logger, "Type cannot be validated.";
                    "type" => name, "repr" => repr, "error" => e.to_string());
            }
            Err(e) => {
                warn!(self.logger, "Value failed validation.";
                    "type" => name, "value" => value, "repr" => repr, "error" => e.to_string());
            }
        }
    }
}
