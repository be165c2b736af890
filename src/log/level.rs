// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// Super usings
use super::error::{Error, Result};

// Standard usings
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
/// Set the verbosity of check reports printed to the configured handler.
pub enum Level {
    /// Only report failures to run a check at all.
    Crit,
    /// Also report types that cannot be validated.
    Error,
    /// Also report values that fail validation.
    Warn,
    /// Also report per value summaries.
    Info,
    /// Report the outcome of every individual check.
    Debug,
}

impl Level {
    /// Every accepted level name, most to least severe.
    pub const NAMES: &'static [&'static str] = &["critical", "error", "warn", "info", "debug"];

    /// Handles converting the internal log level to the lower level slog representation
    /// of log levels for consumption.
    ///
    /// ```
    /// let x = libenumcheck::log::Level::Warn;
    /// assert_eq!(x.to_slog(), slog::Level::Warning);
    /// ```
    pub fn to_slog(self) -> slog::Level {
        match self {
            Level::Crit => slog::Level::Critical,
            Level::Error => slog::Level::Error,
            Level::Warn => slog::Level::Warning,
            Level::Info => slog::Level::Info,
            Level::Debug => slog::Level::Debug,
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Unknown names are an Error::InvalidLevel.
    ///
    /// ```
    /// # use std::str::FromStr;
    /// let x = libenumcheck::log::Level::from_str("debug");
    /// assert_eq!(x.unwrap(), libenumcheck::log::Level::Debug);
    /// ```
    fn from_str(t: &str) -> Result<Level> {
        match t {
            "critical" => Ok(Level::Crit),
            "error" => Ok(Level::Error),
            "warn" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(Error::InvalidLevel {
                level: t.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let idx = *self as usize;
        f.write_str(Level::NAMES[idx])
    }
}
