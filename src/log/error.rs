// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// stdlib usings
use std::result;

// extern usings
use thiserror::Error;

/// Custom Result wrapper to simplify usage.
pub type Result<T> = result::Result<T, Error>;

/// Errors raised while turning user configuration into log handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq, PartialOrd)]
pub enum Error {
    #[error("invalid level specified: {level}, expected one of {}", super::Level::NAMES.join(", "))]
    InvalidLevel {
        /// The configured but unknown level name.
        level: String,
    },
}
