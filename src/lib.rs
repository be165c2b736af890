// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

//! The libenumcheck library decides whether integer values are defined for an enumerated
//! type, either as a declared constant or as a valid combination of declared bit flags.

// macro usings
#[macro_use]
extern crate slog;

mod base;

/// Definedness checks for simple and flag-style enumerated types.
pub mod defined;
/// Entrypoint logic for enumcheck.
pub mod enumcheck;
/// General logging utilities/functionality, based ontop of the [slog] ecosystem.
pub mod log;
