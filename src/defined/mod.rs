// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

mod checker;
mod descriptor;
mod enumeration;
mod error;
mod flags;
mod primitive;
mod repr;

pub use self::checker::Checker;
pub use self::descriptor::Descriptor;
pub use self::enumeration::Enumeration;
pub use self::error::{Error, Result};
pub use self::flags::{ensure_defined, is_defined};
pub use self::primitive::Primitive;
pub use self::repr::{Repr, Value};
