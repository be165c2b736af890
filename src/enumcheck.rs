// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsString;
use std::str::FromStr;

use exitcode::ExitCode;
use structopt::clap::{crate_version, AppSettings};
use structopt::StructOpt;

use crate::defined::{Checker, Descriptor, Error, Repr};
use crate::log;

const ENUMCHECK: &str = "enumcheck";

/// Overall enumcheck binary configuration.
#[derive(Debug, Clone, StructOpt)]
#[structopt(
    global_settings = &[AppSettings::DeriveDisplayOrder],
    author = "Christian Saide <me@csaide.dev>",
    about = "Check values against the declaration of an enumerated type.",
    version = crate_version!()
)]
struct EnumcheckConfig {
    #[structopt(flatten)]
    log_config: log::Config,
    #[structopt(
        long = "name",
        short = "n",
        help = "The name of the enumerated type.",
        long_help = "Sets the type name reported alongside values that are not defined.",
        default_value = "enum",
        takes_value = true
    )]
    name: String,
    #[structopt(
        long = "repr",
        short = "r",
        env = "ENUMCHECK_REPR",
        help = "The underlying representation of the type.",
        long_help = "Sets the underlying representation, one of bool, char, u8, u16, u32, u64, i8, i16, i32 or i64.",
        default_value = "i32",
        takes_value = true
    )]
    repr: String,
    #[structopt(
        long = "flags",
        short = "f",
        env = "ENUMCHECK_FLAGS",
        help = "Whether the constants combine as bit flags.",
        long_help = "Treats values as bitwise combinations of the declared constants rather than requiring an exact match.",
        takes_value = false
    )]
    flags: bool,
    #[structopt(
        long = "constants",
        short = "c",
        help = "The declared constants, comma separated.",
        long_help = "The full set of declared constants of the type in declaration order, for example `0,1,2,4`.",
        require_delimiter = true,
        required = true,
        takes_value = true
    )]
    constants: Vec<String>,
    #[structopt(name = "VALUE", help = "The values to check.", required = true)]
    values: Vec<String>,
}

/// Validate every value given on the command line, returning [exitcode::OK] only when all of
/// them are defined.
pub fn run(args: Vec<OsString>) -> ExitCode {
    let cfg = match crate::base::config::<EnumcheckConfig>(args, ENUMCHECK) {
        Ok(cfg) => cfg,
        Err((code, message)) => {
            if !message.is_empty() {
                println!("{}", message);
            }
            return code;
        }
    };

    let root_logger = log::new(&cfg.log_config, ENUMCHECK, crate_version!());

    let repr = match Repr::from_str(&cfg.repr) {
        Ok(repr) => repr,
        Err(e) => {
            error!(root_logger, "Unsupported underlying representation."; "error" => e.to_string());
            return exitcode::CONFIG;
        }
    };

    let descriptor = match Descriptor::new(&cfg.name, repr, cfg.flags, &cfg.constants) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            error!(root_logger, "Failed to parse declared constants."; "error" => e.to_string(), "repr" => repr.to_string());
            return exitcode::CONFIG;
        }
    };

    let checker = Checker::new(&root_logger);
    let mut code = exitcode::OK;
    for value in cfg.values.iter() {
        match checker.ensure_descriptor(&descriptor, value) {
            Ok(()) => {
                info!(root_logger, "Value is defined."; "type" => descriptor.name(), "value" => value);
            }
            Err(e @ Error::InvalidValue { .. }) => {
                warn!(root_logger, "Value is invalid."; "error" => e.to_string());
                code = exitcode::DATAERR;
            }
            Err(Error::InvalidConfiguration { .. }) => return exitcode::CONFIG,
            Err(_) => code = exitcode::DATAERR,
        }
    }
    code
}
