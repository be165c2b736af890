// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// crate usings
use super::Level;

// extern usings
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt, PartialEq, PartialOrd)]
/// Enumcheck logging configuration.
pub struct Config {
    #[structopt(
        long = "log-level",
        short = "l",
        env = "ENUMCHECK_LOG_LEVEL",
        help = "The logging level to use.",
        long_help = "Selects the maximum logging level, `debug` reports every individual check.",
        default_value = "info",
        possible_values = Level::NAMES,
        takes_value = true
    )]
    /// Define the logging level to use.
    pub level: Level,

    #[structopt(
        long = "log-json",
        short = "j",
        env = "ENUMCHECK_LOG_JSON",
        help = "Whether or not to log in JSON format.",
        long_help = "Sets whether or not to emit one JSON object per log record on stdout.",
        takes_value = false
    )]
    /// Define whether or not to log in json format.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            level: Level::Info,
            json: false,
        }
    }
}
