// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// stdlib usings
use std::io;

// extern usings
use slog::Drain;

mod config;
mod error;
mod filter;
mod level;

pub use self::config::Config;
pub use self::error::{Error, Result};
pub use self::level::Level;

/// A logger that drops every record, for tests and callers that do not want reports.
pub fn noop() -> slog::Logger {
    slog::Logger::root(slog::Discard, o!())
}

/// Return a default logger for use before configuration has been parsed. This logger only
/// emits critical records and should be replaced by one built with [new].
///
/// # Example
/// ```
/// use slog::crit;
///
/// let logger = libenumcheck::log::default("example", "0.1.1");
/// crit!(logger, "default logger only logs crit level logs!"; "hello" => "world!");
/// ```
pub fn default(bin: &'static str, version: &'static str) -> slog::Logger {
    let cfg = Config {
        level: Level::Crit,
        json: false,
    };
    new(&cfg, bin, version)
}

/// Return a newly constructed slog::Logger based on the supplied configuration.
/// This also injects the application name and version as base key/value pairs for the
/// returned root logger.
///
/// # Example
/// ```
/// use slog::info;
///
/// let logger = libenumcheck::log::new(
///     &libenumcheck::log::Config {
///         level: libenumcheck::log::Level::Info,
///         json: true,
///     },
///     "example",
///     "0.1.1",
/// );
///
/// info!(logger, "Hello world!"; "woot" => "woot");
/// ```
pub fn new(cfg: &Config, bin: &'static str, version: &'static str) -> slog::Logger {
    let drain: Box<dyn Drain<Ok = (), Err = slog::Never> + Send> = if cfg.json {
        Box::new(
            slog_json::Json::new(io::stdout())
                .add_default_keys()
                .build()
                .fuse(),
        )
    } else {
        let decorator = slog_term::TermDecorator::new().build();
        Box::new(
            slog_term::FullFormat::new(decorator)
                .use_utc_timestamp()
                .build()
                .fuse(),
        )
    };

    let drain = filter::LevelFilter::new(drain, cfg.level.to_slog()).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, o!("binary" => bin, "version" => version))
}
