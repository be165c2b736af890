// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// stdlib usings
use std::result;

// extern usings
use slog::Drain;

/// Wraps a drain so that only records at or above `level` reach it.
pub struct LevelFilter<D> {
    drain: D,
    level: slog::Level,
}

impl<D> LevelFilter<D> {
    /// Wrap `drain`, dropping every record below `level`.
    pub fn new(drain: D, level: slog::Level) -> LevelFilter<D> {
        LevelFilter { drain, level }
    }
}

impl<D> Drain for LevelFilter<D>
where
    D: Drain,
{
    type Err = Option<D::Err>;
    type Ok = Option<D::Ok>;

    fn log(
        &self,
        record: &slog::Record,
        values: &slog::OwnedKVList,
    ) -> result::Result<Self::Ok, Self::Err> {
        if record.level().is_at_least(self.level) {
            self.drain.log(record, values).map(Some).map_err(Some)
        } else {
            Ok(None)
        }
    }
}
