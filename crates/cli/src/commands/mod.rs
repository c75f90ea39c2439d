// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod assign;
pub mod edit;
pub mod share;
pub mod show;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod worker;

use rota_core::{Constraints, Mode, Month};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::sync::{ClientConfig, StoreClient};

/// Printed when the grid could not be reloaded after auto-assign.
pub const RELOAD_WARNING: &str =
    "warning: could not reload the month; the grid predates auto-assign";

/// Settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub mode: Mode,
    pub color: bool,
}

impl Context {
    /// A roster for `month` talking to the configured store. Nothing is
    /// sent until the first load.
    pub fn roster(&self, month: Month) -> Roster {
        let client = StoreClient::new(ClientConfig {
            url: self.config.server_url.clone(),
            connect_timeout_secs: self.config.connect_timeout_secs,
        });
        Roster::new(self.mode, month, client)
    }

    /// Fails fast when the session is view-only.
    pub fn require_edit(&self) -> Result<()> {
        if self.mode.is_view_only() {
            return Err(Error::ViewOnly);
        }
        Ok(())
    }
}

/// The month containing today, in local time.
pub fn current_month() -> Month {
    Month::of(chrono::Local::now().date_naive())
}

/// Solver minimums from explicit values, falling back to the config.
pub fn constraints(
    config: &Config,
    min_day: Option<i64>,
    min_night: Option<i64>,
) -> Result<Constraints> {
    let defaults = config.auto_assign.constraints();
    Ok(Constraints::try_new(
        min_day.unwrap_or(i64::from(defaults.min_day)),
        min_night.unwrap_or(i64::from(defaults.min_night)),
    )?)
}
