// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Roster controller.
//!
//! [`Roster`] pairs a [`Session`] with a [`StoreClient`] and runs the
//! load, save, roster and solver flows against the store. Everything that
//! mutates the store goes through [`Roster::editor`], which is `None` in
//! view-only mode.

use rota_core::{
    Applied, Constraints, GridView, Mode, Month, Session, Shift, Worker, WorkerId,
};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::sync::{StoreClient, Transport, WebSocketTransport};

/// Outcome of a successful solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assigned {
    /// Message from the store, shown to the user as is.
    pub message: String,
    /// False when the reload after the solver failed. The grid then still
    /// shows the state from before the run.
    pub refreshed: bool,
}

pub struct Roster<T: Transport = WebSocketTransport> {
    session: Session,
    client: StoreClient<T>,
}

impl<T: Transport> Roster<T> {
    pub fn new(mode: Mode, month: Month, client: StoreClient<T>) -> Self {
        Roster {
            session: Session::new(mode, month),
            client,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn month(&self) -> Month {
        self.session.month()
    }

    pub fn view(&self) -> GridView {
        GridView::of(&self.session)
    }

    /// Fetches the roster, rebuilds the grid for `month` and loads its
    /// records.
    pub async fn load_month(&mut self, month: Month) -> Result<()> {
        let workers = self.client.workers().await?;
        debug!("fetched {} workers", workers.len());
        let ticket = self.session.begin_month(month, workers);
        self.fetch(ticket).await
    }

    /// Reloads the displayed month from the store. The grid is only
    /// replaced once the records have arrived.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.session.begin_refresh();
        self.fetch(ticket).await
    }

    async fn fetch(&mut self, ticket: rota_core::LoadTicket) -> Result<()> {
        let records = self.client.schedules(ticket.range()).await?;
        let report = match self.session.apply_load(&ticket, &records) {
            Applied::Merged(report) => report,
            Applied::Stale => {
                debug!("load for {} superseded", ticket.month());
                Default::default()
            }
        };
        if report.dropped > 0 {
            warn!("dropped {} records outside the grid", report.dropped);
        }
        info!(
            month = %ticket.month(),
            workers = self.session.workers().len(),
            applied = report.applied,
            normalized = report.normalized,
            "loaded schedules"
        );
        Ok(())
    }

    /// Resolves a worker by id or by name.
    pub fn find_worker(&self, needle: &str) -> Result<WorkerId> {
        let workers = self.session.workers();
        if let Ok(id) = needle.parse::<WorkerId>() {
            if workers.iter().any(|w| w.id == id) {
                return Ok(id);
            }
        }
        workers
            .iter()
            .find(|w| w.name == needle)
            .or_else(|| workers.iter().find(|w| w.name.eq_ignore_ascii_case(needle)))
            .map(|w| w.id)
            .ok_or_else(|| Error::UnknownWorker(needle.to_string()))
    }

    /// Roster listing without touching the grid.
    pub async fn list_workers(&mut self) -> Result<Vec<Worker>> {
        Ok(self.client.workers().await?)
    }

    /// Mutation capability. `None` in view-only mode.
    pub fn editor(&mut self) -> Option<RosterEditor<'_, T>> {
        match self.session.mode() {
            Mode::Edit => Some(RosterEditor { roster: self }),
            Mode::View => None,
        }
    }

    pub async fn close(&mut self) {
        if let Err(e) = self.client.disconnect().await {
            debug!("disconnect failed: {}", e);
        }
    }
}

/// Store-mutating operations of an editable roster.
pub struct RosterEditor<'a, T: Transport> {
    roster: &'a mut Roster<T>,
}

impl<T: Transport> RosterEditor<'_, T> {
    fn session_editor(&mut self) -> Result<rota_core::Editor<'_>> {
        self.roster.session.editor().ok_or(Error::ViewOnly)
    }

    /// Advances one cell. Local only until [`RosterEditor::save`].
    pub fn cycle(&mut self, worker_id: WorkerId, day: u32) -> Result<Shift> {
        Ok(self.session_editor()?.cycle_day(worker_id, day)?)
    }

    /// Pushes every cell of the grid as one bulk upsert.
    pub async fn save(&mut self) -> Result<String> {
        let records = self.session_editor()?.save_payload()?;
        let count = records.len();
        let message = self.roster.client.upsert(records).await?;
        info!("saved {} cells", count);
        Ok(message)
    }

    /// Adds a worker, then rebuilds the grid with the new roster.
    ///
    /// Unsaved edits are discarded by the rebuild.
    pub async fn add_worker(&mut self, name: &str) -> Result<Worker> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::FieldEmpty { field: "name" });
        }
        let worker = self.roster.client.create_worker(name).await?;
        info!("added worker {} ({})", worker.name, worker.id);
        let month = self.roster.month();
        self.roster.load_month(month).await?;
        Ok(worker)
    }

    /// Runs the solver for the displayed month and reloads on success.
    ///
    /// The grid is left untouched when the solver fails. A failed reload
    /// after a successful run is not an error: the store already holds the
    /// new assignment, so the message is returned with `refreshed` unset.
    pub async fn auto_assign(&mut self, constraints: Constraints) -> Result<Assigned> {
        let (request, guard) = self.session_editor()?.begin_auto_assign(constraints)?;
        let outcome = self.roster.client.auto_assign(request).await;
        drop(guard);
        let message = outcome?;
        info!("auto-assign: {}", message);
        let refreshed = match self.roster.refresh().await {
            Ok(()) => true,
            Err(e) => {
                warn!("reload after auto-assign failed: {}", e);
                false
            }
        };
        Ok(Assigned { message, refreshed })
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
