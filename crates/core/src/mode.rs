// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Editable vs. view-only capability gate.
//!
//! The mode is decided once when a session is constructed and never
//! changes afterwards. It restricts what the interaction surface offers;
//! the grid itself knows nothing about it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query key carrying the mode in an entry string or share link.
const MODE_KEY: &str = "mode";
const VIEW_VALUE: &str = "view";

/// Session capability mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Cells can be cycled; save, roster and auto-assign are offered.
    #[default]
    Edit,
    /// Read-only viewing. No mutation is reachable.
    View,
}

/// Operations offered by the interaction surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Advance a cell along the shift cycle.
    Cycle,
    /// Push the whole grid to the store.
    Save,
    /// Add a worker to the roster.
    AddWorker,
    /// Run the remote solver.
    AutoAssign,
    /// Switch the displayed month.
    ChangeMonth,
    /// Produce a view-only link.
    Share,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Cycle,
        Action::Save,
        Action::AddWorker,
        Action::AutoAssign,
        Action::ChangeMonth,
        Action::Share,
    ];

    /// Returns true for actions that change the grid, the roster, or the
    /// store.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Action::Cycle | Action::Save | Action::AddWorker | Action::AutoAssign
        )
    }
}

impl Mode {
    /// Mode from a plain boolean signal.
    pub fn from_flag(view_only: bool) -> Self {
        if view_only {
            Mode::View
        } else {
            Mode::Edit
        }
    }

    /// Mode from a URL-style entry string such as `?mode=view` or
    /// `https://host/roster?mode=view#top`. Anything else is editable.
    pub fn from_entry(entry: &str) -> Self {
        let view = query_pairs(entry).any(|(key, value)| key == MODE_KEY && value == VIEW_VALUE);
        Mode::from_flag(view)
    }

    pub fn is_view_only(&self) -> bool {
        *self == Mode::View
    }

    /// Whether `action` is offered in this mode.
    pub fn allows(&self, action: Action) -> bool {
        match self {
            Mode::Edit => true,
            Mode::View => !action.is_mutating(),
        }
    }

    /// Actions offered in this mode, in display order.
    pub fn actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.allows(*action))
            .collect()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Edit => write!(f, "edit"),
            Mode::View => write!(f, "view"),
        }
    }
}

fn split_entry(entry: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match entry.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (entry, None),
    };
    match rest.split_once('?') {
        Some((base, query)) => (base, Some(query), fragment),
        None => (rest, None, fragment),
    }
}

fn query_pairs(entry: &str) -> impl Iterator<Item = (&str, &str)> {
    let (_, query, _) = split_entry(entry);
    query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

/// Builds the view-only share link for `base`.
///
/// Any existing `mode` parameter is replaced; other parameters and the
/// fragment are kept.
pub fn share_link(base: &str) -> String {
    let (path, _, fragment) = split_entry(base);
    let mut params: Vec<String> = query_pairs(base)
        .filter(|(key, _)| *key != MODE_KEY)
        .map(|(key, value)| {
            if value.is_empty() {
                key.to_string()
            } else {
                format!("{key}={value}")
            }
        })
        .collect();
    params.push(format!("{MODE_KEY}={VIEW_VALUE}"));

    let mut link = format!("{path}?{}", params.join("&"));
    if let Some(fragment) = fragment {
        link.push('#');
        link.push_str(fragment);
    }
    link
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
