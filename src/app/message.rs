// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::controls;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward the
/// panel's messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// Result from the background photo dialog. `None` covers both
    /// cancellation and failure.
    BackgroundPicked(Option<PathBuf>),
    /// The independent swap timer armed at reset trigger time has fired,
    /// carrying the generation of the cycle it belongs to.
    ResetSwapDue(u64),
    /// Animation tick while a reset transition is in flight.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional image path used as the initial background.
    pub background: Option<String>,
}
