//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use serde::Serialize;

use crate::control::{ForceMode, ThresholdPair};
use crate::fsm::{SetupScreen, StateId};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The application service has started (carries initial state).
    Started(StateId),

    /// The FSM transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// The Setup sub-screen changed.
    ScreenChanged { from: SetupScreen, to: SetupScreen },

    /// A set-point was adjusted (carries both, after clamping).
    ThresholdsChanged(ThresholdPair),

    /// The user forced cooling or heating from the Manual screen.
    OverrideRequested(ForceMode),

    /// Debug button snapshot.
    DebugSnapshot(TelemetryData),
}

/// A point-in-time snapshot suitable for logging or transmission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryData {
    pub state: StateId,
    /// Only present while in Setup.
    pub screen: Option<SetupScreen>,
    pub temperature_f: f32,
    pub thresholds: ThresholdPair,
    pub motion: bool,
    pub motion_settled: bool,
    pub cool_on: bool,
    pub heat_on: bool,
    pub force: Option<ForceMode>,
    pub uptime_ms: u64,
    /// Control ticks run since start.
    pub ticks: u64,
}
