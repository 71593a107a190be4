//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::ScreenChanged { from, to } => {
                info!("SCREEN | {:?} -> {:?}", from, to);
            }
            AppEvent::ThresholdsChanged(pair) => {
                info!(
                    "SETPOINT | cool={}\u{00b0}F heat={}\u{00b0}F",
                    pair.cooling_f, pair.heating_f
                );
            }
            AppEvent::OverrideRequested(mode) => {
                info!("OVERRIDE | force={:?}", mode);
            }
            AppEvent::DebugSnapshot(t) => match serde_json::to_string(t) {
                Ok(json) => info!("DEBUG | {}", json),
                Err(e) => warn!("DEBUG | snapshot encode failed: {}", e),
            },
        }
    }
}
