//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, joystick, relays, display, lights, event
//! sinks) implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! None of the ports return errors.  Drivers report failures once
//! themselves and hand the core their best available value.

use crate::animation::{BulbCommand, Rgb};
use crate::display::{Content, Rect};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Environmental readings.
pub trait SensorPort {
    /// Ambient temperature in °F.  Last known value if the sensor dropped out.
    fn read_temperature_f(&mut self) -> f32;

    /// Presence detector.  Only polled once the settle window has elapsed.
    fn read_motion(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: joystick and buttons → domain)
// ───────────────────────────────────────────────────────────────

/// Joystick axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Raw user input.  Edge detection happens in the core.
pub trait InputPort {
    /// Raw axis reading, 0 – 4095, centre ≈ 2048.
    fn read_axis(&mut self, axis: Axis) -> u16;

    /// Joystick push-button level (true = held down).
    fn joystick_pressed(&mut self) -> bool;

    /// Debug button level (true = held down).
    fn debug_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → relays)
// ───────────────────────────────────────────────────────────────

/// Relay channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Cool,
    Heat,
}

pub trait ActuatorPort {
    fn set_channel(&mut self, channel: Channel, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → panel)
// ───────────────────────────────────────────────────────────────

/// Buffered panel.  Nothing is visible until [`present`](Self::present).
pub trait DisplayPort {
    fn clear(&mut self);

    /// Blank `rect`, then draw `content` inside it.
    fn draw_region(&mut self, rect: Rect, content: &Content);

    fn present(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Light port (driven adapter: domain → pixel strip + smart bulb)
// ───────────────────────────────────────────────────────────────

pub trait LightPort {
    /// Fill the local pixel strip with one colour at `brightness`.
    fn set_pattern(&mut self, colour: Rgb, brightness: u8);

    /// Fire-and-forget command to the networked bulb.
    fn set_remote_light(&mut self, command: &BulbCommand);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
