//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the sensors, the joystick, the debug button and the relay bank,
//! exposing them through [`SensorPort`], [`InputPort`] and
//! [`ActuatorPort`].  This is the only module in the system that touches
//! actual hardware.  Pins are generic `embedded_hal` types: `PinDriver`s
//! on target, mocks on the host.

use embedded_hal::digital::{InputPin, OutputPin};
use log::{info, warn};

use crate::app::ports::{ActuatorPort, Axis, Channel, InputPort, SensorPort};
use crate::drivers::joystick::{AXIS_CENTRE, Joystick};
use crate::drivers::relay::RelayBank;
use crate::error::{Error, Result};
use crate::sensors::{MotionSensor, TemperatureSensor};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I: InputPin, O: OutputPin> {
    temperature: TemperatureSensor,
    motion: MotionSensor<I>,
    joystick: Joystick<I>,
    debug_button: I,
    relays: RelayBank<O>,
}

impl<I: InputPin, O: OutputPin> HardwareAdapter<I, O> {
    pub fn new(
        temperature: TemperatureSensor,
        motion: MotionSensor<I>,
        joystick: Joystick<I>,
        debug_button: I,
        relays: RelayBank<O>,
    ) -> Self {
        Self {
            temperature,
            motion,
            joystick,
            debug_button,
            relays,
        }
    }

    /// Read every input once.  Reports the first failure; `main` logs it
    /// and carries on with whatever the drivers return.
    pub fn self_test(&mut self) -> Result<()> {
        let temp_f = self.temperature.read()?;
        let motion = self.motion.read()?;
        let vertical = self.joystick.vertical()?;
        let horizontal = self.joystick.horizontal()?;
        info!(
            "Self-test: T={:.1}°F motion={} joystick=({}, {})",
            temp_f, motion, vertical, horizontal
        );
        self.relays.all_off().map_err(Error::from)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I: InputPin, O: OutputPin> SensorPort for HardwareAdapter<I, O> {
    fn read_temperature_f(&mut self) -> f32 {
        self.temperature.read_or_last()
    }

    fn read_motion(&mut self) -> bool {
        self.motion.detected()
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I: InputPin, O: OutputPin> InputPort for HardwareAdapter<I, O> {
    fn read_axis(&mut self, axis: Axis) -> u16 {
        let reading = match axis {
            Axis::Vertical => self.joystick.vertical(),
            Axis::Horizontal => self.joystick.horizontal(),
        };
        reading.unwrap_or(AXIS_CENTRE)
    }

    fn joystick_pressed(&mut self) -> bool {
        self.joystick.pressed().unwrap_or(false)
    }

    fn debug_pressed(&mut self) -> bool {
        self.debug_button.is_low().unwrap_or(false)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<I: InputPin, O: OutputPin> ActuatorPort for HardwareAdapter<I, O> {
    fn set_channel(&mut self, channel: Channel, on: bool) {
        let result = match channel {
            Channel::Cool => self.relays.set_cool(on),
            Channel::Heat => self.relays.set_heat(on),
        };
        if let Err(e) = result {
            warn!("Relay {:?} -> {} failed: {}", channel, on, e);
        }
    }
}
