//! Two-axis analog joystick with push-button.
//!
//! Axes are read through the ADC1 oneshot helpers in [`hw_init`]; the
//! button is an active-low `embedded_hal` input with pull-up.  A failed
//! read returns the centre position or "released" so a glitch never
//! produces a gesture.

use embedded_hal::digital::InputPin;

use super::hw_init;
use crate::error::SensorError;

/// Resting position on a 12-bit ADC.
pub const AXIS_CENTRE: u16 = 2048;

pub struct Joystick<B: InputPin> {
    vertical_channel: u32,
    horizontal_channel: u32,
    button: B,
}

impl<B: InputPin> Joystick<B> {
    pub fn new(vertical_channel: u32, horizontal_channel: u32, button: B) -> Self {
        Self {
            vertical_channel,
            horizontal_channel,
            button,
        }
    }

    pub fn vertical(&self) -> Result<u16, SensorError> {
        hw_init::adc1_read(self.vertical_channel)
    }

    pub fn horizontal(&self) -> Result<u16, SensorError> {
        hw_init::adc1_read(self.horizontal_channel)
    }

    pub fn pressed(&mut self) -> Result<bool, SensorError> {
        self.button
            .is_low()
            .map_err(|_| SensorError::GpioReadFailed)
    }
}
