//! PIR motion sensor (HC-SR501 style, HIGH = motion).

use embedded_hal::digital::InputPin;
use log::warn;

use crate::error::SensorError;

pub struct MotionSensor<P: InputPin> {
    pin: P,
    failure_reported: bool,
}

impl<P: InputPin> MotionSensor<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            failure_reported: false,
        }
    }

    pub fn read(&mut self) -> Result<bool, SensorError> {
        self.pin.is_high().map_err(|_| SensorError::GpioReadFailed)
    }

    /// A failed read counts as "no motion".
    pub fn detected(&mut self) -> bool {
        match self.read() {
            Ok(m) => {
                self.failure_reported = false;
                m
            }
            Err(e) => {
                if !self.failure_reported {
                    warn!("Motion read failed ({}), assuming none", e);
                    self.failure_reported = true;
                }
                false
            }
        }
    }
}
