//! Cooling / heating relay pair.
//!
//! Generic over `embedded_hal::digital::OutputPin` so the same driver runs
//! on `esp-idf-hal` `PinDriver`s and on host mocks.  The two relays are
//! never energised together: switching one on always switches the other
//! off first.

use embedded_hal::digital::{OutputPin, PinState};
use log::info;

use crate::error::ActuatorError;

pub struct RelayBank<P: OutputPin> {
    cool: P,
    heat: P,
    cool_on: bool,
    heat_on: bool,
}

impl<P: OutputPin> RelayBank<P> {
    /// Take ownership of both pins and drive them low.
    pub fn new(cool: P, heat: P) -> Result<Self, ActuatorError> {
        let mut bank = Self {
            cool,
            heat,
            cool_on: true,
            heat_on: true,
        };
        bank.all_off()?;
        Ok(bank)
    }

    pub fn set_cool(&mut self, on: bool) -> Result<(), ActuatorError> {
        if on {
            Self::drive(&mut self.heat, &mut self.heat_on, false, "heat")?;
        }
        Self::drive(&mut self.cool, &mut self.cool_on, on, "cool")
    }

    pub fn set_heat(&mut self, on: bool) -> Result<(), ActuatorError> {
        if on {
            Self::drive(&mut self.cool, &mut self.cool_on, false, "cool")?;
        }
        Self::drive(&mut self.heat, &mut self.heat_on, on, "heat")
    }

    pub fn all_off(&mut self) -> Result<(), ActuatorError> {
        Self::drive(&mut self.cool, &mut self.cool_on, false, "cool")?;
        Self::drive(&mut self.heat, &mut self.heat_on, false, "heat")
    }

    pub fn is_cool_on(&self) -> bool {
        self.cool_on
    }

    pub fn is_heat_on(&self) -> bool {
        self.heat_on
    }

    /// Only touches the pin when the level actually changes.
    fn drive(pin: &mut P, state: &mut bool, on: bool, name: &str) -> Result<(), ActuatorError> {
        if *state == on {
            return Ok(());
        }
        pin.set_state(PinState::from(on))
            .map_err(|_| ActuatorError::GpioWriteFailed)?;
        *state = on;
        info!("Relay {}: {}", name, if on { "ON" } else { "OFF" });
        Ok(())
    }
}
