//! Relay and joystick drivers plus one-shot ADC initialisation.

pub mod hw_init;
pub mod joystick;
pub mod relay;
