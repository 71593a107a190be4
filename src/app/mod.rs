//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the DogBed controller:
//! FSM orchestration, input edge detection, animation and display
//! composition.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
