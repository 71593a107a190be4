//! DogBed controller firmware library.
//!
//! Exposes the pure-logic modules for integration testing and host
//! simulation.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod animation;
pub mod app;
pub mod config;
pub mod control;
pub mod display;
pub mod error;
pub mod fsm;
pub mod input;
pub mod pins;
pub mod timing;

pub mod adapters;
pub mod drivers;
pub mod sensors;
