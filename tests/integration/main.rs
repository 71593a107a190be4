//! Integration test suite for the DogBed controller.
//!
//! Drives [`AppService`](dogbed::app::service::AppService) end to end
//! through mock adapters and a hand-advanced clock.  No hardware or
//! ESP-IDF toolchain is needed.
//!
//! Run with: `cargo test --test integration`

mod mock_hw;

mod controller_tests;
mod setup_tests;
