//! Joystick and button input interpretation.
//!
//! Raw readings are sampled every tick; this module turns them into
//! discrete one-shot events.  Nothing here touches hardware.

pub mod edge;
pub mod gestures;

pub use edge::{AxisLatch, Band, ButtonEdge, Direction, Edge, Sense};
pub use gestures::{GestureBands, GestureLatches};
