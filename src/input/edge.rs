//! Latched edge detection for analog axes and digital buttons.
//!
//! ## Axis latch
//!
//! Each direction of a joystick axis has its own [`AxisLatch`] and an
//! arm/fire [`Band`]:
//!
//! ```text
//!  4095 ┬──────────────────────
//!       │   arm (Up)    ── reading above: latch armed
//!       │   fire (Up)   ── armed + reading back below: Fired
//!  2048 ┼── centre
//!       │   fire (Down) ── armed + reading back above: Fired
//!       │   arm (Down)  ── reading below: latch armed
//!     0 ┴──────────────────────
//! ```
//!
//! A gesture fires once, on the return toward centre, no matter how long
//! the stick dwells at the extreme.

use serde::{Deserialize, Serialize};

/// Result of feeding one reading into a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Fired,
    Idle,
}

/// Which side of a threshold arms the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Arms when the reading rises above the arm threshold.
    Above,
    /// Arms when the reading falls below the arm threshold.
    Below,
}

/// Joystick gesture direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Up and Right read high on the ADC; Down and Left read low.
    pub const fn sense(self) -> Sense {
        match self {
            Self::Up | Self::Right => Sense::Above,
            Self::Down | Self::Left => Sense::Below,
        }
    }
}

/// Arm/fire threshold pair for one direction, in raw ADC counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Far threshold: crossing it arms the latch.
    pub arm: u16,
    /// Near-centre threshold: crossing back past it fires.
    pub fire: u16,
}

impl Band {
    pub const fn new(arm: u16, fire: u16) -> Self {
        Self { arm, fire }
    }
}

/// One-shot latch for a single axis direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisLatch {
    armed: bool,
}

impl AxisLatch {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Feed one raw reading.  Arming and firing never happen on the same
    /// reading.
    pub fn observe(&mut self, raw: u16, band: Band, direction: Direction) -> Edge {
        let (past_arm, back_past_fire) = match direction.sense() {
            Sense::Above => (raw > band.arm, raw < band.fire),
            Sense::Below => (raw < band.arm, raw > band.fire),
        };

        if !self.armed {
            if past_arm {
                self.armed = true;
            }
            return Edge::Idle;
        }

        if back_past_fire {
            self.armed = false;
            return Edge::Fired;
        }

        Edge::Idle
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn clear(&mut self) {
        self.armed = false;
    }
}

/// Press detector for an active-high digital button level.
///
/// Fires on the released → pressed transition.  The latch only arms after
/// a released level has been seen, so a button held through boot or
/// through a state change does not fire until it is let go and pressed
/// again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    armed: bool,
}

impl ButtonEdge {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    pub fn observe(&mut self, pressed: bool) -> Edge {
        if !pressed {
            self.armed = true;
            return Edge::Idle;
        }
        if self.armed {
            self.armed = false;
            return Edge::Fired;
        }
        Edge::Idle
    }
}
