//! Four-way joystick gesture decoding.
//!
//! The vertical axis feeds the Up/Down latches, the horizontal axis the
//! Left/Right latches.  Whenever any latch fires, all four are cleared so
//! only one navigation action is honoured per settle cycle.

use serde::{Deserialize, Serialize};

use super::edge::{AxisLatch, Band, Direction, Edge};

/// Arm/fire bands for each direction on one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureBands {
    pub up: Band,
    pub down: Band,
    pub left: Band,
    pub right: Band,
}

impl GestureBands {
    pub fn band(&self, direction: Direction) -> Band {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Latch group for the two joystick axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureLatches {
    up: AxisLatch,
    down: AxisLatch,
    left: AxisLatch,
    right: AxisLatch,
}

impl GestureLatches {
    /// Evaluation order within one tick.
    const ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    pub const fn new() -> Self {
        Self {
            up: AxisLatch::new(),
            down: AxisLatch::new(),
            left: AxisLatch::new(),
            right: AxisLatch::new(),
        }
    }

    /// Feed one pair of axis readings.  Returns the first direction that
    /// fired; the remaining latches are not observed on that tick.
    pub fn poll(&mut self, vertical: u16, horizontal: u16, bands: &GestureBands) -> Option<Direction> {
        for direction in Self::ORDER {
            let raw = match direction {
                Direction::Up | Direction::Down => vertical,
                Direction::Left | Direction::Right => horizontal,
            };
            let band = bands.band(direction);
            if self.latch_mut(direction).observe(raw, band, direction) == Edge::Fired {
                self.clear_all();
                return Some(direction);
            }
        }
        None
    }

    pub fn clear_all(&mut self) {
        self.up.clear();
        self.down.clear();
        self.left.clear();
        self.right.clear();
    }

    pub fn is_armed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up.is_armed(),
            Direction::Down => self.down.is_armed(),
            Direction::Left => self.left.is_armed(),
            Direction::Right => self.right.is_armed(),
        }
    }

    fn latch_mut(&mut self, direction: Direction) -> &mut AxisLatch {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}
