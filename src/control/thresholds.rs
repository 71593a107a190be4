//! Cooling/heating set-points with a strict ordering invariant.
//!
//! `heating < cooling` holds after every mutation.  Adjusting one
//! set-point past the other drags the other along, one degree apart.
//! There is no absolute floor or ceiling beyond what `i32` can hold.

use serde::{Deserialize, Serialize};

/// Snapshot of both set-points, in whole °F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub cooling_f: i32,
    pub heating_f: i32,
}

/// Owner of the [`ThresholdPair`]; the only way to mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdStore {
    pair: ThresholdPair,
}

impl ThresholdStore {
    // Keep one degree of headroom at both ends so the clamp never overflows.
    const MIN_F: i32 = i32::MIN + 1;
    const MAX_F: i32 = i32::MAX - 1;

    /// Build a store.  An overlapping pair is repaired by pulling heating
    /// below cooling.
    pub fn new(cooling_f: i32, heating_f: i32) -> Self {
        let cooling_f = cooling_f.clamp(Self::MIN_F, Self::MAX_F);
        let heating_f = heating_f.min(cooling_f - 1);
        Self {
            pair: ThresholdPair {
                cooling_f,
                heating_f,
            },
        }
    }

    pub fn pair(&self) -> ThresholdPair {
        self.pair
    }

    pub fn cooling_f(&self) -> i32 {
        self.pair.cooling_f
    }

    pub fn heating_f(&self) -> i32 {
        self.pair.heating_f
    }

    /// Move the cooling set-point; heating is pulled down if needed.
    pub fn adjust_cooling(&mut self, delta: i32) {
        let cooling = self
            .pair
            .cooling_f
            .saturating_add(delta)
            .clamp(Self::MIN_F, Self::MAX_F);
        self.pair.cooling_f = cooling;
        if self.pair.heating_f >= cooling {
            self.pair.heating_f = cooling - 1;
        }
    }

    /// Move the heating set-point; cooling is pushed up if needed.
    pub fn adjust_heating(&mut self, delta: i32) {
        let heating = self
            .pair
            .heating_f
            .saturating_add(delta)
            .clamp(Self::MIN_F - 1, Self::MAX_F - 1);
        self.pair.heating_f = heating;
        if heating >= self.pair.cooling_f {
            self.pair.cooling_f = heating + 1;
        }
    }
}
