//! Controller configuration parameters
//!
//! All tunable parameters for the DogBed controller.  Configuration is
//! volatile: every boot starts from [`ControllerConfig::default()`].

use serde::{Deserialize, Serialize};

use crate::input::{Band, GestureBands};

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Thresholds ---
    /// Initial cooling set-point (°F)
    pub cooling_temp_f: i32,
    /// Initial heating set-point (°F), must sit below the cooling set-point
    pub heating_temp_f: i32,

    // --- Motion settle window ---
    /// Countdown units shown after entering a waiting state
    pub settle_count: u8,
    /// Length of one countdown unit (milliseconds)
    pub countdown_period_ms: u32,

    // --- Animation ---
    /// Setup-mode blink half period (milliseconds)
    pub blink_period_ms: u32,
    /// Pixel brightness while blinking in setup
    pub blink_brightness: u8,
    /// Pixel brightness in Cooling / Heating
    pub steady_brightness: u8,
    /// Bulb brightness in Cooling / Heating
    pub bulb_steady_brightness: u8,
    /// Bulb brightness during the setup blink
    pub bulb_blink_brightness: u8,
    /// Minimum spacing between brightness-only bulb updates (milliseconds)
    pub bulb_min_interval_ms: u32,
    /// Smart-bulb index on the lighting bridge
    pub bulb_id: u8,

    // --- Joystick ---
    /// Bands used for screen navigation and the running states
    pub navigation_bands: GestureBands,
    /// Bands used on the temperature adjust screens
    pub adjust_bands: GestureBands,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let left = Band::new(1000, 1200);
        let right = Band::new(3500, 3300);
        Self {
            // Thresholds
            cooling_temp_f: 80,
            heating_temp_f: 75,

            // Settle window: 10 x 1 s
            settle_count: 10,
            countdown_period_ms: 1000,

            // Animation
            blink_period_ms: 500,
            blink_brightness: 10,
            steady_brightness: 40,
            bulb_steady_brightness: 100,
            bulb_blink_brightness: 200,
            bulb_min_interval_ms: 200,
            bulb_id: 3,

            // Joystick (12-bit ADC, centre ~2048)
            navigation_bands: GestureBands {
                up: Band::new(3500, 3300),
                down: Band::new(1500, 1700),
                left,
                right,
            },
            adjust_bands: GestureBands {
                up: Band::new(3000, 2800),
                down: Band::new(1000, 1200),
                left,
                right,
            },

            // Timing
            control_loop_interval_ms: 20, // 50 Hz
        }
    }
}

/// Reasons a [`ControllerConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Heating set-point is not strictly below the cooling set-point.
    ThresholdOrder,
    /// A timing parameter is zero.
    ZeroPeriod(&'static str),
    /// An arm/fire band does not place the fire threshold nearer centre.
    InvertedBand(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ThresholdOrder => write!(f, "heating set-point must be below cooling set-point"),
            Self::ZeroPeriod(field) => write!(f, "{} must be non-zero", field),
            Self::InvertedBand(field) => write!(f, "{}: fire threshold must sit nearer centre than arm", field),
        }
    }
}

impl ControllerConfig {
    /// Check the invariants the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heating_temp_f >= self.cooling_temp_f {
            return Err(ConfigError::ThresholdOrder);
        }
        if self.countdown_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod("countdown_period_ms"));
        }
        if self.settle_count == 0 {
            return Err(ConfigError::ZeroPeriod("settle_count"));
        }
        if self.blink_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod("blink_period_ms"));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ZeroPeriod("control_loop_interval_ms"));
        }
        Self::check_bands(&self.navigation_bands, "navigation_bands")?;
        Self::check_bands(&self.adjust_bands, "adjust_bands")?;
        Ok(())
    }

    fn check_bands(bands: &GestureBands, field: &'static str) -> Result<(), ConfigError> {
        // Above-sense bands (up/right) fire on the way down; below-sense bands
        // (down/left) fire on the way up.
        let ok = bands.up.fire <= bands.up.arm
            && bands.right.fire <= bands.right.arm
            && bands.down.fire >= bands.down.arm
            && bands.left.fire >= bands.left.arm;
        if ok { Ok(()) } else { Err(ConfigError::InvertedBand(field)) }
    }
}
