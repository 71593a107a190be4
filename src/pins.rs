//! GPIO / peripheral pin assignments for the DogBed controller board.
//!
//! Single source of truth: `main` claims every digital pin and the ADC
//! drivers read every channel from here.

// ---------------------------------------------------------------------------
// Relays (active HIGH, driven through a ULN2003)
// ---------------------------------------------------------------------------

/// Cooling fan / Peltier relay.
pub const COOL_RELAY_GPIO: i32 = 38;
/// Heating pad relay.
pub const HEAT_RELAY_GPIO: i32 = 39;

// ---------------------------------------------------------------------------
// Analog inputs (ADC1, 12-bit, 12 dB attenuation)
// ---------------------------------------------------------------------------

/// NTC thermistor: 10 kΩ @ 25 °C, voltage divider to ADC.
/// ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const TEMP_ADC_CHANNEL: u32 = 0;

/// Joystick vertical axis.  ADC1 channel 1 (GPIO 2).
pub const JOY_VERTICAL_CHANNEL: u32 = 1;

/// Joystick horizontal axis.  ADC1 channel 2 (GPIO 3).
pub const JOY_HORIZONTAL_CHANNEL: u32 = 2;

// ---------------------------------------------------------------------------
// Digital inputs
// ---------------------------------------------------------------------------

/// Joystick push-button (active-low, internal pull-up).
pub const JOY_BUTTON_GPIO: i32 = 4;
/// Debug button (active-low, internal pull-up).
pub const DEBUG_BUTTON_GPIO: i32 = 0;
/// PIR motion sensor output (HIGH = motion).
pub const PIR_GPIO: i32 = 5;

/// Every GPIO claimed by number at boot.
pub const DIGITAL_GPIOS: [i32; 5] = [
    COOL_RELAY_GPIO,
    HEAT_RELAY_GPIO,
    JOY_BUTTON_GPIO,
    DEBUG_BUTTON_GPIO,
    PIR_GPIO,
];
