//! NTC thermistor temperature sensor (10 kOhm @ 25 C, B = 3950).
//!
//! Wired in a voltage-divider with a fixed 10 kOhm resistor, read via
//! the ESP32-S3 ADC.  The simplified Beta (Steinhart-Hart) equation
//! converts resistance to temperature, reported in °F.
//!
//! A failed or implausible reading falls back to the last good value.
//! Before the first good reading that value is NaN, which compares false
//! against both set-points, so the controller neither heats nor cools.

use log::warn;

use crate::drivers::hw_init;
use crate::error::SensorError;

const R25: f32 = 10_000.0;
const BETA: f32 = 3950.0;
const T25_K: f32 = 298.15;
const R_DIVIDER: f32 = 10_000.0;
const ADC_MAX: f32 = 4095.0;
const V_REF: f32 = 3.3;
/// Readings this close to either rail mean an open or shorted thermistor.
const RAIL_MARGIN_V: f32 = 0.01;

pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 9.0 / 5.0 + 32.0
}

pub struct TemperatureSensor {
    adc_channel: u32,
    last_good_f: f32,
    /// Set after the first failure is logged, cleared by a good read.
    failure_reported: bool,
}

impl TemperatureSensor {
    pub fn new(adc_channel: u32) -> Self {
        Self {
            adc_channel,
            last_good_f: f32::NAN,
            failure_reported: false,
        }
    }

    /// One fresh reading in °F.
    pub fn read(&mut self) -> Result<f32, SensorError> {
        let raw = hw_init::adc1_read(self.adc_channel)?;
        let celsius = adc_to_celsius(raw)?;
        Ok(celsius_to_fahrenheit(celsius))
    }

    /// Fresh reading, or the last good one if this read failed.
    pub fn read_or_last(&mut self) -> f32 {
        match self.read() {
            Ok(f) => {
                self.last_good_f = f;
                self.failure_reported = false;
            }
            Err(e) => {
                if !self.failure_reported {
                    warn!("Temperature read failed ({}), holding {:.1}°F", e, self.last_good_f);
                    self.failure_reported = true;
                }
            }
        }
        self.last_good_f
    }
}

fn adc_to_celsius(raw: u16) -> Result<f32, SensorError> {
    let voltage = (raw as f32 / ADC_MAX) * V_REF;
    if voltage <= RAIL_MARGIN_V || voltage >= (V_REF - RAIL_MARGIN_V) {
        return Err(SensorError::OutOfRange);
    }
    let r_ntc = R_DIVIDER * voltage / (V_REF - voltage);
    let inv_t = (1.0 / T25_K) + (1.0 / BETA) * (r_ntc / R25).ln();
    if inv_t <= 0.0 {
        return Err(SensorError::OutOfRange);
    }
    Ok((1.0 / inv_t) - 273.15)
}
