//! Sensor drivers: NTC thermistor and PIR motion detector.

pub mod motion;
pub mod temperature;

pub use motion::MotionSensor;
pub use temperature::TemperatureSensor;
