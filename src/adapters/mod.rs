//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements              | Connects to                  |
//! |------------|-------------------------|------------------------------|
//! | `hardware` | SensorPort, InputPort   | ADC1, PIR, joystick button   |
//! |            | ActuatorPort            | Cool / heat relays           |
//! | `console`  | DisplayPort, LightPort  | Serial log (renderer stand-in)|
//! | `log_sink` | EventSink               | Serial log output            |
//! | `time`     | Clock                   | ESP32 system timer           |

pub mod console;
pub mod hardware;
pub mod log_sink;
pub mod time;
