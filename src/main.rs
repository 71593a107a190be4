//! DogBed Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          ConsoleUi            LogEventSink    │
//! │  (Sensor+Input+Actuator)  (Display+Light)      (EventSink)     │
//! │  SystemClock (Clock)                                           │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  FSM · Setup screens · Override · Animation            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver, Pull};
use log::{info, warn};

use dogbed::adapters::console::ConsoleUi;
use dogbed::adapters::hardware::HardwareAdapter;
use dogbed::adapters::log_sink::LogEventSink;
use dogbed::adapters::time::SystemClock;
use dogbed::app::service::AppService;
use dogbed::config::ControllerConfig;
use dogbed::drivers::hw_init;
use dogbed::drivers::joystick::Joystick;
use dogbed::drivers::relay::RelayBank;
use dogbed::error::Error;
use dogbed::pins;
use dogbed::sensors::{MotionSensor, TemperatureSensor};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  DogBed v{}                          ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(Error::from)?;

    // SAFETY: each GPIO in `pins::DIGITAL_GPIOS` is claimed exactly once,
    // here, and nothing else in the firmware takes `Peripherals::pins`.
    let (pir, mut joy_button, mut debug_button, cool, heat) = unsafe {
        (
            PinDriver::input(AnyIOPin::new(pins::PIR_GPIO))?,
            PinDriver::input(AnyIOPin::new(pins::JOY_BUTTON_GPIO))?,
            PinDriver::input(AnyIOPin::new(pins::DEBUG_BUTTON_GPIO))?,
            PinDriver::output(AnyOutputPin::new(pins::COOL_RELAY_GPIO))?,
            PinDriver::output(AnyOutputPin::new(pins::HEAT_RELAY_GPIO))?,
        )
    };
    joy_button.set_pull(Pull::Up)?;
    debug_button.set_pull(Pull::Up)?;
    info!(
        "Pins: cool={} heat={} pir={} joy={} debug={}",
        pins::COOL_RELAY_GPIO,
        pins::HEAT_RELAY_GPIO,
        pins::PIR_GPIO,
        pins::JOY_BUTTON_GPIO,
        pins::DEBUG_BUTTON_GPIO
    );

    let relays = RelayBank::new(cool, heat).map_err(Error::from)?;

    let mut hw = HardwareAdapter::new(
        TemperatureSensor::new(pins::TEMP_ADC_CHANNEL),
        MotionSensor::new(pir),
        Joystick::new(pins::JOY_VERTICAL_CHANNEL, pins::JOY_HORIZONTAL_CHANNEL, joy_button),
        debug_button,
        relays,
    );

    // Sensor problems are reported once; the controller runs on whatever
    // the drivers return.
    if let Err(e) = hw.self_test() {
        warn!("Self-test failed: {}", e);
    }

    // ── 3. Application core ───────────────────────────────────
    let config = ControllerConfig::default();
    let interval_ms = config.control_loop_interval_ms;
    let mut ui = ConsoleUi::new(config.bulb_id);
    let mut sink = LogEventSink::new();
    let clock = SystemClock::new();

    let mut service = AppService::new(config);
    service.start(&mut sink);

    info!("System ready. Entering control loop ({} ms).", interval_ms);

    // ── 4. Control loop ───────────────────────────────────────
    loop {
        service.tick(&mut hw, &mut ui, &clock, &mut sink);
        FreeRtos::delay_ms(interval_ms);
    }
}
