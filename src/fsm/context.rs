//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single owned struct that state handlers read from
//! and write to.  It holds the latest input snapshot, actuator commands,
//! the set-points and override flags, the settle window, the pending
//! display commands, and configuration.  Think of it as the "blackboard"
//! in a blackboard architecture.

use crate::config::ControllerConfig;
use crate::control::{ForceOverride, ThresholdStore};
use crate::display::DisplayQueue;
use crate::input::{Direction, GestureBands, GestureLatches};
use crate::timing::CountdownTimer;

use super::setup::SetupScreen;

// ---------------------------------------------------------------------------
// Input snapshot (written by the service before each tick)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every input the state handlers look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSnapshot {
    /// Ambient temperature (°F), last known value if the sensor dropped out.
    pub temperature_f: f32,
    /// Motion reading.  Held `false` while the settle window runs.
    pub motion: bool,
    /// Raw vertical joystick axis (0 – 4095).
    pub vertical: u16,
    /// Raw horizontal joystick axis (0 – 4095).
    pub horizontal: u16,
    /// Joystick push-button edge: true on the tick the click fired.
    pub joystick_clicked: bool,
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            temperature_f: 0.0,
            motion: false,
            vertical: CENTRE,
            horizontal: CENTRE,
            joystick_clicked: false,
        }
    }
}

/// Resting joystick position on a 12-bit ADC.
const CENTRE: u16 = 2048;

// ---------------------------------------------------------------------------
// Actuator commands (written by state handlers; consumed by the service)
// ---------------------------------------------------------------------------

/// Requested relay outputs.  The service applies these every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuatorCommands {
    pub cool: bool,
    pub heat: bool,
}

impl ActuatorCommands {
    /// Both channels off: safe default.
    pub fn all_off() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Motion settle window
// ---------------------------------------------------------------------------

/// Countdown units after entering a waiting state during which motion is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionWindow {
    length: u8,
    elapsed: u8,
    active: bool,
}

impl MotionWindow {
    pub const fn new(length: u8) -> Self {
        Self {
            length,
            elapsed: 0,
            active: false,
        }
    }

    /// Start a fresh window.
    pub fn restart(&mut self) {
        self.elapsed = 0;
        self.active = true;
    }

    /// Stop the window without settling it (used when leaving to Off/Setup).
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.active = false;
    }

    /// Count one elapsed unit.  Returns the units still remaining.
    pub fn advance(&mut self) -> u8 {
        if self.active {
            self.elapsed = self.elapsed.saturating_add(1).min(self.length);
            if self.elapsed >= self.length {
                self.active = false;
            }
        }
        self.remaining()
    }

    pub fn remaining(&self) -> u8 {
        if self.active {
            self.length - self.elapsed
        } else {
            0
        }
    }

    /// True once motion may be read live.
    pub fn is_settled(&self) -> bool {
        !self.active
    }
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Monotonic time of the current tick (ms), sampled once by the service.
    pub now_ms: u64,

    // -- Inputs --
    pub sensors: SensorSnapshot,
    pub gestures: GestureLatches,

    // -- Waiting-state bookkeeping --
    pub motion: MotionWindow,
    pub countdown: CountdownTimer,

    // -- Outputs --
    pub commands: ActuatorCommands,
    pub display: DisplayQueue,

    // -- User settings --
    pub thresholds: ThresholdStore,
    pub overrides: ForceOverride,
    /// Setup sub-screen; only meaningful while in `Setup`.
    pub screen: SetupScreen,

    pub config: ControllerConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            now_ms: 0,
            sensors: SensorSnapshot::default(),
            gestures: GestureLatches::new(),
            motion: MotionWindow::new(config.settle_count),
            countdown: CountdownTimer::new(),
            commands: ActuatorCommands::all_off(),
            display: DisplayQueue::new(),
            thresholds: ThresholdStore::new(config.cooling_temp_f, config.heating_temp_f),
            overrides: ForceOverride::new(),
            screen: SetupScreen::OnOff,
            config,
        }
    }

    /// Feed the joystick axes through the gesture latches using `bands`.
    pub fn poll_gesture(&mut self, bands: GestureBands) -> Option<Direction> {
        self.gestures
            .poll(self.sensors.vertical, self.sensors.horizontal, &bands)
    }

    /// Drop everything a running cycle accumulated: actuators, motion,
    /// settle window and countdown.
    pub fn stop_cycle(&mut self) {
        self.commands = ActuatorCommands::all_off();
        self.sensors.motion = false;
        self.motion.reset();
        self.countdown.stop();
    }

    /// Start a fresh settle window and its visible countdown.
    pub fn begin_settle(&mut self) {
        self.commands = ActuatorCommands::all_off();
        self.sensors.motion = false;
        self.motion.restart();
        self.countdown
            .start(self.config.countdown_period_ms, &self.now_ms);
    }

    /// Temperature is below the heating set-point.
    pub fn too_cold(&self) -> bool {
        self.sensors.temperature_f < self.thresholds.heating_f() as f32
    }

    /// Temperature is above the cooling set-point.
    pub fn too_hot(&self) -> bool {
        self.sensors.temperature_f > self.thresholds.cooling_f() as f32
    }
}
