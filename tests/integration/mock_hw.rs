//! Mock adapters for integration tests.
//!
//! Inputs are plain fields the test sets; every output call is recorded
//! so tests can assert on the full command history without touching real
//! GPIO, ADC, display or bulb hardware.

use dogbed::animation::{BulbCommand, Rgb};
use dogbed::app::events::AppEvent;
use dogbed::app::ports::{
    ActuatorPort, Axis, Channel, DisplayPort, EventSink, InputPort, LightPort, SensorPort,
};
use dogbed::app::service::AppService;
use dogbed::config::ControllerConfig;
use dogbed::display::{Content, Rect};
use dogbed::timing::ManualClock;

pub const CENTRE: u16 = 2048;
pub const HIGH: u16 = 4000;
pub const LOW: u16 = 100;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub temperature_f: f32,
    pub motion: bool,
    pub vertical: u16,
    pub horizontal: u16,
    pub joystick_down: bool,
    pub debug_down: bool,

    pub motion_reads: u32,
    pub cool: bool,
    pub heat: bool,
    /// Set if both relays were ever on at the same time.
    pub overlap_seen: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            temperature_f: 77.0,
            motion: false,
            vertical: CENTRE,
            horizontal: CENTRE,
            joystick_down: false,
            debug_down: false,
            motion_reads: 0,
            cool: false,
            heat: false,
            overlap_seen: false,
        }
    }
}

impl SensorPort for MockHardware {
    fn read_temperature_f(&mut self) -> f32 {
        self.temperature_f
    }

    fn read_motion(&mut self) -> bool {
        self.motion_reads += 1;
        self.motion
    }
}

impl InputPort for MockHardware {
    fn read_axis(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        }
    }

    fn joystick_pressed(&mut self) -> bool {
        self.joystick_down
    }

    fn debug_pressed(&mut self) -> bool {
        self.debug_down
    }
}

impl ActuatorPort for MockHardware {
    fn set_channel(&mut self, channel: Channel, on: bool) {
        match channel {
            Channel::Cool => self.cool = on,
            Channel::Heat => self.heat = on,
        }
        if self.cool && self.heat {
            self.overlap_seen = true;
        }
    }
}

// ── MockUi ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum UiCall {
    Clear,
    Region(Rect, Content),
    Present,
    Pattern(Rgb, u8),
    Bulb(BulbCommand),
}

#[derive(Default)]
pub struct MockUi {
    pub calls: Vec<UiCall>,
}

#[allow(dead_code)]
impl MockUi {
    pub fn count(&self, pred: impl Fn(&UiCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clears(&self) -> usize {
        self.count(|c| *c == UiCall::Clear)
    }

    pub fn bulb_commands(&self) -> Vec<BulbCommand> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                UiCall::Bulb(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn last_pattern(&self) -> Option<(Rgb, u8)> {
        self.calls.iter().rev().find_map(|c| match c {
            UiCall::Pattern(colour, brightness) => Some((*colour, *brightness)),
            _ => None,
        })
    }

    /// Panel calls (clear, region, present) recorded after index `from`.
    pub fn draw_ops_since(&self, from: usize) -> usize {
        self.calls[from..]
            .iter()
            .filter(|c| matches!(c, UiCall::Clear | UiCall::Region(..) | UiCall::Present))
            .count()
    }

    pub fn drew(&self, content: &Content) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, UiCall::Region(_, drawn) if drawn == content))
    }
}

impl DisplayPort for MockUi {
    fn clear(&mut self) {
        self.calls.push(UiCall::Clear);
    }

    fn draw_region(&mut self, rect: Rect, content: &Content) {
        self.calls.push(UiCall::Region(rect, *content));
    }

    fn present(&mut self) {
        self.calls.push(UiCall::Present);
    }
}

impl LightPort for MockUi {
    fn set_pattern(&mut self, colour: Rgb, brightness: u8) {
        self.calls.push(UiCall::Pattern(colour, brightness));
    }

    fn set_remote_light(&mut self, command: &BulbCommand) {
        self.calls.push(UiCall::Bulb(*command));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig: service + mocks + clock ──────────────────────────────

/// One control-loop period.
pub const TICK_MS: u64 = 20;

pub struct Rig {
    pub app: AppService,
    pub hw: MockHardware,
    pub ui: MockUi,
    pub sink: RecordingSink,
    pub clock: ManualClock,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    /// Started service, one idle tick already run so the buttons are armed.
    pub fn with_config(config: ControllerConfig) -> Self {
        let mut rig = Self {
            app: AppService::new(config),
            hw: MockHardware::new(),
            ui: MockUi::default(),
            sink: RecordingSink::default(),
            clock: ManualClock::new(0),
        };
        rig.app.start(&mut rig.sink);
        rig.tick();
        rig
    }

    pub fn tick(&mut self) {
        self.clock.advance(TICK_MS);
        self.app
            .tick(&mut self.hw, &mut self.ui, &self.clock, &mut self.sink);
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Run the loop for `ms` of simulated time.
    pub fn run_for(&mut self, ms: u64) {
        for _ in 0..ms.div_ceil(TICK_MS) {
            self.tick();
        }
    }

    pub fn click(&mut self) {
        self.hw.joystick_down = true;
        self.tick();
        self.hw.joystick_down = false;
        self.tick();
    }

    pub fn debug_click(&mut self) {
        self.hw.debug_down = true;
        self.tick();
        self.hw.debug_down = false;
        self.tick();
    }

    pub fn flick_up(&mut self) {
        self.flick_vertical(HIGH);
    }

    pub fn flick_down(&mut self) {
        self.flick_vertical(LOW);
    }

    pub fn flick_right(&mut self) {
        self.flick_horizontal(HIGH);
    }

    pub fn flick_left(&mut self) {
        self.flick_horizontal(LOW);
    }

    fn flick_vertical(&mut self, extreme: u16) {
        self.hw.vertical = extreme;
        self.tick();
        self.hw.vertical = CENTRE;
        self.tick();
    }

    fn flick_horizontal(&mut self, extreme: u16) {
        self.hw.horizontal = extreme;
        self.tick();
        self.hw.horizontal = CENTRE;
        self.tick();
    }

    /// Let the settle window run out and give motion one tick to be read.
    pub fn settle(&mut self) {
        let cfg = self.app.current_config();
        let window = u64::from(cfg.settle_count) * u64::from(cfg.countdown_period_ms);
        self.run_for(window + 2 * TICK_MS);
    }
}
