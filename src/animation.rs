//! Pixel-strip and smart-bulb animation engine.
//!
//! Maps the current operating state to a visual pattern and produces one
//! [`VisualCommand`] per tick.  The pixel strip is local and cheap, so it
//! is driven every tick.  The bulb sits behind a network bridge, so bulb
//! commands pass through a filter that drops exact repeats and spaces out
//! brightness-only changes.
//!
//! | State          | Colour | Pattern                          |
//! |----------------|--------|----------------------------------|
//! | Off            | —      | dark                             |
//! | Setup          | white  | 500 ms on / 500 ms off blink     |
//! | WaitingToCool  | blue   | breathing, 2.5 s period          |
//! | Cooling        | blue   | steady                           |
//! | WaitingToHeat  | yellow | breathing, 2.5 s period          |
//! | Heating        | yellow | steady                           |

use core::f32::consts::PI;

use crate::config::ControllerConfig;
use crate::fsm::StateId;

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

pub const COLOUR_DARK: Rgb = (0, 0, 0);
pub const COLOUR_SETUP: Rgb = (255, 255, 255); // White
pub const COLOUR_COOL: Rgb = (0, 0, 255); // Blue
pub const COLOUR_HEAT: Rgb = (255, 255, 0); // Yellow

// Bulb hues on the bridge's 16-bit colour wheel.
pub const HUE_ORANGE: u16 = 5_000;
pub const HUE_YELLOW: u16 = 12_750;
pub const HUE_BLUE: u16 = 43_690;

/// Full saturation on the bridge's 0–255 scale.
const SATURATION_FULL: u8 = 255;

/// Breathing curve: `AMPLITUDE * sin(2π · FREQ_HZ · t) + OFFSET`.
const BREATH_AMPLITUDE: f32 = 7.0;
const BREATH_OFFSET: f32 = 10.0;
const BREATH_FREQ_HZ: f32 = 2.0 / 5.0;
const BREATH_PERIOD_MS: u64 = 2_500;

/// Local pixel strip output: one colour at one brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCommand {
    pub colour: Rgb,
    pub brightness: u8,
}

/// Remote smart-bulb output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulbCommand {
    pub on: bool,
    pub hue: u16,
    pub brightness: u8,
    pub saturation: u8,
}

impl BulbCommand {
    pub const OFF: Self = Self {
        on: false,
        hue: 0,
        brightness: 0,
        saturation: 0,
    };

    pub const fn lit(hue: u16, brightness: u8) -> Self {
        Self {
            on: true,
            hue,
            brightness,
            saturation: SATURATION_FULL,
        }
    }

    /// Same on/off state and colour; only brightness or saturation differs.
    fn same_colour(&self, other: &Self) -> bool {
        self.on == other.on && self.hue == other.hue
    }
}

/// Output of one [`AnimationEngine::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualCommand {
    pub pixels: PixelCommand,
    /// `None` when the bulb already shows this, or a brightness-only
    /// change arrived too soon after the last send.
    pub bulb: Option<BulbCommand>,
}

/// Animation engine.  Stack-allocated, no heap.
pub struct AnimationEngine {
    blink_period_ms: u64,
    blink_brightness: u8,
    steady_brightness: u8,
    bulb_steady_brightness: u8,
    bulb_blink_brightness: u8,
    bulb_min_interval_ms: u64,

    /// State rendered on the previous call; a change restarts the blink.
    last_state: Option<StateId>,
    blink_on: bool,
    last_switch_ms: u64,

    last_bulb: Option<BulbCommand>,
    last_bulb_sent_ms: u64,
}

impl AnimationEngine {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            blink_period_ms: u64::from(config.blink_period_ms),
            blink_brightness: config.blink_brightness,
            steady_brightness: config.steady_brightness,
            bulb_steady_brightness: config.bulb_steady_brightness,
            bulb_blink_brightness: config.bulb_blink_brightness,
            bulb_min_interval_ms: u64::from(config.bulb_min_interval_ms),
            last_state: None,
            blink_on: false,
            last_switch_ms: 0,
            last_bulb: None,
            last_bulb_sent_ms: 0,
        }
    }

    /// Produce the visual output for `state` at `now_ms`.
    pub fn render(&mut self, state: StateId, now_ms: u64) -> VisualCommand {
        let state_changed = self.last_state != Some(state);
        if state_changed {
            self.last_state = Some(state);
            self.blink_on = true;
            self.last_switch_ms = now_ms;
        }

        let (pixels, bulb) = match state {
            StateId::Off => (
                PixelCommand {
                    colour: COLOUR_DARK,
                    brightness: 0,
                },
                BulbCommand::OFF,
            ),
            StateId::Setup => self.blink(now_ms),
            StateId::WaitingToCool => Self::breathe(COLOUR_COOL, HUE_BLUE, now_ms),
            StateId::WaitingToHeat => Self::breathe(COLOUR_HEAT, HUE_YELLOW, now_ms),
            StateId::Cooling => self.steady(COLOUR_COOL, HUE_BLUE),
            StateId::Heating => self.steady(COLOUR_HEAT, HUE_YELLOW),
        };

        VisualCommand {
            pixels,
            bulb: self.filter_bulb(bulb, now_ms, state_changed),
        }
    }

    /// Breathing brightness at `now_ms`: 3..=17 on a 2.5 s sine.
    pub fn breathing_brightness(now_ms: u64) -> u8 {
        // Reduce to one period first so f32 keeps its precision after days of uptime.
        let t = (now_ms % BREATH_PERIOD_MS) as f32 / 1000.0;
        let level = BREATH_AMPLITUDE * (2.0 * PI * BREATH_FREQ_HZ * t).sin() + BREATH_OFFSET;
        level.clamp(0.0, f32::from(u8::MAX)) as u8
    }

    fn blink(&mut self, now_ms: u64) -> (PixelCommand, BulbCommand) {
        if now_ms.saturating_sub(self.last_switch_ms) > self.blink_period_ms {
            self.blink_on = !self.blink_on;
            self.last_switch_ms = now_ms;
        }
        if self.blink_on {
            (
                PixelCommand {
                    colour: COLOUR_SETUP,
                    brightness: self.blink_brightness,
                },
                BulbCommand::lit(HUE_ORANGE, self.bulb_blink_brightness),
            )
        } else {
            (
                PixelCommand {
                    colour: COLOUR_DARK,
                    brightness: self.blink_brightness,
                },
                BulbCommand::OFF,
            )
        }
    }

    fn breathe(colour: Rgb, hue: u16, now_ms: u64) -> (PixelCommand, BulbCommand) {
        let brightness = Self::breathing_brightness(now_ms);
        (
            PixelCommand { colour, brightness },
            BulbCommand::lit(hue, brightness),
        )
    }

    fn steady(&self, colour: Rgb, hue: u16) -> (PixelCommand, BulbCommand) {
        (
            PixelCommand {
                colour,
                brightness: self.steady_brightness,
            },
            BulbCommand::lit(hue, self.bulb_steady_brightness),
        )
    }

    /// Drop exact repeats; throttle brightness-only changes within a state.
    fn filter_bulb(
        &mut self,
        cmd: BulbCommand,
        now_ms: u64,
        state_changed: bool,
    ) -> Option<BulbCommand> {
        if let Some(prev) = self.last_bulb {
            if prev == cmd {
                return None;
            }
            let since = now_ms.saturating_sub(self.last_bulb_sent_ms);
            if !state_changed && prev.same_colour(&cmd) && since < self.bulb_min_interval_ms {
                return None;
            }
        }
        self.last_bulb = Some(cmd);
        self.last_bulb_sent_ms = now_ms;
        Some(cmd)
    }
}
