//! Setup sub-machine: the four configuration screens.
//!
//! ```text
//!   OnOff ──right──▶ CoolingTemp ──right──▶ HeatingTemp ──right──▶ Manual
//!     ◀──────left────────  ◀──────left────────  ◀───────left───────
//! ```
//!
//! On the temperature screens Up lowers and Down raises the set-point.
//! On the Manual screen Up forces cooling and Down forces heating.

use log::info;

use crate::control::ForceMode;
use crate::display;
use crate::input::{Direction, GestureBands};

use super::StateId;
use super::context::FsmContext;

const COOLING_TITLE: &str = "Set cooling temp";
const HEATING_TITLE: &str = "Set heating temp";

/// Which Setup screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SetupScreen {
    OnOff,
    CoolingTemp,
    HeatingTemp,
    Manual,
}

impl SetupScreen {
    /// Temperature screens use the tighter fine-adjust bands.
    pub fn bands(self, ctx: &FsmContext) -> GestureBands {
        match self {
            Self::CoolingTemp | Self::HeatingTemp => ctx.config.adjust_bands,
            Self::OnOff | Self::Manual => ctx.config.navigation_bands,
        }
    }
}

/// Switch to `screen` and request a redraw.  Arriving on the on/off
/// screen drops any manual override and both actuator channels.
pub fn enter_screen(ctx: &mut FsmContext, screen: SetupScreen) {
    if ctx.screen != screen {
        info!("Setup screen: {:?} -> {:?}", ctx.screen, screen);
    }
    ctx.screen = screen;
    if screen == SetupScreen::OnOff {
        ctx.overrides.clear();
        ctx.stop_cycle();
    }
    ctx.display.mark_dirty();
}

/// Apply one navigation gesture.  Returns a top-level state to leave for.
pub fn navigate(ctx: &mut FsmContext, direction: Direction) -> Option<StateId> {
    match (ctx.screen, direction) {
        (SetupScreen::OnOff, Direction::Down) => return Some(StateId::Off),
        (SetupScreen::OnOff, Direction::Up) => return Some(StateId::WaitingToCool),
        (SetupScreen::OnOff, Direction::Right) => enter_screen(ctx, SetupScreen::CoolingTemp),
        (SetupScreen::OnOff, Direction::Left) => {}

        (SetupScreen::CoolingTemp, Direction::Right) => enter_screen(ctx, SetupScreen::HeatingTemp),
        (SetupScreen::CoolingTemp, Direction::Left) => enter_screen(ctx, SetupScreen::OnOff),
        (SetupScreen::CoolingTemp, Direction::Up) => adjust_cooling(ctx, -1),
        (SetupScreen::CoolingTemp, Direction::Down) => adjust_cooling(ctx, 1),

        (SetupScreen::HeatingTemp, Direction::Left) => enter_screen(ctx, SetupScreen::CoolingTemp),
        (SetupScreen::HeatingTemp, Direction::Right) => enter_screen(ctx, SetupScreen::Manual),
        (SetupScreen::HeatingTemp, Direction::Up) => adjust_heating(ctx, -1),
        (SetupScreen::HeatingTemp, Direction::Down) => adjust_heating(ctx, 1),

        (SetupScreen::Manual, Direction::Left) => enter_screen(ctx, SetupScreen::HeatingTemp),
        (SetupScreen::Manual, Direction::Right) => {}
        (SetupScreen::Manual, Direction::Up) => request(ctx, ForceMode::Cool),
        (SetupScreen::Manual, Direction::Down) => request(ctx, ForceMode::Heat),
    }
    None
}

/// Compose the full screen for the current Setup sub-screen.
pub fn render(ctx: &mut FsmContext) {
    match ctx.screen {
        SetupScreen::OnOff => display::compose_on_off(&mut ctx.display),
        SetupScreen::CoolingTemp => {
            let value = ctx.thresholds.cooling_f();
            display::compose_set_point(&mut ctx.display, COOLING_TITLE, value);
        }
        SetupScreen::HeatingTemp => {
            let value = ctx.thresholds.heating_f();
            display::compose_set_point(&mut ctx.display, HEATING_TITLE, value);
        }
        SetupScreen::Manual => display::compose_manual(&mut ctx.display),
    }
}

fn adjust_cooling(ctx: &mut FsmContext, delta: i32) {
    ctx.thresholds.adjust_cooling(delta);
    let pair = ctx.thresholds.pair();
    info!("Cooling set-point {}°F (heating {}°F)", pair.cooling_f, pair.heating_f);
    ctx.display.mark_dirty();
}

fn adjust_heating(ctx: &mut FsmContext, delta: i32) {
    ctx.thresholds.adjust_heating(delta);
    let pair = ctx.thresholds.pair();
    info!("Heating set-point {}°F (cooling {}°F)", pair.heating_f, pair.cooling_f);
    ctx.display.mark_dirty();
}

fn request(ctx: &mut FsmContext, mode: ForceMode) {
    info!("Manual override requested: {:?}", mode);
    ctx.overrides.request(mode);
}
