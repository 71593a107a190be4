//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers: no closures, no
//! dynamic dispatch, no heap.
//!
//! ```text
//!  OFF ──[click]──▶ SETUP ──[OnOff: up]──▶ WAITING_TO_COOL ──[settled ∧ M]──▶ COOLING
//!   ▲                │ ▲                        │    ▲                             │
//!   └──[OnOff: down]─┘ │                  [T < heat]  [T > cool]             [T < heat]
//!                      │                        ▼    │                             ▼
//!                      │                   WAITING_TO_HEAT ──[settled ∧ M]──▶ HEATING
//!                      │
//!                      └──────────[left, from any running state]
//! ```
//!
//! A manual override bypasses the temperature and motion rules entirely;
//! the service forces the target state before the table runs, and the
//! handlers below stop evaluating temperature while it is set.

use super::context::FsmContext;
use super::setup::{self, SetupScreen};
use super::{StateDescriptor, StateId};
use crate::display;
use crate::input::Direction;
use crate::timing::TimerTick;
use log::{debug, info};

const WAITING_TO_COOL_TITLE: &str = "Waiting to cool";
const WAITING_TO_HEAT_TITLE: &str = "Waiting to heat";
const COOLING_TITLE: &str = "Cooling";
const HEATING_TITLE: &str = "Heating";

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Off
        StateDescriptor {
            id: StateId::Off,
            name: "Off",
            on_enter: Some(off_enter),
            on_exit: None,
            on_update: off_update,
            render: off_render,
        },
        // Index 1: Setup
        StateDescriptor {
            id: StateId::Setup,
            name: "Setup",
            on_enter: Some(setup_enter),
            on_exit: None,
            on_update: setup_update,
            render: setup::render,
        },
        // Index 2: WaitingToCool
        StateDescriptor {
            id: StateId::WaitingToCool,
            name: "WaitingToCool",
            on_enter: Some(waiting_enter),
            on_exit: Some(waiting_exit),
            on_update: waiting_to_cool_update,
            render: waiting_to_cool_render,
        },
        // Index 3: Cooling
        StateDescriptor {
            id: StateId::Cooling,
            name: "Cooling",
            on_enter: Some(cooling_enter),
            on_exit: None,
            on_update: cooling_update,
            render: cooling_render,
        },
        // Index 4: WaitingToHeat
        StateDescriptor {
            id: StateId::WaitingToHeat,
            name: "WaitingToHeat",
            on_enter: Some(waiting_enter),
            on_exit: Some(waiting_exit),
            on_update: waiting_to_heat_update,
            render: waiting_to_heat_render,
        },
        // Index 5: Heating
        StateDescriptor {
            id: StateId::Heating,
            name: "Heating",
            on_enter: Some(heating_enter),
            on_exit: None,
            on_update: heating_update,
            render: heating_render,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Shared rules for the running states
// ═══════════════════════════════════════════════════════════════════════════

/// Horizontal-left from any running state goes back to Setup.
fn left_pressed(ctx: &mut FsmContext) -> bool {
    let bands = ctx.config.navigation_bands;
    ctx.poll_gesture(bands) == Some(Direction::Left)
}

fn heat_path(ctx: &FsmContext) -> StateId {
    if ctx.sensors.motion {
        StateId::Heating
    } else {
        StateId::WaitingToHeat
    }
}

fn cool_path(ctx: &FsmContext) -> StateId {
    if ctx.sensors.motion {
        StateId::Cooling
    } else {
        StateId::WaitingToCool
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  OFF state
// ═══════════════════════════════════════════════════════════════════════════

fn off_enter(ctx: &mut FsmContext) {
    ctx.overrides.clear();
    ctx.stop_cycle();
    info!("OFF: actuators off");
}

fn off_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.sensors.joystick_clicked {
        return Some(StateId::Setup);
    }
    None
}

fn off_render(ctx: &mut FsmContext) {
    display::compose_off(&mut ctx.display);
}

// ═══════════════════════════════════════════════════════════════════════════
//  SETUP state: the four configuration screens
// ═══════════════════════════════════════════════════════════════════════════

fn setup_enter(ctx: &mut FsmContext) {
    setup::enter_screen(ctx, SetupScreen::OnOff);
    info!("SETUP: on/off screen");
}

fn setup_update(ctx: &mut FsmContext) -> Option<StateId> {
    let bands = ctx.screen.bands(ctx);
    let direction = ctx.poll_gesture(bands)?;
    debug!("SETUP: {:?} on {:?}", direction, ctx.screen);
    setup::navigate(ctx, direction)
}

// ═══════════════════════════════════════════════════════════════════════════
//  WAITING states: settle window, then wait for motion
// ═══════════════════════════════════════════════════════════════════════════

fn waiting_enter(ctx: &mut FsmContext) {
    ctx.begin_settle();
    info!(
        "WAITING: settling for {} x {} ms",
        ctx.config.settle_count, ctx.config.countdown_period_ms
    );
}

fn waiting_exit(ctx: &mut FsmContext) {
    ctx.countdown.stop();
}

/// Step the visible countdown.  Only the number region is redrawn.
fn advance_countdown(ctx: &mut FsmContext) {
    if ctx.motion.is_settled() {
        return;
    }
    if ctx.countdown.tick(&ctx.now_ms) != TimerTick::Ready {
        return;
    }
    let remaining = ctx.motion.advance();
    if remaining == 0 {
        ctx.countdown.stop();
        info!("WAITING: settled, reading motion");
    }
    // A pending full redraw already shows the new value.
    if !ctx.display.is_dirty() {
        let shown = if remaining == 0 { None } else { Some(remaining) };
        display::compose_countdown(&mut ctx.display, shown);
    }
}

fn waiting_to_cool_update(ctx: &mut FsmContext) -> Option<StateId> {
    if left_pressed(ctx) {
        return Some(StateId::Setup);
    }
    if ctx.overrides.is_forced() {
        return None;
    }

    advance_countdown(ctx);

    if ctx.too_cold() {
        return Some(heat_path(ctx));
    }
    if ctx.motion.is_settled() && ctx.sensors.motion {
        return Some(StateId::Cooling);
    }
    None
}

fn waiting_to_heat_update(ctx: &mut FsmContext) -> Option<StateId> {
    if left_pressed(ctx) {
        return Some(StateId::Setup);
    }
    if ctx.overrides.is_forced() {
        return None;
    }

    advance_countdown(ctx);

    if ctx.too_hot() {
        return Some(cool_path(ctx));
    }
    if ctx.motion.is_settled() && ctx.sensors.motion {
        return Some(StateId::Heating);
    }
    None
}

fn waiting_to_cool_render(ctx: &mut FsmContext) {
    let remaining = ctx.motion.remaining();
    display::compose_waiting(&mut ctx.display, WAITING_TO_COOL_TITLE, remaining);
}

fn waiting_to_heat_render(ctx: &mut FsmContext) {
    let remaining = ctx.motion.remaining();
    display::compose_waiting(&mut ctx.display, WAITING_TO_HEAT_TITLE, remaining);
}

// ═══════════════════════════════════════════════════════════════════════════
//  COOLING state
// ═══════════════════════════════════════════════════════════════════════════

fn cooling_enter(ctx: &mut FsmContext) {
    ctx.commands.cool = true;
    ctx.commands.heat = false;
    info!(
        "COOLING: {:.1}°F, set-point {}°F",
        ctx.sensors.temperature_f,
        ctx.thresholds.cooling_f()
    );
}

fn cooling_update(ctx: &mut FsmContext) -> Option<StateId> {
    if left_pressed(ctx) {
        return Some(StateId::Setup);
    }
    if ctx.overrides.is_forced() {
        return None;
    }
    if ctx.too_cold() {
        return Some(heat_path(ctx));
    }
    None
}

fn cooling_render(ctx: &mut FsmContext) {
    display::compose_active(&mut ctx.display, COOLING_TITLE);
}

// ═══════════════════════════════════════════════════════════════════════════
//  HEATING state
// ═══════════════════════════════════════════════════════════════════════════

fn heating_enter(ctx: &mut FsmContext) {
    ctx.commands.heat = true;
    ctx.commands.cool = false;
    info!(
        "HEATING: {:.1}°F, set-point {}°F",
        ctx.sensors.temperature_f,
        ctx.thresholds.heating_f()
    );
}

fn heating_update(ctx: &mut FsmContext) -> Option<StateId> {
    if left_pressed(ctx) {
        return Some(StateId::Setup);
    }
    if ctx.overrides.is_forced() {
        return None;
    }
    if ctx.too_hot() {
        return Some(cool_path(ctx));
    }
    None
}

fn heating_render(ctx: &mut FsmContext) {
    display::compose_active(&mut ctx.display, HEATING_TITLE);
}
