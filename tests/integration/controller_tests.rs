//! Top-level controller behaviour: power on/off, the settle window,
//! temperature-driven switching, lights and outbound events.

use dogbed::animation::{BulbCommand, COLOUR_COOL, COLOUR_DARK, HUE_BLUE};
use dogbed::app::events::AppEvent;
use dogbed::display::{Content, COUNTDOWN, QUEUE_CAP};
use dogbed::fsm::{SetupScreen, StateId};

use crate::mock_hw::{Rig, UiCall, TICK_MS};

/// Off → Setup → WaitingToCool.
fn rig_waiting_to_cool(temperature_f: f32, motion: bool) -> Rig {
    let mut rig = Rig::new();
    rig.hw.temperature_f = temperature_f;
    rig.hw.motion = motion;
    rig.click();
    rig.flick_up();
    assert_eq!(rig.app.state(), StateId::WaitingToCool);
    rig
}

// ── QA-1: Power up and the on/off click ──────────────────────

#[test]
fn boots_off_with_everything_dark() {
    let rig = Rig::new();
    assert_eq!(rig.app.state(), StateId::Off);
    assert_eq!(rig.sink.events.first(), Some(&AppEvent::Started(StateId::Off)));
    assert!(!rig.hw.cool && !rig.hw.heat);
    assert_eq!(rig.ui.last_pattern(), Some((COLOUR_DARK, 0)));
    assert_eq!(rig.ui.bulb_commands(), vec![BulbCommand::OFF]);
}

#[test]
fn click_from_off_opens_setup_on_off_screen() {
    let mut rig = Rig::new();
    rig.click();

    assert_eq!(rig.app.state(), StateId::Setup);
    assert_eq!(rig.app.screen(), SetupScreen::OnOff);
    assert!(!rig.hw.cool && !rig.hw.heat);
    assert!(rig.sink.events.contains(&AppEvent::StateChanged {
        from: StateId::Off,
        to: StateId::Setup,
    }));
}

#[test]
fn held_button_clicks_only_once() {
    let mut rig = Rig::new();
    rig.hw.joystick_down = true;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Setup);

    // Still held after dropping back to Off: no second click.
    rig.flick_down();
    assert_eq!(rig.app.state(), StateId::Off);
    rig.ticks(10);
    assert_eq!(rig.app.state(), StateId::Off);

    rig.hw.joystick_down = false;
    rig.tick();
    rig.hw.joystick_down = true;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Setup);
}

#[test]
fn down_on_on_off_screen_powers_off() {
    let mut rig = Rig::new();
    rig.click();
    rig.flick_down();
    assert_eq!(rig.app.state(), StateId::Off);
}

// ── QA-2: Settle window ──────────────────────────────────────

#[test]
fn entering_waiting_restarts_countdown_and_ignores_motion() {
    let mut rig = rig_waiting_to_cool(77.0, true);
    assert_eq!(rig.app.countdown_remaining(), 10);
    assert!(!rig.app.build_telemetry().motion);

    // Most of the window passes without the PIR being read.
    rig.run_for(9_000);
    assert_eq!(rig.app.state(), StateId::WaitingToCool);
    assert_eq!(rig.app.countdown_remaining(), 1);
    assert_eq!(rig.hw.motion_reads, 0);
    assert!(!rig.app.build_telemetry().motion);
}

#[test]
fn countdown_redraws_only_its_region() {
    let mut rig = rig_waiting_to_cool(77.0, false);
    let clears = rig.ui.clears();

    rig.run_for(1_000);
    assert_eq!(rig.app.countdown_remaining(), 9);
    assert!(rig.ui.drew(&Content::Number { value: 9, size: 2 }));
    assert_eq!(rig.ui.clears(), clears);

    rig.run_for(9_000);
    assert_eq!(rig.app.countdown_remaining(), 0);
    assert_eq!(
        rig.ui.calls.iter().rev().find_map(|c| match c {
            UiCall::Region(rect, content) if *rect == COUNTDOWN => Some(*content),
            _ => None,
        }),
        Some(Content::Blank)
    );
    assert_eq!(rig.ui.clears(), clears);
}

#[test]
fn motion_after_window_starts_cooling() {
    let mut rig = rig_waiting_to_cool(90.0, true);
    rig.settle();

    assert_eq!(rig.app.state(), StateId::Cooling);
    assert!(rig.hw.cool);
    assert!(!rig.hw.heat);
    assert!(rig.hw.motion_reads > 0);
}

#[test]
fn no_motion_keeps_waiting() {
    let mut rig = rig_waiting_to_cool(90.0, false);
    rig.settle();
    rig.run_for(5_000);

    assert_eq!(rig.app.state(), StateId::WaitingToCool);
    assert!(!rig.hw.cool && !rig.hw.heat);
}

#[test]
fn too_cold_while_waiting_to_cool_moves_to_waiting_to_heat() {
    let mut rig = rig_waiting_to_cool(60.0, true);
    rig.tick();
    assert_eq!(rig.app.state(), StateId::WaitingToHeat);
    // Fresh window on the new waiting state.
    assert_eq!(rig.app.countdown_remaining(), 10);

    rig.settle();
    assert_eq!(rig.app.state(), StateId::Heating);
    assert!(rig.hw.heat && !rig.hw.cool);
}

#[test]
fn no_tick_fills_the_display_queue() {
    let mut rig = rig_waiting_to_cool(90.0, true);
    let cfg = rig.app.current_config();
    let window = u64::from(cfg.settle_count) * u64::from(cfg.countdown_period_ms);

    let mut worst = 0;
    for _ in 0..(window / TICK_MS + 5) {
        let mark = rig.ui.calls.len();
        rig.tick();
        worst = worst.max(rig.ui.draw_ops_since(mark));
    }
    rig.hw.temperature_f = 60.0;
    let mark = rig.ui.calls.len();
    rig.tick();
    worst = worst.max(rig.ui.draw_ops_since(mark));

    assert_eq!(rig.app.state(), StateId::Heating);
    // The blanking op at the end of the window made it through.
    assert!(rig.ui.drew(&Content::Blank));
    assert!(worst < QUEUE_CAP, "busiest tick drew {} ops", worst);
}

// ── QA-3: Temperature switching while active ─────────────────

#[test]
fn cooling_to_heating_and_back_never_overlaps() {
    let mut rig = rig_waiting_to_cool(90.0, true);
    rig.settle();
    assert_eq!(rig.app.state(), StateId::Cooling);

    // Someone is still on the bed, so the switch is immediate.
    rig.hw.temperature_f = 60.0;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Heating);
    assert!(rig.hw.heat && !rig.hw.cool);

    rig.hw.temperature_f = 90.0;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Cooling);
    assert!(rig.hw.cool && !rig.hw.heat);

    assert!(!rig.hw.overlap_seen);
}

#[test]
fn empty_bed_goes_through_waiting_when_switching() {
    let mut rig = rig_waiting_to_cool(90.0, true);
    rig.settle();
    assert_eq!(rig.app.state(), StateId::Cooling);

    rig.hw.motion = false;
    rig.tick();
    rig.hw.temperature_f = 60.0;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::WaitingToHeat);
    assert!(!rig.hw.cool && !rig.hw.heat);
}

#[test]
fn comfortable_temperature_keeps_cooling() {
    let mut rig = rig_waiting_to_cool(90.0, true);
    rig.settle();

    // Between the set-points nothing changes.
    rig.hw.temperature_f = 77.0;
    rig.run_for(3_000);
    assert_eq!(rig.app.state(), StateId::Cooling);
    assert!(rig.hw.cool);
}

#[test]
fn left_from_running_state_returns_to_setup_and_stops_relays() {
    let mut rig = rig_waiting_to_cool(90.0, true);
    rig.settle();
    assert!(rig.hw.cool);

    rig.flick_left();
    assert_eq!(rig.app.state(), StateId::Setup);
    assert_eq!(rig.app.screen(), SetupScreen::OnOff);
    assert!(!rig.hw.cool && !rig.hw.heat);
    assert_eq!(rig.app.countdown_remaining(), 0);
}

#[test]
fn left_while_waiting_returns_to_setup() {
    let mut rig = rig_waiting_to_cool(77.0, false);
    rig.run_for(2_000);
    rig.flick_left();
    assert_eq!(rig.app.state(), StateId::Setup);
    assert_eq!(rig.app.countdown_remaining(), 0);
}

// ── QA-4: Lights ─────────────────────────────────────────────

#[test]
fn steady_state_sends_bulb_command_once() {
    let mut rig = rig_waiting_to_cool(90.0, true);
    rig.settle();
    let sent = rig.ui.bulb_commands().len();

    rig.run_for(5_000);
    let commands = rig.ui.bulb_commands();
    assert_eq!(commands.len(), sent);
    assert_eq!(commands.last(), Some(&BulbCommand::lit(HUE_BLUE, 100)));
    assert_eq!(rig.ui.last_pattern(), Some((COLOUR_COOL, 40)));
}

#[test]
fn pixels_are_driven_every_tick() {
    let mut rig = Rig::new();
    let before = rig.ui.count(|c| matches!(c, UiCall::Pattern(..)));
    rig.ticks(25);
    let after = rig.ui.count(|c| matches!(c, UiCall::Pattern(..)));
    assert_eq!(after - before, 25);
}

#[test]
fn idle_screen_is_not_redrawn() {
    let mut rig = Rig::new();
    let clears = rig.ui.clears();
    rig.run_for(10_000);
    assert_eq!(rig.ui.clears(), clears);
}

// ── QA-5: Debug snapshot ─────────────────────────────────────

#[test]
fn debug_button_emits_snapshot() {
    let mut rig = Rig::new();
    rig.hw.temperature_f = 71.5;
    rig.debug_click();

    let snapshot = rig.sink.events.iter().find_map(|e| match e {
        AppEvent::DebugSnapshot(t) => Some(t.clone()),
        _ => None,
    });
    let t = snapshot.expect("debug snapshot emitted");
    assert_eq!(t.state, StateId::Off);
    assert_eq!(t.screen, None);
    assert_eq!(t.temperature_f, 71.5);
    assert_eq!(t.thresholds.cooling_f, 80);
    assert!(!t.cool_on && !t.heat_on);
    // Arming tick, then the press; the release tick came after.
    assert_eq!(t.ticks, 2);
    assert_eq!(rig.app.tick_count(), 3);
}

#[test]
fn debug_button_does_not_change_state() {
    let mut rig = Rig::new();
    rig.debug_click();
    rig.debug_click();
    assert_eq!(rig.app.state(), StateId::Off);
    let snapshots = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::DebugSnapshot(_)))
        .count();
    assert_eq!(snapshots, 2);
}
