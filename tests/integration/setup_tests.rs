//! Setup screens: navigation, set-point adjustment and manual override.

use dogbed::app::events::AppEvent;
use dogbed::config::ControllerConfig;
use dogbed::control::{ForceMode, ThresholdPair};
use dogbed::display::{Content, Graphic};
use dogbed::fsm::{SetupScreen, StateId};

use crate::mock_hw::Rig;

fn rig_in_setup(config: ControllerConfig) -> Rig {
    let mut rig = Rig::with_config(config);
    rig.click();
    assert_eq!(rig.app.state(), StateId::Setup);
    rig
}

fn rig_on_manual() -> Rig {
    let mut rig = rig_in_setup(ControllerConfig::default());
    rig.flick_right();
    rig.flick_right();
    rig.flick_right();
    assert_eq!(rig.app.screen(), SetupScreen::Manual);
    rig
}

// ── QA-6: Screen navigation ──────────────────────────────────

#[test]
fn right_and_left_walk_the_screens() {
    let mut rig = rig_in_setup(ControllerConfig::default());
    assert!(rig.ui.drew(&Content::Bitmap(Graphic::OnOff)));

    rig.flick_right();
    assert_eq!(rig.app.screen(), SetupScreen::CoolingTemp);
    assert!(rig.ui.drew(&Content::Number { value: 80, size: 2 }));
    rig.flick_right();
    assert_eq!(rig.app.screen(), SetupScreen::HeatingTemp);
    assert!(rig.ui.drew(&Content::Number { value: 75, size: 2 }));
    rig.flick_right();
    assert_eq!(rig.app.screen(), SetupScreen::Manual);

    rig.flick_left();
    rig.flick_left();
    rig.flick_left();
    assert_eq!(rig.app.screen(), SetupScreen::OnOff);
    assert_eq!(rig.app.state(), StateId::Setup);
}

#[test]
fn screen_changes_are_reported() {
    let mut rig = rig_in_setup(ControllerConfig::default());
    rig.flick_right();
    assert_eq!(
        rig.sink.events.last(),
        Some(&AppEvent::ScreenChanged {
            from: SetupScreen::OnOff,
            to: SetupScreen::CoolingTemp,
        })
    );
}

#[test]
fn one_flick_is_one_step() {
    let mut rig = rig_in_setup(ControllerConfig::default());

    // Holding the stick over keeps the latch armed but fires nothing.
    rig.hw.horizontal = crate::mock_hw::HIGH;
    rig.ticks(50);
    assert_eq!(rig.app.screen(), SetupScreen::OnOff);

    rig.hw.horizontal = crate::mock_hw::CENTRE;
    rig.ticks(50);
    assert_eq!(rig.app.screen(), SetupScreen::CoolingTemp);
}

#[test]
fn up_on_on_off_screen_starts_cycle() {
    let mut rig = rig_in_setup(ControllerConfig::default());
    rig.flick_up();
    assert_eq!(rig.app.state(), StateId::WaitingToCool);
    assert!(rig.sink.events.contains(&AppEvent::StateChanged {
        from: StateId::Setup,
        to: StateId::WaitingToCool,
    }));
}

// ── QA-7: Set-point adjustment ───────────────────────────────

#[test]
fn cooling_screen_adjusts_and_drags_heating() {
    let config = ControllerConfig {
        cooling_temp_f: 75,
        heating_temp_f: 74,
        ..ControllerConfig::default()
    };
    let mut rig = rig_in_setup(config);
    rig.flick_right();

    rig.flick_down();
    assert_eq!(
        rig.app.thresholds(),
        ThresholdPair {
            cooling_f: 76,
            heating_f: 74
        }
    );

    rig.flick_up();
    rig.flick_up();
    rig.flick_up();
    assert_eq!(
        rig.app.thresholds(),
        ThresholdPair {
            cooling_f: 73,
            heating_f: 72
        }
    );
    assert!(rig.ui.drew(&Content::Number { value: 73, size: 2 }));

    let changes = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ThresholdsChanged(_)))
        .count();
    assert_eq!(changes, 4);
}

#[test]
fn heating_screen_pushes_cooling_up() {
    let mut rig = rig_in_setup(ControllerConfig::default());
    rig.flick_right();
    rig.flick_right();

    for _ in 0..6 {
        rig.flick_down();
    }
    let pair = rig.app.thresholds();
    assert_eq!(pair.heating_f, 81);
    assert_eq!(pair.cooling_f, 82);
    assert!(pair.heating_f < pair.cooling_f);
}

#[test]
fn set_points_survive_a_power_cycle() {
    let mut rig = rig_in_setup(ControllerConfig::default());
    rig.flick_right();
    rig.flick_up();
    rig.flick_left();
    rig.flick_down();
    assert_eq!(rig.app.state(), StateId::Off);

    rig.click();
    assert_eq!(rig.app.thresholds().cooling_f, 79);
}

#[test]
fn shallow_deflection_does_not_adjust() {
    let mut rig = rig_in_setup(ControllerConfig::default());
    rig.flick_right();

    // Past the fine-adjust fire threshold but short of its arm threshold.
    rig.hw.vertical = 2900;
    rig.tick();
    rig.hw.vertical = crate::mock_hw::CENTRE;
    rig.tick();
    assert_eq!(rig.app.thresholds().cooling_f, 80);
}

// ── QA-8: Manual override ────────────────────────────────────

#[test]
fn force_cool_starts_cooling_next_tick() {
    let mut rig = rig_on_manual();
    rig.hw.temperature_f = 60.0;

    rig.flick_up();
    assert_eq!(rig.app.force_override(), Some(ForceMode::Cool));
    assert_eq!(rig.app.state(), StateId::Setup);
    assert!(rig.sink.events.contains(&AppEvent::OverrideRequested(ForceMode::Cool)));

    rig.tick();
    assert_eq!(rig.app.state(), StateId::Cooling);
    assert!(rig.hw.cool && !rig.hw.heat);

    // Too cold and nobody on the bed, but forced cooling holds.
    rig.run_for(15_000);
    assert_eq!(rig.app.state(), StateId::Cooling);
    assert!(rig.hw.cool);
}

#[test]
fn force_heat_starts_heating() {
    let mut rig = rig_on_manual();
    rig.hw.temperature_f = 95.0;

    rig.flick_down();
    assert_eq!(rig.app.force_override(), Some(ForceMode::Heat));
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Heating);
    assert!(rig.hw.heat && !rig.hw.cool);
}

#[test]
fn switching_override_goes_through_setup() {
    let mut rig = rig_on_manual();
    rig.flick_down();
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Heating);

    rig.flick_left();
    assert_eq!(rig.app.force_override(), None);
    for _ in 0..3 {
        rig.flick_right();
    }
    rig.flick_up();
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Cooling);
    assert_eq!(rig.app.force_override(), Some(ForceMode::Cool));
    assert!(!rig.hw.overlap_seen);
}

#[test]
fn leaving_forced_state_clears_override_and_relays() {
    let mut rig = rig_on_manual();
    rig.flick_up();
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Cooling);

    rig.flick_left();
    assert_eq!(rig.app.state(), StateId::Setup);
    assert_eq!(rig.app.screen(), SetupScreen::OnOff);
    assert_eq!(rig.app.force_override(), None);
    assert!(!rig.hw.cool && !rig.hw.heat);

    // No override left to re-force.
    rig.ticks(10);
    assert_eq!(rig.app.state(), StateId::Setup);
}
