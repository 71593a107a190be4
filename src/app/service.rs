//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the FSM, the shared context, the animation engine
//! and the button edge latches.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ ActuatorPort
//!   InputPort ──▶ │        AppService         │ ──▶ DisplayPort
//!       Clock ──▶ │  FSM · Override · Anim    │ ──▶ LightPort
//!                 └──────────────────────────┘ ──▶ EventSink
//! ```

use log::{debug, info, warn};

use crate::animation::AnimationEngine;
use crate::config::ControllerConfig;
use crate::control::{ForceMode, ThresholdPair};
use crate::display::DrawOp;
use crate::fsm::context::{ActuatorCommands, FsmContext};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, SetupScreen, StateId};
use crate::input::{ButtonEdge, Edge};
use crate::timing::Clock;

use super::events::{AppEvent, TelemetryData};
use super::ports::{
    ActuatorPort, Axis, Channel, DisplayPort, EventSink, InputPort, LightPort, SensorPort,
};

impl ForceMode {
    /// The active state this override drives the controller into.
    pub const fn target(self) -> StateId {
        match self {
            Self::Cool => StateId::Cooling,
            Self::Heat => StateId::Heating,
        }
    }
}

/// Values compared before and after each tick to derive events.
#[derive(Clone, Copy, PartialEq)]
struct Observed {
    state: StateId,
    screen: SetupScreen,
    thresholds: ThresholdPair,
    force: Option<ForceMode>,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    fsm: Fsm,
    ctx: FsmContext,
    animation: AnimationEngine,
    joystick_button: ButtonEdge,
    debug_button: ButtonEdge,
    /// The only tick counter; the FSM itself keeps none.
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.  An invalid config is
    /// replaced by the defaults.
    ///
    /// Does **not** start the FSM: call [`start`](Self::start) next.
    pub fn new(config: ControllerConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Rejected controller config ({}), using defaults", e);
                ControllerConfig::default()
            }
        };
        let animation = AnimationEngine::new(&config);
        let ctx = FsmContext::new(config);
        let fsm = Fsm::new(build_state_table(), StateId::Off);

        Self {
            fsm,
            ctx,
            animation,
            joystick_button: ButtonEdge::new(),
            debug_button: ButtonEdge::new(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in its initial state (Off).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("AppService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle:
    /// sample → edges → override → FSM → lights → relays → display → events.
    ///
    /// The `hw` parameter satisfies the sensor, input and actuator ports
    /// at once, and `ui` both output ports, which avoids double mutable
    /// borrows while keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + InputPort + ActuatorPort),
        ui: &mut (impl DisplayPort + LightPort),
        clock: &impl Clock,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let before = self.observe();
        let now_ms = clock.now_ms();
        self.ctx.now_ms = now_ms;

        // 1. Sample inputs
        self.ctx.sensors.temperature_f = hw.read_temperature_f();
        self.ctx.sensors.vertical = hw.read_axis(Axis::Vertical);
        self.ctx.sensors.horizontal = hw.read_axis(Axis::Horizontal);
        self.ctx.sensors.joystick_clicked =
            self.joystick_button.observe(hw.joystick_pressed()) == Edge::Fired;
        let debug_clicked = self.debug_button.observe(hw.debug_pressed()) == Edge::Fired;

        // 2. Motion is only read once the settle window is over
        if before.state.is_running() && self.ctx.motion.is_settled() {
            self.ctx.sensors.motion = hw.read_motion();
        }

        // 3. Manual override bypasses the temperature/motion rules
        if let Some(mode) = self.ctx.overrides.active() {
            let target = mode.target();
            if self.fsm.current_state() != target {
                info!("Override {:?}: forcing {:?}", mode, target);
                self.fsm.force_transition(target, &mut self.ctx);
            }
        }

        // 4. FSM tick (pure state logic)
        self.fsm.tick(&mut self.ctx);

        // 5. Lights
        let visual = self.animation.render(self.fsm.current_state(), now_ms);
        ui.set_pattern(visual.pixels.colour, visual.pixels.brightness);
        if let Some(bulb) = visual.bulb {
            debug!("Bulb command {:?}", bulb);
            ui.set_remote_light(&bulb);
        }

        // 6. Relays
        self.apply_actuators(hw);

        // 7. Display
        self.flush_display(ui);

        // 8. Events
        let after = self.observe();
        Self::emit_changes(&before, &after, sink);
        if debug_clicked {
            sink.emit(&AppEvent::DebugSnapshot(self.build_telemetry()));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        let state = self.fsm.current_state();
        TelemetryData {
            state,
            screen: (state == StateId::Setup).then_some(self.ctx.screen),
            temperature_f: self.ctx.sensors.temperature_f,
            thresholds: self.ctx.thresholds.pair(),
            motion: self.ctx.sensors.motion,
            motion_settled: self.ctx.motion.is_settled(),
            cool_on: self.ctx.commands.cool,
            heat_on: self.ctx.commands.heat,
            force: self.ctx.overrides.active(),
            uptime_ms: self.ctx.now_ms,
            ticks: self.tick_count,
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Current Setup sub-screen (meaningful only while in Setup).
    pub fn screen(&self) -> SetupScreen {
        self.ctx.screen
    }

    pub fn thresholds(&self) -> ThresholdPair {
        self.ctx.thresholds.pair()
    }

    pub fn force_override(&self) -> Option<ForceMode> {
        self.ctx.overrides.active()
    }

    pub fn actuator_commands(&self) -> ActuatorCommands {
        self.ctx.commands
    }

    /// Settle units still to elapse; 0 once motion is read live.
    pub fn countdown_remaining(&self) -> u8 {
        self.ctx.motion.remaining()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn current_config(&self) -> &ControllerConfig {
        &self.ctx.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn observe(&self) -> Observed {
        Observed {
            state: self.fsm.current_state(),
            screen: self.ctx.screen,
            thresholds: self.ctx.thresholds.pair(),
            force: self.ctx.overrides.active(),
        }
    }

    /// Translate FSM actuator commands into port calls.  Both channels are
    /// written every tick, releasing one before engaging the other so a
    /// direct Heating ↔ Cooling switch never closes both relays.
    fn apply_actuators(&self, hw: &mut impl ActuatorPort) {
        let cmds = self.ctx.commands;
        if cmds.cool {
            hw.set_channel(Channel::Heat, false);
            hw.set_channel(Channel::Cool, true);
        } else {
            hw.set_channel(Channel::Cool, false);
            hw.set_channel(Channel::Heat, cmds.heat);
        }
    }

    fn flush_display(&mut self, ui: &mut impl DisplayPort) {
        for op in &self.ctx.display.take() {
            match op {
                DrawOp::Clear => ui.clear(),
                DrawOp::Region(rect, content) => ui.draw_region(*rect, content),
                DrawOp::Present => ui.present(),
            }
        }
    }

    fn emit_changes(before: &Observed, after: &Observed, sink: &mut impl EventSink) {
        if after.state != before.state {
            sink.emit(&AppEvent::StateChanged {
                from: before.state,
                to: after.state,
            });
        }
        if after.state == StateId::Setup
            && before.state == StateId::Setup
            && after.screen != before.screen
        {
            sink.emit(&AppEvent::ScreenChanged {
                from: before.screen,
                to: after.screen,
            });
        }
        if after.thresholds != before.thresholds {
            sink.emit(&AppEvent::ThresholdsChanged(after.thresholds));
        }
        if let Some(mode) = after.force {
            if before.force != Some(mode) {
                sink.emit(&AppEvent::OverrideRequested(mode));
            }
        }
    }
}
