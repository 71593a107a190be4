//! Function-pointer finite state machine engine.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  StateTable                                                          │
//! │  ┌───────────────┬──────────┬──────────┬──────────────────┬────────┐ │
//! │  │ StateId       │ on_enter │ on_exit  │ on_update        │ render │ │
//! │  ├───────────────┼──────────┼──────────┼──────────────────┼────────┤ │
//! │  │ Off           │ fn(ctx)  │    —     │ fn(ctx)->Option  │ fn(ctx)│ │
//! │  │ Setup         │ fn(ctx)  │    —     │ fn(ctx)->Option  │ fn(ctx)│ │
//! │  │ WaitingToCool │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Option  │ fn(ctx)│ │
//! │  │ Cooling       │ fn(ctx)  │    —     │ fn(ctx)->Option  │ fn(ctx)│ │
//! │  │ WaitingToHeat │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Option  │ fn(ctx)│ │
//! │  │ Heating       │ fn(ctx)  │    —     │ fn(ctx)->Option  │ fn(ctx)│ │
//! │  └───────────────┴──────────┴──────────┴──────────────────┴────────┘ │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** state.
//! If it returns `Some(next_id)`, the engine runs `on_exit` for the
//! current state, then `on_enter` for the next, and updates the
//! current pointer.  Every transition marks the display dirty and drops
//! any half-finished joystick gesture.  After the update, if the display
//! is dirty, the current state's `render` composes its full screen once.

pub mod context;
pub mod setup;
pub mod states;

use context::FsmContext;
use log::info;

pub use setup::SetupScreen;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Top-level operating state.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(u8)]
pub enum StateId {
    Off = 0,
    Setup = 1,
    WaitingToCool = 2,
    Cooling = 3,
    WaitingToHeat = 4,
    Heating = 5,
}

impl StateId {
    /// Total number of states: used to size the table array.
    pub const COUNT: usize = 6;

    /// Convert a `u8` index back to `StateId`.  Panics on out-of-range in
    /// debug builds; returns `Off` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Off,
            1 => Self::Setup,
            2 => Self::WaitingToCool,
            3 => Self::Cooling,
            4 => Self::WaitingToHeat,
            5 => Self::Heating,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Off
            }
        }
    }

    /// Waiting or active climate states.
    pub const fn is_running(self) -> bool {
        matches!(
            self,
            Self::WaitingToCool | Self::Cooling | Self::WaitingToHeat | Self::Heating
        )
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter`, `on_exit` and `render` actions.
pub type StateActionFn = fn(&mut FsmContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut FsmContext) -> Option<StateId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
/// Stored in a fixed-size array: no heap, no `dyn`.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
    /// Composes the full screen.  Only called while the display is dirty.
    pub render: StateActionFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns the state table (array of [`StateDescriptor`]).  The mutable
/// [`FsmContext`] is threaded through every handler call.
pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    /// Index of the currently active state.
    current: usize,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting state and draw its screen.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        ctx.display.mark_dirty();
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
        self.render_if_dirty(ctx);
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    /// 3. Render the current state's screen if anything marked it dirty.
    pub fn tick(&mut self, ctx: &mut FsmContext) {
        let next = (self.table[self.current].on_update)(ctx);

        if let Some(next_id) = next {
            if next_id as usize != self.current {
                self.transition(next_id, ctx);
            }
        }

        self.render_if_dirty(ctx);
    }

    /// Force an immediate transition (used for the manual override, which
    /// bypasses the temperature and motion rules).
    pub fn force_transition(&mut self, next: StateId, ctx: &mut FsmContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
            self.render_if_dirty(ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: StateId, ctx: &mut FsmContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;
        ctx.gestures.clear_all();
        ctx.display.mark_dirty();

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    fn render_if_dirty(&self, ctx: &mut FsmContext) {
        if ctx.display.take_dirty() {
            (self.table[self.current].render)(ctx);
        }
    }
}
