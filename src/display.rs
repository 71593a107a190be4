//! Display command queue and screen compositions.
//!
//! State handlers never talk to the panel.  They push [`DrawOp`]s into
//! the [`DisplayQueue`] held in the FSM context, and the service flushes
//! the queue to the [`DisplayPort`](crate::app::ports::DisplayPort) after
//! the tick.
//!
//! Full screens are composed once per state / screen entry, gated by the
//! dirty flag.  The waiting countdown only redraws its small number
//! region.
//!
//! Layout targets a 128×64 monochrome panel:
//!
//! ```text
//!  (20,0)  title, size 1             (0,9) up/down arrow 16×46
//!  (60,25) set-point value, size 2   (50,20) countdown region 70×30
//! ```

use heapless::Vec;
use log::warn;

/// Queue depth; one full screen plus a region update fits with room to spare.
pub const QUEUE_CAP: usize = 12;

/// Screen-space rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }
}

/// Built-in bitmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Graphic {
    /// Power symbol shown on the on/off screen (80×68).
    OnOff,
    /// Up/down arrow shown on adjust screens (16×46).
    UpDown,
}

/// What to draw inside a region.  The region is cleared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Blank,
    Bitmap(Graphic),
    Text { text: &'static str, size: u8 },
    Number { value: i32, size: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Region(Rect, Content),
    Present,
}

// ── Layout ────────────────────────────────────────────────────

pub const ONOFF_BITMAP: Rect = Rect::new(20, 0, 80, 68);
pub const ARROW_BITMAP: Rect = Rect::new(0, 9, 16, 46);
pub const TITLE: Rect = Rect::new(20, 0, 108, 16);
pub const HINT: Rect = Rect::new(20, 48, 108, 16);
pub const VALUE: Rect = Rect::new(60, 25, 68, 16);
pub const COUNTDOWN: Rect = Rect::new(50, 20, 70, 30);

// ── Queue ─────────────────────────────────────────────────────

/// Pending draw commands plus the render-once dirty flag.
#[derive(Debug)]
pub struct DisplayQueue {
    dirty: bool,
    ops: Vec<DrawOp, QUEUE_CAP>,
}

impl DisplayQueue {
    pub fn new() -> Self {
        Self {
            dirty: true,
            ops: Vec::new(),
        }
    }

    /// Request a full redraw on the next render opportunity.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    pub fn push(&mut self, op: DrawOp) {
        if self.ops.push(op).is_err() {
            warn!("display queue full, dropping {:?}", op);
        }
    }

    /// Hand the queued ops to the caller, leaving the queue empty.
    pub fn take(&mut self) -> Vec<DrawOp, QUEUE_CAP> {
        core::mem::take(&mut self.ops)
    }

    pub fn pending(&self) -> &[DrawOp] {
        &self.ops
    }

    fn region(&mut self, rect: Rect, content: Content) {
        self.push(DrawOp::Region(rect, content));
    }
}

impl Default for DisplayQueue {
    fn default() -> Self {
        Self::new()
    }
}

// ── Screen compositions ───────────────────────────────────────

pub fn compose_off(q: &mut DisplayQueue) {
    q.push(DrawOp::Clear);
    q.push(DrawOp::Present);
}

pub fn compose_on_off(q: &mut DisplayQueue) {
    q.push(DrawOp::Clear);
    q.region(ONOFF_BITMAP, Content::Bitmap(Graphic::OnOff));
    q.push(DrawOp::Present);
}

pub fn compose_set_point(q: &mut DisplayQueue, title: &'static str, value_f: i32) {
    q.push(DrawOp::Clear);
    q.region(ARROW_BITMAP, Content::Bitmap(Graphic::UpDown));
    q.region(TITLE, Content::Text { text: title, size: 1 });
    q.region(VALUE, Content::Number { value: value_f, size: 2 });
    q.push(DrawOp::Present);
}

pub fn compose_manual(q: &mut DisplayQueue) {
    q.push(DrawOp::Clear);
    q.region(ARROW_BITMAP, Content::Bitmap(Graphic::UpDown));
    q.region(TITLE, Content::Text { text: "Manual override", size: 1 });
    q.region(HINT, Content::Text { text: "Up=cool Down=heat", size: 1 });
    q.push(DrawOp::Present);
}

/// Title screen for a waiting state, with the first countdown value.
pub fn compose_waiting(q: &mut DisplayQueue, title: &'static str, remaining: u8) {
    q.push(DrawOp::Clear);
    q.region(TITLE, Content::Text { text: title, size: 1 });
    q.region(COUNTDOWN, Content::Number { value: i32::from(remaining), size: 2 });
    q.push(DrawOp::Present);
}

/// Partial redraw of the countdown region.  `None` blanks it.
pub fn compose_countdown(q: &mut DisplayQueue, remaining: Option<u8>) {
    let content = match remaining {
        Some(n) => Content::Number { value: i32::from(n), size: 2 },
        None => Content::Blank,
    };
    q.region(COUNTDOWN, content);
    q.push(DrawOp::Present);
}

pub fn compose_active(q: &mut DisplayQueue, title: &'static str) {
    q.push(DrawOp::Clear);
    q.region(TITLE, Content::Text { text: title, size: 2 });
    q.push(DrawOp::Present);
}
