//! Log-backed display and light adapter.
//!
//! The OLED renderer, pixel strip and smart-bulb bridge live outside this
//! firmware.  [`ConsoleUi`] stands in for them: it implements
//! [`DisplayPort`] and [`LightPort`] by logging each command, so the
//! controller runs end-to-end on a bare board or on the host.

use log::{debug, info};

use crate::animation::{BulbCommand, Rgb};
use crate::app::ports::{DisplayPort, LightPort};
use crate::display::{Content, Rect};

pub struct ConsoleUi {
    bulb_id: u8,
    /// Last pixel fill, so an unchanged pattern isn't logged every tick.
    last_pattern: Option<(Rgb, u8)>,
    frames: u32,
}

impl ConsoleUi {
    pub fn new(bulb_id: u8) -> Self {
        Self {
            bulb_id,
            last_pattern: None,
            frames: 0,
        }
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl DisplayPort for ConsoleUi {
    fn clear(&mut self) {
        debug!("OLED | clear");
    }

    fn draw_region(&mut self, rect: Rect, content: &Content) {
        match content {
            Content::Blank => debug!("OLED | ({},{}) {}x{} blank", rect.x, rect.y, rect.w, rect.h),
            Content::Bitmap(g) => debug!("OLED | ({},{}) bitmap {:?}", rect.x, rect.y, g),
            Content::Text { text, size } => {
                info!("OLED | ({},{}) x{} \"{}\"", rect.x, rect.y, size, text);
            }
            Content::Number { value, size } => {
                info!("OLED | ({},{}) x{} {}", rect.x, rect.y, size, value);
            }
        }
    }

    fn present(&mut self) {
        self.frames = self.frames.wrapping_add(1);
        debug!("OLED | present #{}", self.frames);
    }
}

impl LightPort for ConsoleUi {
    fn set_pattern(&mut self, colour: Rgb, brightness: u8) {
        if self.last_pattern == Some((colour, brightness)) {
            return;
        }
        self.last_pattern = Some((colour, brightness));
        debug!(
            "PIXELS | #{:02X}{:02X}{:02X} @ {}",
            colour.0, colour.1, colour.2, brightness
        );
    }

    fn set_remote_light(&mut self, command: &BulbCommand) {
        if command.on {
            info!(
                "BULB {} | on hue={} bri={} sat={}",
                self.bulb_id, command.hue, command.brightness, command.saturation
            );
        } else {
            info!("BULB {} | off", self.bulb_id);
        }
    }
}
