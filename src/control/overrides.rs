//! Manual force-heat / force-cool override.
//!
//! The two flags are mutually exclusive by construction: requesting one
//! clears the other.  Both are cleared whenever the controller is sent
//! back to Off or to the Setup on/off screen.

/// Which active state the user forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ForceMode {
    Cool,
    Heat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceOverride {
    force_heat: bool,
    force_cool: bool,
}

impl ForceOverride {
    pub const fn new() -> Self {
        Self {
            force_heat: false,
            force_cool: false,
        }
    }

    pub fn request(&mut self, mode: ForceMode) {
        match mode {
            ForceMode::Cool => {
                self.force_cool = true;
                self.force_heat = false;
            }
            ForceMode::Heat => {
                self.force_heat = true;
                self.force_cool = false;
            }
        }
    }

    pub fn clear(&mut self) {
        self.force_heat = false;
        self.force_cool = false;
    }

    /// Active override, if any.  Cooling wins if both flags are somehow set.
    pub fn active(&self) -> Option<ForceMode> {
        if self.force_cool {
            Some(ForceMode::Cool)
        } else if self.force_heat {
            Some(ForceMode::Heat)
        } else {
            None
        }
    }

    pub fn is_forced(&self) -> bool {
        self.force_cool || self.force_heat
    }

    pub fn force_cool(&self) -> bool {
        self.force_cool
    }

    pub fn force_heat(&self) -> bool {
        self.force_heat
    }
}
