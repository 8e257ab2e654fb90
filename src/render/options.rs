//! Options for a deck render pass.

use std::time::Duration;

/// How a render pass animates.
///
/// `force` re-sends every position and completes at once; unless
/// `immediate` is set explicitly it also skips the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Animation duration. `None` uses the table's configured speed.
    pub speed: Option<Duration>,
    /// Apply positions and faces without animating.
    pub immediate: Option<bool>,
    /// Re-send positions even when unchanged, and complete at once.
    pub force: bool,
    /// Leave member z-orders untouched.
    pub keep_z: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn speed(mut self, speed: Duration) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn immediate(mut self) -> Self {
        self.immediate = Some(true);
        self
    }

    #[must_use]
    pub fn animated(mut self) -> Self {
        self.immediate = Some(false);
        self
    }

    #[must_use]
    pub fn force(mut self) -> Self {
        self.force = true;
        self
    }

    #[must_use]
    pub fn keep_z(mut self) -> Self {
        self.keep_z = true;
        self
    }

    /// Whether positions and faces apply without animation.
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.immediate.unwrap_or(self.force)
    }
}
