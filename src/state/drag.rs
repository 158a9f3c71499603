// Per-tile drag state: active flag, displayed offset and scale, plus the
// animations that carry the tile back home after release.

use super::anim::{Spring, Tween};
use super::drop_zone::DropZone;
use crate::config::InteractionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
    Missed,
    /// The browser took the pointer away; never counts as a drop.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DragState {
    pub active: bool,
    /// Offset captured at grant; the displayed position is baseline + delta.
    pub baseline: (f64, f64),
    pub delta: (f64, f64),
    scale: Tween,
    spring: Option<Spring>,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            active: false,
            baseline: (0.0, 0.0),
            delta: (0.0, 0.0),
            scale: Tween::settled(1.0),
            spring: None,
        }
    }
}

impl DragState {
    /// Displayed translation relative to the tile's layout slot.
    pub fn offset(&self) -> (f64, f64) {
        if self.active {
            return (self.baseline.0 + self.delta.0, self.baseline.1 + self.delta.1);
        }
        match &self.spring {
            Some(s) => (s.x, s.y),
            None => (0.0, 0.0),
        }
    }

    pub fn scale_at(&self, now_ms: f64) -> f64 {
        self.scale.value_at(now_ms)
    }

    /// Grabs the tile where it currently is, so an in-flight return does
    /// not jump.
    pub fn begin(&mut self, now_ms: f64, cfg: &InteractionConfig) {
        let current = self.offset();
        self.active = true;
        self.baseline = current;
        self.delta = (0.0, 0.0);
        self.spring = None;
        self.scale.retarget(cfg.active_scale, now_ms, cfg.scale_duration_ms);
    }

    /// One-to-one tracking of the raw pointer delta since pointer-down.
    pub fn track(&mut self, dx: f64, dy: f64) {
        if self.active {
            self.delta = (dx, dy);
        }
    }

    /// Ends the drag and starts the return spring. `release_y` is `None`
    /// for a cancelled gesture.
    pub fn release(
        &mut self,
        release_y: Option<f64>,
        zone: &DropZone,
        now_ms: f64,
        cfg: &InteractionConfig,
    ) -> DropOutcome {
        let (x, y) = self.offset();
        self.active = false;
        self.baseline = (0.0, 0.0);
        self.delta = (0.0, 0.0);
        self.spring = Some(Spring::new(x, y, cfg.spring));
        self.scale.retarget(1.0, now_ms, cfg.scale_duration_ms);
        match release_y {
            Some(y) if zone.contains(y) => DropOutcome::Dropped,
            Some(_) => DropOutcome::Missed,
            None => DropOutcome::Cancelled,
        }
    }

    /// Advances animations. Returns true while another frame is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(spring) = self.spring.as_mut() {
            if spring.step(now_ms) {
                self.spring = None;
            }
        }
        self.spring.is_some() || !self.scale.is_done(now_ms)
    }
}

/// Non-target tiles dim while some other tile is being dragged.
pub fn tile_opacity(any_active: bool, self_active: bool, inactive_opacity: f64) -> f64 {
    if any_active && !self_active {
        inactive_opacity
    } else {
        1.0
    }
}
