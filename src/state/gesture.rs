// Single-pointer gesture tracking: origin, cumulative delta and velocity.

/// Decides whether a move belongs to the tile (vertical-ish, or already
/// dragging) or should be left to the horizontal scroller.
pub fn should_capture(vx: f64, vy: f64, active: bool, margin: f64) -> bool {
    active || vy.abs() > vx.abs() + margin
}

/// Whether a tile that is not yet dragging may start a drag on this move.
/// Refused while any other tile holds the drag.
pub fn should_begin(any_active: bool, active: bool, vx: f64, vy: f64, margin: f64) -> bool {
    if active {
        return false;
    }
    !any_active && should_capture(vx, vy, false, margin)
}

#[derive(Default, Debug, Clone)]
pub struct GestureTracker {
    pub pointer_id: Option<i32>,
    pub origin_x: f64,
    pub origin_y: f64,
    pub last_x: f64,
    pub last_y: f64,
    pub last_ms: f64,
    /// px/ms, from the two most recent samples.
    pub vx: f64,
    pub vy: f64,
}

impl GestureTracker {
    pub fn down(&mut self, pointer_id: i32, x: f64, y: f64, now_ms: f64) {
        *self = GestureTracker {
            pointer_id: Some(pointer_id),
            origin_x: x,
            origin_y: y,
            last_x: x,
            last_y: y,
            last_ms: now_ms,
            vx: 0.0,
            vy: 0.0,
        };
    }

    /// Returns false for pointers other than the tracked one.
    pub fn update(&mut self, pointer_id: i32, x: f64, y: f64, now_ms: f64) -> bool {
        if self.pointer_id != Some(pointer_id) {
            return false;
        }
        let dt = now_ms - self.last_ms;
        if dt > 0.0 {
            self.vx = (x - self.last_x) / dt;
            self.vy = (y - self.last_y) / dt;
            self.last_ms = now_ms;
        }
        self.last_x = x;
        self.last_y = y;
        true
    }

    pub fn is_tracking(&self, pointer_id: i32) -> bool {
        self.pointer_id == Some(pointer_id)
    }

    pub fn delta(&self) -> (f64, f64) {
        (self.last_x - self.origin_x, self.last_y - self.origin_y)
    }

    pub fn clear(&mut self) {
        self.pointer_id = None;
        self.vx = 0.0;
        self.vy = 0.0;
    }
}
