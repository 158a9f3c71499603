// Frame-stepped animations. Timestamps are in milliseconds on the
// requestAnimationFrame clock (same origin as `Event.timeStamp`).

use crate::config::SpringConfig;

/// Linear tween between two scalars over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl Tween {
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    /// Retargets from wherever the tween is at `now_ms`.
    pub fn retarget(&mut self, to: f64, now_ms: f64, duration_ms: f64) {
        let current = self.value_at(now_ms);
        *self = Self {
            from: current,
            to,
            start_ms: now_ms,
            duration_ms,
        };
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * t
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms - self.start_ms >= self.duration_ms
    }
}

/// Damped spring pulling a 2D displacement towards zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    last_ms: Option<f64>,
    cfg: SpringConfig,
}

const MAX_STEP_SECS: f64 = 1.0 / 60.0;
const MAX_FRAME_SECS: f64 = 0.05;

impl Spring {
    pub fn new(x: f64, y: f64, cfg: SpringConfig) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            last_ms: None,
            cfg,
        }
    }

    /// Advances to `now_ms`. Returns true once at rest (displacement zeroed).
    pub fn step(&mut self, now_ms: f64) -> bool {
        let dt = match self.last_ms {
            Some(prev) => ((now_ms - prev) / 1000.0).clamp(0.0, MAX_FRAME_SECS),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let ax = -self.cfg.stiffness * self.x - self.cfg.damping * self.vx;
            let ay = -self.cfg.stiffness * self.y - self.cfg.damping * self.vy;
            self.vx += ax * h;
            self.vy += ay * h;
            self.x += self.vx * h;
            self.y += self.vy * h;
            remaining -= h;
        }
        self.at_rest()
    }

    fn at_rest(&mut self) -> bool {
        let eps = self.cfg.rest_threshold;
        let rest = self.x.hypot(self.y) < eps && self.vx.hypot(self.vy) < eps;
        if rest {
            self.x = 0.0;
            self.y = 0.0;
            self.vx = 0.0;
            self.vy = 0.0;
        }
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_interpolates_and_finishes() {
        let mut t = Tween::settled(1.0);
        t.retarget(1.2, 1000.0, 100.0);
        assert_eq!(t.value_at(1000.0), 1.0);
        assert!((t.value_at(1050.0) - 1.1).abs() < 1e-9);
        assert_eq!(t.value_at(1100.0), 1.2);
        assert_eq!(t.value_at(5000.0), 1.2);
        assert!(t.is_done(1100.0));
        assert!(!t.is_done(1099.0));
    }

    #[test]
    fn tween_retarget_midway_starts_from_current_value() {
        let mut t = Tween::settled(1.0);
        t.retarget(1.2, 0.0, 100.0);
        t.retarget(1.0, 50.0, 100.0);
        assert!((t.value_at(50.0) - 1.1).abs() < 1e-9);
        assert_eq!(t.value_at(150.0), 1.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut t = Tween::settled(1.0);
        t.retarget(2.0, 0.0, 0.0);
        assert_eq!(t.value_at(0.0), 2.0);
        assert!(t.is_done(0.0));
    }

    #[test]
    fn spring_settles_at_origin() {
        let mut s = Spring::new(120.0, -340.0, SpringConfig::default());
        let mut now = 0.0;
        let mut rested = s.step(now);
        let mut frames = 0;
        while !rested && frames < 600 {
            now += 16.0;
            rested = s.step(now);
            frames += 1;
        }
        assert!(rested, "spring did not settle in {frames} frames");
        assert_eq!((s.x, s.y), (0.0, 0.0));
    }

    #[test]
    fn spring_decelerates_without_overshoot() {
        let mut s = Spring::new(0.0, 200.0, SpringConfig::default());
        let mut now = 0.0;
        s.step(now);
        let mut prev = s.y;
        for _ in 0..120 {
            now += 16.0;
            s.step(now);
            assert!(s.y <= prev + 1e-9);
            assert!(s.y >= -SpringConfig::default().rest_threshold);
            prev = s.y;
        }
    }
}
