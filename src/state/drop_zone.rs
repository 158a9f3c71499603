/// The band of `height` px at the bottom of a screen `screen_height` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZone {
    pub screen_height: f64,
    pub height: f64,
}

impl DropZone {
    pub fn new(screen_height: f64, height: f64) -> Self {
        Self {
            screen_height,
            height,
        }
    }

    /// Top edge of the zone in client coordinates.
    pub fn top(&self) -> f64 {
        self.screen_height - self.height
    }

    /// Strictly below the top edge; a release exactly on it misses.
    pub fn contains(&self, release_y: f64) -> bool {
        release_y > self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_inside_zone_drops() {
        let zone = DropZone::new(800.0, 150.0);
        assert_eq!(zone.top(), 650.0);
        assert!(zone.contains(700.0));
    }

    #[test]
    fn release_above_zone_misses() {
        let zone = DropZone::new(800.0, 150.0);
        assert!(!zone.contains(600.0));
    }

    #[test]
    fn boundary_is_not_a_drop() {
        let zone = DropZone::new(800.0, 150.0);
        assert!(!zone.contains(650.0));
        assert!(zone.contains(650.001));
    }
}
