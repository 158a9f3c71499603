//! Interaction constants and presentation skin, optionally overridden by a
//! JSON blob embedded in the page.

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ELEMENT_ID: &str = "tile-drop-config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config value `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One tile per column.
    Row,
    /// Two tiles stacked per column.
    #[default]
    Columns,
}

impl Layout {
    pub fn rows_per_column(self) -> usize {
        match self {
            Layout::Row => 1,
            Layout::Columns => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    #[default]
    Image,
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Skin {
    pub layout: Layout,
    pub fill: Fill,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    /// Displacement (px) and speed (px/s) under which the spring snaps home.
    pub rest_threshold: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
            rest_threshold: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// A move is claimed by a tile when |vy| > |vx| + margin (px/ms).
    pub capture_velocity_margin: f64,
    pub drop_zone_height: f64,
    pub active_scale: f64,
    pub scale_duration_ms: f64,
    pub inactive_opacity: f64,
    pub tile_size: f64,
    pub spring: SpringConfig,
    pub skin: Skin,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            capture_velocity_margin: 0.3,
            drop_zone_height: 150.0,
            active_scale: 1.2,
            scale_duration_ms: 100.0,
            inactive_opacity: 0.6,
            tile_size: 150.0,
            spring: SpringConfig::default(),
            skin: Skin::default(),
        }
    }
}

impl InteractionConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: InteractionConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(field: &'static str, value: f64, ok: bool) -> Result<(), ConfigError> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { field, value })
            }
        }
        let c = self;
        check("capture_velocity_margin", c.capture_velocity_margin, c.capture_velocity_margin >= 0.0)?;
        check("drop_zone_height", c.drop_zone_height, c.drop_zone_height >= 0.0)?;
        check("active_scale", c.active_scale, c.active_scale > 0.0)?;
        check("scale_duration_ms", c.scale_duration_ms, c.scale_duration_ms >= 0.0)?;
        check(
            "inactive_opacity",
            c.inactive_opacity,
            (0.0..=1.0).contains(&c.inactive_opacity),
        )?;
        check("tile_size", c.tile_size, c.tile_size > 0.0)?;
        check("spring.stiffness", c.spring.stiffness, c.spring.stiffness > 0.0)?;
        check("spring.damping", c.spring.damping, c.spring.damping >= 0.0)?;
        check("spring.rest_threshold", c.spring.rest_threshold, c.spring.rest_threshold > 0.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_named_constants() {
        let cfg = InteractionConfig::default();
        assert_eq!(cfg.capture_velocity_margin, 0.3);
        assert_eq!(cfg.drop_zone_height, 150.0);
        assert_eq!(cfg.active_scale, 1.2);
        assert_eq!(cfg.scale_duration_ms, 100.0);
        assert_eq!(cfg.inactive_opacity, 0.6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = InteractionConfig::from_json("{}").unwrap();
        assert_eq!(cfg, InteractionConfig::default());
    }

    #[test]
    fn partial_json_fills_remaining_fields() {
        let cfg = InteractionConfig::from_json(
            r#"{ "drop_zone_height": 200, "skin": { "layout": "row", "fill": "color" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.drop_zone_height, 200.0);
        assert_eq!(cfg.capture_velocity_margin, 0.3);
        assert_eq!(cfg.skin.layout, Layout::Row);
        assert_eq!(cfg.skin.fill, Fill::Color);
        assert_eq!(cfg.spring, SpringConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = InteractionConfig::from_json("{ drop_zone_height: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = InteractionConfig::from_json(r#"{ "inactive_opacity": 1.5 }"#).unwrap_err();
        match err {
            ConfigError::OutOfRange { field, value } => {
                assert_eq!(field, "inactive_opacity");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(InteractionConfig::from_json(r#"{ "spring": { "stiffness": 0 } }"#).is_err());
    }

    #[test]
    fn layout_rows() {
        assert_eq!(Layout::Row.rows_per_column(), 1);
        assert_eq!(Layout::Columns.rows_per_column(), 2);
    }
}
