//! Wheel configuration.
//!
//! Defaults come from [`crate::constants`]. The web frontend overrides a few
//! of them from `data-*` attributes on the widget container, which is why
//! [`WheelConfig::from_attrs`] takes plain name/value pairs.

use crate::constants::*;
use crate::error::ConfigError;
use crate::motion::SpringParams;

#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfig {
    pub item_height_px: f64,
    pub visible_count: usize,
    pub edge_padding_items: usize,
    pub tween_duration_ms: f64,
    /// Release velocity (items per 16ms frame) below which the wheel just
    /// snaps to the nearest row.
    pub velocity_threshold: f64,
    /// Frames of momentum a release is projected forward by.
    pub projection_frames: f64,
    pub spring: SpringParams,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            item_height_px: ITEM_HEIGHT_PX,
            visible_count: VISIBLE_COUNT,
            edge_padding_items: EDGE_PADDING_ITEMS,
            tween_duration_ms: TWEEN_DURATION_MS,
            velocity_threshold: VELOCITY_THRESHOLD,
            projection_frames: PROJECTION_FRAMES,
            spring: SpringParams::default(),
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.item_height_px.is_finite() && self.item_height_px > 0.0) {
            return Err(ConfigError::ItemHeight(self.item_height_px));
        }
        if self.visible_count == 0 {
            return Err(ConfigError::VisibleCount);
        }
        if !(self.tween_duration_ms.is_finite() && self.tween_duration_ms > 0.0) {
            return Err(ConfigError::TweenDuration(self.tween_duration_ms));
        }
        let SpringParams { stiffness, damping } = self.spring;
        if !(stiffness > 0.0 && damping > 0.0) {
            return Err(ConfigError::Spring { stiffness, damping });
        }
        Ok(())
    }

    /// Build a config from `data-*` style attributes, starting from defaults.
    ///
    /// Recognised names: `item-height`, `visible-count`, `tween-ms` (with or
    /// without a `data-` prefix). Anything else is ignored.
    pub fn from_attrs<'a, I>(attrs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        for (name, value) in attrs {
            let key = name.strip_prefix("data-").unwrap_or(name);
            match key {
                "item-height" => cfg.item_height_px = parse_attr(name, value)?,
                "visible-count" => cfg.visible_count = parse_attr(name, value)?,
                "tween-ms" => cfg.tween_duration_ms = parse_attr(name, value)?,
                _ => {}
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_attr<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Attribute {
        name: name.to_string(),
        value: value.to_string(),
    })
}
