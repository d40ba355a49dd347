//! Cylinder geometry for the wheel.
//!
//! Items sit on the face of a cylinder rotated about the X axis. The angular
//! step is chosen so the visible rows never wrap past the back of the
//! cylinder, and the radius so that one step spans exactly one row height.

use crate::config::WheelConfig;
use crate::constants::CONTAINER_SLACK_FACTOR;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    pub item_angle_deg: f64,
    pub radius_px: f64,
    pub container_height_px: f64,
    /// Rows past which items are hidden is `quarter_count + 1`.
    pub quarter_count: usize,
}

impl WheelGeometry {
    pub fn compute(item_count: usize, config: &WheelConfig) -> Self {
        let visible = config.visible_count.max(1);
        let segments = (visible * 2).max(item_count + config.edge_padding_items);
        let item_angle_deg = 360.0 / segments as f64;
        let radius_px = config.item_height_px / item_angle_deg.to_radians().tan();
        let container_height_px = (visible as f64 * config.item_height_px).min(
            (radius_px * 2.0 + config.item_height_px * CONTAINER_SLACK_FACTOR).round(),
        );
        Self {
            item_angle_deg,
            radius_px,
            container_height_px,
            quarter_count: visible / 2,
        }
    }

    /// Wheel rotation for a scroll position.
    #[inline]
    pub fn rotation_deg(&self, position: f64) -> f64 {
        self.item_angle_deg * position
    }

    /// Fixed angle of an item on the cylinder face.
    #[inline]
    pub fn item_angle_at(&self, index: usize) -> f64 {
        -self.item_angle_deg * index as f64
    }
}
