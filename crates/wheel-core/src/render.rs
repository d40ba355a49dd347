use crate::constants::{ACTIVE_DISTANCE, OPACITY_FALLOFF_PER_ITEM};
use crate::geometry::WheelGeometry;
use smallvec::SmallVec;

/// Visual parameters of one row for the current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemVisual {
    pub index: usize,
    pub angle_deg: f64,
    pub distance: f64,
    pub visible: bool,
    pub opacity: f64,
    pub active: bool,
}

/// Everything a renderer needs to draw the wheel at one scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelFrame {
    pub position: f64,
    pub rotation_deg: f64,
    pub translate_z_px: f64,
    pub container_height_px: f64,
    pub items: SmallVec<[ItemVisual; 16]>,
}

impl WheelFrame {
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().find(|i| i.active).map(|i| i.index)
    }
}

/// Stateless: the same position, geometry and count always give the same frame.
pub fn render_pass(position: f64, geometry: &WheelGeometry, item_count: usize) -> WheelFrame {
    let hide_beyond = geometry.quarter_count as f64 + 1.0;
    let items = (0..item_count)
        .map(|index| {
            let distance = (index as f64 - position).abs();
            ItemVisual {
                index,
                angle_deg: geometry.item_angle_at(index),
                distance,
                visible: distance <= hide_beyond,
                opacity: (1.0 - distance * OPACITY_FALLOFF_PER_ITEM).max(0.0),
                active: distance < ACTIVE_DISTANCE,
            }
        })
        .collect();
    WheelFrame {
        position,
        rotation_deg: geometry.rotation_deg(position),
        translate_z_px: -geometry.radius_px,
        container_height_px: geometry.container_height_px,
        items,
    }
}
