use crate::constants::{FRAME_MS, VELOCITY_BLEND_ALPHA};
use crate::motion::soft_clamp;

/// Pointer state between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_y: f64,
    pub start_position: f64,
    pub last_y: f64,
    pub last_time_ms: f64,
    /// Items per 16ms frame, exponentially smoothed.
    pub velocity: f64,
}

impl DragSession {
    pub fn begin(pointer_y: f64, position: f64, now_ms: f64) -> Self {
        Self {
            start_y: pointer_y,
            start_position: position,
            last_y: pointer_y,
            last_time_ms: now_ms,
            velocity: 0.0,
        }
    }

    /// Feed a pointer sample and return the new (rubber-banded) position.
    ///
    /// Dragging down moves toward earlier items, so positions grow as the
    /// pointer moves up.
    pub fn sample(&mut self, pointer_y: f64, now_ms: f64, item_height: f64, item_count: usize) -> f64 {
        let dt = now_ms - self.last_time_ms;
        if dt > 0.0 {
            let step = -(pointer_y - self.last_y) / item_height;
            let instant = step / dt * FRAME_MS;
            self.velocity =
                (1.0 - VELOCITY_BLEND_ALPHA) * self.velocity + VELOCITY_BLEND_ALPHA * instant;
            self.last_time_ms = now_ms;
            self.last_y = pointer_y;
        }

        let raw = self.start_position - (pointer_y - self.start_y) / item_height;
        let last = item_count.saturating_sub(1) as f64;
        soft_clamp(raw, 0.0, last)
    }
}
