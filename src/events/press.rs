/// Per-press bookkeeping shared by the pointer and click handlers.
#[derive(Default, Clone, Copy, Debug)]
pub struct PressState {
    pub down_y: Option<f64>,
    /// Vertical travel of the last press, used to tell clicks from drags.
    pub travel: f64,
    pub inside: bool,
}

impl PressState {
    pub fn begin(&mut self, y: f64) {
        self.down_y = Some(y);
        self.travel = 0.0;
    }

    /// Ends the press at `y`. `None` if no press was in progress.
    pub fn end(&mut self, y: f64) -> Option<f64> {
        let down_y = self.down_y.take()?;
        self.travel = (y - down_y).abs();
        Some(self.travel)
    }

    /// Whether a click should activate its row. `detail` is the DOM click
    /// count; keyboard activation reports 0 and never counts as a drag.
    /// The recorded travel is consumed either way.
    pub fn accept_click(&mut self, detail: i32, slop_px: f64) -> bool {
        let travel = std::mem::take(&mut self.travel);
        detail == 0 || travel < slop_px
    }
}
