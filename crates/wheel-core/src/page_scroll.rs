//! Smooth page scrolling toward a heading anchor.
//!
//! Only one animation runs at a time: starting a new one drops whatever was
//! in flight, so the most recent click or settle always wins.

use crate::constants::PAGE_SCROLL_DURATION_MS;
use crate::motion::Tween;

/// Issued by the controller when the page should bring a heading into view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Strictly increasing; a larger generation supersedes a smaller one.
    pub generation: u64,
    pub index: usize,
    /// Element id without the leading `#`.
    pub anchor: String,
}

#[derive(Clone, Debug)]
pub struct PageScroll {
    duration_ms: f64,
    running: Option<(u64, Tween)>,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new(PAGE_SCROLL_DURATION_MS)
    }
}

impl PageScroll {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            running: None,
        }
    }

    /// Begin scrolling from `from_y` to `to_y`, replacing any running animation.
    pub fn start(&mut self, generation: u64, from_y: f64, to_y: f64) {
        if let Some((prev, _)) = &self.running {
            log::debug!("[scroll] generation {} superseded by {}", prev, generation);
        }
        self.running = Some((generation, Tween::new(from_y, to_y, self.duration_ms)));
    }

    pub fn cancel(&mut self) {
        self.running = None;
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn generation(&self) -> Option<u64> {
        self.running.as_ref().map(|(g, _)| *g)
    }

    /// Scroll offset to apply this frame, or `None` when idle.
    pub fn sample(&mut self, now_ms: f64) -> Option<f64> {
        let (_, tween) = self.running.as_mut()?;
        let (y, done) = tween.sample(now_ms);
        if done {
            self.running = None;
        }
        Some(y)
    }
}
