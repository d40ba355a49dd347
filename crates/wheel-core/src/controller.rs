//! The wheel's scroll-position state machine.
//!
//! Exactly one of three phases owns the position at any time:
//!
//! - `Idle`: the position follows the page's active heading through an eased tween.
//! - `UserDragging`: the position follows the pointer, rubber-banded at both ends.
//! - `Settling`: a spring carries the release velocity to the nearest row.
//!
//! Renderers observe the wheel through [`WheelController::subscribe`]; the
//! only outward effect is a [`ScrollRequest`] when the user lands on a new row.

use crate::config::WheelConfig;
use crate::constants::{FRAME_MS, MAX_FRAME_DT_MS, SETTLE_EPSILON, SETTLE_MAX_MS, SNAP_EPSILON};
use crate::drag::DragSession;
use crate::error::ConfigError;
use crate::geometry::WheelGeometry;
use crate::heading::HeadingItem;
use crate::motion::{Spring, Tween};
use crate::page_scroll::ScrollRequest;
use crate::render::{render_pass, WheelFrame};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelState {
    Idle,
    UserDragging,
    Settling,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle { tween: Option<Tween> },
    Dragging(DragSession),
    Settling {
        spring: Spring,
        target: usize,
        elapsed_ms: f64,
    },
}

pub type SubscriptionId = u64;
type Listener = Box<dyn FnMut(&WheelFrame)>;

pub struct WheelController {
    config: WheelConfig,
    items: Vec<HeadingItem>,
    anchors: FnvHashMap<String, usize>,
    geometry: WheelGeometry,
    position: f64,
    phase: Phase,
    active_index: usize,
    committed_index: Option<usize>,
    last_tick_ms: Option<f64>,
    generation: u64,
    pending_scroll: Option<ScrollRequest>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl WheelController {
    pub fn new(config: WheelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let geometry = WheelGeometry::compute(0, &config);
        Ok(Self {
            config,
            items: Vec::new(),
            anchors: FnvHashMap::default(),
            geometry,
            position: 0.0,
            phase: Phase::Idle { tween: None },
            active_index: 0,
            committed_index: None,
            last_tick_ms: None,
            generation: 0,
            pending_scroll: None,
            listeners: Vec::new(),
            next_subscription: 1,
        })
    }

    /// Replace the heading list. Any drag or animation is abandoned.
    pub fn set_items(&mut self, items: Vec<HeadingItem>) {
        self.anchors = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.anchor_id().to_string(), i))
            .collect();
        self.items = items;
        self.geometry = WheelGeometry::compute(self.items.len(), &self.config);
        let last = self.last_index();
        self.position = self.position.round().clamp(0.0, last as f64);
        self.active_index = self.active_index.min(last);
        self.committed_index = self.committed_index.map(|i| i.min(last));
        self.phase = Phase::Idle { tween: None };
        log::debug!(
            "[wheel] {} items, step {:.2}deg radius {:.1}px",
            self.items.len(),
            self.geometry.item_angle_deg,
            self.geometry.radius_px
        );
        self.emit();
    }

    pub fn items(&self) -> &[HeadingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn state(&self) -> WheelState {
        match self.phase {
            Phase::Idle { .. } => WheelState::Idle,
            Phase::Dragging(_) => WheelState::UserDragging,
            Phase::Settling { .. } => WheelState::Settling,
        }
    }

    /// Current velocity in items per 16ms frame.
    pub fn velocity(&self) -> f64 {
        match &self.phase {
            Phase::Idle { .. } => 0.0,
            Phase::Dragging(drag) => drag.velocity,
            Phase::Settling { spring, .. } => spring.velocity * FRAME_MS / 1000.0,
        }
    }

    /// Target row of the running settle, if any.
    pub fn settle_target(&self) -> Option<usize> {
        match self.phase {
            Phase::Settling { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    fn position_bounds(&self) -> (f64, f64) {
        (-0.5, self.items.len() as f64 - 0.5)
    }

    /// Place the wheel directly, cancelling any drag or animation.
    pub fn set_scroll_position(&mut self, position: f64) {
        if self.items.is_empty() || !position.is_finite() {
            return;
        }
        let (lo, hi) = self.position_bounds();
        self.position = position.clamp(lo, hi);
        self.phase = Phase::Idle { tween: None };
        self.emit();
    }

    /// The page reports a new active heading.
    ///
    /// Recorded in every phase, but only moves the wheel while idle so the
    /// page never fights the user's hand.
    pub fn set_active_index(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        let index = index.min(self.last_index());
        self.active_index = index;
        self.committed_index = Some(index);

        let Phase::Idle { tween } = &mut self.phase else {
            log::debug!("[wheel] active heading {} ignored while {:?}", index, self.state());
            return;
        };
        let target = index as f64;
        if (self.position - target).abs() < SNAP_EPSILON {
            *tween = None;
            self.position = target;
            self.emit();
            return;
        }
        if tween.map(|t| t.to == target).unwrap_or(false) {
            return;
        }
        *tween = Some(Tween::new(self.position, target, self.config.tween_duration_ms));
    }

    /// Look up an anchor (`"#id"` or `"id"`) and treat it as the active heading.
    /// Returns false for unknown anchors, which are ignored.
    pub fn set_active_anchor(&mut self, anchor: &str) -> bool {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        // no active heading yet means the top of the list
        if id.is_empty() && !self.items.is_empty() {
            self.set_active_index(0);
            return true;
        }
        match self.anchors.get(id).copied() {
            Some(index) => {
                self.set_active_index(index);
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&mut self, pointer_y: f64, now_ms: f64) {
        if self.items.is_empty() {
            return;
        }
        if !matches!(self.phase, Phase::Idle { tween: None }) {
            log::debug!("[wheel] drag interrupts {:?}", self.state());
        }
        self.phase = Phase::Dragging(DragSession::begin(pointer_y, self.position, now_ms));
    }

    /// Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, pointer_y: f64, now_ms: f64) {
        let Phase::Dragging(drag) = &mut self.phase else {
            return;
        };
        let position = drag.sample(
            pointer_y,
            now_ms,
            self.config.item_height_px,
            self.items.len(),
        );
        if position != self.position {
            self.position = position;
            self.emit();
        }
    }

    /// Release the drag into a settle. Returns the row the wheel will land on,
    /// or `None` if no drag was in progress.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let Phase::Dragging(drag) = self.phase else {
            return None;
        };
        let velocity = drag.velocity;
        let projected = if velocity.abs() >= self.config.velocity_threshold {
            self.position + velocity * self.config.projection_frames
        } else {
            self.position
        };
        let target = (projected.round().max(0.0) as usize).min(self.last_index());
        log::debug!(
            "[wheel] release at {:.2} v={:.3} -> row {}",
            self.position,
            velocity,
            target
        );
        self.phase = Phase::Settling {
            spring: Spring::new(self.position, velocity * 1000.0 / FRAME_MS, target as f64),
            target,
            elapsed_ms: 0.0,
        };
        Some(target)
    }

    /// Jump to a row because the user clicked it. Always scrolls the page.
    pub fn click_item(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        let index = index.min(self.last_index());
        let target = index as f64;
        let tween = ((self.position - target).abs() >= SNAP_EPSILON)
            .then(|| Tween::new(self.position, target, self.config.tween_duration_ms));
        if tween.is_none() {
            self.position = target;
        }
        self.phase = Phase::Idle { tween };
        self.request_scroll(index);
        self.emit();
    }

    /// Advance animations to `now_ms`. Returns true if the position moved.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let dt_ms = match self.last_tick_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_DT_MS),
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);

        let before = self.position;
        let (lo, hi) = self.position_bounds();
        let mut settled = None;
        match &mut self.phase {
            Phase::Idle { tween: None } | Phase::Dragging(_) => {}
            Phase::Idle { tween: Some(t) } => {
                let (value, done) = t.sample(now_ms);
                self.position = value;
                if done {
                    self.phase = Phase::Idle { tween: None };
                }
            }
            Phase::Settling {
                spring,
                target,
                elapsed_ms,
            } => {
                spring.step(self.config.spring, dt_ms / 1000.0);
                *elapsed_ms += dt_ms;
                if spring.position < lo || spring.position > hi {
                    spring.position = spring.position.clamp(lo, hi);
                    spring.velocity = 0.0;
                }
                self.position = spring.position;
                if spring.is_at_rest(SETTLE_EPSILON) || *elapsed_ms >= SETTLE_MAX_MS {
                    settled = Some(*target);
                }
            }
        }

        if let Some(target) = settled {
            self.position = target as f64;
            self.phase = Phase::Idle { tween: None };
            if self.committed_index != Some(target) {
                self.request_scroll(target);
            }
        }

        let moved = self.position != before;
        if moved {
            self.emit();
        }
        moved
    }

    /// True while anything still needs frames.
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle { tween: None })
    }

    pub fn frame(&self) -> WheelFrame {
        render_pass(self.position, &self.geometry, self.items.len())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&WheelFrame) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Most recent scroll request not yet handed to the page. Older requests
    /// that were never taken are dropped.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    fn request_scroll(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        self.generation += 1;
        self.committed_index = Some(index);
        log::debug!("[wheel] scroll #{} ({})", item.anchor_id(), self.generation);
        self.pending_scroll = Some(ScrollRequest {
            generation: self.generation,
            index,
            anchor: item.anchor_id().to_string(),
        });
    }

    fn emit(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let frame = self.frame();
        for (_, listener) in &mut self.listeners {
            listener(&frame);
        }
    }
}
