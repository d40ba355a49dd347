use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wheel_core::motion::SpringParams;
use wheel_core::{HeadingItem, WheelConfig, WheelController, WheelState};

fn headings(n: usize) -> Vec<HeadingItem> {
    (0..n)
        .map(|i| HeadingItem::new(&format!("h{i}"), format!("Heading {i}"), 2 + (i % 3) as u8))
        .collect()
}

fn controller(n: usize) -> WheelController {
    let mut c = WheelController::new(WheelConfig::default()).unwrap();
    c.set_items(headings(n));
    c
}

/// Tick at 16ms intervals starting at `start_ms` until the wheel is idle.
fn run_until_idle(c: &mut WheelController, start_ms: f64) -> f64 {
    let mut now = start_ms;
    while c.is_animating() && now < start_ms + 5000.0 {
        now += 16.0;
        c.tick(now);
    }
    now
}

#[test]
fn idle_wheel_follows_active_heading_within_tween_duration() {
    let mut c = controller(5);
    c.tick(0.0);
    c.set_active_index(2);
    assert_eq!(c.state(), WheelState::Idle);

    c.tick(16.0);
    c.tick(166.0);
    let mid = c.position();
    assert!(mid > 0.0 && mid < 2.0, "mid-tween position {mid}");

    c.tick(316.0);
    assert!((c.position() - 2.0).abs() <= 0.01);
    assert!(!c.is_animating());
}

#[test]
fn active_heading_already_under_the_wheel_snaps() {
    let mut c = controller(5);
    c.set_scroll_position(2.005);
    c.set_active_index(2);
    assert_eq!(c.position(), 2.0);
    assert!(!c.is_animating());
}

#[test]
fn active_anchor_lookup_accepts_hash_and_ignores_unknown() {
    let mut c = controller(5);
    assert!(c.set_active_anchor("#h3"));
    assert_eq!(c.active_index(), 3);
    assert!(c.set_active_anchor("h1"));
    assert_eq!(c.active_index(), 1);
    assert!(!c.set_active_anchor("#nope"));
    assert_eq!(c.active_index(), 1);
    assert!(c.set_active_anchor(""));
    assert_eq!(c.active_index(), 0);
}

#[test]
fn pointer_down_enters_dragging_from_idle_and_settling() {
    let mut c = controller(5);
    c.pointer_down(100.0, 0.0);
    assert_eq!(c.state(), WheelState::UserDragging);

    assert!(c.pointer_up().is_some());
    assert_eq!(c.state(), WheelState::Settling);

    c.pointer_down(100.0, 20.0);
    assert_eq!(c.state(), WheelState::UserDragging);
}

#[test]
fn pointer_up_settles_even_without_movement() {
    let mut c = controller(5);
    c.pointer_down(100.0, 0.0);
    assert_eq!(c.pointer_up(), Some(0));
    assert_eq!(c.state(), WheelState::Settling);
    c.tick(16.0);
    run_until_idle(&mut c, 16.0);
    assert_eq!(c.state(), WheelState::Idle);
    assert_eq!(c.position(), 0.0);
}

#[test]
fn stray_pointer_events_are_ignored() {
    let mut c = controller(5);
    c.set_scroll_position(1.0);
    c.pointer_move(0.0, 10.0);
    assert_eq!(c.position(), 1.0);
    assert_eq!(c.pointer_up(), None);
    assert_eq!(c.state(), WheelState::Idle);
}

#[test]
fn dragging_up_advances_one_row_per_item_height() {
    let mut c = controller(5);
    c.pointer_down(300.0, 0.0);
    c.pointer_move(268.0, 16.0);
    assert!((c.position() - 1.0).abs() < 1e-9);
    c.pointer_move(236.0, 32.0);
    assert!((c.position() - 2.0).abs() < 1e-9);
    // one row per frame, blended twice
    assert!((c.velocity() - 0.84).abs() < 1e-9);
}

#[test]
fn active_heading_changes_are_ignored_while_user_controls_the_wheel() {
    let mut c = controller(5);
    c.pointer_down(300.0, 0.0);
    c.pointer_move(284.0, 16.0);
    let pos = c.position();
    c.set_active_index(4);
    assert_eq!(c.position(), pos);
    assert_eq!(c.state(), WheelState::UserDragging);
    assert_eq!(c.active_index(), 4);

    c.pointer_up();
    c.set_active_index(3);
    assert_eq!(c.state(), WheelState::Settling);
}

#[test]
fn fling_lands_on_projected_row() {
    let mut c = controller(40);
    c.set_active_index(0);
    c.pointer_down(300.0, 0.0);
    c.pointer_move(268.0, 16.0);
    c.pointer_move(236.0, 32.0);

    let position = c.position();
    let velocity = c.velocity();
    let expected = (position + velocity * c.config().projection_frames).round() as usize;
    assert!(velocity >= c.config().velocity_threshold);

    let target = c.pointer_up();
    assert_eq!(target, Some(expected));
    assert_eq!(expected, 19);
    assert_eq!(c.settle_target(), Some(19));

    c.tick(48.0);
    run_until_idle(&mut c, 48.0);
    assert_eq!(c.state(), WheelState::Idle);
    assert_eq!(c.settle_target(), None);
    assert_eq!(c.position(), 19.0);

    let req = c.take_scroll_request().expect("settle onto a new row scrolls the page");
    assert_eq!(req.index, 19);
    assert_eq!(req.anchor, "h19");
    assert!(c.take_scroll_request().is_none());
}

#[test]
fn fling_past_the_end_clamps_to_last_row() {
    let mut c = controller(5);
    c.pointer_down(300.0, 0.0);
    c.pointer_move(268.0, 16.0);
    c.pointer_move(236.0, 32.0);
    assert_eq!(c.pointer_up(), Some(4));
    c.tick(48.0);
    run_until_idle(&mut c, 48.0);
    assert_eq!(c.position(), 4.0);
}

#[test]
fn sluggish_spring_gives_up_and_snaps_after_max_settle_time() {
    let config = WheelConfig {
        spring: SpringParams {
            stiffness: 0.01,
            damping: 0.01,
        },
        ..WheelConfig::default()
    };
    let mut c = WheelController::new(config).unwrap();
    c.set_items(headings(5));
    c.set_active_index(0);
    c.pointer_down(300.0, 0.0);
    c.pointer_move(268.0, 16.0);
    c.pointer_move(236.0, 32.0);
    assert_eq!(c.pointer_up(), Some(4));

    let mut now = 32.0;
    c.tick(now);
    while now < 1800.0 {
        now += 16.0;
        c.tick(now);
    }
    assert_eq!(c.state(), WheelState::Settling);
    assert_ne!(c.position(), 4.0);

    while c.is_animating() && now < 3000.0 {
        now += 16.0;
        c.tick(now);
    }
    assert_eq!(c.state(), WheelState::Idle);
    assert_eq!(c.position(), 4.0);
    assert!(now >= 2000.0 && now < 2200.0, "settled at {now}");
    assert_eq!(c.take_scroll_request().map(|r| r.index), Some(4));
}

#[test]
fn slow_release_snaps_back_without_scrolling_the_page() {
    let mut c = controller(5);
    c.set_active_index(0);
    c.pointer_down(300.0, 0.0);
    c.pointer_move(290.0, 1000.0);
    assert!(c.velocity().abs() < c.config().velocity_threshold);
    assert_eq!(c.pointer_up(), Some(0));
    c.tick(1016.0);
    run_until_idle(&mut c, 1016.0);
    assert_eq!(c.position(), 0.0);
    assert!(c.take_scroll_request().is_none());
}

#[test]
fn newer_click_supersedes_pending_scroll() {
    let mut c = controller(5);
    c.click_item(1);
    c.click_item(3);
    let req = c.take_scroll_request().unwrap();
    assert_eq!(req.index, 3);
    assert_eq!(req.anchor, "h3");
    assert!(c.take_scroll_request().is_none());

    c.click_item(2);
    let next = c.take_scroll_request().unwrap();
    assert!(next.generation > req.generation);
}

#[test]
fn click_cancels_settling_and_tweens_to_row() {
    let mut c = controller(8);
    c.pointer_down(300.0, 0.0);
    c.pointer_move(200.0, 16.0);
    c.pointer_up();
    assert_eq!(c.state(), WheelState::Settling);

    c.click_item(6);
    assert_eq!(c.state(), WheelState::Idle);
    c.tick(100.0);
    c.tick(500.0);
    assert_eq!(c.position(), 6.0);
}

#[test]
fn scroll_position_mutator_clamps_to_soft_bounds() {
    let mut c = controller(5);
    c.set_scroll_position(10.0);
    assert_eq!(c.position(), 4.5);
    c.set_scroll_position(-3.0);
    assert_eq!(c.position(), -0.5);
    c.set_scroll_position(f64::NAN);
    assert_eq!(c.position(), -0.5);
}

#[test]
fn subscribers_see_every_position_change_until_unsubscribed() {
    let mut c = controller(5);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = c.subscribe(move |frame| sink.borrow_mut().push(frame.position));

    c.set_scroll_position(1.25);
    c.pointer_down(200.0, 0.0);
    c.pointer_move(184.0, 16.0);
    assert_eq!(*seen.borrow(), vec![1.25, 1.75]);

    assert!(c.unsubscribe(id));
    assert!(!c.unsubscribe(id));
    c.pointer_move(168.0, 32.0);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn empty_wheel_ignores_interaction() {
    let mut c = controller(0);
    c.pointer_down(10.0, 0.0);
    assert_eq!(c.state(), WheelState::Idle);
    c.click_item(3);
    assert!(c.take_scroll_request().is_none());
    c.set_active_index(2);
    assert_eq!(c.position(), 0.0);
    assert!(c.frame().items.is_empty());
}

#[test]
fn replacing_items_clamps_position_and_resets_state() {
    let mut c = controller(10);
    c.set_scroll_position(8.0);
    c.pointer_down(0.0, 0.0);
    c.set_items(headings(3));
    assert_eq!(c.state(), WheelState::Idle);
    assert_eq!(c.position(), 2.0);
    assert_eq!(c.frame().items.len(), 3);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = WheelConfig {
        visible_count: 0,
        ..WheelConfig::default()
    };
    assert!(WheelController::new(cfg).is_err());
}

proptest! {
    #[test]
    fn drag_stays_within_soft_bounds_and_settles_on_a_row(
        n in 1usize..30,
        start in 0usize..30,
        moves in prop::collection::vec(-2000.0f64..2000.0, 1..20),
    ) {
        let mut c = controller(n);
        c.set_scroll_position(start.min(n - 1) as f64);
        let lo = -0.5;
        let hi = n as f64 - 0.5;

        let mut y = 500.0;
        let mut now = 0.0;
        c.pointer_down(y, now);
        for dy in moves {
            y += dy;
            now += 16.0;
            c.pointer_move(y, now);
            prop_assert!(c.position() >= lo && c.position() <= hi, "position {}", c.position());
        }
        let target = c.pointer_up().unwrap();
        prop_assert!(target < n);

        c.tick(now);
        while c.is_animating() && now < 10_000.0 {
            now += 16.0;
            c.tick(now);
            prop_assert!(c.position() >= lo && c.position() <= hi);
        }
        prop_assert_eq!(c.state(), WheelState::Idle);
        prop_assert_eq!(c.position(), target as f64);
    }
}
