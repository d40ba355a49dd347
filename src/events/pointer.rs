use super::press::PressState;
use crate::constants::CLICK_SLOP_PX;
use crate::dom;
use crate::view::WheelView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{PageScroll, WheelController};

#[derive(Clone)]
pub struct WheelWiring {
    pub view: Rc<WheelView>,
    pub controller: Rc<RefCell<WheelController>>,
    pub page_scroll: Rc<RefCell<PageScroll>>,
    pub press: Rc<RefCell<PressState>>,
}

pub fn wire_pointer_handlers(w: WheelWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
    wire_row_click(&w);
    wire_hover_tracking(&w);
    wire_page_scroll_lock(&w);
}

fn wire_pointerdown(w: &WheelWiring) {
    let w = w.clone();
    let container = w.view.container().clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let y = ev.client_y() as f64;
        w.controller.borrow_mut().pointer_down(y, instant::now());
        w.page_scroll.borrow_mut().cancel();
        w.press.borrow_mut().begin(y);
        w.view.set_dragging(true);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &WheelWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() || w.press.borrow().down_y.is_none() {
            return;
        }
        w.controller
            .borrow_mut()
            .pointer_move(ev.client_y() as f64, instant::now());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &WheelWiring, event: &str) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(travel) = w.press.borrow_mut().end(ev.client_y() as f64) else {
            return;
        };
        if let Some(target) = w.controller.borrow_mut().pointer_up() {
            log::debug!("[wheel] released toward row {} after {:.0}px", target, travel);
        }
        w.view.set_dragging(false);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_row_click(w: &WheelWiring) {
    let w = w.clone();
    let container = w.view.container().clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if !w.press.borrow_mut().accept_click(ev.detail(), CLICK_SLOP_PX) {
            return;
        }
        let Some(index) = dom::row_index_of(ev.target()) else {
            return;
        };
        log::info!("[click] row {}", index);
        w.controller.borrow_mut().click_item(index);
        ev.stop_propagation();
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_hover_tracking(w: &WheelWiring) {
    let container = w.view.container().clone();
    for (event, inside) in [("pointerenter", true), ("pointerleave", false)] {
        let press = w.press.clone();
        let closure = Closure::wrap(Box::new(move || {
            press.borrow_mut().inside = inside;
        }) as Box<dyn FnMut()>);
        _ = container.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// While the pointer is over the wheel the page must not scroll underneath it.
// Outside the wheel, a user scroll abandons any programmatic page scroll.
fn wire_page_scroll_lock(w: &WheelWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);

    for event in ["wheel", "touchmove"] {
        let press = w.press.clone();
        let page_scroll = w.page_scroll.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if press.borrow().inside {
                ev.prevent_default();
            } else if page_scroll.borrow().is_running() {
                page_scroll.borrow_mut().cancel();
                log::debug!("[scroll] cancelled by user {}", ev.type_());
            }
        }) as Box<dyn FnMut(_)>);
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}
