use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{active_index, activation_line, PageScroll, WheelController};

/// Tell the controller which heading the reader is in whenever the page
/// scrolls. Held back while a programmatic page scroll is running so the
/// wheel does not sweep through every heading it passes.
pub fn wire_active_tracking(
    controller: Rc<RefCell<WheelController>>,
    page_scroll: Rc<RefCell<PageScroll>>,
) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let anchors: Vec<String> = controller
        .borrow()
        .items()
        .iter()
        .map(|item| item.anchor_id().to_string())
        .collect();
    if anchors.is_empty() {
        return;
    }
    let last = Rc::new(Cell::new(None::<usize>));

    let sync = move || {
        if page_scroll.borrow().is_running() {
            return;
        }
        let tops: Vec<f64> = anchors
            .iter()
            .map(|id| {
                document
                    .get_element_by_id(id)
                    .map(|el| el.get_bounding_client_rect().top())
                    .unwrap_or(f64::INFINITY)
            })
            .collect();
        let (_, viewport_h) = dom::viewport_size();
        let Some(index) = active_index(&tops, activation_line(viewport_h)) else {
            return;
        };
        // an interrupted page scroll can leave the wheel parked on another row
        let parked_elsewhere = {
            let c = controller.borrow();
            !c.is_animating() && c.position() != index as f64
        };
        if last.get() != Some(index) || parked_elsewhere {
            last.set(Some(index));
            controller.borrow_mut().set_active_index(index);
        }
    };
    sync();

    let closure = Closure::wrap(Box::new(sync) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
