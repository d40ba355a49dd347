use crate::dom;
use crate::stars::StarLayer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{PageScroll, ScrollRequest, WheelController};

pub struct WheelHandle {
    pub controller: Rc<RefCell<WheelController>>,
    pub page_scroll: Rc<RefCell<PageScroll>>,
}

pub struct FrameContext {
    pub wheel: Option<WheelHandle>,
    pub stars: Option<StarLayer>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();

        if let Some(w) = &self.wheel {
            w.controller.borrow_mut().tick(now);
            let request = w.controller.borrow_mut().take_scroll_request();
            if let Some(req) = request {
                begin_page_scroll(&req, &mut w.page_scroll.borrow_mut());
            }
            let next_y = w.page_scroll.borrow_mut().sample(now);
            if let (Some(y), Some(window)) = (next_y, web::window()) {
                window.scroll_to_with_x_and_y(window.scroll_x().unwrap_or(0.0), y);
            }
        }

        if let Some(s) = &mut self.stars {
            s.frame(now);
        }
    }
}

fn begin_page_scroll(req: &ScrollRequest, page_scroll: &mut PageScroll) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(&req.anchor)) else {
        log::warn!("[scroll] #{} not found", req.anchor);
        return;
    };
    let from = window.scroll_y().unwrap_or(0.0);
    let to = (from + el.get_bounding_client_rect().top()).max(0.0);
    log::info!("[scroll] #{} ({:.0} -> {:.0})", req.anchor, from, to);
    page_scroll.start(req.generation, from, to);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
