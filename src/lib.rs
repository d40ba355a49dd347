#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{PageScroll, WheelConfig, WheelController};

mod constants;
mod dom;
mod events;
mod frame;
mod headings;
mod stars;
mod view;

use constants::{HEADING_SELECTOR, WHEEL_CONFIG_ATTRS, WHEEL_SELECTOR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("toc-wheel starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run_init);
        _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let wheel = match document.query_selector(WHEEL_SELECTOR) {
        Ok(Some(el)) => Some(mount_wheel(&document, el)?),
        _ => {
            log::info!("[wheel] no {} container on this page", WHEEL_SELECTOR);
            None
        }
    };
    let stars = stars::StarLayer::attach(&document)?;

    if wheel.is_none() && stars.is_none() {
        return Ok(());
    }
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { wheel, stars })));
    Ok(())
}

fn wheel_config(container: &web::Element) -> anyhow::Result<WheelConfig> {
    let attrs: Vec<(&str, String)> = WHEEL_CONFIG_ATTRS
        .iter()
        .filter_map(|&name| container.get_attribute(name).map(|v| (name, v)))
        .collect();
    WheelConfig::from_attrs(attrs.iter().map(|(n, v)| (*n, v.as_str())))
        .context("invalid wheel attributes")
}

fn mount_wheel(document: &web::Document, el: web::Element) -> anyhow::Result<frame::WheelHandle> {
    let config = wheel_config(&el)?;
    let container: web::HtmlElement = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("wheel container is not an HtmlElement: {:?}", e))?;

    let items = headings::collect(document, HEADING_SELECTOR);
    log::info!("[wheel] {} headings", items.len());

    let item_height = config.item_height_px;
    let mut controller = WheelController::new(config)?;
    controller.set_items(items);

    let view = Rc::new(view::WheelView::build(
        document,
        container,
        controller.items(),
        controller.geometry(),
        item_height,
    )?);
    view.apply(&controller.frame());
    let view_sub = view.clone();
    controller.subscribe(move |frame| view_sub.apply(frame));

    let controller = Rc::new(RefCell::new(controller));
    let page_scroll = Rc::new(RefCell::new(PageScroll::default()));

    if !controller.borrow().is_empty() {
        events::wire_pointer_handlers(events::WheelWiring {
            view,
            controller: controller.clone(),
            page_scroll: page_scroll.clone(),
            press: Rc::new(RefCell::new(events::press::PressState::default())),
        });
        events::wire_active_tracking(controller.clone(), page_scroll.clone());
    }

    Ok(frame::WheelHandle {
        controller,
        page_scroll,
    })
}
