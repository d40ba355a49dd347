use crate::constants::{DARK_THEME_CLASS, HEAD_RADIUS_PX, STAR_CANVAS_ID, TRAIL_WIDTH_PX};
use crate::dom;
use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{
    head_color, shooting_star_opacity, star_color, trail_color, ShootingStar, Starfield, Theme,
};

/// Full-viewport canvas behind the page with the starfield drawn into it.
pub struct StarLayer {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Starfield,
    needs_resize: Rc<Cell<bool>>,
}

impl StarLayer {
    /// `None` when the page has no star canvas.
    pub fn attach(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(el) = document.get_element_by_id(STAR_CANVAS_ID) else {
            log::info!("[stars] no #{} canvas, skipping", STAR_CANVAS_ID);
            return Ok(None);
        };
        let canvas: web::HtmlCanvasElement = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", STAR_CANVAS_ID, e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let needs_resize = Rc::new(Cell::new(true));
        wire_resize(needs_resize.clone());

        Ok(Some(Self {
            document: document.clone(),
            canvas,
            ctx,
            field: Starfield::new(seed),
            needs_resize,
        }))
    }

    pub fn frame(&mut self, now_ms: f64) {
        if self.needs_resize.replace(false) {
            let (w, h) = dom::sync_canvas_to_viewport(&self.canvas);
            self.field.resize(w as f32, h as f32);
        }
        self.field.tick(now_ms);
        let theme = Theme::from_dark_flag(dom::is_dark_theme(&self.document, DARK_THEME_CLASS));
        self.draw(theme);
    }

    fn draw(&self, theme: Theme) {
        let ctx = &self.ctx;
        let (w, h) = self.field.size();
        ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

        for star in self.field.stars() {
            ctx.begin_path();
            _ = ctx.arc(star.pos.x as f64, star.pos.y as f64, star.size as f64, 0.0, TAU);
            ctx.set_fill_style_str(&star_color(star.color, theme).css());
            ctx.set_global_alpha(star.opacity as f64);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);

        for star in self.field.shooting_stars() {
            self.draw_shooting_star(star, theme);
        }
    }

    fn draw_shooting_star(&self, star: &ShootingStar, theme: Theme) {
        let ctx = &self.ctx;
        let opacity = shooting_star_opacity(star.progress(), &self.field.shooting_config);
        let tail = star.tail();
        let (hx, hy) = (star.pos.x as f64, star.pos.y as f64);

        let trail = trail_color(theme);
        let gradient = ctx.create_linear_gradient(tail.x as f64, tail.y as f64, hx, hy);
        _ = gradient.add_color_stop(0.0, &trail.with_alpha(0.0).css());
        _ = gradient.add_color_stop(0.7, &trail.with_alpha(opacity * 0.4).css());
        _ = gradient.add_color_stop(1.0, &trail.with_alpha(opacity * 0.8).css());

        ctx.begin_path();
        ctx.move_to(tail.x as f64, tail.y as f64);
        ctx.line_to(hx, hy);
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(TRAIL_WIDTH_PX);
        ctx.set_line_cap("round");
        ctx.stroke();

        ctx.begin_path();
        _ = ctx.arc(hx, hy, HEAD_RADIUS_PX, 0.0, TAU);
        ctx.set_fill_style_str(&head_color(theme, opacity).css());
        ctx.fill();
    }
}

fn wire_resize(needs_resize: Rc<Cell<bool>>) {
    let closure = Closure::wrap(Box::new(move || {
        needs_resize.set(true);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
