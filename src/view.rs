use crate::constants::{ACTIVE_ROW_CLASSES, EMPTY_PLACEHOLDER, IDLE_ROW_CLASS, PERSPECTIVE_PX};
use crate::dom::{create_html_element, set_style};
use web_sys as web;
use wheel_core::{HeadingItem, WheelFrame, WheelGeometry};

/// DOM side of the wheel: a perspective container holding a rotated `<ul>`
/// of rows. Styles are written directly per frame, no diffing.
pub struct WheelView {
    container: web::HtmlElement,
    wheel: Option<web::HtmlElement>,
    rows: Vec<web::HtmlElement>,
}

impl WheelView {
    pub fn build(
        document: &web::Document,
        container: web::HtmlElement,
        items: &[HeadingItem],
        geometry: &WheelGeometry,
        item_height_px: f64,
    ) -> anyhow::Result<Self> {
        container.set_inner_html("");
        if items.is_empty() {
            let placeholder = create_html_element(document, "div")?;
            placeholder.set_class_name("rounded-lg border bg-fd-card p-3 text-xs text-fd-muted-foreground");
            placeholder.set_text_content(Some(EMPTY_PLACEHOLDER));
            _ = container.append_child(&placeholder);
            return Ok(Self {
                container,
                wheel: None,
                rows: Vec::new(),
            });
        }

        _ = container.set_attribute("role", "listbox");
        _ = container.set_attribute("tabindex", "0");
        _ = container.class_list().add_3("relative", "overflow-hidden", "cursor-grab");
        set_style(&container, "height", &format!("{}px", geometry.container_height_px));
        set_style(&container, "perspective", &format!("{}px", PERSPECTIVE_PX));
        set_style(&container, "touch-action", "none");

        let wheel = create_html_element(document, "ul")?;
        wheel.set_class_name(
            "pointer-events-none absolute inset-x-0 top-1/2 select-none will-change-transform",
        );
        set_style(&wheel, "transform-style", "preserve-3d");
        set_style(&wheel, "backface-visibility", "hidden");

        let mut rows = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let row = create_html_element(document, "li")?;
            row.set_class_name(
                "pointer-events-auto absolute inset-x-0 flex items-center text-sm transition-colors",
            );
            _ = row.class_list().add_1(IDLE_ROW_CLASS);
            _ = row.set_attribute("data-index", &index.to_string());
            set_style(&row, "height", &format!("{}px", item_height_px));
            set_style(&row, "top", &format!("{}px", -item_height_px / 2.0));
            set_style(
                &row,
                "transform",
                &format!(
                    "rotateX({}deg) translateZ({}px)",
                    geometry.item_angle_at(index),
                    geometry.radius_px
                ),
            );
            set_style(&row, "padding-inline-start", &format!("{}px", item.indent_px()));

            let button = create_html_element(document, "button")?;
            _ = button.set_attribute("type", "button");
            button.set_class_name("truncate text-left transition-colors hover:text-fd-foreground");
            button.set_text_content(Some(&item.title));
            _ = row.append_child(&button);
            _ = wheel.append_child(&row);
            rows.push(row);
        }
        _ = container.append_child(&wheel);

        // center highlight bar
        let bar = create_html_element(document, "div")?;
        bar.set_class_name("pointer-events-none absolute inset-x-0 top-1/2 rounded-sm bg-fd-accent/30");
        set_style(&bar, "height", &format!("{}px", item_height_px));
        set_style(&bar, "margin-top", &format!("{}px", -item_height_px / 2.0));
        _ = container.append_child(&bar);

        // fade mask
        let mask = create_html_element(document, "div")?;
        mask.set_class_name("pointer-events-none absolute inset-0");
        set_style(
            &mask,
            "background",
            "linear-gradient(to bottom, var(--color-fd-background) 0%, transparent 20%, transparent 80%, var(--color-fd-background) 100%)",
        );
        _ = container.append_child(&mask);

        Ok(Self {
            container,
            wheel: Some(wheel),
            rows,
        })
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn apply(&self, frame: &WheelFrame) {
        let Some(wheel) = &self.wheel else {
            return;
        };
        set_style(
            wheel,
            "transform",
            &format!(
                "translateZ({}px) rotateX({}deg)",
                frame.translate_z_px, frame.rotation_deg
            ),
        );
        for (row, visual) in self.rows.iter().zip(frame.items.iter()) {
            set_style(row, "visibility", if visual.visible { "visible" } else { "hidden" });
            set_style(row, "opacity", &visual.opacity.to_string());
            let classes = row.class_list();
            if visual.active {
                _ = classes.add_2(ACTIVE_ROW_CLASSES[0], ACTIVE_ROW_CLASSES[1]);
                _ = classes.remove_1(IDLE_ROW_CLASS);
            } else {
                _ = classes.remove_2(ACTIVE_ROW_CLASSES[0], ACTIVE_ROW_CLASSES[1]);
                _ = classes.add_1(IDLE_ROW_CLASS);
            }
        }
    }

    pub fn set_dragging(&self, dragging: bool) {
        let classes = self.container.class_list();
        let (on, off) = if dragging {
            ("cursor-grabbing", "cursor-grab")
        } else {
            ("cursor-grab", "cursor-grabbing")
        };
        _ = classes.remove_1(off);
        _ = classes.add_1(on);
    }
}
