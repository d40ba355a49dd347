use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::HeadingItem;

/// `H1`..`H6` (any case) to heading depth.
#[inline]
pub fn depth_for_tag(tag: &str) -> Option<u8> {
    let bytes = tag.as_bytes();
    match bytes {
        [h, d] if h.eq_ignore_ascii_case(&b'h') && (b'1'..=b'6').contains(d) => Some(d - b'0'),
        _ => None,
    }
}

/// Collapse runs of whitespace the way the heading reads on screen.
pub fn normalize_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Scan the document for anchored headings in document order.
pub fn collect(document: &web::Document, selector: &str) -> Vec<HeadingItem> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("[wheel] bad heading selector {}", selector);
        return Vec::new();
    };
    let mut items = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let id = el.id();
        let Some(depth) = depth_for_tag(&el.tag_name()) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        let title = normalize_title(&el.text_content().unwrap_or_default());
        items.push(HeadingItem::new(&id, title, depth));
    }
    items
}
