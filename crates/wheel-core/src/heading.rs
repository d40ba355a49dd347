use crate::constants::{INDENT_DEEP_PX, INDENT_MEDIUM_PX, INDENT_SHALLOW_PX};

/// One entry of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingItem {
    /// In-page anchor including the leading `#`.
    pub url: String,
    pub title: String,
    /// 1..=6
    pub depth: u8,
}

impl HeadingItem {
    pub fn new(id: &str, title: impl Into<String>, depth: u8) -> Self {
        let url = if id.starts_with('#') {
            id.to_string()
        } else {
            format!("#{id}")
        };
        Self {
            url,
            title: title.into(),
            depth: depth.clamp(1, 6),
        }
    }

    /// Element id the anchor points at.
    pub fn anchor_id(&self) -> &str {
        self.url.strip_prefix('#').unwrap_or(&self.url)
    }

    pub fn indent_px(&self) -> f64 {
        indent_for_depth(self.depth)
    }
}

#[inline]
pub fn indent_for_depth(depth: u8) -> f64 {
    match depth {
        0..=2 => INDENT_SHALLOW_PX,
        3 => INDENT_MEDIUM_PX,
        _ => INDENT_DEEP_PX,
    }
}
