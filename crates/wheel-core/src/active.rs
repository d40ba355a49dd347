use crate::constants::ACTIVATION_LINE_FRACTION;

/// Index of the heading the reader is currently in.
///
/// `tops` are viewport-relative heading offsets in document order. The
/// active heading is the last one at or above the activation line; before
/// the first heading is reached the first one is active.
pub fn active_index(tops: &[f64], activation_line: f64) -> Option<usize> {
    if tops.is_empty() {
        return None;
    }
    let passed = tops.iter().take_while(|&&top| top <= activation_line).count();
    Some(passed.saturating_sub(1))
}

#[inline]
pub fn activation_line(viewport_height: f64) -> f64 {
    viewport_height * ACTIVATION_LINE_FRACTION
}
