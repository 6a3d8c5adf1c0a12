// Scroll position helpers shared by the palette, sphere and header.

/// Fraction of the scrollable document passed, 0 when nothing scrolls.
#[inline]
pub fn document_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if max_scroll > 0.0 {
        (scroll_y / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Fraction of the first viewport height scrolled, 0 for a zero-sized viewport.
#[inline]
pub fn viewport_progress(scroll_y: f64, viewport_height: f64) -> f64 {
    if viewport_height > 0.0 {
        (scroll_y / viewport_height).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[inline]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
