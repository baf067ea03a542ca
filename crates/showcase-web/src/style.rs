// Inline style values for the text overlays.

#[inline]
pub fn opacity_css(opacity: f32) -> String {
    format!("{:.3}", opacity.clamp(0.0, 1.0))
}

#[inline]
pub fn translate_css(offset: [f32; 2]) -> String {
    format!("translate({:.1}px, {:.1}px)", offset[0], offset[1])
}

/// True when two overlay snapshots differ enough to be worth a style write.
#[inline]
pub fn overlay_changed(prev: (f32, [f32; 2]), next: (f32, [f32; 2]), epsilon: f32) -> bool {
    (prev.0 - next.0).abs() > epsilon
        || (prev.1[0] - next.1[0]).abs() > epsilon
        || (prev.1[1] - next.1[1]).abs() > epsilon
}

/// Whether `current` should be written over the last `written` snapshot.
///
/// Small steps are skipped, but once `current` reaches `target` it is always
/// flushed so the settled value lands in the DOM exactly.
#[inline]
pub fn overlay_needs_write(
    written: (f32, [f32; 2]),
    current: (f32, [f32; 2]),
    target: (f32, [f32; 2]),
    epsilon: f32,
) -> bool {
    overlay_changed(written, current, epsilon) || (current == target && written != current)
}

/// Backing-store size in device pixels for a CSS size and pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}
