// Screen geometry in CSS pixels, as reported by `getBoundingClientRect`.

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct OverlayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect { left, top, right, bottom }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

// Rectangle covering both squares. For the usual case of a destination below and to the right of
// the origin this spans from the origin's top-left to the destination's bottom-right corner.
pub fn overlay_rect(origin: Rect, destination: Rect) -> OverlayRect {
    let left = origin.left.min(destination.left);
    let top = origin.top.min(destination.top);
    let right = origin.right.max(destination.right);
    let bottom = origin.bottom.max(destination.bottom);
    OverlayRect {
        left,
        top,
        width: right - left,
        height: bottom - top,
    }
}
