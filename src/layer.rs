use raylib::prelude::*;

/// Inputs shared by every layer for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub offset: f32,
    pub width: f32,
    pub height: f32,
}

/// One visual layer of the screen, drawn back to front.
pub trait Layer {
    fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame);
}

/// Largest `(width, height)` with the source's aspect ratio that fits the box.
pub fn fit_contain(src_width: f32, src_height: f32, box_width: f32, box_height: f32) -> (f32, f32) {
    if src_width <= 0.0 || src_height <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = (box_width / src_width).min(box_height / src_height);
    (src_width * scale, src_height * scale)
}
