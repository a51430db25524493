use raylib::prelude::*;
use crate::constants::*;
use crate::data::SlideRecord;
use crate::layer::{Frame, Layer};

/// One static dot; there is no active-page highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Left-to-right row of dots anchored to the bottom-right corner.
pub fn dot_layout(slides: &[SlideRecord], screen_width: f32, screen_height: f32) -> Vec<Dot> {
    let row_left = screen_width - PAGINATION_RIGHT - slides.len() as f32 * DOT_SIZE;
    let center_y = screen_height - PAGINATION_BOTTOM - DOT_SIZE * 0.5;

    slides
        .iter()
        .enumerate()
        .map(|(i, slide)| Dot {
            center_x: row_left + i as f32 * DOT_SIZE + DOT_SIZE * 0.5,
            center_y,
            radius: DOT_SIZE * DOT_RATIO * 0.5,
            color: slide.accent_color,
        })
        .collect()
}

pub struct Pagination {
    dots: Vec<Dot>,
}

impl Pagination {
    pub fn new(slides: &[SlideRecord], screen_width: f32, screen_height: f32) -> Self {
        Self {
            dots: dot_layout(slides, screen_width, screen_height),
        }
    }
}

impl Layer for Pagination {
    fn draw(&self, d: &mut RaylibDrawHandle, _frame: &Frame) {
        for dot in &self.dots {
            d.draw_circle_v(Vector2::new(dot.center_x, dot.center_y), dot.radius, dot.color);
        }
    }
}
