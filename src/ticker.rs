//! Category "reel" at the top-left of the screen.
//!
//! The labels are stacked one row apart and share a single vertical
//! translation. The translation is defined over the fixed window `[-W, W]`
//! around slide 0 and extends linearly outside it; it is not re-centered on the
//! visible page.

use raylib::prelude::*;
use crate::constants::*;
use crate::data::SlideRecord;
use crate::interpolate::{Extrapolate, Interpolation};
use crate::layer::{Frame, Layer};

pub fn ticker_translate(offset: f32, width: f32, row_height: f32) -> f32 {
    Interpolation::new([-width, 0.0, width], [row_height, 0.0, -row_height], Extrapolate::Extend).eval(offset)
}

pub struct Ticker {
    labels: Vec<String>,
}

impl Ticker {
    pub fn new(slides: &[SlideRecord]) -> Self {
        Self {
            labels: slides.iter().map(|s| s.category.to_uppercase()).collect(),
        }
    }
}

impl Layer for Ticker {
    fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let translate = ticker_translate(frame.offset, frame.width, TICKER_HEIGHT);

        let mut s = d.begin_scissor_mode(
            TICKER_LEFT as i32,
            TICKER_TOP as i32,
            (frame.width - TICKER_LEFT) as i32,
            TICKER_HEIGHT as i32,
        );
        for (row, label) in self.labels.iter().enumerate() {
            let y = TICKER_TOP + row as f32 * TICKER_HEIGHT + translate;
            s.draw_text(label, TICKER_LEFT as i32, y as i32, TICKER_FONT_SIZE, TICKER_COLOR);
        }
    }
}
