//! Background accent circles, one per slide.
//!
//! Unlike the slide transforms these maps are clamped: away from its own page
//! a circle rests at its minimum scale and is fully transparent.

use raylib::prelude::*;
use crate::constants::*;
use crate::data::SlideRecord;
use crate::interpolate::{Extrapolate, Interpolation};
use crate::layer::{Frame, Layer};

pub const MIN_SCALE: f32 = 0.4;
pub const MAX_OPACITY: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentTransform {
    pub scale: f32,
    pub opacity: f32,
}

impl AccentTransform {
    pub fn at(index: usize, offset: f32, width: f32) -> Self {
        let i = index as f32;
        let input = [(i - 0.5) * width, i * width, (i + 0.5) * width];

        Self {
            scale: Interpolation::new(input, [MIN_SCALE, 1.0, MIN_SCALE], Extrapolate::Clamp).eval(offset),
            opacity: Interpolation::new(input, [0.0, MAX_OPACITY, 0.0], Extrapolate::Clamp).eval(offset),
        }
    }
}

pub struct AccentLayer {
    colors: Vec<Color>,
}

impl AccentLayer {
    pub fn new(slides: &[SlideRecord]) -> Self {
        Self {
            colors: slides.iter().map(|s| s.accent_color).collect(),
        }
    }
}

impl Layer for AccentLayer {
    fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let diameter = frame.width * CIRCLE_RATIO;
        let center = Vector2::new(frame.width * 0.5, frame.height * CIRCLE_TOP_RATIO + diameter * 0.5);

        for (index, color) in self.colors.iter().enumerate() {
            let transform = AccentTransform::at(index, frame.offset, frame.width);
            if transform.opacity <= 0.0 {
                continue;
            }
            d.draw_circle_v(center, diameter * 0.5 * transform.scale, color.fade(transform.opacity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;
    const W: f32 = 375.0;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_peak_on_own_page() {
        let t = AccentTransform::at(2, 2.0 * W, W);
        assert!(approx_eq(t.scale, 1.0));
        assert!(approx_eq(t.opacity, MAX_OPACITY));
    }

    #[test]
    fn test_halfway_to_neighbour_is_minimum() {
        let t = AccentTransform::at(1, 1.5 * W, W);
        assert!(approx_eq(t.scale, MIN_SCALE));
        assert!(approx_eq(t.opacity, 0.0));
    }

    #[test]
    fn test_clamped_far_away() {
        let t = AccentTransform::at(0, 5.0 * W, W);
        assert_eq!(t.scale, MIN_SCALE);
        assert_eq!(t.opacity, 0.0);

        let t = AccentTransform::at(3, -2.0 * W, W);
        assert_eq!(t.scale, MIN_SCALE);
        assert_eq!(t.opacity, 0.0);
    }

    #[test]
    fn test_outputs_stay_in_range() {
        for index in 0..4 {
            let mut x = -3.0 * W;
            while x <= 8.0 * W {
                let t = AccentTransform::at(index, x, W);
                assert!((MIN_SCALE..=1.0).contains(&t.scale), "scale {} at x={}", t.scale, x);
                assert!((0.0..=MAX_OPACITY).contains(&t.opacity), "opacity {} at x={}", t.opacity, x);
                x += W / 16.0;
            }
        }
    }

    #[test]
    fn test_one_color_per_slide() {
        let layer = AccentLayer::new(&crate::data::SLIDES);
        assert_eq!(layer.colors.len(), crate::data::SLIDES.len());
    }
}
