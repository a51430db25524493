use raylib::prelude::*;
use crate::constants::*;
use crate::data::SlideRecord;
use crate::interpolate::{Extrapolate, Interpolation};
use crate::layer::{fit_contain, Frame, Layer};

/// Scroll-derived properties of one slide. Values are unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    pub image_scale: f32,
    pub heading_offset: f32,
    pub description_offset: f32,
    pub text_opacity: f32,
}

impl SlideTransform {
    pub fn at(index: usize, offset: f32, width: f32) -> Self {
        let i = index as f32;
        let neighbours = [(i - 1.0) * width, i * width, (i + 1.0) * width];
        let text_window = [(i - 0.3) * width, i * width, (i + 0.3) * width];

        let extend = |input, output| Interpolation::new(input, output, Extrapolate::Extend).eval(offset);

        Self {
            image_scale: extend(neighbours, [0.3, 1.0, 0.3]),
            heading_offset: extend(neighbours, [0.3 * width, 0.0, -0.3 * width]),
            description_offset: extend(neighbours, [0.6 * width, 0.0, -0.6 * width]),
            text_opacity: extend(text_window, [0.0, 1.0, 0.0]),
        }
    }
}

/// True when any part of page `index` is on screen.
pub fn is_visible(index: usize, offset: f32, width: f32) -> bool {
    (index as f32 * width - offset).abs() < width
}

/// Greedy word wrap; a single word wider than `max_width` gets its own line.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub struct SlidePage {
    index: usize,
    record: &'static SlideRecord,
    image: Option<Texture2D>,
}

impl SlidePage {
    pub fn new(index: usize, record: &'static SlideRecord, image: Option<Texture2D>) -> Self {
        Self { index, record, image }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let transform = SlideTransform::at(self.index, frame.offset, frame.width);
        let page_x = self.index as f32 * frame.width - frame.offset;

        // Upper two thirds hold the image, the rest the text column
        let image_area_height = frame.height * 2.0 / 3.0;
        let box_width = frame.width * IMAGE_RATIO;
        let box_height = (frame.height * IMAGE_RATIO).min(image_area_height);
        let center = Vector2::new(page_x + frame.width * 0.5, image_area_height * 0.5);
        let scale = transform.image_scale.max(0.0);

        match &self.image {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let (fit_width, fit_height) = fit_contain(tex_width, tex_height, box_width, box_height);
                let scaled_width = fit_width * scale;
                let scaled_height = fit_height * scale;
                let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(center.x, center.y, scaled_width, scaled_height),
                    origin,
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                let w = box_width * scale;
                let h = box_height * scale;
                d.draw_rectangle_rec(
                    Rectangle::new(center.x - w * 0.5, center.y - h * 0.5, w, h),
                    PLACEHOLDER_COLOR,
                );
            }
        }

        let opacity = transform.text_opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }

        let column_width = frame.width * IMAGE_RATIO;
        let column_x = page_x + frame.width - column_width - TEXT_MARGIN_RIGHT;
        let heading_y = image_area_height;

        let font = d.get_font_default();
        d.draw_text_ex(
            &font,
            self.record.heading,
            Vector2::new(column_x + transform.heading_offset, heading_y),
            HEADING_FONT_SIZE,
            HEADING_SPACING,
            HEADING_COLOR.fade(opacity),
        );

        let lines = wrap_text(self.record.description, column_width, |s| {
            d.measure_text(s, DESCRIPTION_FONT_SIZE) as f32
        });
        let mut y = heading_y + HEADING_FONT_SIZE + HEADING_GAP;
        for line in &lines {
            d.draw_text(
                line,
                (column_x + transform.description_offset) as i32,
                y as i32,
                DESCRIPTION_FONT_SIZE,
                DESCRIPTION_COLOR.fade(opacity),
            );
            y += DESCRIPTION_LINE_HEIGHT;
        }
    }
}

/// The horizontal page strip.
pub struct SlideList {
    pages: Vec<SlidePage>,
}

impl SlideList {
    pub fn new(pages: Vec<SlidePage>) -> Self {
        Self { pages }
    }
}

impl Layer for SlideList {
    fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        for page in self.pages.iter().filter(|p| is_visible(p.index, frame.offset, frame.width)) {
            page.draw(d, frame);
        }
    }
}
