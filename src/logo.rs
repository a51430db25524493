use raylib::prelude::*;
use crate::constants::*;
use crate::layer::{fit_contain, Frame, Layer};

pub const LOGO_ROTATION: f32 = -90.0;

/// Center of the rotated logo box, placed so the box's bottom-left corner sits
/// `LOGO_MARGIN` from the screen's bottom-left corner.
pub fn logo_center(screen_height: f32) -> Vector2 {
    // Rotated by 90 degrees the box is LOGO_HEIGHT wide and LOGO_WIDTH tall
    Vector2::new(
        LOGO_MARGIN + LOGO_HEIGHT * 0.5,
        screen_height - LOGO_MARGIN - LOGO_WIDTH * 0.5,
    )
}

pub struct Logo {
    texture: Option<Texture2D>,
}

impl Logo {
    pub fn new(texture: Option<Texture2D>) -> Self {
        Self { texture }
    }
}

impl Layer for Logo {
    fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let Some(texture) = &self.texture else {
            return;
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let (width, height) = fit_contain(tex_width, tex_height, LOGO_WIDTH, LOGO_HEIGHT);
        let center = logo_center(frame.height);

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, width, height),
            Vector2::new(width * 0.5, height * 0.5),
            LOGO_ROTATION,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotated_box_anchored_bottom_left() {
        let center = logo_center(812.0);
        let left = center.x - LOGO_HEIGHT * 0.5;
        let bottom = center.y + LOGO_WIDTH * 0.5;
        assert_eq!(left, LOGO_MARGIN);
        assert_eq!(bottom, 812.0 - LOGO_MARGIN);
    }
}
