use raylib::prelude::Color;

pub const DEFAULT_WIDTH: i32 = 375;           // Default window width (phone portrait)
pub const DEFAULT_HEIGHT: i32 = 812;          // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SNAP_DURATION: f32 = 0.35;          // Duration of the snap-to-page animation (seconds)
pub const FLING_VELOCITY: f32 = 500.0;        // Pointer speed that turns a release into a page flip (px/s)
pub const WHEEL_STEP: f32 = 1.0;              // Wheel movement needed to flip one page

pub const DOT_SIZE: f32 = 40.0;               // Width of one pagination dot container
pub const DOT_RATIO: f32 = 0.3;               // Dot diameter relative to its container
pub const PAGINATION_RIGHT: f32 = 20.0;
pub const PAGINATION_BOTTOM: f32 = 40.0;

pub const LOGO_WIDTH: f32 = 200.0;
pub const LOGO_HEIGHT: f32 = 40.0;
pub const LOGO_MARGIN: f32 = 10.0;

pub const TICKER_HEIGHT: f32 = 40.0;          // One label row; also the ticker's travel per page
pub const TICKER_LEFT: f32 = 20.0;
pub const TICKER_TOP: f32 = 40.0;
pub const TICKER_FONT_SIZE: i32 = 40;

pub const CIRCLE_RATIO: f32 = 0.6;            // Accent circle diameter relative to screen width
pub const CIRCLE_TOP_RATIO: f32 = 0.15;       // Accent circle top relative to screen height

pub const IMAGE_RATIO: f32 = 0.75;            // Slide image box relative to the screen
pub const TEXT_MARGIN_RIGHT: f32 = 10.0;
pub const HEADING_FONT_SIZE: f32 = 24.0;
pub const HEADING_SPACING: f32 = 2.0;
pub const HEADING_GAP: f32 = 5.0;
pub const DESCRIPTION_FONT_SIZE: i32 = 16;
pub const DESCRIPTION_LINE_HEIGHT: f32 = 16.0 * 1.5;

pub const BACKGROUND: Color = Color::new(255, 255, 255, 255);
pub const HEADING_COLOR: Color = Color::new(0x44, 0x44, 0x44, 255);
pub const DESCRIPTION_COLOR: Color = Color::new(0xcc, 0xcc, 0xcc, 255);
pub const TICKER_COLOR: Color = Color::new(0x22, 0x22, 0x22, 255);
pub const PLACEHOLDER_COLOR: Color = Color::new(0xee, 0xee, 0xee, 255);
