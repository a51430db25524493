//! Root screen: owns the scroll offset and composes every layer.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use raylib::prelude::*;
use crate::accent::AccentLayer;
use crate::constants::*;
use crate::data::{SlideRecord, LOGO_IMAGE};
use crate::layer::{Frame, Layer};
use crate::logo::Logo;
use crate::pager::Pager;
use crate::pagination::Pagination;
use crate::scroll::ScrollOffset;
use crate::slide::{SlideList, SlidePage};
use crate::texture_loader::load_asset;
use crate::ticker::Ticker;

/// User intent, decoupled from the raylib input API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Press(f32),
    DragTo(f32),
    Release,
    Next,
    Previous,
}

/// Translates raylib's mouse/touch/keyboard state into commands.
#[derive(Debug, Default)]
pub struct InputState {
    wheel: f32,
}

impl InputState {
    pub fn poll(&mut self, rl: &RaylibHandle) -> Vec<Command> {
        let mut commands = Vec::new();
        let pointer_x = rl.get_mouse_position().x;

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            commands.push(Command::Press(pointer_x));
        } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            commands.push(Command::DragTo(pointer_x));
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            commands.push(Command::Release);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            commands.push(Command::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            commands.push(Command::Previous);
        }

        if let Some(command) = self.scroll_wheel(rl.get_mouse_wheel_move()) {
            commands.push(command);
        }

        commands
    }

    /// Accumulates one frame of wheel movement. Only an uninterrupted run of
    /// wheel frames adds up; an idle frame discards the remainder.
    pub fn scroll_wheel(&mut self, moved: f32) -> Option<Command> {
        if moved == 0.0 {
            self.wheel = 0.0;
            return None;
        }

        // Wheel down / swipe left moves forward
        self.wheel += moved;
        if self.wheel <= -WHEEL_STEP {
            self.wheel = 0.0;
            Some(Command::Next)
        } else if self.wheel >= WHEEL_STEP {
            self.wheel = 0.0;
            Some(Command::Previous)
        } else {
            None
        }
    }
}

pub struct Screen {
    width: f32,
    height: f32,

    scroll: ScrollOffset,
    pager: Pager,
    focused: Rc<Cell<usize>>,

    layers: Vec<Box<dyn Layer>>,
}

impl Screen {
    /// Loads every asset from `assets_dir` and builds the screen.
    pub fn mount(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets_dir: &Path,
        slides: &'static [SlideRecord],
    ) -> Self {
        // Screen size is read once; the window is not resizable
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;

        let images = slides
            .iter()
            .map(|slide| load_asset(rl, thread, assets_dir, slide.image))
            .collect();
        let logo = load_asset(rl, thread, assets_dir, LOGO_IMAGE);

        log::info!("Mounted {} slides on a {}x{} screen", slides.len(), width, height);
        Self::new(slides, width, height, images, logo)
    }

    /// `images[i]` belongs to `slides[i]`; missing entries draw a placeholder.
    pub fn new(
        slides: &'static [SlideRecord],
        width: f32,
        height: f32,
        images: Vec<Option<Texture2D>>,
        logo: Option<Texture2D>,
    ) -> Self {
        let scroll = ScrollOffset::new();
        let focused = Rc::new(Cell::new(0));

        let tracker = Rc::clone(&focused);
        let last_page = slides.len().saturating_sub(1);
        scroll.subscribe(move |offset| {
            let page = if width > 0.0 {
                ((offset / width).round().max(0.0) as usize).min(last_page)
            } else {
                0
            };
            if page != tracker.get() {
                log::debug!("Focused page {} -> {}", tracker.get(), page);
                tracker.set(page);
            }
        });

        let pages = slides
            .iter()
            .zip(images.into_iter().chain(std::iter::repeat_with(|| None)))
            .enumerate()
            .map(|(index, (record, image))| SlidePage::new(index, record, image))
            .collect();

        // Back to front
        let layers: Vec<Box<dyn Layer>> = vec![
            Box::new(AccentLayer::new(slides)),
            Box::new(SlideList::new(pages)),
            Box::new(Logo::new(logo)),
            Box::new(Pagination::new(slides, width, height)),
            Box::new(Ticker::new(slides)),
        ];

        Self {
            width,
            height,
            scroll,
            pager: Pager::new(width, slides.len()),
            focused,
            layers,
        }
    }

    pub fn offset(&self) -> f32 {
        self.scroll.get()
    }

    pub fn focused_page(&self) -> usize {
        self.focused.get()
    }

    pub fn scroll(&self) -> &ScrollOffset {
        &self.scroll
    }

    pub fn apply(&mut self, command: Command, dt: f32) {
        match command {
            Command::Press(x) => self.pager.press(x),
            Command::DragTo(x) => self.pager.drag_to(x, dt),
            Command::Release => self.pager.release(),
            Command::Next => self.pager.go_to(self.pager.target_page() + 1),
            Command::Previous => self.pager.go_to(self.pager.target_page().saturating_sub(1)),
        }
    }

    /// Publishes the pager's scroll event, if any, to the scroll offset.
    pub fn update(&mut self, dt: f32) {
        if let Some(offset) = self.pager.update(dt) {
            self.scroll.set(offset);
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            offset: self.scroll.get(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let frame = self.frame();
        d.clear_background(BACKGROUND);
        for layer in &self.layers {
            layer.draw(d, &frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SLIDES;

    const W: f32 = 375.0;
    const DT: f32 = 1.0 / 60.0;

    fn screen() -> Screen {
        Screen::new(&SLIDES, W, 812.0, Vec::new(), None)
    }

    fn settle(screen: &mut Screen) {
        for _ in 0..120 {
            screen.update(DT);
        }
    }

    #[test]
    fn test_mounts_at_first_page() {
        let screen = screen();
        assert_eq!(screen.offset(), 0.0);
        assert_eq!(screen.focused_page(), 0);
        assert_eq!(screen.scroll().subscriber_count(), 1);
        assert_eq!(screen.frame(), Frame { offset: 0.0, width: W, height: 812.0 });
    }

    #[test]
    fn test_drag_publishes_offset() {
        let mut screen = screen();
        screen.apply(Command::Press(300.0), DT);
        screen.apply(Command::DragTo(200.0), 1.0);
        screen.update(DT);
        assert_eq!(screen.offset(), 100.0);
    }

    #[test]
    fn test_next_and_previous() {
        let mut screen = screen();
        screen.apply(Command::Next, DT);
        settle(&mut screen);
        assert_eq!(screen.offset(), W);
        assert_eq!(screen.focused_page(), 1);

        screen.apply(Command::Previous, DT);
        settle(&mut screen);
        assert_eq!(screen.offset(), 0.0);
        assert_eq!(screen.focused_page(), 0);
    }

    #[test]
    fn test_repeated_next_during_snap_advances_twice() {
        let mut screen = screen();
        screen.apply(Command::Next, DT);
        screen.update(DT);
        screen.apply(Command::Next, DT);
        settle(&mut screen);
        assert_eq!(screen.focused_page(), 2);
        assert_eq!(screen.offset(), 2.0 * W);
    }

    #[test]
    fn test_wheel_remainder_dropped_when_idle() {
        let mut input = InputState::default();
        assert_eq!(input.scroll_wheel(-0.6), None);
        assert_eq!(input.scroll_wheel(0.0), None);
        assert_eq!(input.scroll_wheel(-0.6), None);
        assert_eq!(input.scroll_wheel(-0.6), Some(Command::Next));
        assert_eq!(input.scroll_wheel(1.0), Some(Command::Previous));
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut screen = screen();
        for _ in 0..10 {
            screen.apply(Command::Next, DT);
            settle(&mut screen);
        }
        assert_eq!(screen.focused_page(), SLIDES.len() - 1);
        assert_eq!(screen.offset(), (SLIDES.len() - 1) as f32 * W);
    }

    #[test]
    fn test_swipe_gesture_flips_page() {
        let mut screen = screen();
        screen.apply(Command::Press(300.0), DT);
        screen.apply(Command::DragTo(220.0), 0.05);
        screen.apply(Command::Release, DT);
        settle(&mut screen);
        assert_eq!(screen.focused_page(), 1);
        assert_eq!(screen.offset(), W);
    }
}
