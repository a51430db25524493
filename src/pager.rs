use raylib::prelude::*;
use crate::constants::*;

struct Drag {
    start_pointer: f32,
    start_offset: f32,
    last_pointer: f32,
    velocity: f32, // pointer velocity, px/s (positive = moving right)
}

struct Snap {
    tween: ease::Tween,
    timer: f32,
    target: f32,
}

/// Horizontal paging control.
///
/// Turns pointer drags and page requests into scroll events, always coming to
/// rest on a whole page.
pub struct Pager {
    page_width: f32,
    page_count: usize,

    offset: f32,
    emitted: f32,

    drag: Option<Drag>,
    snap: Option<Snap>,
}

impl Pager {
    pub fn new(page_width: f32, page_count: usize) -> Self {
        Self {
            page_width,
            page_count,
            offset: 0.0,
            emitted: 0.0,
            drag: None,
            snap: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32 * self.page_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// No drag and no snap in flight.
    pub fn is_settled(&self) -> bool {
        self.drag.is_none() && self.snap.is_none()
    }

    pub fn nearest_page(&self) -> usize {
        self.page_at(self.offset)
    }

    /// Page the pager is heading to: the snap target while snapping, otherwise
    /// the nearest page.
    pub fn target_page(&self) -> usize {
        match &self.snap {
            Some(snap) => self.page_at(snap.target),
            None => self.nearest_page(),
        }
    }

    pub fn press(&mut self, pointer_x: f32) {
        self.snap = None;
        self.drag = Some(Drag {
            start_pointer: pointer_x,
            start_offset: self.offset,
            last_pointer: pointer_x,
            velocity: 0.0,
        });
    }

    pub fn drag_to(&mut self, pointer_x: f32, dt: f32) {
        let max_offset = self.max_offset();
        if let Some(drag) = self.drag.as_mut() {
            if dt > 0.0 {
                drag.velocity = (pointer_x - drag.last_pointer) / dt;
            }
            drag.last_pointer = pointer_x;
            let offset = drag.start_offset - (pointer_x - drag.start_pointer);
            self.offset = offset.clamp(0.0, max_offset);
        }
    }

    /// Ends the drag and snaps to the page the gesture points at.
    pub fn release(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        // A fling moves to the next page boundary in its direction
        let position = if self.page_width > 0.0 { self.offset / self.page_width } else { 0.0 };
        let target = if drag.velocity <= -FLING_VELOCITY {
            position.floor() as usize + 1
        } else if drag.velocity >= FLING_VELOCITY {
            (position.ceil() as usize).saturating_sub(1)
        } else {
            self.nearest_page()
        };

        log::trace!("release at {:.1} (velocity {:.0} px/s) -> page {}", self.offset, drag.velocity, target);
        self.snap_to(target);
    }

    /// Snaps to `page`, clamped to the existing pages. Ignored mid-drag.
    pub fn go_to(&mut self, page: usize) {
        if self.drag.is_some() {
            return;
        }
        self.snap_to(page);
    }

    /// Advances the snap animation; returns the new offset if it moved since the
    /// last call.
    pub fn update(&mut self, dt: f32) -> Option<f32> {
        if let Some(snap) = self.snap.as_mut() {
            self.offset = snap.tween.apply(dt);
            snap.timer += dt;

            let target = snap.target;
            if snap.timer >= SNAP_DURATION {
                self.offset = target;
                self.snap = None;
            }
        }

        if self.offset != self.emitted {
            self.emitted = self.offset;
            Some(self.offset)
        } else {
            None
        }
    }

    fn page_at(&self, offset: f32) -> usize {
        if self.page_width <= 0.0 {
            return 0;
        }
        let page = (offset / self.page_width).round().max(0.0) as usize;
        page.min(self.page_count.saturating_sub(1))
    }

    fn snap_to(&mut self, page: usize) {
        let page = page.min(self.page_count.saturating_sub(1));
        let target = page as f32 * self.page_width;

        if self.offset == target {
            self.snap = None;
            return;
        }

        self.snap = Some(Snap {
            tween: ease::Tween::new(ease::cubic_out, self.offset, target, SNAP_DURATION),
            timer: 0.0,
            target,
        });
    }
}
