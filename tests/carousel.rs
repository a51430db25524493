use std::cell::RefCell;
use std::rc::Rc;

use onboarding::accent::AccentTransform;
use onboarding::data::SLIDES;
use onboarding::pager::Pager;
use onboarding::pagination::dot_layout;
use onboarding::scroll::ScrollOffset;
use onboarding::slide::SlideTransform;
use onboarding::ticker::ticker_translate;

const EPSILON: f32 = 0.0001;
const W: f32 = 375.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn test_third_slide_focused_at_750() {
    assert_eq!(SLIDES.len(), 4);
    let x = 750.0;

    let focused = SlideTransform::at(2, x, W);
    assert!(approx_eq(focused.image_scale, 1.0));
    assert!(approx_eq(focused.text_opacity, 1.0));

    for neighbour in [1, 3] {
        let t = SlideTransform::at(neighbour, x, W);
        assert!(approx_eq(t.image_scale, 0.3));
        assert!(approx_eq(t.text_opacity, 0.0));
    }

    // Slide renderer keeps extrapolating, the accent layer clamps
    let first = SlideTransform::at(0, x, W);
    assert!(approx_eq(first.image_scale, -0.4));
    let first_accent = AccentTransform::at(0, x, W);
    assert_eq!(first_accent.scale, 0.4);
    assert_eq!(first_accent.opacity, 0.0);
}

#[test]
fn test_dots_mirror_slides() {
    let dots = dot_layout(&SLIDES, W, 812.0);
    assert_eq!(dots.len(), SLIDES.len());
    for (i, dot) in dots.iter().enumerate() {
        assert_eq!(dot.color, SLIDES[i].accent_color);
    }
}

#[test]
fn test_ticker_follows_scroll_cell() {
    let scroll = ScrollOffset::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let ticker = Rc::clone(&seen);
    scroll.subscribe(move |x| ticker.borrow_mut().push(ticker_translate(x, W, 40.0)));

    let mut pager = Pager::new(W, SLIDES.len());
    pager.go_to(1);
    for _ in 0..60 {
        if let Some(x) = pager.update(1.0 / 60.0) {
            scroll.set(x);
        }
    }

    assert_eq!(scroll.get(), W);
    let seen = seen.borrow();
    assert!(!seen.is_empty());
    assert!(approx_eq(*seen.last().unwrap(), -40.0));
    // The reel only moves upward while paging forward
    assert!(seen.windows(2).all(|w| w[1] <= w[0]));
}
