//! Three-point piecewise-linear interpolation.
//!
//! Every scroll-linked property of the carousel is one of these maps from the
//! scroll offset to an output value.

/// What happens outside the outermost control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolate {
    /// Continue the slope of the outer segment.
    Extend,
    /// Hold the boundary output.
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    pub input: [f32; 3],
    pub output: [f32; 3],
    pub extrapolate: Extrapolate,
}

impl Interpolation {
    /// `input` must be increasing.
    pub fn new(input: [f32; 3], output: [f32; 3], extrapolate: Extrapolate) -> Self {
        debug_assert!(input[0] <= input[1] && input[1] <= input[2], "control points out of order: {:?}", input);
        Self { input, output, extrapolate }
    }

    pub fn eval(&self, x: f32) -> f32 {
        let [x0, x1, x2] = self.input;
        let [y0, y1, y2] = self.output;

        if self.extrapolate == Extrapolate::Clamp {
            if x <= x0 {
                return y0;
            }
            if x >= x2 {
                return y2;
            }
        }

        // Left segment also covers everything below x0 when extending
        if x < x1 {
            segment(x, x0, x1, y0, y1)
        } else {
            segment(x, x1, x2, y1, y2)
        }
    }
}

fn segment(x: f32, x_from: f32, x_to: f32, y_from: f32, y_to: f32) -> f32 {
    let span = x_to - x_from;
    if span == 0.0 {
        return y_from;
    }
    y_from + (x - x_from) / span * (y_to - y_from)
}
