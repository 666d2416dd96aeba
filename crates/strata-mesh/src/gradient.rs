//! Piecewise-linear color gradients for vertex coloring.

/// A single gradient stop: a position in `[0, 1]` and its RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position of the stop along the gradient.
    pub t: f32,
    /// Linear RGBA color at this stop.
    pub color: [f32; 4],
}

/// An ordered set of color stops evaluated by clamped linear interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorGradient {
    stops: Vec<GradientStop>,
}

impl ColorGradient {
    /// Create a gradient from the given stops, sorted by position.
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { stops }
    }

    /// Evaluate the gradient at `t`.
    ///
    /// `t` is clamped to `[0, 1]`; positions before the first stop return the
    /// first color, positions after the last return the last. An empty
    /// gradient evaluates to opaque white.
    pub fn evaluate(&self, t: f32) -> [f32; 4] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [1.0, 1.0, 1.0, 1.0];
        };

        let t = t.clamp(0.0, 1.0);
        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                let local = if span > 0.0 { (t - a.t) / span } else { 0.0 };
                return lerp_color(a.color, b.color, local);
            }
        }

        last.color
    }

    /// The stops in ascending position order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Default terrain coloring: water through beach, lowlands, mountains,
    /// and snow.
    pub fn terrain() -> Self {
        Self::new(vec![
            GradientStop {
                t: 0.0,
                color: [0.0, 0.16, 0.50, 1.0],
            },
            GradientStop {
                t: 0.3,
                color: [0.0, 0.31, 0.78, 1.0],
            },
            GradientStop {
                t: 0.35,
                color: [0.86, 0.78, 0.51, 1.0],
            },
            GradientStop {
                t: 0.6,
                color: [0.12, 0.63, 0.12, 1.0],
            },
            GradientStop {
                t: 0.8,
                color: [0.43, 0.47, 0.20, 1.0],
            },
            GradientStop {
                t: 1.0,
                color: [1.0, 1.0, 1.0, 1.0],
            },
        ])
    }

    /// Black at 0, white at 1.
    pub fn grayscale() -> Self {
        Self::new(vec![
            GradientStop {
                t: 0.0,
                color: [0.0, 0.0, 0.0, 1.0],
            },
            GradientStop {
                t: 1.0,
                color: [1.0, 1.0, 1.0, 1.0],
            },
        ])
    }
}

fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn assert_color_eq(a: [f32; 4], b: [f32; 4]) {
        for i in 0..4 {
            assert!(
                (a[i] - b[i]).abs() < EPSILON,
                "channel {i}: {} vs {}",
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn test_grayscale_endpoints() {
        let gradient = ColorGradient::grayscale();
        assert_color_eq(gradient.evaluate(0.0), [0.0, 0.0, 0.0, 1.0]);
        assert_color_eq(gradient.evaluate(1.0), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_grayscale_midpoint_lerps() {
        let gradient = ColorGradient::grayscale();
        assert_color_eq(gradient.evaluate(0.5), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_evaluate_clamps_outside_unit_range() {
        let gradient = ColorGradient::grayscale();
        assert_color_eq(gradient.evaluate(-2.0), [0.0, 0.0, 0.0, 1.0]);
        assert_color_eq(gradient.evaluate(2.0), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_stops_sorted_on_construction() {
        let gradient = ColorGradient::new(vec![
            GradientStop {
                t: 1.0,
                color: [1.0, 0.0, 0.0, 1.0],
            },
            GradientStop {
                t: 0.0,
                color: [0.0, 0.0, 1.0, 1.0],
            },
        ]);
        assert_color_eq(gradient.evaluate(0.0), [0.0, 0.0, 1.0, 1.0]);
        assert_color_eq(gradient.evaluate(1.0), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_before_first_stop_returns_first_color() {
        let gradient = ColorGradient::new(vec![
            GradientStop {
                t: 0.4,
                color: [0.2, 0.4, 0.6, 1.0],
            },
            GradientStop {
                t: 0.8,
                color: [0.8, 0.8, 0.8, 1.0],
            },
        ]);
        assert_color_eq(gradient.evaluate(0.1), [0.2, 0.4, 0.6, 1.0]);
        assert_color_eq(gradient.evaluate(0.9), [0.8, 0.8, 0.8, 1.0]);
    }

    #[test]
    fn test_empty_gradient_is_opaque_white() {
        let gradient = ColorGradient::new(Vec::new());
        assert_color_eq(gradient.evaluate(0.5), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_terrain_preset_spans_water_to_snow() {
        let gradient = ColorGradient::terrain();
        let water = gradient.evaluate(0.0);
        let snow = gradient.evaluate(1.0);
        assert!(water[2] > water[0], "low end should be blue-dominant");
        assert_color_eq(snow, [1.0, 1.0, 1.0, 1.0]);
    }
}
