//! Easing curves used by the timeline and the scroll provider.
//!
//! Every curve maps normalized time `t` in `[0, 1]` to eased progress with
//! `ease(0) == 0` and `ease(1) == 1`. Inputs outside `[0, 1]` are clamped.

/// A cubic Bezier timing curve anchored at `(0,0)` and `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn curve_x(&self, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * self.x1 + 3.0 * u * t * t * self.x2 + t * t * t
    }

    fn curve_y(&self, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * self.y1 + 3.0 * u * t * t * self.y2 + t * t * t
    }

    fn curve_dx(&self, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * self.x1 + 6.0 * u * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    /// Solve for the curve parameter whose x equals `x`.
    ///
    /// A few Newton steps converge for well-behaved curves; bisection
    /// catches the flat spots where the derivative vanishes.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = self.curve_x(t) - x;
            if err.abs() < 1e-6 {
                return t;
            }
            let d = self.curve_dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..40 {
            let cx = self.curve_x(t);
            if (cx - x).abs() < 1e-6 {
                break;
            }
            if cx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }

    pub fn sample(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.curve_y(self.solve_t(x))
    }
}

/// The page's signature in-out curve: fast middle, long soft ends.
pub const SHOWROOM_CURVE: CubicBezier = CubicBezier::new(0.86, 0.0, 0.07, 1.0);

/// Named easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// [`SHOWROOM_CURVE`], used by every section transition.
    Showroom,
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-out. Also used for scroll assist.
    Power2Out,
    /// Quartic ease-out.
    Power3Out,
    /// Exponential ease-out used by organic smooth scrolling.
    ExpoOut,
}

impl Easing {
    /// Alias kept for readability at scroll-assist call sites.
    pub const EASE_OUT_CUBIC: Easing = Easing::Power2Out;

    pub fn ease(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Showroom => SHOWROOM_CURVE.sample(t),
            Easing::Power1Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::Showroom,
        Easing::Power1Out,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::ExpoOut,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.ease(0.0).abs() < 2e-3, "{easing:?} at 0");
            assert!((easing.ease(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_inputs_are_clamped() {
        assert_eq!(Easing::Linear.ease(-2.0), 0.0);
        assert_eq!(Easing::Power2Out.ease(3.0), 1.0);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut prev = easing.ease(0.0);
            for i in 1..=100 {
                let v = easing.ease(i as f32 / 100.0);
                assert!(v + 1e-4 >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_showroom_curve_shape() {
        // Slow start, fast middle, slow end.
        assert!(Easing::Showroom.ease(0.1) < 0.05);
        assert!(Easing::Showroom.ease(0.9) > 0.95);
        let mid = Easing::Showroom.ease(0.5);
        assert!(mid > 0.6 && mid < 0.75, "mid = {mid}");
    }

    #[test]
    fn test_ease_out_cubic_matches_formula() {
        let t = 0.3_f32;
        let expected = 1.0 - (1.0 - t).powi(3);
        assert!((Easing::EASE_OUT_CUBIC.ease(t) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.sample(t) - t).abs() < 1e-3);
        }
    }
}
