//! Spin motion curve. Maps elapsed fraction of the spin to displayed rotation.
//!
//! Cosmetic only: the outcome depends on the target rotation, never on the curve.

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    cx: f64,
    bx: f64,
    ax: f64,
    cy: f64,
    by: f64,
    ay: f64,
}

/// Fast start, long soft stop.
pub const SPIN_EASING: CubicBezier = CubicBezier::new(0.2, 0.8, 0.3, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self { cx, bx, ax, cy, by, ay }
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Curve parameter `t` whose x equals `x`. Newton first, bisection as fallback.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let sx = self.sample_x(t);
            if (sx - x).abs() < EPSILON {
                return t;
            }
            if x > sx {
                lo = t;
            } else {
                hi = t;
            }
            let mid = (hi - lo) * 0.5 + lo;
            if mid == t {
                break;
            }
            t = mid;
        }
        t
    }

    /// Eased progress for linear progress `x` (clamped to [0, 1]).
    pub fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.sample_y(self.solve_t(x))
    }
}

/// Displayed rotation `progress` of the way through a spin from `from` to `to`.
pub fn rotation_at(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * SPIN_EASING.ease(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(rotation_at(10.0, 1500.0, 0.0), 10.0);
        assert_eq!(rotation_at(10.0, 1500.0, 1.0), 1500.0);
        assert_eq!(rotation_at(10.0, 1500.0, 2.0), 1500.0);
        assert_eq!(rotation_at(10.0, 1500.0, -1.0), 10.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=200 {
            let y = SPIN_EASING.ease(i as f64 / 200.0);
            assert!(y + 1e-9 >= prev, "curve went backwards at step {}", i);
            prev = y;
        }
    }

    #[test]
    fn spin_curve_front_loads_motion() {
        // Most of the distance is covered in the first half.
        assert!(SPIN_EASING.ease(0.5) > 0.8);
    }

    #[test]
    fn linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let x = i as f64 / 10.0;
            assert!((linear.ease(x) - x).abs() < 1e-5);
        }
    }
}
