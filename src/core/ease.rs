// Time-based easing for the glow angle.

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn from_points(p: [f64; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }

    #[inline]
    fn axis(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    #[inline]
    fn axis_slope(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    /// Eased progress for linear progress `x` in [0, 1].
    pub fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        // Newton first, bisection if the slope flattens out.
        let mut s = x;
        for _ in 0..8 {
            let err = Self::axis(self.x1, self.x2, s) - x;
            if err.abs() < 1e-7 {
                return Self::axis(self.y1, self.y2, s);
            }
            let d = Self::axis_slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..40 {
            let v = Self::axis(self.x1, self.x2, s);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        Self::axis(self.y1, self.y2, s)
    }
}

/// A single from→to animation of an angle, timed by frame timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleTween {
    pub from: f64,
    pub to: f64,
    duration_ms: f64,
    start_ms: Option<f64>,
    curve: CubicBezier,
}

impl AngleTween {
    pub fn new(from: f64, to: f64, duration_sec: f64, curve: CubicBezier) -> Self {
        Self {
            from,
            to,
            duration_ms: (duration_sec * 1000.0).max(0.0),
            start_ms: None,
            curve,
        }
    }

    /// Value at frame timestamp `ts_ms` and whether the tween finished.
    /// The first sample anchors the start time.
    pub fn sample(&mut self, ts_ms: f64) -> (f64, bool) {
        let start = *self.start_ms.get_or_insert(ts_ms);
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let x = ((ts_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        if x >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * self.curve.solve(x), false)
    }
}
