use glam::DVec2;

/// Axis-aligned client-space box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Strict containment test against the box grown by `margin` on every side.
    #[inline]
    pub fn contains_expanded(&self, p: DVec2, margin: f64) -> bool {
        p.x > self.left - margin
            && p.x < self.left + self.width + margin
            && p.y > self.top - margin
            && p.y < self.top + self.height + margin
    }

    /// Pointer offset from the box centre as a fraction of its size, each axis
    /// in [-0.5, 0.5] while the pointer is inside. Degenerate boxes map to 0.
    #[inline]
    pub fn normalized_offset(&self, p: DVec2) -> DVec2 {
        let fx = if self.width > 0.0 {
            (p.x - self.left) / self.width - 0.5
        } else {
            0.0
        };
        let fy = if self.height > 0.0 {
            (p.y - self.top) / self.height - 0.5
        } else {
            0.0
        };
        DVec2::new(fx, fy)
    }
}
