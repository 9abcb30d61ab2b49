use image::Rgb;

/// Which coordinate drives a channel ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// x / width
    X,
    /// y / height
    Y,
    /// (x + y) / (width + height)
    Diagonal,
}

impl Axis {
    /// Position of (x, y) along this axis, in [0, 1)
    pub fn position(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        match self {
            Axis::X => x as f64 / width as f64,
            Axis::Y => y as f64 / height as f64,
            Axis::Diagonal => (x + y) as f64 / (width + height) as f64,
        }
    }
}

/// One channel of the gradient: `base + span * t + jitter`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRamp {
    pub base: f64,
    pub span: f64,
    pub axis: Axis,
}

impl ChannelRamp {
    pub const fn new(base: f64, span: f64, axis: Axis) -> Self {
        Self { base, span, axis }
    }

    /// Channel value at position `t`, truncated then clamped to [0, 255]
    ///
    /// Jitter is integral, so flooring the ramp before adding it gives the
    /// same result as truncating the whole sum once negatives are clamped.
    pub fn value(&self, t: f64, jitter: i32) -> u8 {
        let raw = (self.base + self.span * t).floor() as i64 + jitter as i64;
        raw.clamp(0, 255) as u8
    }
}

/// Rounded rectangle with inclusive pixel bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub radius: i32,
}

impl RoundedRect {
    pub fn width(&self) -> u32 {
        (self.right - self.left + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1).max(0) as u32
    }

    /// Corner radius limited so that opposite arcs never cross
    pub fn effective_radius(&self) -> i32 {
        let max = ((self.right - self.left).min(self.bottom - self.top) / 2).max(0);
        self.radius.clamp(0, max)
    }

    /// Centers of the four corner arcs: top-left, top-right, bottom-left, bottom-right
    pub fn corner_centers(&self) -> [(i32, i32); 4] {
        let r = self.effective_radius();
        [
            (self.left + r, self.top + r),
            (self.right - r, self.top + r),
            (self.left + r, self.bottom - r),
            (self.right - r, self.bottom - r),
        ]
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if x < self.left || x > self.right || y < self.top || y > self.bottom {
            return false;
        }

        let r = self.effective_radius();
        // Nearest point of the inner (radius-shrunk) rectangle
        let cx = x.clamp(self.left + r, self.right - r);
        let cy = y.clamp(self.top + r, self.bottom - r);
        let dx = (x - cx) as i64;
        let dy = (y - cy) as i64;

        dx * dx + dy * dy <= (r as i64) * (r as i64)
    }
}

/// Semi-transparent color used for overlay shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayColor {
    pub color: Rgb<u8>,
    pub alpha: u8,
}
