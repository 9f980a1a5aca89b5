use crate::foundation::error::{LayoutError, LayoutResult};

pub use kurbo::{Point, Rect, Vec2};

/// Zero-based frame number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame.
    pub start: FrameIndex,
    /// End frame, exclusive.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Range covering every frame, used when an element carries no timing.
    pub const ALWAYS: Self = Self {
        start: FrameIndex(0),
        end: FrameIndex(u64::MAX),
    };

    /// Validated range; fails when `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> LayoutResult<Self> {
        if start.0 > end.0 {
            return Err(LayoutError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Build a range from optional bounds, defaulting to `[0, ∞)`.
    pub fn from_bounds(start: Option<FrameIndex>, end: Option<FrameIndex>) -> Self {
        Self {
            start: start.unwrap_or(Self::ALWAYS.start),
            end: end.unwrap_or(Self::ALWAYS.end),
        }
    }

    /// Whether the range holds no frame.
    pub fn is_empty(self) -> bool {
        self.start.0 >= self.end.0
    }

    /// Whether `f` lies in the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Whether the two ranges share a frame.
    pub fn intersects(self, other: Self) -> bool {
        self.start.0 < other.end.0 && other.start.0 < self.end.0
    }
}

/// Rendering canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl Viewport {
    /// Validated viewport; both sides must be finite and positive.
    pub fn new(width: f64, height: f64) -> LayoutResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(LayoutError::validation("Viewport size must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::validation("Viewport size must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Center point.
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Width over height, 0 for a zero height.
    pub fn aspect_ratio(self) -> f64 {
        if self.height == 0.0 {
            return 0.0;
        }
        self.width / self.height
    }

    /// The whole viewport as a top-left rectangle at the origin.
    pub fn to_area(self) -> TopLeftRect {
        TopLeftRect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TopLeftRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Rectangular region of the canvas that content is arranged within.
pub type LayoutArea = TopLeftRect;

impl TopLeftRect {
    /// Rectangle from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Center point.
    pub fn center(self) -> Point {
        Point::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Same rectangle in center coordinates.
    pub fn to_center(self) -> CenterRect {
        let c = self.center();
        CenterRect::new(c.x, c.y, self.width, self.height)
    }

    /// Shrink by `edges`; sizes never go negative.
    pub fn inset(self, edges: Edges) -> Self {
        Self {
            left: self.left + edges.left,
            top: self.top + edges.top,
            width: (self.width - edges.left - edges.right).max(0.0),
            height: (self.height - edges.top - edges.bottom).max(0.0),
        }
    }

    /// Same rectangle as a kurbo [`Rect`].
    pub fn to_kurbo(self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }
}

/// Axis-aligned rectangle whose `x`/`y` are the center point.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CenterRect {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl CenterRect {
    /// Rectangle from its center and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point.
    pub fn center(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same rectangle in top-left coordinates.
    pub fn to_top_left(self) -> TopLeftRect {
        TopLeftRect::new(
            self.x - self.width * 0.5,
            self.y - self.height * 0.5,
            self.width,
            self.height,
        )
    }
}

impl From<CenterRect> for TopLeftRect {
    fn from(value: CenterRect) -> Self {
        value.to_top_left()
    }
}

impl From<TopLeftRect> for CenterRect {
    fn from(value: TopLeftRect) -> Self {
        value.to_center()
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
/// Padding edges in pixels.
pub struct Edges {
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
    /// Top padding.
    #[serde(default)]
    pub top: f64,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Same padding on every side.
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
