use crate::foundation::core::{CenterRect, FrameIndex, FrameRange, Point, Rect, TopLeftRect};

/// Which point of a [`BoundingBox`] its `x`/`y` refer to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorMode {
    /// `x`/`y` is the box center (the convention of arrangement output).
    #[default]
    Center,
    /// `x`/`y` is the top-left corner.
    TopLeft,
}

/// Axis-aligned limits on where a box's reference point may be moved to.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Lowest allowed x.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_x: Option<f64>,
    /// Highest allowed x.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_x: Option<f64>,
    /// Lowest allowed y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f64>,
    /// Highest allowed y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f64>,
}

impl Constraints {
    /// Keep the reference point inside `area`.
    pub fn within(area: TopLeftRect) -> Self {
        Self {
            min_x: Some(area.left),
            max_x: Some(area.right()),
            min_y: Some(area.top),
            max_y: Some(area.bottom()),
        }
    }

    /// Whether `p` satisfies every set limit.
    pub fn allows(&self, p: Point) -> bool {
        self.min_x.is_none_or(|v| p.x >= v)
            && self.max_x.is_none_or(|v| p.x <= v)
            && self.min_y.is_none_or(|v| p.y >= v)
            && self.max_y.is_none_or(|v| p.y <= v)
    }
}

/// An element taking part in collision checks.
///
/// Boxes are built per call from arrangement positions plus element metadata and are never
/// stored by the engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Identifier reported in collisions.
    pub id: String,
    /// Free-form element kind (`"card"`, `"title"`...), carried through for callers.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Reference x, see `anchor`.
    pub x: f64,
    /// Reference y, see `anchor`.
    pub y: f64,
    /// Width without padding.
    pub width: f64,
    /// Height without padding.
    pub height: f64,
    /// Serialized as `anchorMode`; `anchor` is accepted on input.
    #[serde(default, rename = "anchorMode", alias = "anchor")]
    pub anchor: AnchorMode,
    /// Higher priority wins a collision; the lower one moves.
    #[serde(default)]
    pub priority: i32,
    /// First frame the box exists on; absent means frame 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_frame: Option<FrameIndex>,
    /// Frame the box stops existing on (exclusive); absent means never.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_frame: Option<FrameIndex>,
    /// Clearance added on every side before overlap tests.
    #[serde(default)]
    pub padding: f64,
    /// Whether resolvers may relocate this box.
    #[serde(default)]
    pub flexible: bool,
    /// Limits on relocation; resolvers ignore moves outside them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

impl BoundingBox {
    /// A center-anchored, always-present, non-flexible box.
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            kind: String::new(),
            x,
            y,
            width,
            height,
            anchor: AnchorMode::Center,
            priority: 0,
            start_frame: None,
            end_frame: None,
            padding: 0.0,
            flexible: false,
            constraints: None,
        }
    }

    /// Center-anchored box covering `rect`.
    pub fn from_center_rect(id: impl Into<String>, rect: CenterRect) -> Self {
        Self::new(id, rect.x, rect.y, rect.width, rect.height)
    }

    /// Set the element kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the anchor mode.
    pub fn with_anchor(mut self, anchor: AnchorMode) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Allow or forbid relocation.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Limit the box to `[start, end)`.
    pub fn with_frames(mut self, start: FrameIndex, end: FrameIndex) -> Self {
        self.start_frame = Some(start);
        self.end_frame = Some(end);
        self
    }

    /// Set relocation constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Reference point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Copy of `self` with its reference point moved to `p`.
    pub fn moved_to(&self, p: Point) -> Self {
        let mut out = self.clone();
        out.x = p.x;
        out.y = p.y;
        out
    }

    /// Frames the box exists on.
    pub fn frames(&self) -> FrameRange {
        FrameRange::from_bounds(self.start_frame, self.end_frame)
    }

    /// Whether both boxes exist on at least one common frame.
    pub fn coexists_with(&self, other: &Self) -> bool {
        self.frames().intersects(other.frames())
    }

    /// Unpadded area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Edges without padding, `x0`/`y0` being left/top.
    pub fn edges(&self) -> Rect {
        let (left, top) = match self.anchor {
            AnchorMode::Center => (self.x - self.width * 0.5, self.y - self.height * 0.5),
            AnchorMode::TopLeft => (self.x, self.y),
        };
        Rect::new(left, top, left + self.width, top + self.height)
    }

    /// Edges inflated by `padding` on every side.
    pub fn padded_edges(&self) -> Rect {
        self.edges().inflate(self.padding, self.padding)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collision/bbox.rs"]
mod tests;
