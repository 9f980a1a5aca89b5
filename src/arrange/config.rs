use crate::foundation::core::{LayoutArea, Point, Viewport};
use crate::foundation::error::LayoutResult;

/// Named arrangement algorithm.
///
/// Serialized as kebab-case strings. Unrecognized names are kept as [`ArrangementKind::Unknown`]
/// so the calculator can fall back instead of failing to parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArrangementKind {
    /// `stacked-vertical`: a column centered on the anchor.
    #[default]
    StackedVertical,
    /// `stacked-horizontal`: a row centered on the anchor.
    StackedHorizontal,
    /// `grid`: tiles filling the area.
    Grid,
    /// `circular`: evenly spaced on one circle.
    Circular,
    /// `radial`: a spiral of growing radii.
    Radial,
    /// `cascade`: a diagonal staircase from the anchor.
    Cascade,
    /// `centered`: every item on the anchor.
    Centered,
    /// Unrecognized name, kept verbatim.
    Unknown(String),
}

impl ArrangementKind {
    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::StackedVertical => "stacked-vertical",
            Self::StackedHorizontal => "stacked-horizontal",
            Self::Grid => "grid",
            Self::Circular => "circular",
            Self::Radial => "radial",
            Self::Cascade => "cascade",
            Self::Centered => "centered",
            Self::Unknown(name) => name,
        }
    }
}

impl From<String> for ArrangementKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "stacked-vertical" | "stacked" | "vertical" => Self::StackedVertical,
            "stacked-horizontal" | "horizontal" => Self::StackedHorizontal,
            "grid" => Self::Grid,
            "circular" | "circle" => Self::Circular,
            "radial" => Self::Radial,
            "cascade" => Self::Cascade,
            "centered" | "center" => Self::Centered,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ArrangementKind> for String {
    fn from(value: ArrangementKind) -> Self {
        value.as_str().to_string()
    }
}

/// Named anchor point on the viewport.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BasePosition {
    /// Viewport center.
    #[default]
    Center,
    /// Top center.
    Top,
    /// Bottom center.
    Bottom,
    /// Left middle.
    Left,
    /// Right middle.
    Right,
    /// Top-left quarter point.
    TopLeft,
    /// Top-right quarter point.
    TopRight,
    /// Bottom-left quarter point.
    BottomLeft,
    /// Bottom-right quarter point.
    BottomRight,
    /// Unrecognized name, kept verbatim.
    Unknown(String),
}

impl BasePosition {
    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Unknown(name) => name,
        }
    }

    /// Anchor point on `viewport`; edges sit a quarter of the way in. `None` for unknown names.
    pub fn resolve(&self, viewport: Viewport) -> Option<Point> {
        let (fx, fy) = match self {
            Self::Center => (0.5, 0.5),
            Self::Top => (0.5, 0.25),
            Self::Bottom => (0.5, 0.75),
            Self::Left => (0.25, 0.5),
            Self::Right => (0.75, 0.5),
            Self::TopLeft => (0.25, 0.25),
            Self::TopRight => (0.75, 0.25),
            Self::BottomLeft => (0.25, 0.75),
            Self::BottomRight => (0.75, 0.75),
            Self::Unknown(_) => return None,
        };
        Some(Point::new(viewport.width * fx, viewport.height * fy))
    }
}

impl From<String> for BasePosition {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" => Self::Center,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "top-left" | "topleft" => Self::TopLeft,
            "top-right" | "topright" => Self::TopRight,
            "bottom-left" | "bottomleft" => Self::BottomLeft,
            "bottom-right" | "bottomright" => Self::BottomRight,
            _ => Self::Unknown(value),
        }
    }
}

impl From<BasePosition> for String {
    fn from(value: BasePosition) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Configuration for [`crate::calculate_item_positions`].
///
/// Every field has a default, so scene JSON only names what it changes:
///
/// ```json
/// { "arrangement": "grid", "columns": 3, "gap": 40 }
/// ```
pub struct ArrangementConfig {
    /// Arrangement algorithm.
    pub arrangement: ArrangementKind,
    /// Canvas used for base anchors and grid padding.
    pub viewport: Viewport,
    /// Region to arrange within; when absent the base anchor (or padded viewport for grids) is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<LayoutArea>,
    /// Anchor used when `area` is absent.
    pub base_position: BasePosition,

    /// Stacked: distance between consecutive centers.
    pub spacing: f64,

    /// Grid: column count.
    pub columns: usize,
    /// Grid: gap between tiles on both axes.
    pub gap: f64,
    /// Grid: inset from the viewport when no `area` is given.
    pub padding: f64,
    /// Grid: tile width cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f64>,
    /// Grid: tile height cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_height: Option<f64>,
    /// Sets both `item_width` and `item_height` where those are absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_size: Option<f64>,
    /// Grid: center the occupied tiles in the area instead of starting top-left.
    pub center_grid: bool,

    /// Circular radius.
    pub radius: f64,
    /// Circular/radial first angle, radians.
    pub start_angle: f64,
    /// Radial radius of the first item.
    pub start_radius: f64,
    /// Radial radius growth per item.
    pub radius_increment: f64,
    /// Radial explicit per-item angles in radians; missing entries are distributed evenly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angles: Option<Vec<f64>>,

    /// Cascade: horizontal step per item.
    pub offset_x: f64,
    /// Cascade: vertical step per item.
    pub offset_y: f64,

    /// Run collision resolution and validation, returning [`crate::ItemPositions::Checked`].
    pub enable_collision_detection: bool,
    /// Padding of collision boxes built from positions.
    pub collision_padding: f64,
    /// Resolver relocation budget.
    pub max_iterations: usize,
}

impl Default for ArrangementConfig {
    fn default() -> Self {
        Self {
            arrangement: ArrangementKind::default(),
            viewport: Viewport::default(),
            area: None,
            base_position: BasePosition::default(),
            spacing: 80.0,
            columns: 3,
            gap: 40.0,
            padding: 80.0,
            item_width: None,
            item_height: None,
            item_size: None,
            center_grid: true,
            radius: 300.0,
            start_angle: 0.0,
            start_radius: 100.0,
            radius_increment: 150.0,
            angles: None,
            offset_x: 50.0,
            offset_y: 50.0,
            enable_collision_detection: false,
            collision_padding: 0.0,
            max_iterations: 10,
        }
    }
}

impl ArrangementConfig {
    /// Defaults with the given arrangement.
    pub fn new(arrangement: ArrangementKind) -> Self {
        Self {
            arrangement,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(s: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Explicit item width (`item_width`, else `item_size`).
    pub fn explicit_width(&self) -> Option<f64> {
        self.item_width.or(self.item_size)
    }

    /// Explicit item height (`item_height`, else `item_size`).
    pub fn explicit_height(&self) -> Option<f64> {
        self.item_height.or(self.item_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/config.rs"]
mod tests;
