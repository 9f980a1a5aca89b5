use crate::foundation::core::{CenterRect, Point, TopLeftRect};

/// Output of an arrangement calculator.
///
/// `x`/`y` are always the **center** of the item. Convert with [`position_to_css`] or
/// [`position_to_top_left`] before treating the position as a top-left box.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Item width, when the arrangement sizes items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Item height, when the arrangement sizes items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Grid row, 0-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Grid column, 0-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Position {
    /// Unsized position at `p`.
    pub fn at(p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            ..Self::default()
        }
    }

    /// Center point.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Copy with `width` and `height` set.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Both dimensions, if the arrangement produced them.
    pub fn size(&self) -> Option<(f64, f64)> {
        Some((self.width?, self.height?))
    }

    /// Sized rectangle around the center, if both dimensions are known.
    pub fn to_center_rect(&self) -> Option<CenterRect> {
        let (w, h) = self.size()?;
        Some(CenterRect::new(self.x, self.y, w, h))
    }
}

/// Options for [`position_to_css`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssOptions {
    /// Shift `left`/`top` by half the size instead of emitting a centering transform.
    pub use_top_left: bool,
}

/// Absolutely positioned box ready for a CSS-like renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CssBox {
    /// Always `"absolute"`.
    pub position: String,
    /// Left offset in pixels.
    pub left: f64,
    /// Top offset in pixels.
    pub top: f64,
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Centering transform emitted when `left`/`top` are the center point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

/// Convert a center position to an absolutely positioned box.
pub fn position_to_css(position: &Position, opts: CssOptions) -> CssBox {
    let (left, top, transform) = if opts.use_top_left {
        let half_w = position.width.unwrap_or(0.0) * 0.5;
        let half_h = position.height.unwrap_or(0.0) * 0.5;
        (position.x - half_w, position.y - half_h, None)
    } else {
        (
            position.x,
            position.y,
            Some("translate(-50%, -50%)".to_string()),
        )
    };
    CssBox {
        position: "absolute".to_string(),
        left,
        top,
        width: position.width,
        height: position.height,
        transform,
    }
}

/// A [`Position`] annotated with its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLeftPosition {
    /// The source position.
    #[serde(flatten)]
    pub position: Position,
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Center x, same as `position.x`.
    pub center_x: f64,
    /// Center y, same as `position.y`.
    pub center_y: f64,
}

impl TopLeftPosition {
    /// The top-left box, when the position has a size.
    pub fn to_rect(&self) -> Option<TopLeftRect> {
        let (w, h) = self.position.size()?;
        Some(TopLeftRect::new(self.left, self.top, w, h))
    }
}

/// Positions without a size keep `left == x` and `top == y`.
pub fn position_to_top_left(position: &Position) -> TopLeftPosition {
    TopLeftPosition {
        position: *position,
        left: position.x - position.width.unwrap_or(0.0) * 0.5,
        top: position.y - position.height.unwrap_or(0.0) * 0.5,
        center_x: position.x,
        center_y: position.y,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/position.rs"]
mod tests;
