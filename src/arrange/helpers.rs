//! Pure helpers shared by scene components that size and time arranged items.

use crate::{
    arrange::position::Position,
    foundation::core::{LayoutArea, Rect},
    foundation::math::clamp_lenient,
};

/// Spacing that spreads `item_count` items across `available_space`, clamped to `[min, max]`.
///
/// With fewer than two items there is nothing to space and `max` is returned.
pub fn calculate_dynamic_spacing(
    item_count: usize,
    available_space: f64,
    min_spacing: f64,
    max_spacing: f64,
) -> f64 {
    if item_count <= 1 {
        return max_spacing;
    }
    let raw = available_space / (item_count - 1) as f64;
    clamp_lenient(raw, min_spacing, max_spacing)
}

/// Envelope of the center points; `None` for an empty slice.
pub fn calculate_bounding_box(positions: &[Position]) -> Option<Rect> {
    let first = positions.first()?.point();
    let init = Rect::from_points(first, first);
    Some(positions.iter().skip(1).fold(init, |r, p| {
        Rect::new(
            r.x0.min(p.x),
            r.y0.min(p.y),
            r.x1.max(p.x),
            r.y1.max(p.y),
        )
    }))
}

/// Uniformly rescale a point set so its envelope fits `bounds`, centered in it.
///
/// The scale is `min(scale_x, scale_y)`; an axis with zero extent does not constrain it, and a
/// single point is simply moved to the center of `bounds`. Sizes are scaled along with points.
pub fn scale_positions_to_fit(positions: &[Position], bounds: LayoutArea) -> Vec<Position> {
    let Some(env) = calculate_bounding_box(positions) else {
        return Vec::new();
    };

    let axis_scale = |extent: f64, target: f64| {
        if extent > 0.0 {
            Some(target / extent)
        } else {
            None
        }
    };
    let scale = match (
        axis_scale(env.width(), bounds.width),
        axis_scale(env.height(), bounds.height),
    ) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    };

    let from = env.center();
    let to = bounds.center();
    positions
        .iter()
        .map(|p| {
            let scaled = to + (p.point() - from) * scale;
            Position {
                x: scaled.x,
                y: scaled.y,
                width: p.width.map(|w| w * scale),
                height: p.height.map(|h| h * scale),
                ..*p
            }
        })
        .collect()
}

/// Per-item start delays spreading `item_count` reveals over `total_duration`.
///
/// The step `total_duration / item_count` is clamped to `[min_delay, max_delay]`; item `i` starts
/// at `i * step`. Units are whatever the caller uses (frames or seconds).
pub fn calculate_stagger_delays(
    item_count: usize,
    total_duration: f64,
    min_delay: f64,
    max_delay: f64,
) -> Vec<f64> {
    if item_count == 0 {
        return Vec::new();
    }
    let step = clamp_lenient(total_duration / item_count as f64, min_delay, max_delay);
    (0..item_count).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/helpers.rs"]
mod tests;
