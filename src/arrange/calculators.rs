use std::f64::consts::TAU;

use crate::{
    arrange::config::{ArrangementConfig, ArrangementKind},
    arrange::position::Position,
    collision::bbox::BoundingBox,
    collision::resolve::{ResolveOptions, auto_resolve_collisions},
    foundation::core::{Edges, Point, Vec2},
    foundation::diagnostics::{Diagnosed, Diagnostic, DiagnosticCode},
    validate::layout::{BoundsViolation, ValidateOptions, validate_layout},
};

/// Side length of collision boxes for positions that carry no size of their own.
pub const DEFAULT_COLLISION_ITEM_SIZE: f64 = 100.0;

/// Positions produced by [`calculate_item_positions`].
///
/// Serializes as a bare array for [`ItemPositions::Plain`] and as an object for
/// [`ItemPositions::Checked`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ItemPositions {
    /// Raw arrangement output.
    Plain(Vec<Position>),
    /// Output after collision resolution and validation.
    Checked(CheckedPositions),
}

impl ItemPositions {
    /// Positions regardless of variant.
    pub fn positions(&self) -> &[Position] {
        match self {
            Self::Plain(p) => p,
            Self::Checked(c) => &c.positions,
        }
    }

    /// Consume into the positions, dropping any checked-path report.
    pub fn into_positions(self) -> Vec<Position> {
        match self {
            Self::Plain(p) => p,
            Self::Checked(c) => c.positions,
        }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions().len()
    }

    /// Whether there are no positions.
    pub fn is_empty(&self) -> bool {
        self.positions().is_empty()
    }
}

/// Positions after collision resolution, with the validation report.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckedPositions {
    /// Arranged positions, moved by the resolver where needed.
    pub positions: Vec<Position>,
    /// Every soft condition met while arranging, resolving and validating.
    pub warnings: Vec<Diagnostic>,
    /// Canvas bounds violations left after resolution.
    pub errors: Vec<BoundsViolation>,
    /// `errors.is_empty()`.
    pub valid: bool,
}

/// Arrange `items.len()` items per `config`.
///
/// The result is index-aligned with `items`; item contents are never inspected. Unknown
/// arrangement names fall back to stacked-vertical with a warning.
#[tracing::instrument(
    skip(items, config),
    fields(count = items.len(), arrangement = config.arrangement.as_str())
)]
pub fn calculate_item_positions<T>(
    items: &[T],
    config: &ArrangementConfig,
) -> Diagnosed<ItemPositions> {
    let mut diagnostics = Vec::new();
    let positions = arrange(items.len(), config, &mut diagnostics);
    if !config.enable_collision_detection {
        return Diagnosed::new(ItemPositions::Plain(positions), diagnostics);
    }
    let checked = check_positions(positions, config, &mut diagnostics);
    Diagnosed::new(ItemPositions::Checked(checked), diagnostics)
}

fn arrange(
    count: usize,
    config: &ArrangementConfig,
    diags: &mut Vec<Diagnostic>,
) -> Vec<Position> {
    match &config.arrangement {
        ArrangementKind::StackedVertical => {
            stacked(count, anchor(config, diags), config.spacing, Axis::Vertical)
        }
        ArrangementKind::StackedHorizontal => {
            stacked(count, anchor(config, diags), config.spacing, Axis::Horizontal)
        }
        ArrangementKind::Grid => grid(count, config),
        ArrangementKind::Circular => circular(count, anchor(config, diags), config),
        ArrangementKind::Radial => radial(count, anchor(config, diags), config),
        ArrangementKind::Cascade => cascade(count, anchor(config, diags), config),
        ArrangementKind::Centered => vec![Position::at(anchor(config, diags)); count],
        ArrangementKind::Unknown(name) => {
            diags.push(Diagnostic::warning(
                DiagnosticCode::UnknownArrangement,
                format!("unknown arrangement '{name}'; using stacked-vertical"),
            ));
            stacked(count, anchor(config, diags), config.spacing, Axis::Vertical)
        }
    }
}

/// Center of `area`, else the named base anchor on the viewport.
fn anchor(config: &ArrangementConfig, diags: &mut Vec<Diagnostic>) -> Point {
    if let Some(area) = config.area {
        return area.center();
    }
    config
        .base_position
        .resolve(config.viewport)
        .unwrap_or_else(|| {
            diags.push(Diagnostic::warning(
                DiagnosticCode::UnknownBasePosition,
                format!(
                    "unknown base position '{}'; using center",
                    config.base_position.as_str()
                ),
            ));
            config.viewport.center()
        })
}

#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

fn stacked(count: usize, center: Point, spacing: f64, axis: Axis) -> Vec<Position> {
    let step = match axis {
        Axis::Vertical => Vec2::new(0.0, spacing),
        Axis::Horizontal => Vec2::new(spacing, 0.0),
    };
    line_from_center(count, center, step)
}

/// Diagonal staircase whose first step sits on `base`.
fn cascade(count: usize, base: Point, config: &ArrangementConfig) -> Vec<Position> {
    let step = Vec2::new(config.offset_x, config.offset_y);
    (0..count)
        .map(|i| Position::at(base + step * i as f64))
        .collect()
}

/// `count` points `step` apart whose midpoint is `center`.
fn line_from_center(count: usize, center: Point, step: Vec2) -> Vec<Position> {
    let span = (count.saturating_sub(1) as f64) * 0.5;
    let first = center - step * span;
    (0..count)
        .map(|i| Position::at(first + step * i as f64))
        .collect()
}

fn grid(count: usize, config: &ArrangementConfig) -> Vec<Position> {
    if count == 0 {
        return Vec::new();
    }
    let columns = config.columns.max(1);
    let rows = count.div_ceil(columns);
    let area = config.area.unwrap_or_else(|| {
        config
            .viewport
            .to_area()
            .inset(Edges::uniform(config.padding))
    });
    let gap = config.gap.max(0.0);

    let fill_w = ((area.width - gap * (columns - 1) as f64) / columns as f64).max(0.0);
    let fill_h = ((area.height - gap * (rows - 1) as f64) / rows as f64).max(0.0);
    let tile_w = config.explicit_width().map_or(fill_w, |w| w.min(fill_w));
    let tile_h = config.explicit_height().map_or(fill_h, |h| h.min(fill_h));

    let (start_x, start_y) = if config.center_grid {
        let used_cols = columns.min(count);
        let grid_w = used_cols as f64 * tile_w + gap * (used_cols - 1) as f64;
        let grid_h = rows as f64 * tile_h + gap * (rows - 1) as f64;
        (
            area.left + (area.width - grid_w) * 0.5,
            area.top + (area.height - grid_h) * 0.5,
        )
    } else {
        (area.left, area.top)
    };

    (0..count)
        .map(|i| {
            let row = i / columns;
            let column = i % columns;
            Position {
                x: start_x + column as f64 * (tile_w + gap) + tile_w * 0.5,
                y: start_y + row as f64 * (tile_h + gap) + tile_h * 0.5,
                width: Some(tile_w),
                height: Some(tile_h),
                row: Some(row),
                column: Some(column),
            }
        })
        .collect()
}

fn circular(count: usize, center: Point, config: &ArrangementConfig) -> Vec<Position> {
    (0..count)
        .map(|i| {
            let angle = even_angle(config.start_angle, i, count);
            Position::at(polar(center, config.radius, angle))
        })
        .collect()
}

fn radial(count: usize, center: Point, config: &ArrangementConfig) -> Vec<Position> {
    let explicit = config.angles.as_deref().unwrap_or(&[]);
    (0..count)
        .map(|i| {
            let radius = config.start_radius + i as f64 * config.radius_increment;
            let angle = explicit
                .get(i)
                .copied()
                .unwrap_or_else(|| even_angle(config.start_angle, i, count));
            Position::at(polar(center, radius, angle))
        })
        .collect()
}

fn even_angle(start: f64, i: usize, count: usize) -> f64 {
    start + (i as f64) * TAU / (count.max(1) as f64)
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::new(radius * angle.cos(), radius * angle.sin())
}

fn check_positions(
    mut positions: Vec<Position>,
    config: &ArrangementConfig,
    diags: &mut Vec<Diagnostic>,
) -> CheckedPositions {
    let fallback_w = config
        .explicit_width()
        .unwrap_or(DEFAULT_COLLISION_ITEM_SIZE);
    let fallback_h = config
        .explicit_height()
        .unwrap_or(DEFAULT_COLLISION_ITEM_SIZE);

    let boxes = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            BoundingBox::new(
                format!("item-{i}"),
                p.x,
                p.y,
                p.width.unwrap_or(fallback_w),
                p.height.unwrap_or(fallback_h),
            )
            .with_padding(config.collision_padding)
            .with_flexible(true)
        })
        .collect::<Vec<_>>();

    let outcome = auto_resolve_collisions(
        &boxes,
        ResolveOptions {
            max_iterations: config.max_iterations,
            check_timing: false,
        },
    );
    if !outcome.success {
        diags.push(Diagnostic::warning(
            DiagnosticCode::CollisionsUnresolved,
            outcome.message.clone(),
        ));
    }
    for (p, b) in positions.iter_mut().zip(&outcome.boxes) {
        p.x = b.x;
        p.y = b.y;
    }

    let report = validate_layout(
        &positions,
        config.viewport,
        &ValidateOptions {
            point_size: Some((fallback_w, fallback_h)),
            ..ValidateOptions::default()
        },
    );
    diags.extend(report.warnings.iter().cloned());

    CheckedPositions {
        positions,
        warnings: diags.clone(),
        errors: report.errors,
        valid: report.valid,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrange/calculators.rs"]
mod tests;
