use crate::{
    arrange::position::Position,
    collision::bbox::BoundingBox,
    collision::detect::check_overlap,
    foundation::core::{CenterRect, Viewport},
    foundation::diagnostics::{Diagnostic, DiagnosticCode},
};

/// Canvas edge a position crosses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Past x = 0.
    Left,
    /// Past the canvas width.
    Right,
    /// Past y = 0.
    Top,
    /// Past the canvas height.
    Bottom,
}

/// A position extending past one canvas edge by `amount` pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundsViolation {
    /// Index into the validated positions.
    pub index: usize,
    /// Edge that was crossed.
    pub side: Side,
    /// Distance past the edge in pixels.
    pub amount: f64,
}

/// Options for [`validate_layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidateOptions {
    /// Report overlapping pairs as a warning.
    pub check_collisions: bool,
    /// Report canvas bounds violations as errors.
    pub check_bounds: bool,
    /// Size assumed for positions that carry none. Without it, such positions are bounds-checked
    /// as points and make the overlap check skip the whole layout.
    pub point_size: Option<(f64, f64)>,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            check_collisions: true,
            check_bounds: true,
            point_size: None,
        }
    }
}

/// Outcome of [`validate_layout`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationReport {
    /// Blocking problems.
    pub errors: Vec<BoundsViolation>,
    /// Advisory problems; they do not affect `valid`.
    pub warnings: Vec<Diagnostic>,
    /// `errors.is_empty()`.
    pub valid: bool,
}

/// Check `positions` (center coordinates) against `canvas`.
///
/// Bounds violations are reported per edge as errors. Overlap is reported as a single aggregate
/// warning and only when every position has a size; use [`crate::detect_collisions`] for the
/// individual pairs.
#[tracing::instrument(skip(positions), fields(count = positions.len()))]
pub fn validate_layout(
    positions: &[Position],
    canvas: Viewport,
    opts: &ValidateOptions,
) -> ValidationReport {
    let rects = positions
        .iter()
        .map(|p| {
            let (w, h) = p.size().or(opts.point_size).unwrap_or((0.0, 0.0));
            CenterRect::new(p.x, p.y, w, h)
        })
        .collect::<Vec<_>>();
    let all_sized = positions
        .iter()
        .all(|p| p.size().is_some() || opts.point_size.is_some());

    let mut errors = Vec::new();
    if opts.check_bounds {
        for (index, rect) in rects.iter().enumerate() {
            bounds_violations(index, *rect, canvas, &mut errors);
        }
    }

    let mut warnings = Vec::new();
    if opts.check_collisions && all_sized {
        let overlapping = count_overlapping_pairs(&rects);
        if overlapping > 0 {
            warnings.push(Diagnostic::warning(
                DiagnosticCode::LayoutOverlap,
                format!("layout has overlapping elements ({overlapping} pair(s))"),
            ));
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn bounds_violations(
    index: usize,
    rect: CenterRect,
    canvas: Viewport,
    out: &mut Vec<BoundsViolation>,
) {
    let r = rect.to_top_left();
    let checks = [
        (Side::Left, -r.left),
        (Side::Right, r.right() - canvas.width),
        (Side::Top, -r.top),
        (Side::Bottom, r.bottom() - canvas.height),
    ];
    for (side, amount) in checks {
        if amount > 0.0 {
            out.push(BoundsViolation {
                index,
                side,
                amount,
            });
        }
    }
}

fn count_overlapping_pairs(rects: &[CenterRect]) -> usize {
    let boxes = rects
        .iter()
        .enumerate()
        .map(|(i, r)| BoundingBox::from_center_rect(i.to_string(), *r))
        .collect::<Vec<_>>();
    let mut n = 0;
    for (i, a) in boxes.iter().enumerate() {
        n += boxes[i + 1..]
            .iter()
            .filter(|b| check_overlap(a, b).is_some())
            .count();
    }
    n
}

#[cfg(test)]
#[path = "../../tests/unit/validate/layout.rs"]
mod tests;
