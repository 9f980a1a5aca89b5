use std::f64::consts::FRAC_PI_4;

use crate::{
    collision::bbox::{BoundingBox, Constraints},
    collision::detect::{
        Collision, DetectOptions, IndexedCollision, Severity, detect_pairs, is_clear_of,
    },
    foundation::core::{Point, Vec2},
    foundation::diagnostics::{Diagnosed, Diagnostic, DiagnosticCode},
};

/// Extra clearance added on top of the overlap when the resolver moves a box.
pub const RESOLVE_MARGIN_PX: f64 = 10.0;

const RING_DIRECTIONS: usize = 8;

/// Options for [`find_safe_position`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafePositionOptions {
    /// Point to try first; defaults to the element's own `x`/`y`.
    pub preferred_position: Option<Point>,
    /// Largest ring radius.
    pub search_radius: f64,
    /// Ring radius increment.
    pub step_size: f64,
    /// Limits on candidates; defaults to the element's own constraints.
    pub constraints: Option<Constraints>,
}

impl Default for SafePositionOptions {
    fn default() -> Self {
        Self {
            preferred_position: None,
            search_radius: 200.0,
            step_size: 20.0,
            constraints: None,
        }
    }
}

/// Nearest collision-free point for `element` among `existing`, searched in expanding rings.
///
/// Rings grow from `step_size` to `search_radius`; each ring tries eight directions starting at
/// 0° and turning by 45° (clockwise on screen). When nothing fits, the preferred point is returned
/// with a [`DiagnosticCode::SafePositionExhausted`] warning, so callers must tolerate overlap.
#[tracing::instrument(skip(element, existing), fields(id = %element.id, existing = existing.len()))]
pub fn find_safe_position(
    element: &BoundingBox,
    existing: &[BoundingBox],
    opts: &SafePositionOptions,
) -> Diagnosed<Point> {
    let preferred = opts.preferred_position.unwrap_or_else(|| element.position());
    let constraints = opts.constraints.or(element.constraints);
    let allowed = |p: Point| constraints.is_none_or(|c| c.allows(p));
    let fits = |p: Point| allowed(p) && is_clear_of(&element.moved_to(p), existing);

    if fits(preferred) {
        return Diagnosed::clean(preferred);
    }

    if opts.step_size > 0.0 && opts.search_radius.is_finite() {
        let rings = (opts.search_radius / opts.step_size).floor() as usize;
        for ring in 1..=rings {
            let radius = ring as f64 * opts.step_size;
            for dir in 0..RING_DIRECTIONS {
                let angle = dir as f64 * FRAC_PI_4;
                let candidate = preferred + Vec2::new(radius * angle.cos(), radius * angle.sin());
                if fits(candidate) {
                    tracing::trace!(radius, dir, "safe position found");
                    return Diagnosed::clean(candidate);
                }
            }
        }
    }

    Diagnosed::new(
        preferred,
        vec![Diagnostic::warning(
            DiagnosticCode::SafePositionExhausted,
            format!(
                "no collision-free position for '{}' within {}px; keeping preferred position",
                element.id, opts.search_radius
            ),
        )],
    )
}

/// Greedily place `elements` in input order so that padded boxes keep `min_spacing` apart.
///
/// Each element is only checked against the ones placed before it; later elements never move
/// earlier ones. Returned boxes keep their original padding.
#[tracing::instrument(skip(elements), fields(count = elements.len()))]
pub fn enforce_minimum_spacing(
    elements: &[BoundingBox],
    min_spacing: f64,
) -> Diagnosed<Vec<BoundingBox>> {
    let half = (min_spacing * 0.5).max(0.0);
    let mut diagnostics = Vec::new();
    let mut placed = Vec::<BoundingBox>::with_capacity(elements.len());
    let mut out = Vec::with_capacity(elements.len());

    for el in elements {
        let mut spaced = el.clone();
        spaced.padding = spaced.padding.max(half);
        let p = find_safe_position(&spaced, &placed, &SafePositionOptions::default())
            .drain_into(&mut diagnostics);
        placed.push(spaced.moved_to(p));
        out.push(el.moved_to(p));
    }

    Diagnosed::new(out, diagnostics)
}

/// Options for [`auto_resolve_collisions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Upper bound on relocations.
    pub max_iterations: usize,
    /// Ignore collisions between boxes whose frame ranges never meet when set.
    pub check_timing: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            check_timing: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Result of [`auto_resolve_collisions`]. `boxes` is always the best-effort layout.
pub struct ResolveOutcome {
    /// Whether no warning-or-worse collision remains.
    pub success: bool,
    /// Boxes after every applied relocation, in input order.
    pub boxes: Vec<BoundingBox>,
    /// Relocations applied.
    pub iterations: usize,
    /// Human readable summary.
    pub message: String,
    /// Warning-or-worse collisions left when `success` is false.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_collisions: Vec<Collision>,
}

/// Move flexible boxes until no warning-or-worse collision remains.
///
/// One relocation per iteration: the most severe collision is taken (first found on ties), its
/// movable box is shifted along one axis by the overlap plus [`RESOLVE_MARGIN_PX`]. The movable
/// box is the flexible one; if both are flexible, the lower priority, then the smaller area,
/// then the later box. Fails without moving when neither box is flexible or no shift satisfies
/// the mover's constraints, and after `max_iterations` relocations with collisions left.
#[tracing::instrument(skip(boxes), fields(count = boxes.len()))]
pub fn auto_resolve_collisions(boxes: &[BoundingBox], opts: ResolveOptions) -> ResolveOutcome {
    let mut boxes = boxes.to_vec();
    let detect = DetectOptions {
        check_timing: opts.check_timing,
        min_severity: Severity::Warning,
    };

    let mut iterations = 0usize;
    loop {
        let pairs = detect_pairs(&boxes, detect);
        let Some(worst) = most_severe(&pairs) else {
            return ResolveOutcome {
                success: true,
                boxes,
                iterations,
                message: format!("layout clear after {iterations} relocation(s)"),
                unresolved_collisions: Vec::new(),
            };
        };

        if iterations >= opts.max_iterations {
            let message = format!(
                "{} collision(s) left after {} iteration(s)",
                pairs.len(),
                opts.max_iterations
            );
            tracing::warn!("{message}");
            return failed(boxes, iterations, message, pairs);
        }

        let Some((mover, other)) = pick_mover(&boxes, worst.a, worst.b) else {
            let message = format!(
                "collision between '{}' and '{}' has no flexible element",
                worst.collision.element_a, worst.collision.element_b
            );
            tracing::warn!("{message}");
            return failed(boxes, iterations, message, pairs);
        };

        let Some(target) = best_relocation(&boxes[mover], &boxes[other], &worst.collision) else {
            let message = format!(
                "no relocation of '{}' satisfies its constraints",
                boxes[mover].id
            );
            tracing::warn!("{message}");
            return failed(boxes, iterations, message, pairs);
        };

        tracing::debug!(
            id = %boxes[mover].id,
            from_x = boxes[mover].x,
            from_y = boxes[mover].y,
            to_x = target.x,
            to_y = target.y,
            "relocating element"
        );
        boxes[mover].x = target.x;
        boxes[mover].y = target.y;
        iterations += 1;
    }
}

fn failed(
    boxes: Vec<BoundingBox>,
    iterations: usize,
    message: String,
    pairs: Vec<IndexedCollision>,
) -> ResolveOutcome {
    ResolveOutcome {
        success: false,
        boxes,
        iterations,
        message,
        unresolved_collisions: pairs.into_iter().map(|p| p.collision).collect(),
    }
}

fn most_severe(pairs: &[IndexedCollision]) -> Option<&IndexedCollision> {
    let mut best: Option<&IndexedCollision> = None;
    for p in pairs {
        let replace = best.is_none_or(|b| {
            let (pc, bc) = (&p.collision, &b.collision);
            pc.severity > bc.severity
                || (pc.severity == bc.severity && pc.overlap_percentage > bc.overlap_percentage)
        });
        if replace {
            best = Some(p);
        }
    }
    best
}

/// `(mover, other)` indices, or `None` when neither box may move.
fn pick_mover(boxes: &[BoundingBox], a: usize, b: usize) -> Option<(usize, usize)> {
    let (ba, bb) = (&boxes[a], &boxes[b]);
    match (ba.flexible, bb.flexible) {
        (false, false) => None,
        (true, false) => Some((a, b)),
        (false, true) => Some((b, a)),
        (true, true) => {
            if ba.priority != bb.priority {
                return Some(if ba.priority < bb.priority { (a, b) } else { (b, a) });
            }
            if ba.area() < bb.area() {
                Some((a, b))
            } else {
                Some((b, a))
            }
        }
    }
}

fn best_relocation(mover: &BoundingBox, other: &BoundingBox, c: &Collision) -> Option<Point> {
    let dy = c.overlap_y + RESOLVE_MARGIN_PX;
    let dx = c.overlap_x + RESOLVE_MARGIN_PX;
    let here = mover.edges().center();
    let there = other.edges().center();

    // (offset, moves away from the other box)
    let mut candidates = [
        (Vec2::new(0.0, -dy), here.y <= there.y),
        (Vec2::new(0.0, dy), here.y >= there.y),
        (Vec2::new(-dx, 0.0), here.x <= there.x),
        (Vec2::new(dx, 0.0), here.x >= there.x),
    ]
    .into_iter()
    .map(|(offset, away)| (mover.position() + offset, offset.hypot(), away))
    .filter(|(p, _, _)| mover.constraints.is_none_or(|k| k.allows(*p)))
    .collect::<Vec<_>>();

    candidates.sort_by(|a, b| a.1.total_cmp(&b.1).then(b.2.cmp(&a.2)));
    candidates.first().map(|(p, _, _)| *p)
}

#[cfg(test)]
#[path = "../../tests/unit/collision/resolve.rs"]
mod tests;
