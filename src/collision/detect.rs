use crate::collision::bbox::BoundingBox;

/// How badly two padded boxes overlap, relative to the smaller one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Up to 20% of the smaller box.
    Minor,
    /// More than 20%.
    Warning,
    /// More than 50%.
    Critical,
}

impl Severity {
    /// Classify an overlap percentage.
    pub fn from_percentage(pct: f64) -> Self {
        if pct > 50.0 {
            Self::Critical
        } else if pct > 20.0 {
            Self::Warning
        } else {
            Self::Minor
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Overlap between two boxes, identified by id.
pub struct Collision {
    /// Id of the first box.
    pub element_a: String,
    /// Id of the second box.
    pub element_b: String,
    /// Overlap area in square pixels.
    pub overlap_area: f64,
    /// Overlap width.
    pub overlap_x: f64,
    /// Overlap height.
    pub overlap_y: f64,
    /// Overlap area as a percentage of the smaller padded box.
    pub overlap_percentage: f64,
    /// Classification of `overlap_percentage`.
    pub severity: Severity,
}

/// Options for [`detect_collisions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectOptions {
    /// Skip pairs whose frame ranges never intersect.
    pub check_timing: bool,
    /// Drop collisions below this severity.
    pub min_severity: Severity,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            check_timing: true,
            min_severity: Severity::Minor,
        }
    }
}

/// Overlap of the padded boxes `a` and `b`, or `None` when they are disjoint or only touch.
///
/// Timing is not considered here; see [`detect_collisions`].
pub fn check_overlap(a: &BoundingBox, b: &BoundingBox) -> Option<Collision> {
    let ra = a.padded_edges();
    let rb = b.padded_edges();

    let overlap_x = ra.x1.min(rb.x1) - ra.x0.max(rb.x0);
    let overlap_y = ra.y1.min(rb.y1) - ra.y0.max(rb.y0);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    let overlap_area = overlap_x * overlap_y;
    let smaller = ra.area().min(rb.area());
    let overlap_percentage = if smaller > 0.0 {
        overlap_area / smaller * 100.0
    } else {
        0.0
    };

    Some(Collision {
        element_a: a.id.clone(),
        element_b: b.id.clone(),
        overlap_area,
        overlap_x,
        overlap_y,
        overlap_percentage,
        severity: Severity::from_percentage(overlap_percentage),
    })
}

/// All pairwise collisions among `boxes`, in scan order (`i < j`).
#[tracing::instrument(skip(boxes), fields(count = boxes.len()))]
pub fn detect_collisions(boxes: &[BoundingBox], opts: DetectOptions) -> Vec<Collision> {
    detect_pairs(boxes, opts)
        .into_iter()
        .map(|p| p.collision)
        .collect()
}

/// A collision plus the indices of the two boxes in the scanned slice.
pub(crate) struct IndexedCollision {
    pub(crate) a: usize,
    pub(crate) b: usize,
    pub(crate) collision: Collision,
}

pub(crate) fn detect_pairs(boxes: &[BoundingBox], opts: DetectOptions) -> Vec<IndexedCollision> {
    let mut out = Vec::new();
    for (i, a) in boxes.iter().enumerate() {
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            if opts.check_timing && !a.coexists_with(b) {
                continue;
            }
            if let Some(collision) = check_overlap(a, b)
                && collision.severity >= opts.min_severity
            {
                out.push(IndexedCollision { a: i, b: j, collision });
            }
        }
    }
    out
}

/// Whether `candidate` is clear of every box in `others` it shares frames with.
pub(crate) fn is_clear_of(candidate: &BoundingBox, others: &[BoundingBox]) -> bool {
    others
        .iter()
        .filter(|o| candidate.coexists_with(o))
        .all(|o| check_overlap(candidate, o).is_none())
}

#[cfg(test)]
#[path = "../../tests/unit/collision/detect.rs"]
mod tests;
