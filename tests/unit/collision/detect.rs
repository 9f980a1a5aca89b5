use super::*;
use crate::{AnchorMode, FrameIndex};

fn square(id: &str, x: f64, y: f64, size: f64) -> BoundingBox {
    BoundingBox::new(id, x, y, size, size)
}

#[test]
fn overlap_is_symmetric() {
    let a = square("a", 0.0, 0.0, 100.0);
    let b = BoundingBox::new("b", 60.0, 30.0, 80.0, 50.0);
    let ab = check_overlap(&a, &b).unwrap();
    let ba = check_overlap(&b, &a).unwrap();
    assert_eq!(ab.overlap_area, ba.overlap_area);
    assert_eq!(ab.severity, ba.severity);
    assert_eq!(ab.element_a, "a");
    assert_eq!(ba.element_a, "b");
}

#[test]
fn distant_padded_boxes_do_not_overlap() {
    // Half widths 50 + 50, padding 5 + 5: centers must be more than 110 apart.
    let a = square("a", 0.0, 0.0, 100.0).with_padding(5.0);
    let b = square("b", 111.0, 0.0, 100.0).with_padding(5.0);
    assert!(check_overlap(&a, &b).is_none());

    let c = square("c", 109.0, 0.0, 100.0).with_padding(5.0);
    assert!(check_overlap(&a, &c).is_some());
}

#[test]
fn touching_edges_are_not_a_collision() {
    let a = square("a", 0.0, 0.0, 100.0);
    let b = square("b", 100.0, 0.0, 100.0);
    assert!(check_overlap(&a, &b).is_none());
}

#[test]
fn severity_thresholds_follow_smaller_box() {
    assert_eq!(Severity::from_percentage(50.0), Severity::Warning);
    assert_eq!(Severity::from_percentage(50.1), Severity::Critical);
    assert_eq!(Severity::from_percentage(20.0), Severity::Minor);
    assert_eq!(Severity::from_percentage(20.1), Severity::Warning);

    // Small box fully inside a large one: 100% of the smaller area.
    let big = square("big", 0.0, 0.0, 400.0);
    let small = square("small", 0.0, 0.0, 20.0);
    let c = check_overlap(&big, &small).unwrap();
    assert_eq!(c.overlap_area, 400.0);
    assert_eq!(c.overlap_percentage, 100.0);
    assert_eq!(c.severity, Severity::Critical);
}

#[test]
fn overlap_dimensions_are_reported() {
    let a = BoundingBox::new("a", 0.0, 0.0, 100.0, 100.0).with_anchor(AnchorMode::TopLeft);
    let b = BoundingBox::new("b", 90.0, 80.0, 100.0, 100.0).with_anchor(AnchorMode::TopLeft);
    let c = check_overlap(&a, &b).unwrap();
    assert_eq!(c.overlap_x, 10.0);
    assert_eq!(c.overlap_y, 20.0);
    assert_eq!(c.overlap_area, 200.0);
    assert_eq!(c.severity, Severity::Minor);
}

#[test]
fn timing_filters_pairs_that_never_coexist() {
    let a = square("a", 0.0, 0.0, 100.0).with_frames(FrameIndex(0), FrameIndex(30));
    let b = square("b", 0.0, 0.0, 100.0).with_frames(FrameIndex(30), FrameIndex(60));
    let boxes = [a, b];

    assert!(detect_collisions(&boxes, DetectOptions::default()).is_empty());
    let untimed = DetectOptions {
        check_timing: false,
        ..DetectOptions::default()
    };
    assert_eq!(detect_collisions(&boxes, untimed).len(), 1);
}

#[test]
fn min_severity_drops_lesser_collisions() {
    let boxes = [
        square("a", 0.0, 0.0, 100.0),
        square("b", 90.0, 0.0, 100.0),  // 10% with a
        square("c", 500.0, 0.0, 100.0),
        square("d", 500.0, 10.0, 100.0), // 90% with c
    ];
    let all = detect_collisions(&boxes, DetectOptions::default());
    assert_eq!(all.len(), 2);

    let serious = detect_collisions(
        &boxes,
        DetectOptions {
            min_severity: Severity::Warning,
            ..DetectOptions::default()
        },
    );
    assert_eq!(serious.len(), 1);
    assert_eq!(serious[0].element_a, "c");
    assert_eq!(serious[0].element_b, "d");
    assert_eq!(serious[0].severity, Severity::Critical);
}

#[test]
fn clear_check_ignores_boxes_in_other_frames() {
    let candidate = square("p", 0.0, 0.0, 50.0).with_frames(FrameIndex(100), FrameIndex(200));
    let others = [square("o", 0.0, 0.0, 50.0).with_frames(FrameIndex(0), FrameIndex(100))];
    assert!(is_clear_of(&candidate, &others));
    assert!(!is_clear_of(&square("q", 0.0, 0.0, 50.0), &others));
}
