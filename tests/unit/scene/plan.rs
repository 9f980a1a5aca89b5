use super::*;
use crate::{DiagnosticCode, LayoutArea};

const PLAN: &str = r#"{
    "viewport": { "width": 1920, "height": 1080 },
    "slots": { "type": "columnSplit", "titleHeight": 140 },
    "regions": {
        "cards": { "slot": "col1", "items": ["a", "b", "c"], "layout": { "arrangement": "grid" } },
        "notes": { "slot": "col2", "items": [1, 2], "layout": { "arrangement": "spiral" } }
    }
}"#;

#[test]
fn parses_with_defaults() {
    let plan = ScenePlan::from_json(PLAN).unwrap();
    assert_eq!(plan.regions.len(), 2);
    assert_eq!(plan.regions["cards"].items.len(), 3);
    assert_eq!(plan.slots.padding, 60.0);
    assert_eq!(plan.regions["notes"].layout.spacing, 80.0);
}

#[test]
fn regions_are_arranged_inside_their_slots() {
    let plan = ScenePlan::from_json(PLAN).unwrap();
    let resolved = plan_scene(&plan).unwrap();
    let scene = &resolved.value;

    assert_eq!(scene.format, Format::Desktop);
    assert_eq!(scene.slots["col1"], LayoutArea::new(60.0, 200.0, 900.0, 820.0));

    let cards = scene.regions["cards"].positions();
    assert_eq!(cards.len(), 3);
    let col1 = scene.slots["col1"];
    for p in cards {
        assert!((p.y - 610.0).abs() < 1e-9);
        assert!(p.x > col1.left && p.x < col1.right());
    }

    // Unknown arrangement falls back to a vertical stack centered in col2.
    let notes = scene.regions["notes"].positions();
    assert_eq!(notes[0].x, 1410.0);
    assert_eq!(notes[0].y, 570.0);
    assert_eq!(notes[1].y, 650.0);
    assert!(
        resolved
            .diagnostics
            .iter()
            .any(|d| d.code == DiagnosticCode::UnknownArrangement)
    );
}

#[test]
fn unknown_slot_is_an_error() {
    let plan = ScenePlan::from_json(
        r#"{ "regions": { "x": { "slot": "sidebar", "items": [1] } } }"#,
    )
    .unwrap();
    let err = plan_scene(&plan).unwrap_err();
    assert!(matches!(err, LayoutError::Validation(_)));
    assert!(err.to_string().contains("sidebar"));
}

#[test]
fn invalid_viewport_is_an_error() {
    let plan = ScenePlan::from_json(r#"{ "viewport": { "width": 0, "height": 1080 } }"#).unwrap();
    assert!(matches!(
        plan_scene(&plan).unwrap_err(),
        LayoutError::Validation(_)
    ));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ScenePlan::from_json(r#"{ "regions": 3 }"#).unwrap_err();
    assert!(matches!(err, LayoutError::Serde(_)));
}

#[test]
fn replanning_reuses_cached_arrangements() {
    let plan = ScenePlan::from_json(PLAN).unwrap();
    let mut cache = ArrangementCache::new();
    let first = plan_scene_with_cache(&plan, &mut cache).unwrap();
    let second = plan_scene_with_cache(&plan, &mut cache).unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.stats(), (2, 2));
}
