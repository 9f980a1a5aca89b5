use super::*;

const DESKTOP: Viewport = Viewport {
    width: 1920.0,
    height: 1080.0,
};
const MOBILE: Viewport = Viewport {
    width: 1080.0,
    height: 1920.0,
};

fn resolve(config: &SlotLayoutConfig, viewport: Viewport) -> SlotMap {
    resolve_scene_slots(config, viewport).value
}

fn side_by_side(a: &LayoutArea, b: &LayoutArea) -> bool {
    let vertical_overlap = a.top.max(b.top) < a.bottom().min(b.bottom());
    vertical_overlap && (a.right() <= b.left || b.right() <= a.left)
}

#[test]
fn format_follows_orientation() {
    assert_eq!(detect_format(DESKTOP), Format::Desktop);
    assert_eq!(detect_format(MOBILE), Format::Mobile);
    assert_eq!(
        detect_format(Viewport {
            width: 500.0,
            height: 500.0
        }),
        Format::Desktop
    );
    assert!(is_mobile_format(MOBILE));
    assert!(!is_mobile_format(DESKTOP));
}

#[test]
fn full_spans_padded_area() {
    let slots = resolve(&SlotLayoutConfig::new(SlotLayoutKind::Full), DESKTOP);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots["full"], LayoutArea::new(60.0, 60.0, 1800.0, 960.0));
}

#[test]
fn row_stack_with_header() {
    let config = SlotLayoutConfig {
        rows: 3,
        title_height: Some(120.0),
        padding: 0.0,
        ..SlotLayoutConfig::new(SlotLayoutKind::RowStack)
    };
    let slots = resolve(&config, DESKTOP);
    assert_eq!(
        slots.keys().collect::<Vec<_>>(),
        vec!["header", "row1", "row2", "row3"]
    );
    assert_eq!(slots["header"], LayoutArea::new(0.0, 0.0, 1920.0, 120.0));
    assert_eq!(slots["row1"], LayoutArea::new(0.0, 120.0, 1920.0, 320.0));
    assert_eq!(slots["row3"].bottom(), 1080.0);
}

#[test]
fn column_split_honours_ratios() {
    let config = SlotLayoutConfig {
        ratios: Some(vec![0.25, 0.75]),
        padding: 0.0,
        gap: 20.0,
        ..SlotLayoutConfig::new(SlotLayoutKind::ColumnSplit)
    };
    let out = resolve_scene_slots(&config, DESKTOP);
    assert!(out.diagnostics.is_empty());
    let slots = out.value;
    assert_eq!(slots["col1"].width, 475.0);
    assert_eq!(slots["col2"].width, 1425.0);
    assert_eq!(slots["col2"].left, 495.0);
    assert!(!slots.contains_key("header"));
}

#[test]
fn off_ratios_are_normalized_with_warning() {
    let config = SlotLayoutConfig {
        ratios: Some(vec![1.0, 1.0, 2.0]),
        padding: 0.0,
        ..SlotLayoutConfig::new(SlotLayoutKind::ColumnSplit)
    };
    let out = resolve_scene_slots(&config, DESKTOP);
    assert_eq!(out.diagnostics[0].code, DiagnosticCode::SlotRatios);
    assert_eq!(out.value["col3"].width, 960.0);
}

#[test]
fn non_positive_ratios_fall_back_to_equal_columns() {
    let config = SlotLayoutConfig {
        ratios: Some(vec![1.0, -1.0]),
        columns: 4,
        padding: 0.0,
        ..SlotLayoutConfig::new(SlotLayoutKind::ColumnSplit)
    };
    let out = resolve_scene_slots(&config, DESKTOP);
    assert!(out.has_warnings());
    assert_eq!(out.value.len(), 4);
    assert_eq!(out.value["col4"].width, 480.0);
}

#[test]
fn header_row_columns_layout() {
    let config = SlotLayoutConfig {
        padding: 0.0,
        columns: 3,
        row_height_ratio: 0.4,
        ..SlotLayoutConfig::new(SlotLayoutKind::HeaderRowColumns)
    };
    let slots = resolve(&config, DESKTOP);
    assert_eq!(slots["header"].height, DEFAULT_TITLE_HEIGHT);
    assert_eq!(slots["row"].top, 120.0);
    assert!((slots["row"].height - 384.0).abs() < 1e-9);
    assert!((slots["col1"].top - 504.0).abs() < 1e-9);
    assert_eq!(slots["col3"].left, 1280.0);
}

#[test]
fn grid_slots_are_named_by_row_and_column() {
    let config = SlotLayoutConfig {
        rows: 2,
        columns: 3,
        padding: 0.0,
        ..SlotLayoutConfig::new(SlotLayoutKind::GridSlots)
    };
    let slots = resolve(&config, DESKTOP);
    assert_eq!(slots.len(), 6);
    assert_eq!(slots["cell-2-3"], LayoutArea::new(1280.0, 540.0, 640.0, 540.0));
}

#[test]
fn mobile_never_places_slots_side_by_side() {
    for kind in [
        SlotLayoutKind::ColumnSplit,
        SlotLayoutKind::HeaderRowColumns,
        SlotLayoutKind::GridSlots,
    ] {
        let config = SlotLayoutConfig {
            columns: 3,
            ..SlotLayoutConfig::new(kind)
        };
        let out = resolve_scene_slots(&config, MOBILE);
        assert!(
            out.diagnostics
                .iter()
                .any(|d| d.code == DiagnosticCode::MobileReflow)
        );
        let areas = out.value.values().collect::<Vec<_>>();
        for (i, a) in areas.iter().enumerate() {
            for b in &areas[i + 1..] {
                assert!(!side_by_side(a, b), "{kind:?}: {a:?} beside {b:?}");
            }
        }
    }
}

#[test]
fn forced_format_overrides_detection() {
    let config = SlotLayoutConfig {
        format: Some(Format::Mobile),
        padding: 0.0,
        ..SlotLayoutConfig::new(SlotLayoutKind::ColumnSplit)
    };
    let slots = resolve(&config, DESKTOP);
    assert_eq!(slots["col1"], LayoutArea::new(0.0, 0.0, 1920.0, 540.0));
    assert_eq!(slots["col2"], LayoutArea::new(0.0, 540.0, 1920.0, 540.0));
}

#[test]
fn parses_from_json() {
    let config = SlotLayoutConfig::from_json(
        r#"{ "type": "headerRowColumns", "titleHeight": 100, "rowHeightRatio": 0.3, "format": "mobile" }"#,
    )
    .unwrap();
    assert_eq!(config.kind, SlotLayoutKind::HeaderRowColumns);
    assert_eq!(config.title_height, Some(100.0));
    assert_eq!(config.format, Some(Format::Mobile));
    assert_eq!(config.padding, 60.0);
}

#[test]
fn oversized_gap_keeps_slots_inside_the_area() {
    let config = SlotLayoutConfig {
        rows: 3,
        padding: 0.0,
        gap: 2000.0,
        ..SlotLayoutConfig::new(SlotLayoutKind::RowStack)
    };
    let slots = resolve(&config, DESKTOP);
    for (name, area) in &slots {
        assert!(area.top >= 0.0 && area.bottom() <= 1080.0, "{name}: {area:?}");
        assert_eq!(area.height, 0.0, "{name}");
    }
    assert_eq!(slots["row3"].top, 1080.0);
}
