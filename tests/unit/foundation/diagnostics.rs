use super::*;

#[test]
fn warnings_are_flagged() {
    let d = Diagnosed::new(
        1,
        vec![Diagnostic::warning(
            DiagnosticCode::UnknownArrangement,
            "unknown arrangement 'spiral'",
        )],
    );
    assert!(d.has_warnings());
    assert!(!Diagnosed::clean(1).has_warnings());

    let info = Diagnosed::new(1, vec![Diagnostic::info(DiagnosticCode::MobileReflow, "x")]);
    assert!(!info.has_warnings());
}

#[test]
fn drain_into_keeps_order() {
    let mut sink = vec![Diagnostic::info(DiagnosticCode::MobileReflow, "first")];
    let d = Diagnosed::new(
        "value",
        vec![Diagnostic::warning(DiagnosticCode::SlotRatios, "second")],
    );
    let v = d.drain_into(&mut sink);
    assert_eq!(v, "value");
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[1].message, "second");
}

#[test]
fn display_includes_level_and_code() {
    let d = Diagnostic::warning(DiagnosticCode::LayoutOverlap, "two cards overlap");
    let s = d.to_string();
    assert!(s.starts_with("warning[LayoutOverlap]"));
    assert!(s.ends_with("two cards overlap"));
}

#[test]
fn serializes_with_snake_case_codes() {
    let d = Diagnostic::warning(DiagnosticCode::SafePositionExhausted, "m");
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["code"], "safe_position_exhausted");
    assert_eq!(v["level"], "warning");
}

#[test]
fn map_preserves_diagnostics() {
    let d = Diagnosed::new(2, vec![Diagnostic::info(DiagnosticCode::MobileReflow, "m")]);
    let (v, diags) = d.map(|x| x * 10).into_parts();
    assert_eq!(v, 20);
    assert_eq!(diags.len(), 1);
}
