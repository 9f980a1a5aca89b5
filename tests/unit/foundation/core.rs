use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_ranges_intersect_half_open() {
    let a = FrameRange::new(FrameIndex(0), FrameIndex(10)).unwrap();
    let b = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    let c = FrameRange::new(FrameIndex(9), FrameIndex(11)).unwrap();
    assert!(!a.intersects(b));
    assert!(a.intersects(c));
    assert!(b.intersects(c));
    assert!(FrameRange::ALWAYS.intersects(b));
}

#[test]
fn missing_bounds_default_to_always() {
    assert_eq!(FrameRange::from_bounds(None, None), FrameRange::ALWAYS);
    let r = FrameRange::from_bounds(Some(FrameIndex(30)), None);
    assert!(r.contains(FrameIndex(1_000_000)));
    assert!(!r.contains(FrameIndex(29)));
}

#[test]
fn viewport_new_validates_size() {
    assert!(Viewport::new(1920.0, 1080.0).is_ok());
    assert!(Viewport::new(0.0, 1080.0).is_err());
    assert!(Viewport::new(1920.0, f64::NAN).is_err());
    assert_eq!(Viewport::default(), Viewport::new(1920.0, 1080.0).unwrap());
}

#[test]
fn center_and_top_left_convert_both_ways() {
    let c = CenterRect::new(100.0, 50.0, 40.0, 20.0);
    let t = c.to_top_left();
    assert_eq!(t, TopLeftRect::new(80.0, 40.0, 40.0, 20.0));
    assert_eq!(t.to_center(), c);
    assert_eq!(TopLeftRect::from(c), t);
    assert_eq!(CenterRect::from(t), c);
}

#[test]
fn inset_never_goes_negative() {
    let area = TopLeftRect::new(0.0, 0.0, 100.0, 60.0);
    let inner = area.inset(Edges::uniform(10.0));
    assert_eq!(inner, TopLeftRect::new(10.0, 10.0, 80.0, 40.0));

    let crushed = area.inset(Edges::uniform(80.0));
    assert_eq!(crushed.width, 0.0);
    assert_eq!(crushed.height, 0.0);
}

#[test]
fn viewport_area_and_center() {
    let v = Viewport::new(1080.0, 1920.0).unwrap();
    assert_eq!(v.center(), Point::new(540.0, 960.0));
    assert_eq!(v.to_area().right(), 1080.0);
    assert_eq!(v.to_area().to_kurbo(), Rect::new(0.0, 0.0, 1080.0, 1920.0));
    assert!(v.aspect_ratio() < 1.0);
}
