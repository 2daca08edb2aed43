use super::*;

#[test]
fn frame_progress_is_clamped() {
    assert_eq!(FrameIndex(0).progress(60), 0.0);
    assert_eq!(FrameIndex(30).progress(60), 0.5);
    assert_eq!(FrameIndex(600).progress(60), 1.0);
    assert_eq!(FrameIndex(3).progress(0), 1.0);
}

#[test]
fn surface_expand_accumulates_and_grows() {
    let mut e = SurfaceExpand::new(1, 2);
    e += SurfaceExpand::new(3, 0);
    assert_eq!(e, SurfaceExpand::new(4, 2));
    assert_eq!(e.grow((10, 5)), (18, 9));
    assert!(SurfaceExpand::NONE.is_none());
    assert!(!e.is_none());
}

#[test]
fn rgb_distance_is_max_channel_delta() {
    let a = Rgb8::new(10, 20, 30);
    let b = Rgb8::new(12, 15, 30);
    assert_eq!(a.max_channel_distance(b), 5);
    assert_eq!(b.max_channel_distance(a), 5);
    assert_eq!(Rgb8::from_array(a.to_array()), a);
}
