use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn clip_axis_handles_negative_offsets_and_overhang() {
    assert_eq!(
        clip_axis(-2, 5, 10),
        Some(ClipSpan {
            src_start: 2,
            dst_start: 0,
            len: 3
        })
    );
    assert_eq!(
        clip_axis(8, 5, 10),
        Some(ClipSpan {
            src_start: 0,
            dst_start: 8,
            len: 2
        })
    );
    assert_eq!(clip_axis(-5, 5, 10), None);
    assert_eq!(clip_axis(10, 5, 10), None);
}

#[test]
fn composite_dispatches_on_policy() {
    let mut a = PixelSurface::filled(2, 2, Rgb8::new(255, 0, 0)).unwrap();
    a.set_position(0, 0, 1);
    let b = PixelSurface::filled(2, 2, Rgb8::new(0, 0, 255)).unwrap();

    let mut first = PixelSurface::new(2, 2, Rgb8::BLACK).unwrap();
    composite(MergePolicy::Occupancy, [&a, &b], &mut first);
    assert_eq!(first.color(1, 1), Some(Rgb8::new(255, 0, 0)));

    let mut last = PixelSurface::new(2, 2, Rgb8::BLACK).unwrap();
    composite(MergePolicy::Overwrite, [&a, &b], &mut last);
    assert_eq!(last.color(1, 1), Some(Rgb8::new(0, 0, 255)));

    assert!(MergePolicy::Occupancy.first_wins());
    assert!(!MergePolicy::Blend.first_wins());
}
