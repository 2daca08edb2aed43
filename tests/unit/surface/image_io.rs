use super::*;

#[test]
fn alpha_maps_to_opacity() {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
    img.put_pixel(1, 0, Rgba([40, 50, 60, 255]));

    let s = from_rgba_image(&img).unwrap();
    assert_eq!(s.size(), (2, 1));
    assert_eq!(s.color(1, 0), Some(Rgb8::new(40, 50, 60)));
    assert!(!s.is_occupied(0, 0));
    assert!(s.is_occupied(1, 0));
    assert!(s.glyphs().iter().all(Option::is_none));

    assert_eq!(to_rgba_image(&s), img);
}
