use super::*;

fn quadrants() -> PixelSurface {
    let mut s = PixelSurface::new(2, 2, Rgb8::BLACK).unwrap();
    s.set_cell(0, 0, Rgb8::new(255, 0, 0), 255);
    s.set_cell(1, 0, Rgb8::new(0, 255, 0), 255);
    s.set_cell(0, 1, Rgb8::new(0, 0, 255), 255);
    s.set_cell(1, 1, Rgb8::new(255, 255, 255), 255);
    s.set_glyph(1, 1, Some('w'));
    s
}

#[test]
fn none_and_nearest_agree_on_integer_upscale() {
    let src = quadrants();
    let a = scaled(&src, 4, 4, ScaleAlgorithm::None).unwrap();
    let b = scaled(&src, 4, 4, ScaleAlgorithm::NearestNeighbor).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.color(1, 1), Some(Rgb8::new(255, 0, 0)));
    assert_eq!(a.color(2, 0), Some(Rgb8::new(0, 255, 0)));
    assert_eq!(a.color(3, 3), Some(Rgb8::new(255, 255, 255)));
    assert_eq!(a.glyph(3, 2), Some('w'));
}

#[test]
fn integer_downscale_picks_every_other_cell() {
    let mut src = PixelSurface::new(4, 1, Rgb8::BLACK).unwrap();
    for c in 0..4 {
        src.set_cell(c, 0, Rgb8::gray(c as u8 * 10), 255);
    }
    let out = scaled(&src, 2, 1, ScaleAlgorithm::None).unwrap();
    assert_eq!(out.color(0, 0), Some(Rgb8::gray(0)));
    assert_eq!(out.color(1, 0), Some(Rgb8::gray(20)));
}

#[test]
fn smooth_algorithms_keep_uniform_surfaces_uniform() {
    let src = PixelSurface::filled(3, 5, Rgb8::new(17, 80, 143)).unwrap();
    for algo in [ScaleAlgorithm::Bilinear, ScaleAlgorithm::Bicubic] {
        let out = scaled(&src, 7, 2, algo).unwrap();
        assert_eq!(out.size(), (7, 2));
        assert!(out.colors().iter().all(|&c| c == Rgb8::new(17, 80, 143)), "{algo:?}");
        assert!(out.opacities().iter().all(|&a| a == 255), "{algo:?}");
    }
}

#[test]
fn bilinear_blends_between_cells() {
    let mut src = PixelSurface::new(2, 1, Rgb8::BLACK).unwrap();
    src.set_cell(0, 0, Rgb8::gray(0), 255);
    src.set_cell(1, 0, Rgb8::gray(255), 255);
    let out = scaled(&src, 4, 1, ScaleAlgorithm::Bilinear).unwrap();
    let v: Vec<u8> = out.colors().iter().map(|c| c.r).collect();
    assert_eq!(v[0], 0);
    assert_eq!(v[3], 255);
    assert!(v[1] > 0 && v[1] < v[2] && v[2] < 255, "{v:?}");
}

#[test]
fn in_place_resets_position() {
    let mut s = quadrants();
    s.set_position(5, 6, 7);
    scale_in_place(&mut s, 6, 6, ScaleAlgorithm::NearestNeighbor).unwrap();
    assert_eq!(s.size(), (6, 6));
    assert_eq!(s.position(), (0, 0, 0));
}

#[test]
fn empty_target_is_rejected() {
    let err = scaled(&quadrants(), 0, 3, ScaleAlgorithm::Bilinear).unwrap_err();
    assert!(matches!(err, CellfxError::InvalidValue(_)));
}

#[test]
fn bicubic_edges_keep_content_color() {
    let mut src = PixelSurface::new(4, 1, Rgb8::BLACK).unwrap();
    src.set_cell(0, 0, Rgb8::WHITE, 255);
    src.set_cell(1, 0, Rgb8::WHITE, 255);
    let out = scaled(&src, 8, 1, ScaleAlgorithm::Bicubic).unwrap();

    assert_eq!(out.opacity(0, 0), Some(255));
    assert_eq!(out.opacity(7, 0), Some(0));
    for col in 0..8 {
        if out.is_occupied(col, 0) {
            assert_eq!(out.color(col, 0), Some(Rgb8::WHITE), "col {col}");
        }
    }
}
