use super::*;
use crate::effects::effect::Effect;
use crate::surface::pixel::OPAQUE;

#[test]
fn amount_interpolates_and_holds() {
    let fade = Fade::new(0.0, 1.0, 60);
    assert_eq!(fade.amount_at(FrameIndex(0)), 0.0);
    assert_eq!(fade.amount_at(FrameIndex(30)), 0.5);
    assert_eq!(fade.amount_at(FrameIndex(60)), 1.0);
    assert_eq!(fade.amount_at(FrameIndex(600)), 1.0);

    let out = Fade::new(1.0, 0.25, 4);
    assert_eq!(out.amount_at(FrameIndex(2)), 0.625);
}

#[test]
fn half_way_fade_moves_colors_half_way() {
    let mut input = PixelSurface::filled(2, 2, Rgb8::gray(128)).unwrap();
    input.set_glyph(0, 0, Some('@'));
    let mut output = PixelSurface::new(2, 2, Rgb8::BLACK).unwrap();

    let fade = Fade::new(0.0, 1.0, 60).with_color(Rgb8::gray(10));
    Effect::new(fade)
        .run_on_surfaces(&input, &mut output, FrameIndex(30))
        .unwrap();

    assert_eq!(output.color(1, 1), Some(Rgb8::gray(69)));
    assert_eq!(output.opacity(1, 1), Some(OPAQUE));
    assert_eq!(output.glyph(0, 0), Some('@'));
}

#[test]
fn full_fade_reaches_target_color() {
    let input = PixelSurface::filled(1, 1, Rgb8::new(200, 100, 0)).unwrap();
    let mut output = PixelSurface::new(1, 1, Rgb8::BLACK).unwrap();
    let fade = Fade::new(0.0, 1.0, 10).with_color(Rgb8::new(0, 50, 250));
    fade.run(&input, &mut output, FrameIndex(10)).unwrap();
    assert_eq!(output.color(0, 0), Some(Rgb8::new(0, 50, 250)));
}

#[test]
fn zero_duration_is_rejected() {
    let input = PixelSurface::filled(1, 1, Rgb8::WHITE).unwrap();
    let err = Fade::new(0.0, 1.0, 0).validate(&input).unwrap_err();
    assert!(matches!(err, CellfxError::InvalidDuration(_)));
}

#[test]
fn alphas_outside_unit_range_are_rejected() {
    let input = PixelSurface::filled(1, 1, Rgb8::WHITE).unwrap();
    for (a, b) in [(-0.1, 1.0), (0.0, 1.5), (f32::NAN, 0.0), (0.0, f32::INFINITY)] {
        let err = Fade::new(a, b, 10).validate(&input).unwrap_err();
        assert!(matches!(err, CellfxError::InvalidAlphaRange(_)), "{a} {b}");
    }
}

#[test]
fn missing_color_defaults_to_black() {
    let fade: Fade = serde_json::from_value(serde_json::json!({
        "alpha_start": 0.0,
        "alpha_end": 1.0,
        "duration": 5
    }))
    .unwrap();
    assert_eq!(fade, Fade::new(0.0, 1.0, 5));
}

#[test]
fn direct_run_rejects_an_undersized_output() {
    let input = PixelSurface::filled(4, 4, Rgb8::gray(200)).unwrap();
    let mut output = PixelSurface::new(2, 2, Rgb8::WHITE).unwrap();
    let err = Fade::new(0.0, 1.0, 10)
        .run(&input, &mut output, FrameIndex(5))
        .unwrap_err();
    assert!(matches!(err, CellfxError::SurfaceSizeMismatch(_)));
    assert_eq!(output.color(0, 0), Some(Rgb8::WHITE));
}
