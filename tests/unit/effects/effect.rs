use super::*;
use crate::surface::pixel::OPAQUE;

const RED: Rgb8 = Rgb8::new(255, 0, 0);

#[derive(Debug)]
struct Passthrough;

impl RenderEffect for Passthrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn validate(&self, _input: &PixelSurface) -> CellfxResult<()> {
        Ok(())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        _frame: FrameIndex,
    ) -> CellfxResult<()> {
        blit_centered(input, output)?;
        Ok(())
    }
}

#[derive(Debug)]
struct Padded(u32);

impl RenderEffect for Padded {
    fn name(&self) -> &'static str {
        "padded"
    }

    fn validate(&self, input: &PixelSurface) -> CellfxResult<()> {
        if input.is_empty() {
            return Err(CellfxError::invalid_value("empty input"));
        }
        Ok(())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        _frame: FrameIndex,
    ) -> CellfxResult<()> {
        blit_centered(input, output)?;
        Ok(())
    }

    fn surface_expand(&self) -> SurfaceExpand {
        SurfaceExpand::new(self.0, self.0)
    }
}

#[test]
fn run_on_surfaces_rejects_smaller_output() {
    let input = PixelSurface::filled(4, 4, RED).unwrap();
    let mut output = PixelSurface::new(3, 4, Rgb8::BLACK).unwrap();
    let err = Effect::new(Passthrough)
        .run_on_surfaces(&input, &mut output, FrameIndex(0))
        .unwrap_err();
    assert!(matches!(err, CellfxError::SurfaceSizeMismatch(_)));
}

#[test]
fn run_on_surfaces_validates_before_running() {
    let input = PixelSurface::new(0, 0, Rgb8::BLACK).unwrap();
    let mut output = PixelSurface::new(2, 2, RED).unwrap();
    let err = Effect::new(Padded(1))
        .run_on_surfaces(&input, &mut output, FrameIndex(0))
        .unwrap_err();
    assert!(matches!(err, CellfxError::InvalidValue(_)));
    assert_eq!(output.color(0, 0), Some(RED));
}

#[test]
fn run_grows_output_for_declared_border() {
    let input = PixelSurface::filled(3, 2, RED).unwrap();
    let mut output = PixelSurface::new(3, 2, Rgb8::BLACK).unwrap();
    let mut ctx = RenderEffectContext::new(&input, &mut output);
    Effect::new(Padded(2)).run(&mut ctx, FrameIndex(0)).unwrap();

    assert_eq!(ctx.expansion_applied, SurfaceExpand::new(2, 2));
    assert_eq!(output.size(), (7, 6));
    assert!(!output.is_occupied(1, 1));
    assert!(output.is_occupied(2, 2));
    assert!(output.is_occupied(4, 3));
    assert!(!output.is_occupied(5, 3));
}

#[test]
fn run_keeps_output_size_without_border() {
    let input = PixelSurface::filled(3, 2, RED).unwrap();
    let mut output = PixelSurface::new(5, 5, Rgb8::BLACK).unwrap();
    let mut ctx = RenderEffectContext::new(&input, &mut output);
    Effect::new(Passthrough).run(&mut ctx, FrameIndex(0)).unwrap();
    assert!(ctx.expansion_applied.is_none());
    assert_eq!(output.size(), (5, 5));
}

#[test]
fn downcast_returns_concrete_parameters() {
    let mut effect = Effect::from(Padded(3));
    assert_eq!(effect.downcast_ref::<Padded>().unwrap().0, 3);

    effect.downcast_mut::<Padded>().unwrap().0 = 5;
    assert_eq!(effect.downcast_ref::<Padded>().unwrap().0, 5);
}

#[test]
fn downcast_to_wrong_kind_fails() {
    let mut effect = Effect::new(Passthrough);
    assert!(matches!(
        effect.downcast_ref::<Padded>(),
        Err(CellfxError::WrongEffectKind(_))
    ));
    assert!(matches!(
        effect.downcast_mut::<Padded>(),
        Err(CellfxError::WrongEffectKind(_))
    ));
}

#[test]
fn content_rect_centres_input() {
    let input = PixelSurface::new(3, 2, Rgb8::BLACK).unwrap();
    let output = PixelSurface::new(8, 6, Rgb8::BLACK).unwrap();
    let rect = content_rect(&input, &output).unwrap();
    assert_eq!(rect, ContentRect { x: 2, y: 2, w: 3, h: 2 });
    assert_eq!(rect.output_index(&output, 0, 0), 2 * 8 + 2);
}

#[test]
fn blit_centered_clears_the_border() {
    let mut input = PixelSurface::filled(2, 2, RED).unwrap();
    input.set_glyph(1, 1, Some('x'));
    let mut output = PixelSurface::filled(4, 4, Rgb8::WHITE).unwrap();

    let rect = blit_centered(&input, &mut output).unwrap();
    assert_eq!((rect.x, rect.y), (1, 1));
    assert_eq!(output.opacity(0, 0), Some(0));
    assert_eq!(output.color(0, 0), Some(Rgb8::BLACK));
    assert_eq!(output.opacity(1, 1), Some(OPAQUE));
    assert_eq!(output.glyph(2, 2), Some('x'));
}

#[test]
fn blit_at_copies_transparent_cells_too() {
    let mut src = PixelSurface::new(2, 1, RED).unwrap();
    src.set_cell(0, 0, RED, OPAQUE);
    let mut dst = PixelSurface::filled(3, 1, Rgb8::WHITE).unwrap();

    blit_at(&src, &mut dst, -1, 0);
    assert_eq!(dst.opacity(0, 0), Some(0));
    assert_eq!(dst.color(1, 0), Some(Rgb8::WHITE));
}
