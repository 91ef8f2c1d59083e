use crate::coords::{Rect, Vec2};
use crate::paint::{Blend, Color};
use crate::render::{Surface, TextureId};
use crate::scene::{Canvas, DrawContext, DrawingRequest, Layer, RequestData};

/// Texture blit payload.
///
/// `srcrect` is in texel space, `dstrect` in device space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRequest {
    pub srcrect: Rect,
    pub dstrect: Rect,
    pub texture: TextureId,
}

impl Canvas {
    /// Records a surface blit at `position` (world space, top-left).
    ///
    /// Silently dropped when the surface lies entirely outside the clip rect.
    pub fn draw_surface(
        &mut self,
        ctx: &dyn DrawContext,
        surface: &Surface,
        position: Vec2,
        angle: f32,
        color: Color,
        blend: Blend,
        layer: Layer,
    ) {
        let dst = Rect::from_origin_size(position, surface.size());
        self.push_texture(ctx, surface, surface.bounds(), dst, angle, color, blend, layer);
    }

    /// Records an unrotated, untinted surface blit with the default blend.
    #[inline]
    pub fn draw_surface_at(
        &mut self,
        ctx: &dyn DrawContext,
        surface: &Surface,
        position: Vec2,
        layer: Layer,
    ) {
        self.draw_surface(ctx, surface, position, 0.0, Color::WHITE, Blend::default(), layer);
    }

    /// Records the whole surface stretched into `dstrect` (world space).
    #[inline]
    pub fn draw_surface_scaled(
        &mut self,
        ctx: &dyn DrawContext,
        surface: &Surface,
        dstrect: Rect,
        layer: Layer,
    ) {
        self.push_texture(
            ctx,
            surface,
            surface.bounds(),
            dstrect,
            0.0,
            Color::WHITE,
            Blend::default(),
            layer,
        );
    }

    /// Records the `srcrect` part of the surface stretched into `dstrect` (world space).
    #[inline]
    pub fn draw_surface_part(
        &mut self,
        ctx: &dyn DrawContext,
        surface: &Surface,
        srcrect: Rect,
        dstrect: Rect,
        layer: Layer,
    ) {
        self.push_texture(
            ctx,
            surface,
            srcrect,
            dstrect,
            0.0,
            Color::WHITE,
            Blend::default(),
            layer,
        );
    }

    fn push_texture(
        &mut self,
        ctx: &dyn DrawContext,
        surface: &Surface,
        srcrect: Rect,
        dstrect: Rect,
        angle: f32,
        color: Color,
        blend: Blend,
        layer: Layer,
    ) {
        debug_assert!(dstrect.is_finite(), "non-finite texture destination {dstrect:?}");

        // Conservative cull; touching the clip edge still draws.
        if dstrect.is_disjoint(ctx.cliprect()) {
            return;
        }

        let data = RequestData::Texture(TextureRequest {
            srcrect,
            dstrect: Rect::from_origin_size(
                Canvas::apply_translate(ctx, dstrect.origin),
                Canvas::scale_size(ctx, dstrect.size),
            ),
            texture: surface.texture(),
        });

        let base = Canvas::base_request(ctx, layer, data);
        self.push(DrawingRequest {
            drawing_effect: base.drawing_effect ^ surface.effect(),
            angle,
            color,
            blend,
            ..base
        });
    }
}
