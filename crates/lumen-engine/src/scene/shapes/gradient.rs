use crate::coords::Rect;
use crate::paint::{Color, GradientDirection};
use crate::scene::{Canvas, DrawContext, Layer, RequestData};

/// Two-color gradient fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRequest {
    pub top: Color,
    pub bottom: Color,
    pub direction: GradientDirection,
    /// Filled region in device space.
    pub region: Rect,
}

impl Canvas {
    /// Records a gradient filling `region` (world space).
    ///
    /// Gradient colors are passed through as-is; the context alpha travels on
    /// the request.
    pub fn draw_gradient(
        &mut self,
        ctx: &dyn DrawContext,
        top: Color,
        bottom: Color,
        layer: Layer,
        direction: GradientDirection,
        region: Rect,
    ) {
        let data = RequestData::Gradient(GradientRequest {
            top,
            bottom,
            direction,
            region: Rect::from_origin_size(
                Canvas::apply_translate(ctx, region.origin),
                Canvas::scale_size(ctx, region.size),
            ),
        });
        self.push(Canvas::base_request(ctx, layer, data));
    }
}
