use crate::paint::Color;
use crate::scene::{
    DrawingRequest, FillRectRequest, GetLightRequest, GradientRequest, InverseEllipseRequest,
    LineRequest, TextureRequest, TriangleRequest,
};

/// Turns drawing requests into pixels.
///
/// Each method receives the full request (layer, effect, alpha, blend…) plus
/// its typed payload, so a painter can never read the wrong variant.
pub trait Painter {
    fn draw_texture(&mut self, request: &DrawingRequest, texture: &TextureRequest);
    fn draw_gradient(&mut self, request: &DrawingRequest, gradient: &GradientRequest);
    fn draw_filled_rect(&mut self, request: &DrawingRequest, rect: &FillRectRequest);
    fn draw_inverse_ellipse(&mut self, request: &DrawingRequest, ellipse: &InverseEllipseRequest);
    fn draw_line(&mut self, request: &DrawingRequest, line: &LineRequest);
    fn draw_triangle(&mut self, request: &DrawingRequest, triangle: &TriangleRequest);
}

/// Main color target.
pub trait Renderer {
    fn painter(&mut self) -> &mut dyn Painter;

    /// Called before the first colormap pass of a frame.
    fn start_draw(&mut self) {}

    /// Called after the last colormap pass of a frame.
    fn end_draw(&mut self) {}
}

/// Offscreen light accumulation target.
pub trait Lightmap {
    fn painter(&mut self) -> &mut dyn Painter;

    /// Begins a lightmap pass; the lightmap is filled with `ambient` first.
    fn start_draw(&mut self, ambient: Color);

    fn end_draw(&mut self);

    /// Composites the finished lightmap over the renderer's target.
    fn render(&mut self);

    /// Samples the lightmap at `light.pos` and writes the result into `light.probe`.
    fn get_light(&mut self, request: &DrawingRequest, light: &GetLightRequest);
}

/// Owner of the renderer and lightmap a canvas flushes into.
pub trait VideoSystem {
    fn renderer(&mut self) -> &mut dyn Renderer;
    fn lightmap(&mut self) -> &mut dyn Lightmap;
}
