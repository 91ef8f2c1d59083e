use std::cell::Cell;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Canvas, DrawContext, Layer, RequestData};

/// Shared slot receiving the result of a light query.
///
/// The probe is filled in when the lightmap pass dispatches the query, so its
/// value is the previous contents (the ambient color) until then.
#[derive(Debug, Clone)]
pub struct LightProbe(Rc<Cell<Color>>);

impl LightProbe {
    #[inline]
    pub fn new(initial: Color) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    #[inline]
    pub fn get(&self) -> Color {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, color: Color) {
        self.0.set(color);
    }
}

/// Light query payload: sample the lightmap at `pos` into `probe`.
#[derive(Debug, Clone)]
pub struct GetLightRequest {
    /// Sample position in device space.
    pub pos: Vec2,
    pub probe: LightProbe,
}

impl Canvas {
    /// Queries the light level at `pos` (world space).
    ///
    /// Under a white ambient no lightmap is rendered, so the probe resolves to
    /// white immediately and nothing is recorded.
    pub fn get_light(&mut self, ctx: &dyn DrawContext, pos: Vec2) -> LightProbe {
        let ambient = ctx.ambient_color();
        if ambient.is_white() {
            return LightProbe::new(Color::WHITE);
        }

        let probe = LightProbe::new(ambient);
        let data = RequestData::GetLight(GetLightRequest {
            pos: Canvas::apply_translate(ctx, pos),
            probe: probe.clone(),
        });
        self.push(Canvas::base_request(ctx, Layer::GUI, data));
        probe
    }
}
