use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{
    DrawingRequest, FillRectRequest, GetLightRequest, GradientRequest, InverseEllipseRequest,
    LineRequest, RequestKind, TextureRequest, TriangleRequest,
};

use super::{Lightmap, Painter, Renderer, VideoSystem};

/// Frame-level backend call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoEvent {
    RendererStart,
    RendererEnd,
    LightmapStart(Color),
    LightmapEnd,
    LightmapComposite,
}

type EventLog = Rc<RefCell<Vec<VideoEvent>>>;

/// Painter that keeps a copy of every request it receives.
///
/// Used for headless traces and as the backend in tests: the recorded list is
/// exactly the dispatch order.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub calls: Vec<DrawingRequest>,
}

impl RecordingPainter {
    /// Kinds of the recorded requests, in dispatch order.
    pub fn kinds(&self) -> Vec<RequestKind> {
        self.calls.iter().map(DrawingRequest::kind).collect()
    }
}

impl Painter for RecordingPainter {
    fn draw_texture(&mut self, request: &DrawingRequest, _texture: &TextureRequest) {
        self.calls.push(request.clone());
    }

    fn draw_gradient(&mut self, request: &DrawingRequest, _gradient: &GradientRequest) {
        self.calls.push(request.clone());
    }

    fn draw_filled_rect(&mut self, request: &DrawingRequest, _rect: &FillRectRequest) {
        self.calls.push(request.clone());
    }

    fn draw_inverse_ellipse(&mut self, request: &DrawingRequest, _ellipse: &InverseEllipseRequest) {
        self.calls.push(request.clone());
    }

    fn draw_line(&mut self, request: &DrawingRequest, _line: &LineRequest) {
        self.calls.push(request.clone());
    }

    fn draw_triangle(&mut self, request: &DrawingRequest, _triangle: &TriangleRequest) {
        self.calls.push(request.clone());
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub painter: RecordingPainter,
    log: EventLog,
}

impl Renderer for RecordingRenderer {
    fn painter(&mut self) -> &mut dyn Painter {
        &mut self.painter
    }

    fn start_draw(&mut self) {
        self.log.borrow_mut().push(VideoEvent::RendererStart);
    }

    fn end_draw(&mut self) {
        self.log.borrow_mut().push(VideoEvent::RendererEnd);
    }
}

/// Lightmap double answering every light query with a fixed color.
#[derive(Debug)]
pub struct RecordingLightmap {
    pub painter: RecordingPainter,
    /// Value written into every light probe.
    pub light: Color,
    /// Device-space positions of the light queries received.
    pub queries: Vec<Vec2>,
    log: EventLog,
}

impl Lightmap for RecordingLightmap {
    fn painter(&mut self) -> &mut dyn Painter {
        &mut self.painter
    }

    fn start_draw(&mut self, ambient: Color) {
        self.log.borrow_mut().push(VideoEvent::LightmapStart(ambient));
    }

    fn end_draw(&mut self) {
        self.log.borrow_mut().push(VideoEvent::LightmapEnd);
    }

    fn render(&mut self) {
        self.log.borrow_mut().push(VideoEvent::LightmapComposite);
    }

    fn get_light(&mut self, _request: &DrawingRequest, light: &GetLightRequest) {
        self.queries.push(light.pos);
        light.probe.set(self.light);
    }
}

/// In-memory [`VideoSystem`] recording everything dispatched to it.
#[derive(Debug)]
pub struct RecordingVideoSystem {
    pub renderer: RecordingRenderer,
    pub lightmap: RecordingLightmap,
    log: EventLog,
}

impl RecordingVideoSystem {
    pub fn new() -> Self {
        let log = EventLog::default();
        Self {
            renderer: RecordingRenderer {
                painter: RecordingPainter::default(),
                log: Rc::clone(&log),
            },
            lightmap: RecordingLightmap {
                painter: RecordingPainter::default(),
                light: Color::WHITE,
                queries: Vec::new(),
                log: Rc::clone(&log),
            },
            log,
        }
    }

    /// Frame-level events (start/end/composite) seen so far.
    pub fn events(&self) -> Vec<VideoEvent> {
        self.log.borrow().clone()
    }
}

impl Default for RecordingVideoSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoSystem for RecordingVideoSystem {
    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.renderer
    }

    fn lightmap(&mut self) -> &mut dyn Lightmap {
        &mut self.lightmap
    }
}
