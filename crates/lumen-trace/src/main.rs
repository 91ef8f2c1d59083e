use std::io::{self, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use lumen_engine::coords::{Rect, Vec2};
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::paint::{Blend, Color, GradientDirection};
use lumen_engine::render::{RecordingVideoSystem, Surface, TextureId};
use lumen_engine::scene::{DrawingContext, DrawingRequest, Layer, LightProbe, RequestData};
use lumen_engine::text::{FixedFont, FontAlignment, FontHandle};

const SCREEN: Rect = Rect::new(0.0, 0.0, 640.0, 480.0);

/// Usage: `lumen-trace [r,g,b]`
///
/// Records one demo frame, composes it against the recording backend and
/// prints what each painter received. The optional argument sets the ambient
/// light; `1,1,1` disables the lightmap pass.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let ambient = parse_ambient(std::env::args().nth(1).as_deref())?;
    log::info!("composing demo frame (ambient {ambient:?})");

    let mut context = DrawingContext::new(SCREEN);
    context.state_mut().set_ambient_color(ambient);
    let probe = record_frame(&mut context);

    let mut video = RecordingVideoSystem::new();
    context.render(&mut video);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_trace(&mut out, &video).context("failed to write dispatch trace")?;
    writeln!(out, "light at player: {:?}", probe.get()).context("failed to write dispatch trace")?;
    Ok(())
}

fn parse_ambient(arg: Option<&str>) -> Result<Color> {
    let Some(arg) = arg else {
        return Ok(Color::rgb(0.3, 0.3, 0.4));
    };

    let channels = arg
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .with_context(|| format!("invalid ambient channel {p:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    anyhow::ensure!(
        channels.len() == 3,
        "ambient must be r,g,b (got {} channels)",
        channels.len()
    );
    Ok(Color::rgb(channels[0], channels[1], channels[2]))
}

fn record_frame(context: &mut DrawingContext) -> LightProbe {
    let tiles = Surface::new(TextureId(1), 32, 32);
    let player = Surface::new(TextureId(2), 32, 64).with_flip_x(true);
    let glow = Surface::new(TextureId(3), 128, 128);
    let font: FontHandle = Rc::new(FixedFont::new(TextureId(4), 8.0, 12.0));

    context.state_mut().set_translation(Vec2::new(100.0, 0.0));

    {
        let (state, canvas) = context.color();

        canvas.draw_gradient(
            state,
            Color::rgb(0.1, 0.2, 0.5),
            Color::rgb(0.6, 0.7, 0.9),
            Layer::BACKGROUND0,
            GradientDirection::Vertical,
            Rect::new(100.0, 0.0, SCREEN.width(), SCREEN.height()),
        );

        for i in 0..24 {
            let x = i as f32 * 32.0;
            // Tiles left of the camera are culled.
            canvas.draw_surface_part(
                state,
                &tiles,
                Rect::new(0.0, 0.0, 32.0, 32.0),
                Rect::new(x, 448.0, 32.0, 32.0),
                Layer::TILES,
            );
        }

        canvas.draw_surface(
            state,
            &player,
            Vec2::new(300.0, 384.0),
            0.0,
            Color::WHITE,
            Blend::default(),
            Layer::OBJECTS,
        );
        canvas.draw_triangle(
            state,
            Vec2::new(400.0, 448.0),
            Vec2::new(416.0, 416.0),
            Vec2::new(432.0, 448.0),
            Color::rgb(0.8, 0.1, 0.1),
            Layer::OBJECTS,
        );
        canvas.draw_line(
            state,
            Vec2::new(100.0, 440.0),
            Vec2::new(740.0, 440.0),
            Color::BLACK.with_alpha(0.5),
            Layer::FOREGROUNDTILES,
        );
    }

    context.state_mut().push_transform();
    context.state_mut().set_translation(Vec2::zero());
    {
        let (state, canvas) = context.color();
        canvas.fill_rounded_rect(
            state,
            Rect::new(8.0, 8.0, 160.0, 24.0),
            Color::BLACK.with_alpha(0.6),
            4.0,
            Layer::HUD,
        );
        canvas.draw_text(
            state,
            &font,
            "SCORE 001200",
            Vec2::new(16.0, 14.0),
            FontAlignment::Left,
            Layer::HUD.offset(1),
            Color::WHITE,
        );
        canvas.draw_center_text(
            state,
            &font,
            "WORLD 1-1",
            Vec2::new(0.0, 40.0),
            Layer::GUI,
            Color::WHITE,
        );
        canvas.draw_inverse_ellipse(
            state,
            Vec2::new(320.0, 240.0),
            Vec2::new(900.0, 700.0),
            Color::BLACK,
            Layer::GUI.offset(10),
        );
    }
    context.state_mut().pop_transform();

    {
        let (state, canvas) = context.light();
        canvas.draw_surface(
            state,
            &glow,
            Vec2::new(252.0, 352.0),
            0.0,
            Color::rgb(1.0, 0.9, 0.6),
            Blend::ADD,
            Layer::OBJECTS,
        );
    }

    context.get_light(Vec2::new(316.0, 416.0))
}

fn write_trace(out: &mut impl Write, video: &RecordingVideoSystem) -> io::Result<()> {
    writeln!(out, "frame events: {:?}", video.events())?;

    writeln!(out, "lightmap painter ({} calls):", video.lightmap.painter.calls.len())?;
    for request in &video.lightmap.painter.calls {
        writeln!(out, "  {}", describe(request))?;
    }
    for pos in &video.lightmap.queries {
        writeln!(out, "  light query at ({:.1}, {:.1})", pos.x, pos.y)?;
    }

    writeln!(out, "renderer painter ({} calls):", video.renderer.painter.calls.len())?;
    for request in &video.renderer.painter.calls {
        writeln!(out, "  {}", describe(request))?;
    }
    Ok(())
}

fn describe(request: &DrawingRequest) -> String {
    let detail = match &request.data {
        RequestData::Texture(t) => format!(
            "texture #{} -> ({:.1}, {:.1}) {:.0}x{:.0}",
            t.texture.0, t.dstrect.origin.x, t.dstrect.origin.y, t.dstrect.size.x, t.dstrect.size.y
        ),
        RequestData::Gradient(g) => format!("gradient {:?} over {:?}", g.direction, g.region),
        RequestData::Text(t) => format!("text {:?} at ({:.1}, {:.1})", t.text, t.pos.x, t.pos.y),
        RequestData::FillRect(r) => format!(
            "fill rect ({:.1}, {:.1}) {:.0}x{:.0} r={:.1}",
            r.pos.x, r.pos.y, r.size.x, r.size.y, r.radius
        ),
        RequestData::InverseEllipse(e) => format!(
            "inverse ellipse at ({:.1}, {:.1})",
            e.pos.x,
            e.pos.y,
        ),
        RequestData::Line(l) => format!(
            "line ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            l.pos.x, l.pos.y, l.dest_pos.x, l.dest_pos.y
        ),
        RequestData::Triangle(t) => format!(
            "triangle ({:.1}, {:.1}) ({:.1}, {:.1}) ({:.1}, {:.1})",
            t.pos1.x, t.pos1.y, t.pos2.x, t.pos2.y, t.pos3.x, t.pos3.y
        ),
        RequestData::GetLight(l) => format!("light query at ({:.1}, {:.1})", l.pos.x, l.pos.y),
    };
    format!(
        "[{:>4}] {} (alpha {:.2}, effect {:#04b})",
        request.layer.0,
        detail,
        request.alpha,
        request.drawing_effect.bits()
    )
}
