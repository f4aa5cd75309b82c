//! Headless demo: draws a few ticks of a small scene with each backend and
//! logs what reached the native context.
//!
//! Usage: `vellum-studio [2D|GL|AUTO]...` (defaults to both `2D` and `GL`).

use std::time::{Duration, Instant};

use anyhow::Context as _;
use log::{info, warn};
use vellum_engine::camera::{Camera, CameraOptions};
use vellum_engine::coords::Vec2;
use vellum_engine::headless::{HeadlessImage, HeadlessSurface};
use vellum_engine::image::{cut, CompoundedImage, Image};
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::render::{
    create_renderer, AbstractRenderer, Capabilities, RectAlign, Renderer, RendererOptions,
    RendererType,
};
use vellum_engine::time::{TickHandler, Ticker};
use vellum_engine::RenderError;

const FRAMES: u32 = 3;

struct Demo {
    renderer: Renderer<HeadlessSurface>,
    camera: Camera,
    sprite: CompoundedImage<HeadlessImage>,
    angle: f32,
    failed: Option<RenderError>,
}

impl Demo {
    fn new(renderer: Renderer<HeadlessSurface>, sheet: &Image<HeadlessImage>) -> anyhow::Result<Self> {
        let camera = Camera::new(renderer.w(), renderer.h(), CameraOptions::default());
        let sprite = cut(sheet, 0.0, 0.0, 32.0, 32.0).context("cutting the sprite")?;
        Ok(Self { renderer, camera, sprite, angle: 0.0, failed: None })
    }

    fn draw(&mut self) -> vellum_engine::Result<()> {
        let r = &mut self.renderer;
        r.background_color("#1e1e2e")?;
        r.set_transform_camera(&self.camera);

        r.push();
        r.fill("hsla(200, 80%, 60%, 0.9)")?.stroke("white")?.line_width(3.0);
        r.polygon(0.0, 0.0, 40.0, 6.0, Some(self.angle))?;
        r.rect_align(RectAlign::Center).rect_align(RectAlign::Middle);
        r.no_stroke().fill((255.0_f32, 180.0_f32, 0.0_f32))?;
        r.rect(120.0, 0.0, 30.0, 30.0)?;
        r.arc(-120.0, 0.0, 15.0)?;
        r.image(&self.sprite, 0.0, 90.0, None, None)?;
        r.pop();

        r.begin_shape(None)
            .vertex(-60.0, -80.0)
            .vertex(60.0, -80.0)
            .vertex(0.0, -140.0)
            .close_shape();
        r.end_shape()?;
        Ok(())
    }
}

impl TickHandler for Demo {
    fn update(&mut self, step: f32, _now: Instant) {
        self.angle += step;
        self.camera.look_at(Vec2::new(self.angle.cos() * 20.0, 0.0)).update();
    }

    fn render(&mut self, _elapsed: f32, _now: Instant) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = self.draw() {
            warn!("frame failed: {e}");
            self.failed = Some(e);
        }
    }
}

fn summarize(renderer: &mut Renderer<HeadlessSurface>) {
    match renderer {
        Renderer::TwoD(r) => {
            let commands = r.context_mut().take();
            info!("2D: {} canvas commands recorded", commands.len());
            for cmd in commands.iter().take(12) {
                info!("  {cmd:?}");
            }
        }
        Renderer::Gl(r) => {
            let draws = r.gl().draws();
            let calls = r.gl_mut().take();
            info!("GL: {} calls, {} draws", calls.len(), draws.len());
            for (mode, count) in draws.iter().take(12) {
                info!("  drawArrays(mode=0x{mode:04x}, count={count})");
            }
        }
    }
}

fn run(kind: RendererType, sheet: &Image<HeadlessImage>) -> anyhow::Result<()> {
    let options = RendererOptions { renderer_type: kind, ..RendererOptions::sized(640.0, 360.0) };
    let caps = Capabilities { webgl: true, touch: false, ios_safari: false };
    let renderer = create_renderer(HeadlessSurface::new(), options, caps)
        .with_context(|| format!("creating the {kind} renderer"))?;
    info!("{kind}: built a {} renderer ({}x{})", renderer.renderer_type(), renderer.w(), renderer.h());

    let mut demo = Demo::new(renderer, sheet)?;
    let mut ticker = Ticker::new();
    ticker.fps(30.0);

    let start = Instant::now();
    ticker.start(start);
    for frame in 1..=FRAMES {
        let now = start + Duration::from_millis(u64::from(frame) * 40);
        let updates = ticker.advance(now, &mut demo);
        info!("{kind}: frame {frame} ran {updates} update(s)");
    }
    ticker.stop();

    if let Some(e) = demo.failed.take() {
        return Err(e).context("drawing the demo scene");
    }
    summarize(&mut demo.renderer);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let kinds = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<RendererType>())
        .collect::<Result<Vec<_>, _>>()?;
    let kinds = if kinds.is_empty() { vec![RendererType::TwoD, RendererType::Gl] } else { kinds };

    let sheet = HeadlessImage::loaded("sprites.png", 128, 64);
    for kind in kinds {
        run(kind, &sheet)?;
    }
    Ok(())
}
