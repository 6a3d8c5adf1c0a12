use crate::core::{ParticleField, ParticleFieldParams, Surface2d};
use crate::dom::{self, Listener};
use crate::frame::{self, AnimationLoop};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "particle-field";

struct CanvasSurface<'a>(&'a web::CanvasRenderingContext2d);

impl Surface2d for CanvasSurface<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.0.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.0.set_fill_style_str(color);
        self.0.begin_path();
        _ = self.0.arc(
            x as f64,
            y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.0.fill();
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], color: &str) {
        self.0.set_stroke_style_str(color);
        self.0.begin_path();
        self.0.move_to(from[0] as f64, from[1] as f64);
        self.0.line_to(to[0] as f64, to[1] as f64);
        self.0.stroke();
    }
}

/// Mounted particle field. Dropping it stops the loop and removes listeners.
pub struct ParticleFieldView {
    _frame: AnimationLoop,
    _listeners: [Listener; 3],
}

pub fn mount(document: &web::Document) -> anyhow::Result<ParticleFieldView> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, CANVAS_ID)?;
    let params = ParticleFieldParams::from_attrs(
        canvas.get_attribute("data-speed").as_deref(),
        canvas.get_attribute("data-color").as_deref(),
    );
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("2d context has an unexpected type"))?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(ParticleField::new(
        w as f32,
        h as f32,
        params.speed,
        &mut rng,
    )));
    log::info!(
        "[particles] mounted {} particles ({}x{}) speed={} color={}",
        field.borrow().particles.len(),
        w,
        h,
        params.speed,
        params.color
    );

    let field_resize = field.clone();
    let canvas_resize = canvas.clone();
    let resize = Listener::on_window("resize", move |_| {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
        let mut f = field_resize.borrow_mut();
        f.resize(w as f32, h as f32, &mut rng);
        log::info!("[particles] regenerated {} particles ({}x{})", f.particles.len(), w, h);
    })?;

    let field_pointer = field.clone();
    let pointer = Listener::on_window("mousemove", move |ev| {
        if let Some((x, y)) = dom::mouse_client_xy(&ev) {
            field_pointer.borrow_mut().set_pointer(x, y);
        }
    })?;

    let field_leave = field.clone();
    let leave = Listener::on_window("mouseout", move |ev| {
        if dom::left_window(&ev) {
            field_leave.borrow_mut().clear_pointer();
        }
    })?;

    let color = params.color;
    let frame = frame::start_loop(move |_ts| {
        let mut f = field.borrow_mut();
        f.update();
        f.draw(&mut CanvasSurface(&ctx), &color);
    });

    Ok(ParticleFieldView {
        _frame: frame,
        _listeners: [resize, pointer, leave],
    })
}
