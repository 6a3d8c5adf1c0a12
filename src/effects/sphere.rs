use crate::core::scroll::viewport_progress;
use crate::core::sphere::{container_opacity, FaultTracker, Recovery};
use crate::core::SphereMotion;
use crate::dom::{self, Listener};
use crate::frame::{self, AnimationLoop};
use crate::render::GpuState;
use instant::Instant;
use web_sys as web;

pub const CONTAINER_ID: &str = "hero-sphere";
pub const CANVAS_ID: &str = "hero-sphere-canvas";

// Backing store resolution cap
const MAX_DPR: f64 = 1.5;

pub struct HeroSphereView {
    _frame: AnimationLoop,
    _listeners: [Listener; 2],
}

fn apply_opacity(container: &web::HtmlElement) {
    if let Some(v) = dom::viewport() {
        let opacity = container_opacity(v.scroll_y, v.height);
        _ = container
            .style()
            .set_property("opacity", &format!("{:.3}", opacity));
    }
}

pub async fn mount(document: &web::Document) -> anyhow::Result<HeroSphereView> {
    let container: web::HtmlElement = dom::element_by_id(document, CONTAINER_ID)?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas, MAX_DPR);
    apply_opacity(&container);

    let mut gpu = GpuState::new(&canvas).await?;

    let container_scroll = container.clone();
    let scroll = Listener::on_window("scroll", move |_| apply_opacity(&container_scroll))?;
    let canvas_resize = canvas.clone();
    let resize = Listener::on_window("resize", move |_| {
        dom::sync_canvas_backing_size(&canvas_resize, MAX_DPR);
    })?;

    let mut motion = SphereMotion::default();
    let mut faults = FaultTracker::default();
    let start = Instant::now();
    let frame = frame::start_loop(move |_ts| {
        let t = start.elapsed().as_secs_f32();
        let progress = dom::viewport()
            .map(|v| viewport_progress(v.scroll_y, v.height) as f32)
            .unwrap_or(0.0);
        motion.step(progress);
        gpu.resize_if_needed(canvas.width(), canvas.height());
        match gpu.render(&motion, t) {
            Ok(()) => faults.on_success(),
            Err(fault) => match faults.on_fault(fault) {
                Recovery::Reconfigure => gpu.reconfigure(),
                Recovery::Report => log::error!("[sphere] render error: {:?}", fault),
                Recovery::Skip => {}
            },
        }
    });
    log::info!("[sphere] mounted");

    Ok(HeroSphereView {
        _frame: frame,
        _listeners: [scroll, resize],
    })
}
