use crate::core::GlowTracker;
use crate::dom::{self, Listener};
use crate::frame::{self, AnimationLoop};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const GLOW_ID: &str = "cursor-glow";

const GLOW_STYLE: &str = "position:fixed;left:0;top:0;width:900px;height:900px;\
    border-radius:9999px;opacity:0.07;filter:blur(180px);pointer-events:none;\
    background:radial-gradient(circle, hsl(var(--primary) / 0.15) 0%, \
    hsl(var(--primary) / 0.05) 35%, transparent 65%);";

pub struct CursorGlowView {
    _frame: AnimationLoop,
    _pointer: Listener,
}

pub fn mount(document: &web::Document) -> anyhow::Result<CursorGlowView> {
    let el: web::HtmlElement = dom::element_by_id(document, GLOW_ID)?;
    let tracker = Rc::new(RefCell::new(GlowTracker::default()));
    let style = el.style();
    style.set_css_text(GLOW_STYLE);
    _ = style.set_property("transform", &tracker.borrow().transform());

    let tracker_pointer = tracker.clone();
    let pointer = Listener::on_window("mousemove", move |ev| {
        if let Some((x, y)) = dom::mouse_client_xy(&ev) {
            tracker_pointer.borrow_mut().set_pointer(x, y);
        }
    })?;

    let mut last = Instant::now();
    let frame = frame::start_loop(move |_ts| {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;
        let mut t = tracker.borrow_mut();
        let was_at_rest = t.x.is_at_rest() && t.y.is_at_rest();
        t.step(dt);
        if !was_at_rest {
            _ = style.set_property("transform", &t.transform());
        }
    });
    log::info!("[glow] mounted");

    Ok(CursorGlowView {
        _frame: frame,
        _pointer: pointer,
    })
}
