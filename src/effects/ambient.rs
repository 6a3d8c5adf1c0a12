use super::motion::{self, js_err, set, Timing};
use crate::core::backdrop::{GLOW_BLOBS, VIGNETTE_STYLE};
use crate::core::floating::{self, FloatingParams};
use crate::core::timeline::{sample, Keyframe, LoopTiming};
use crate::dom;
use crate::frame::{self, AnimationLoop};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub const FLOATING_ID: &str = "floating-particles";
pub const BACKDROP_ID: &str = "backdrop-glow";

/// Decorative elements driven by the browser's animation timeline.
/// Dropping the view removes the elements, which ends their animations.
pub struct AmbientView {
    elements: Vec<web::HtmlElement>,
    // Only present when the browser has no `Element.animate`
    _frame: Option<AnimationLoop>,
}

impl Drop for AmbientView {
    fn drop(&mut self) {
        for el in self.elements.drain(..) {
            el.remove();
        }
    }
}

/// A looping animation stepped by hand each frame.
struct Scripted {
    el: web::HtmlElement,
    keyframes: [Keyframe; 3],
    timing: LoopTiming,
}

fn apply(el: &web::HtmlElement, k: &Keyframe) {
    let style = el.style();
    _ = style.set_property("transform", &k.transform());
    _ = style.set_property("opacity", &k.opacity.to_string());
}

/// Hand an infinite keyframe loop to `Element.animate`. Easing applies per
/// segment, so it sits on the keyframes and the iteration itself is linear.
fn animate_loop(el: &web::Element, keyframes: &[Keyframe], timing: &LoopTiming) -> anyhow::Result<()> {
    let frames = js_sys::Array::new();
    for k in keyframes {
        let o = js_sys::Object::new();
        set(&o, "offset", &JsValue::from_f64(k.offset as f64))?;
        set(&o, "transform", &JsValue::from_str(&k.transform()))?;
        set(&o, "opacity", &JsValue::from_f64(k.opacity as f64))?;
        set(&o, "easing", &JsValue::from_str(timing.easing.css()))?;
        frames.push(&o);
    }
    motion::animate(
        el,
        &frames,
        &Timing {
            duration_sec: timing.duration_sec,
            delay_sec: timing.delay_sec,
            iterations: f64::INFINITY,
            fill: "backwards",
            easing: "linear",
        },
    )
}

fn spawn(
    document: &web::Document,
    container: &web::Element,
    style: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
    el.set_attribute("style", style).map_err(js_err)?;
    el.set_attribute("aria-hidden", "true").map_err(js_err)?;
    container.append_child(&el).map_err(js_err)?;
    Ok(el)
}

/// Fallback timeline: sample every scripted loop once per frame.
fn drive(scripted: Vec<Scripted>) -> Option<AnimationLoop> {
    if scripted.is_empty() {
        return None;
    }
    log::info!(
        "[ambient] Element.animate unavailable; scripting {} elements",
        scripted.len()
    );
    for s in &scripted {
        apply(&s.el, &s.keyframes[0]);
    }
    let start = Instant::now();
    Some(frame::start_loop(move |_ts| {
        let elapsed = start.elapsed().as_secs_f32();
        for s in &scripted {
            if let Some(k) = sample(&s.keyframes, &s.timing, elapsed) {
                apply(&s.el, &k);
            }
        }
    }))
}

/// Animate natively when possible, else queue for the scripted timeline.
fn start(
    native: bool,
    el: &web::HtmlElement,
    keyframes: [Keyframe; 3],
    timing: LoopTiming,
    scripted: &mut Vec<Scripted>,
) -> anyhow::Result<()> {
    if native {
        animate_loop(el, &keyframes, &timing)
    } else {
        scripted.push(Scripted {
            el: el.clone(),
            keyframes,
            timing,
        });
        Ok(())
    }
}

pub fn mount_floating(document: &web::Document) -> anyhow::Result<AmbientView> {
    let container: web::Element = dom::element_by_id(document, FLOATING_ID)?;
    let params = FloatingParams::from_attrs(container.get_attribute("data-count").as_deref());
    let native = motion::supports_animate(&container);
    let mut rng = StdRng::from_entropy();
    let mut view = AmbientView {
        elements: Vec::with_capacity(params.count),
        _frame: None,
    };
    let mut scripted = Vec::new();
    for p in floating::generate(params.count, &mut rng) {
        let el = spawn(document, &container, &p.style())?;
        // Track before animating so a failure still cleans up on drop
        view.elements.push(el.clone());
        start(native, &el, p.keyframes(), p.timing(), &mut scripted)?;
    }
    view._frame = drive(scripted);
    log::info!("[ambient] {} floating particles", view.elements.len());
    Ok(view)
}

pub fn mount_backdrop(document: &web::Document) -> anyhow::Result<AmbientView> {
    let container: web::Element = dom::element_by_id(document, BACKDROP_ID)?;
    let native = motion::supports_animate(&container);
    let mut view = AmbientView {
        elements: Vec::with_capacity(GLOW_BLOBS.len() + 1),
        _frame: None,
    };
    let mut scripted = Vec::new();
    for blob in &GLOW_BLOBS {
        let el = spawn(document, &container, blob.style)?;
        view.elements.push(el.clone());
        start(native, &el, blob.keyframes(), blob.timing, &mut scripted)?;
    }
    // Vignette sits above the glows and never moves
    view.elements.push(spawn(document, &container, VIGNETTE_STYLE)?);
    view._frame = drive(scripted);
    log::info!("[ambient] {} backdrop glows", GLOW_BLOBS.len());
    Ok(view)
}
