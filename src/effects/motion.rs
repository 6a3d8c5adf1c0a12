use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Thin wrappers over the Web Animations API, called through `Reflect` so
// keyframes can stay plain objects.

pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn set(obj: &js_sys::Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), value).map_err(js_err)?;
    Ok(())
}

fn animate_fn(el: &web::Element) -> Option<js_sys::Function> {
    js_sys::Reflect::get(el.as_ref(), &JsValue::from_str("animate"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

#[inline]
pub fn supports_animate(el: &web::Element) -> bool {
    animate_fn(el).is_some()
}

pub struct Timing {
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub iterations: f64,
    pub fill: &'static str,
    pub easing: &'static str,
}

/// Start `Element.animate(frames, timing)`.
pub fn animate(el: &web::Element, frames: &js_sys::Array, timing: &Timing) -> anyhow::Result<()> {
    let opts = js_sys::Object::new();
    set(&opts, "duration", &JsValue::from_f64(timing.duration_sec as f64 * 1000.0))?;
    set(&opts, "delay", &JsValue::from_f64(timing.delay_sec as f64 * 1000.0))?;
    set(&opts, "iterations", &JsValue::from_f64(timing.iterations))?;
    set(&opts, "fill", &JsValue::from_str(timing.fill))?;
    set(&opts, "easing", &JsValue::from_str(timing.easing))?;

    let f = animate_fn(el).ok_or_else(|| anyhow::anyhow!("Element.animate unavailable"))?;
    f.call2(el.as_ref(), frames, &opts).map_err(js_err)?;
    Ok(())
}
