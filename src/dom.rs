use crate::core::StyleSink;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listener on `window`.
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Self::new(window.as_ref(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Pointer client coordinates from a `mousemove` event.
#[inline]
pub fn mouse_client_xy(ev: &web::Event) -> Option<(f32, f32)> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| (m.client_x() as f32, m.client_y() as f32))
}

/// True for a `mouseout` that leaves the document rather than crossing
/// between two elements.
#[inline]
pub fn left_window(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| m.related_target().is_none())
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

pub fn viewport() -> Option<Viewport> {
    let window = web::window()?;
    let width = window.inner_width().ok()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height().ok()?.as_f64().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f64)
        .unwrap_or(height);
    Some(Viewport {
        width,
        height,
        scroll_y,
        document_height,
    })
}

/// Size the canvas backing store to the full viewport in css px.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = viewport()
        .map(|v| (v.width as u32, v.height as u32))
        .unwrap_or((canvas.width(), canvas.height()));
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// Size the canvas backing store to its css box times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_dpr: f64) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, max_dpr);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{} has the wrong element type", id))
}

/// The document root's inline style, used as the palette's style channel.
pub struct RootStyle {
    style: web::CssStyleDeclaration,
}

impl RootStyle {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("document element is not an HtmlElement"))?;
        Ok(Self {
            style: root.style(),
        })
    }
}

impl StyleSink for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        _ = self.style.set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        _ = self.style.remove_property(name);
    }
}
