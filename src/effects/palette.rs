use crate::core::palette::{apply_palette, clear_palette, palette_at};
use crate::core::scroll::document_progress;
use crate::dom::{self, Listener, RootStyle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll-driven theme colours. Dropping the view removes the variables.
pub struct PaletteView {
    style: Rc<RefCell<RootStyle>>,
    _scroll: Listener,
}

impl Drop for PaletteView {
    fn drop(&mut self) {
        clear_palette(&mut *self.style.borrow_mut());
        log::info!("[palette] cleared");
    }
}

fn refresh(style: &mut RootStyle) {
    let progress = dom::viewport()
        .map(|v| document_progress(v.scroll_y, v.document_height, v.height))
        .unwrap_or(0.0);
    apply_palette(style, &palette_at(progress));
}

pub fn mount(document: &web::Document) -> anyhow::Result<PaletteView> {
    let style = Rc::new(RefCell::new(RootStyle::new(document)?));
    refresh(&mut style.borrow_mut());

    let style_scroll = style.clone();
    let scroll = Listener::on_window("scroll", move |_| refresh(&mut style_scroll.borrow_mut()))?;
    log::info!("[palette] mounted");

    Ok(PaletteView {
        style,
        _scroll: scroll,
    })
}
