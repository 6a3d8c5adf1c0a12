use crate::constants::SCROLLED_THRESHOLD_PX;
use crate::core::scroll::is_scrolled;
use crate::dom::{self, Listener};
use web_sys as web;

pub const HEADER_ID: &str = "site-header";
const SCROLLED_CLASS: &str = "scrolled";

pub struct HeaderView {
    header: web::Element,
    _scroll: Listener,
}

impl Drop for HeaderView {
    fn drop(&mut self) {
        _ = self.header.class_list().remove_1(SCROLLED_CLASS);
    }
}

fn refresh(header: &web::Element) {
    let scrolled = dom::viewport()
        .map(|v| is_scrolled(v.scroll_y, SCROLLED_THRESHOLD_PX))
        .unwrap_or(false);
    _ = header
        .class_list()
        .toggle_with_force(SCROLLED_CLASS, scrolled);
}

pub fn mount(document: &web::Document) -> anyhow::Result<HeaderView> {
    let header: web::Element = dom::element_by_id(document, HEADER_ID)?;
    refresh(&header);
    let header_scroll = header.clone();
    let scroll = Listener::on_window("scroll", move |_| refresh(&header_scroll))?;
    log::info!("[header] mounted");
    Ok(HeaderView {
        header,
        _scroll: scroll,
    })
}
