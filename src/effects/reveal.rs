use super::motion::{self, js_err, set, Timing};
use crate::constants::{CARD_MARGIN_PX, REVEAL_MARGIN_PX};
use crate::core::reveal::{parse_card_index, HoverLift, Reveal, RevealFrame, Transition};
use crate::dom::Listener;
use crate::frame::{self, AnimationLoop};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const CARD_SELECTOR: &str = "[data-card]";
pub const DIVIDER_SELECTOR: &str = "[data-divider]";

// Set while an element shows its revealed state
const REVEALED_ATTR: &str = "data-revealed";
const STYLE_PROPS: [&str; 4] = ["transform", "opacity", "filter", "translate"];

#[derive(Clone, Copy, Debug)]
enum Kind {
    Reveal,
    Card,
    Divider,
}

impl Kind {
    fn selector(&self) -> &'static str {
        match self {
            Kind::Reveal => REVEAL_SELECTOR,
            Kind::Card => CARD_SELECTOR,
            Kind::Divider => DIVIDER_SELECTOR,
        }
    }

    fn margin_px(&self) -> f32 {
        match self {
            Kind::Reveal => REVEAL_MARGIN_PX,
            Kind::Card => CARD_MARGIN_PX,
            Kind::Divider => 0.0,
        }
    }

    fn reveal_for(&self, el: &web::Element) -> Reveal {
        let attr = |name: &str| el.get_attribute(name);
        match self {
            Kind::Reveal => Reveal::from_attrs(
                attr("data-reveal").as_deref(),
                attr("data-reveal-direction").as_deref(),
                attr("data-reveal-delay").as_deref(),
                attr("data-reveal-duration").as_deref(),
                attr("data-reveal-once").as_deref(),
            ),
            Kind::Card => Reveal::card(parse_card_index(attr("data-card").as_deref())),
            Kind::Divider => Reveal::divider(),
        }
    }
}

fn apply_frame(el: &web::HtmlElement, frame: &RevealFrame) {
    let style = el.style();
    _ = style.set_property("transform", &frame.transform());
    _ = style.set_property("opacity", &frame.opacity.to_string());
    if let Some(filter) = frame.filter() {
        _ = style.set_property("filter", &filter);
    }
}

fn frame_object(frame: &RevealFrame) -> anyhow::Result<js_sys::Object> {
    let o = js_sys::Object::new();
    set(&o, "transform", &JsValue::from_str(&frame.transform()))?;
    set(&o, "opacity", &JsValue::from_f64(frame.opacity as f64))?;
    if let Some(filter) = frame.filter() {
        set(&o, "filter", &JsValue::from_str(&filter))?;
    }
    Ok(o)
}

/// Leave `to` as the inline style and animate into it from `from`. Without
/// `Element.animate` the element simply jumps to `to`.
fn play(
    el: &web::HtmlElement,
    from: &RevealFrame,
    to: &RevealFrame,
    transition: &Transition,
) -> anyhow::Result<()> {
    apply_frame(el, to);
    if !motion::supports_animate(el) {
        return Ok(());
    }
    let frames = js_sys::Array::new();
    frames.push(&frame_object(from)?);
    frames.push(&frame_object(to)?);
    motion::animate(
        el,
        &frames,
        &Timing {
            duration_sec: transition.duration_sec,
            delay_sec: transition.delay_sec,
            iterations: 1.0,
            fill: "backwards",
            easing: transition.easing.css(),
        },
    )
}

fn on_entry(kind: Kind, entry: &web::IntersectionObserverEntry, observer: &web::IntersectionObserver) {
    let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() else {
        return;
    };
    let reveal = kind.reveal_for(&el);
    let shown = el.has_attribute(REVEALED_ATTR);
    let result = if entry.is_intersecting() && !shown {
        _ = el.set_attribute(REVEALED_ATTR, "");
        if reveal.once {
            observer.unobserve(&el);
        }
        play(&el, &reveal.hidden, &reveal.shown, &reveal.transition)
    } else if !entry.is_intersecting() && shown && !reveal.once {
        _ = el.remove_attribute(REVEALED_ATTR);
        play(&el, &reveal.shown, &reveal.hidden, &reveal.transition)
    } else {
        Ok(())
    };
    if let Err(e) = result {
        log::warn!("[reveal] animation failed: {:?}", e);
    }
}

/// An observer that disconnects when dropped.
struct Observer {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(kind: Kind, elements: &[web::HtmlElement]) -> anyhow::Result<Observer> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(kind, &entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    // Negative margin shrinks the viewport, so elements reveal a little late
    let init = js_sys::Object::new();
    set(&init, "rootMargin", &JsValue::from_str(&format!("{}px", -kind.margin_px())))?;
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init.unchecked_into::<web::IntersectionObserverInit>(),
    )
    .map_err(js_err)?;
    for el in elements {
        apply_frame(el, &kind.reveal_for(el).hidden);
        observer.observe(el);
    }
    Ok(Observer {
        observer,
        _callback: callback,
    })
}

fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

/// Hover spring on every card, stepped by one shared frame loop.
fn hover_cards(cards: &[web::HtmlElement]) -> anyhow::Result<(Vec<Listener>, AnimationLoop)> {
    let lifts: Rc<RefCell<Vec<(web::HtmlElement, HoverLift)>>> = Rc::new(RefCell::new(
        cards
            .iter()
            .map(|c| (c.clone(), HoverLift::default()))
            .collect(),
    ));
    let mut listeners = Vec::with_capacity(cards.len() * 2);
    for (i, card) in cards.iter().enumerate() {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let lifts = lifts.clone();
            listeners.push(Listener::new(card.as_ref(), event, move |_| {
                if let Some((_, lift)) = lifts.borrow_mut().get_mut(i) {
                    lift.set_hovered(hovered);
                }
            })?);
        }
    }

    let mut last = Instant::now();
    let frame = frame::start_loop(move |_ts| {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;
        for (card, lift) in lifts.borrow_mut().iter_mut() {
            if lift.axis.is_at_rest() {
                continue;
            }
            lift.step(dt);
            _ = card.style().set_property("translate", &lift.translate());
        }
    });
    Ok((listeners, frame))
}

/// In-view entrances for marked elements. Dropping the view disconnects the
/// observers and restores the elements' inline styles.
pub struct RevealView {
    elements: Vec<web::HtmlElement>,
    _observers: Vec<Observer>,
    _listeners: Vec<Listener>,
    _hover: Option<AnimationLoop>,
}

impl Drop for RevealView {
    fn drop(&mut self) {
        for el in &self.elements {
            let style = el.style();
            for prop in STYLE_PROPS {
                _ = style.remove_property(prop);
            }
            _ = el.remove_attribute(REVEALED_ATTR);
        }
    }
}

pub fn mount(document: &web::Document) -> anyhow::Result<RevealView> {
    let mut elements = Vec::new();
    let mut observers = Vec::new();
    let mut listeners = Vec::new();
    let mut hover = None;
    for kind in [Kind::Reveal, Kind::Card, Kind::Divider] {
        let found = query_all(document, kind.selector())?;
        if found.is_empty() {
            continue;
        }
        observers.push(observe(kind, &found)?);
        if let Kind::Card = kind {
            let (l, frame) = hover_cards(&found)?;
            listeners = l;
            hover = Some(frame);
        }
        elements.extend(found);
    }
    if elements.is_empty() {
        anyhow::bail!("no elements marked for reveal");
    }
    log::info!("[reveal] observing {} elements", elements.len());
    Ok(RevealView {
        elements,
        _observers: observers,
        _listeners: listeners,
        _hover: hover,
    })
}
