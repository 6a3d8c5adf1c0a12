#![cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod core;
mod dom;
mod effects;
mod frame;
mod render;

use effects::{ambient, glow, header, palette, particles, reveal, sphere};

/// Every mounted effect. Dropping it tears all of them down.
struct Mounted {
    particles: Option<particles::ParticleFieldView>,
    glow: Option<glow::CursorGlowView>,
    floating: Option<ambient::AmbientView>,
    backdrop: Option<ambient::AmbientView>,
    palette: Option<palette::PaletteView>,
    header: Option<header::HeaderView>,
    reveal: Option<reveal::RevealView>,
    sphere: Option<sphere::HeroSphereView>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    // Bumped on every mount so a late sphere init never lands in a newer session
    static GENERATION: Cell<u32> = const { Cell::new(0) };
}

fn or_skip<T>(tag: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[fx] {} skipped: {:?}", tag, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-fx starting");
    mount()
}

/// Mount every effect whose host element is present on the page.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("[fx] already mounted; ignoring");
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;

    let mounted = Mounted {
        palette: or_skip("palette", palette::mount(&document)),
        particles: or_skip("particles", particles::mount(&document)),
        glow: or_skip("glow", glow::mount(&document)),
        floating: or_skip("floating", ambient::mount_floating(&document)),
        backdrop: or_skip("backdrop", ambient::mount_backdrop(&document)),
        header: or_skip("header", header::mount(&document)),
        reveal: or_skip("reveal", reveal::mount(&document)),
        sphere: None,
    };
    MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
    let generation = GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });

    spawn_local(async move {
        let Some(view) = or_skip("sphere", sphere::mount(&document).await) else {
            return;
        };
        MOUNTED.with(|m| match m.borrow_mut().as_mut() {
            Some(mounted) if GENERATION.with(|g| g.get()) == generation => {
                mounted.sphere = Some(view);
            }
            _ => log::info!("[sphere] unmounted during init; dropping"),
        });
    });
    Ok(())
}

/// Stop every frame loop, remove every listener and clear the palette variables.
#[wasm_bindgen]
pub fn unmount() {
    let taken = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(mounted) = taken {
        drop(mounted);
        log::info!("[fx] unmounted");
    }
}
