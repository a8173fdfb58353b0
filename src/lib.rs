#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod dom;
mod effects;
mod events;
mod input;
mod modal;
mod render;
mod storage;

use app::{App, SharedApp};
use constants::{SCENE_WIRE_DELAY_MS, SURFACE_2D_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cemetery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn restore(app: &SharedApp) {
    let fx = app.borrow_mut().cemetery.restore();
    log::info!("[registry] restored {} gravestones", fx.len());
    effects::apply(app, fx);
}

/// The canvas A-Frame renders into, once the scene has built it.
fn scene_canvas(scene: &web::Element) -> Option<web::Element> {
    js_sys::Reflect::get(scene, &JsValue::from_str("canvas"))
        .ok()?
        .dyn_into::<web::Element>()
        .ok()
}

fn scene_has_loaded(scene: &web::Element) -> bool {
    js_sys::Reflect::get(scene, &JsValue::from_str("hasLoaded"))
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}

/// Scenery and saved stones go in once A-Frame has loaded; input follows a
/// moment later so the canvas has its final size.
fn start_scene(app: SharedApp, window: web::Window, scene: web::Element) {
    let on_loaded = {
        let scene = scene.clone();
        move || {
            {
                let mut guard = app.borrow_mut();
                let a = &mut *guard;
                a.view.populate_scenery(&a.document, &mut a.rng);
            }
            log::info!("[scene] scenery generated");
            restore(&app);
            let scene_for_wire = scene.clone();
            _ = dom::set_timeout(SCENE_WIRE_DELAY_MS, move || {
                let surface = scene_canvas(&scene_for_wire).unwrap_or(scene_for_wire);
                events::wire_all(&app, &window, &surface);
            });
        }
    };
    if scene_has_loaded(&scene) {
        on_loaded();
        return;
    }
    let once = RefCell::new(Some(on_loaded));
    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = once.borrow_mut().take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    _ = scene.add_event_listener_with_callback("loaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let profile = app::detect_profile(&document);
    log::info!("[scene] profile {}", profile.name);
    let is_world = profile.is_world();
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let app: SharedApp = Rc::new(RefCell::new(App::new(document.clone(), profile, seed)));

    if is_world {
        let scene = document
            .query_selector("a-scene")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("missing <a-scene>"))?;
        start_scene(app, window, scene);
    } else {
        let surface = document
            .get_element_by_id(SURFACE_2D_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", SURFACE_2D_ID))?;
        restore(&app);
        events::wire_all(&app, &window, &surface);
    }
    Ok(())
}
