#![cfg(target_arch = "wasm32")]
//! DOM frontend for the axispad control: two draggable knobs whose values
//! compose into a compass heading and magnitude-tiered status readout.

mod dom;
mod events;
mod view;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::{AxisOrientation, SimulationLoop};
use view::PadView;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let sim = Rc::new(RefCell::new(SimulationLoop::new()));
    let view = PadView::new(&document)?;

    events::wire_axis(&document, "h-knob", AxisOrientation::Horizontal, sim.clone())?;
    events::wire_axis(&document, "v-knob", AxisOrientation::Vertical, sim.clone())?;

    start_loop(sim, view);
    Ok(())
}

/// Drive the simulation from `requestAnimationFrame`: advance both axes,
/// sample, and hand the reading to the view, once per display refresh.
fn start_loop(sim: Rc<RefCell<SimulationLoop>>, mut view: PadView) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let reading = sim.borrow_mut().frame();
        view.paint(&sim.borrow(), &reading);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
