//! Pointer wiring for the two knobs.
//!
//! Pointer events subsume mouse and touch, so one listener set per axis
//! covers every input modality. A `pointerdown` on a knob begins that axis'
//! drag and takes pointer capture; moves and releases are observed on the
//! window so a drag keeps tracking outside the knob.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::{AxisOrientation, PointerSample, SimulationLoop};

use crate::dom;

#[derive(Clone)]
struct AxisWiring {
    knob: web::HtmlElement,
    axis: AxisOrientation,
    sim: Rc<RefCell<SimulationLoop>>,
}

/// Attach the full pointer lifecycle for one axis to its knob element.
pub fn wire_axis(
    document: &web::Document,
    knob_id: &str,
    axis: AxisOrientation,
    sim: Rc<RefCell<SimulationLoop>>,
) -> anyhow::Result<()> {
    let knob = dom::html_element(document, knob_id)?;
    let w = AxisWiring { knob, axis, sim };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    Ok(())
}

/// The one coordinate this axis reads from a pointer event.
fn coord(axis: AxisOrientation, ev: &web::PointerEvent) -> f64 {
    match axis {
        AxisOrientation::Horizontal => ev.client_x() as f64,
        AxisOrientation::Vertical => ev.client_y() as f64,
    }
}

fn wire_pointerdown(w: &AxisWiring) {
    let w = w.clone();
    let knob = w.knob.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.sim
            .borrow_mut()
            .apply(w.axis, PointerSample::Down(coord(w.axis, &ev)));
        _ = w.knob.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = knob.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &AxisWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut sim = w.sim.borrow_mut();
        if sim.axis(w.axis).is_dragging() {
            sim.apply(w.axis, PointerSample::Move(coord(w.axis, &ev)));
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &AxisWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut sim = w.sim.borrow_mut();
        if sim.axis(w.axis).is_dragging() {
            sim.apply(w.axis, PointerSample::Up);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
