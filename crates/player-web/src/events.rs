use crate::dom;
use player_core::{OrbitControls, Placement};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    pointer_id: i32,
    last: [f32; 2],
}

/// Keep the canvas backing store matched to its CSS size and re-run model
/// placement whenever the window is resized.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, placement: Rc<Cell<Placement>>) {
    dom::sync_canvas_backing_size(canvas);
    placement.set(Placement::for_viewport_width(dom::viewport_width()));

    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        placement.set(Placement::for_viewport_width(dom::viewport_width()));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Pointer drag orbits the camera, the wheel dollies it.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let drag = Rc::new(Cell::new(DragState::default()));

    {
        let drag = drag.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.set(DragState {
                active: true,
                pointer_id: ev.pointer_id(),
                last: [ev.client_x() as f32, ev.client_y() as f32],
            });
            _ = target.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let drag = drag.clone();
        let orbit = orbit.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.get();
            if !d.active || d.pointer_id != ev.pointer_id() {
                return;
            }
            let pos = [ev.client_x() as f32, ev.client_y() as f32];
            let height = target.client_height() as f32;
            orbit
                .borrow_mut()
                .rotate(pos[0] - d.last[0], pos[1] - d.last[1], height);
            d.last = pos;
            drag.set(d);
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for kind in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let d = drag.get();
            if d.active && d.pointer_id == ev.pointer_id() {
                drag.set(DragState::default());
                _ = target.release_pointer_capture(ev.pointer_id());
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        orbit.borrow_mut().dolly(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
