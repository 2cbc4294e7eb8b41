// src/app/browser_event_manager.rs
//! Handles attaching and detaching browser event listeners (mousedown, mousemove, mouseup, keydown).

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, CanvasRenderingContext2d, DomRect, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent,
};

use crate::app::controller::InteractionController;
use crate::app::renderer;

/// 付けたリスナー 1 つ分。外す時に同じ target / 名前 / クロージャが要る。
pub(crate) struct Listener {
    target: EventTarget,
    event_name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// 入力イベントをコントローラーに流して、毎回描き直す。
///
/// mousedown は Canvas に、mousemove / mouseup / keydown は window に付ける
/// (Canvas の外までドラッグしても離したことが分かるように)。
pub(crate) fn attach_listeners(
    controller_arc: &Arc<Mutex<InteractionController>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
) -> Result<Vec<Listener>, JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let window_target: EventTarget = window.into();
    let canvas_target: EventTarget = canvas.clone().into();
    let mut listeners = Vec::new();

    // --- MouseDown Listener ---
    {
        let controller = Arc::clone(controller_arc);
        let canvas = canvas.clone();
        let context = context.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in mousedown listener");
                return;
            };
            let (x, y) = canvas_point(&canvas, &mouse_event);
            with_controller(&controller, &context, |c| {
                let outcome = c.on_pointer_press(x, y);
                debug!("mousedown ({}, {}) -> {:?}", x, y, outcome);
            });
        }) as Box<dyn FnMut(Event)>);
        listeners.push(add_listener(&canvas_target, "mousedown", closure)?);
    }

    // --- MouseMove Listener ---
    {
        let controller = Arc::clone(controller_arc);
        let canvas = canvas.clone();
        let context = context.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in mousemove listener");
                return;
            };
            // movementX/Y は CSS ピクセルなので、press / release と同じ倍率で論理座標に直す
            let (_, scale) = canvas_rect_and_scale(&canvas);
            let (dx, dy) = scale_delta(mouse_event.movement_x(), mouse_event.movement_y(), scale);
            with_controller(&controller, &context, |c| {
                if c.is_holding() {
                    c.on_pointer_move(dx, dy);
                }
            });
        }) as Box<dyn FnMut(Event)>);
        listeners.push(add_listener(&window_target, "mousemove", closure)?);
    }

    // --- MouseUp Listener ---
    {
        let controller = Arc::clone(controller_arc);
        let canvas = canvas.clone();
        let context = context.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in mouseup listener");
                return;
            };
            let (x, y) = canvas_point(&canvas, &mouse_event);
            with_controller(&controller, &context, |c| {
                let outcome = c.on_pointer_release(x, y);
                debug!("mouseup ({}, {}) -> {:?}", x, y, outcome);
            });
        }) as Box<dyn FnMut(Event)>);
        listeners.push(add_listener(&window_target, "mouseup", closure)?);
    }

    // --- KeyDown Listener ---
    {
        let controller = Arc::clone(controller_arc);
        let context = context.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Ok(key_event) = event.dyn_into::<KeyboardEvent>() else {
                error!("Failed to cast event to KeyboardEvent in keydown listener");
                return;
            };
            let key = key_event.key();
            with_controller(&controller, &context, |c| {
                c.on_key(&key);
            });
        }) as Box<dyn FnMut(Event)>);
        listeners.push(add_listener(&window_target, "keydown", closure)?);
    }

    debug!("Attached {} listeners.", listeners.len());
    Ok(listeners)
}

/// Detaches every listener attached by `attach_listeners`.
pub(crate) fn detach_listeners(listeners: Vec<Listener>) -> Result<(), JsValue> {
    for listener in listeners {
        listener.target.remove_event_listener_with_callback(
            listener.event_name,
            listener.closure.as_ref().unchecked_ref(),
        )?;
        debug!("  Detached {} listener.", listener.event_name);
        // closure is dropped here
    }
    Ok(())
}

fn add_listener(
    target: &EventTarget,
    event_name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
) -> Result<Listener, JsValue> {
    target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        event_name,
        closure,
    })
}

/// コントローラーをロックして `f` を呼び、そのまま描き直す。
fn with_controller(
    controller_arc: &Arc<Mutex<InteractionController>>,
    context: &CanvasRenderingContext2d,
    f: impl FnOnce(&mut InteractionController),
) {
    let mut controller = match controller_arc.lock() {
        Ok(guard) => guard,
        Err(e) => {
            error!("Failed to lock controller: {}", e);
            return;
        }
    };
    f(&mut controller);
    if let Err(e) = renderer::draw_frame(context, &controller.on_draw()) {
        error!("Render error: {:?}", e);
    }
}

/// マウスイベントの座標を Canvas の論理座標に直す。
fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
    let (rect, (scale_x, scale_y)) = canvas_rect_and_scale(canvas);
    (
        ((event.client_x() as f64 - rect.left()) * scale_x) as f32,
        ((event.client_y() as f64 - rect.top()) * scale_y) as f32,
    )
}

/// Canvas の表示矩形と、CSS ピクセル → 論理ピクセルの倍率 (x, y)。
fn canvas_rect_and_scale(canvas: &HtmlCanvasElement) -> (DomRect, (f64, f64)) {
    let rect = canvas.get_bounding_client_rect();
    let scale = (
        axis_scale(canvas.width(), rect.width()),
        axis_scale(canvas.height(), rect.height()),
    );
    (rect, scale)
}

/// 表示サイズが 0 (非表示など) の時は等倍扱い。
fn axis_scale(logical: u32, displayed: f64) -> f64 {
    if displayed > 0.0 {
        logical as f64 / displayed
    } else {
        1.0
    }
}

fn scale_delta(dx: i32, dy: i32, (scale_x, scale_y): (f64, f64)) -> (f32, f32) {
    ((dx as f64 * scale_x) as f32, (dy as f64 * scale_y) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_follows_css_scaling() {
        // 1024 px の Canvas を 512 px で表示 → 1 CSS px は 2 論理 px
        let scale = (axis_scale(1024, 512.0), axis_scale(768, 384.0));
        assert_eq!(scale_delta(10, -3, scale), (20.0, -6.0));

        // 等倍表示ならそのまま
        let scale = (axis_scale(1024, 1024.0), axis_scale(768, 768.0));
        assert_eq!(scale_delta(7, 5, scale), (7.0, 5.0));
    }

    #[test]
    fn hidden_canvas_is_unscaled() {
        assert_eq!(axis_scale(1024, 0.0), 1.0);
    }
}
