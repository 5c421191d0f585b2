//! Leptos Pointer Utilities
//!
//! Window-level resize/scroll/keydown listeners and element-relative pointer tracking
//! for Leptos using plain DOM events.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Pointer position relative to the tracked element, in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Client coordinates made relative to an element's top-left corner
    pub fn relative_to(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self { x: client_x - left, y: client_y - top }
    }
}

/// Pointer state signals
#[derive(Clone, Copy)]
pub struct PointerSignals {
    pub position_read: ReadSignal<PointerPosition>,
    pub position_write: WriteSignal<PointerPosition>,
    /// Pointer currently inside the tracked element
    pub hovering_read: ReadSignal<bool>,
    pub hovering_write: WriteSignal<bool>,
}

pub fn create_pointer_signals() -> PointerSignals {
    let (position_read, position_write) = signal(PointerPosition::default());
    let (hovering_read, hovering_write) = signal(false);
    PointerSignals {
        position_read,
        position_write,
        hovering_read,
        hovering_write,
    }
}

/// Create mousemove handler for the tracked element.
/// Position is measured against the element the listener is attached to.
pub fn make_on_pointer_move(pointer: PointerSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.current_target() else { return };
        let Some(element) = target.dyn_ref::<web_sys::Element>() else { return };
        let rect = element.get_bounding_client_rect();
        pointer.position_write.set(PointerPosition::relative_to(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
        ));
    }
}

pub fn make_on_pointer_enter(pointer: PointerSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| pointer.hovering_write.set(true)
}

pub fn make_on_pointer_leave(pointer: PointerSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| pointer.hovering_write.set(false)
}

/// Current `window.innerWidth`
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Current `window.scrollY`
pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

fn bind_window_listener<F>(event: &str, handler: F)
where
    F: Fn(web_sys::Event) + 'static,
{
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(handler);

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    }
    // Listeners live for the page session
    listener.forget();
}

/// Bind a window resize listener. Calls `on_resize` once immediately with
/// the current width, then with every new width.
pub fn bind_window_resize<F>(on_resize: F)
where
    F: Fn(f64) + 'static,
{
    if let Some(width) = viewport_width() {
        on_resize(width);
    }
    bind_window_listener("resize", move |_| {
        if let Some(width) = viewport_width() {
            on_resize(width);
        }
    });
}

/// Bind a window scroll listener reporting the vertical offset
pub fn bind_window_scroll<F>(on_scroll: F)
where
    F: Fn(f64) + 'static,
{
    bind_window_listener("scroll", move |_| {
        if let Some(y) = scroll_y() {
            on_scroll(y);
        }
    });
}

/// Bind a window keydown listener reporting `KeyboardEvent.key`
pub fn bind_window_keydown<F>(on_key: F)
where
    F: Fn(&str) + 'static,
{
    bind_window_listener("keydown", move |ev| {
        if let Some(key_event) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
            on_key(&key_event.key());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_position() {
        let pos = PointerPosition::relative_to(150.0, 90.0, 100.0, 40.0);
        assert_eq!(pos, PointerPosition { x: 50.0, y: 50.0 });
    }
}
