//! Leptos Gesture Utilities
//!
//! Tap, swipe and keyboard handling for a single card element.
//! Uses elapsed time and movement thresholds to distinguish tap from swipe.

mod classify;

pub use classify::{is_text_entry, Direction, DragTransform, GestureConfig, Intent, KeyBindings, PointerSample};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Gesture state signals
#[derive(Clone, Copy)]
pub struct GestureSignals {
    /// Where the current press started (None = not dragging)
    pub press_read: ReadSignal<Option<PointerSample>>,
    pub press_write: WriteSignal<Option<PointerSample>>,
    /// Live card offset while dragging with feedback enabled
    pub drag_read: ReadSignal<Option<DragTransform>>,
    pub drag_write: WriteSignal<Option<DragTransform>>,
    /// When the last touch on the card ended, to drop the emulated mouse events
    pub touch_release_read: ReadSignal<Option<f64>>,
    pub touch_release_write: WriteSignal<Option<f64>>,
}

impl GestureSignals {
    pub fn is_dragging(&self) -> bool {
        self.press_read.get().is_some()
    }

    /// Inline `transform` for the card, empty when not dragging
    pub fn transform_css(&self) -> String {
        self.drag_read.get().map(|t| t.to_css()).unwrap_or_default()
    }
}

pub fn create_gesture_signals() -> GestureSignals {
    let (press_read, press_write) = signal(None::<PointerSample>);
    let (drag_read, drag_write) = signal(None::<DragTransform>);
    let (touch_release_read, touch_release_write) = signal(None::<f64>);
    GestureSignals {
        press_read,
        press_write,
        drag_read,
        drag_write,
        touch_release_read,
        touch_release_write,
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

fn begin_press(gs: &GestureSignals, x: i32, y: i32, busy: Signal<bool>) {
    if busy.get_untracked() {
        return;
    }
    gs.press_write.set(Some(PointerSample::new(x as f64, y as f64, now_ms())));
}

fn track_drag(gs: &GestureSignals, config: &GestureConfig, x: i32) -> bool {
    let Some(press) = gs.press_read.get_untracked() else {
        return false;
    };
    if config.live_drag_feedback {
        let dx = x as f64 - press.x;
        gs.drag_write.set(Some(config.drag_transform(dx, viewport_width())));
    }
    true
}

/// End the drag and classify it. Returns None if no press was pending.
fn release_press(gs: &GestureSignals, config: &GestureConfig, x: i32, y: i32, busy: Signal<bool>) -> Option<Intent> {
    let press = gs.press_read.get_untracked()?;
    gs.press_write.set(None);
    gs.drag_write.set(None);

    if busy.get_untracked() {
        return None;
    }
    let release = PointerSample::new(x as f64, y as f64, now_ms());
    config.classify(press, release, viewport_width())
}

/// Create mousedown handler for the card
pub fn make_on_mousedown(gs: GestureSignals, config: GestureConfig, busy: Signal<bool>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if config.is_emulated_mouse(gs.touch_release_read.get_untracked(), now_ms()) {
            return;
        }
        begin_press(&gs, ev.client_x(), ev.client_y(), busy);
    }
}

/// Create touchstart handler for the card
pub fn make_on_touchstart(gs: GestureSignals, busy: Signal<bool>) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            begin_press(&gs, touch.client_x(), touch.client_y(), busy);
        }
    }
}

/// Create touchmove handler for the card
pub fn make_on_touchmove(gs: GestureSignals, config: GestureConfig) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            if track_drag(&gs, &config, touch.client_x()) {
                ev.prevent_default();
            }
        }
    }
}

/// Create touchend handler for the card
pub fn make_on_touchend<F>(gs: GestureSignals, config: GestureConfig, busy: Signal<bool>, on_intent: F) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    F: Fn(Intent) + Clone + 'static,
{
    move |ev: web_sys::TouchEvent| {
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        if gs.press_read.get_untracked().is_none() {
            return;
        }
        // Cancels the mousedown/mouseup the browser would emulate for this tap
        ev.prevent_default();
        gs.touch_release_write.set(Some(now_ms()));
        if let Some(intent) = release_press(&gs, &config, touch.client_x(), touch.client_y(), busy) {
            on_intent(intent);
        }
    }
}

fn add_document_listener(event: &str, callback: &js_sys::Function, passive: Option<bool>) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    let result = match passive {
        Some(passive) => {
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(passive);
            doc.add_event_listener_with_callback_and_add_event_listener_options(event, callback, &options)
        }
        None => doc.add_event_listener_with_callback(event, callback),
    };
    if let Err(err) = result {
        log::error!("[GESTURES] addEventListener({}) failed: {:?}", event, err);
    }
}

/// Bind document mousemove/mouseup so a drag started on the card
/// keeps tracking after the pointer leaves it
pub fn bind_global_mouse<F>(gs: GestureSignals, config: GestureConfig, busy: Signal<bool>, on_intent: F)
where
    F: Fn(Intent) + Clone + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if track_drag(&gs, &config, ev.client_x()) {
            ev.prevent_default();
        }
    });
    add_document_listener("mousemove", on_mousemove.as_ref().unchecked_ref(), None);
    on_mousemove.forget();

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some(intent) = release_press(&gs, &config, ev.client_x(), ev.client_y(), busy) {
            on_intent(intent);
        }
    });
    add_document_listener("mouseup", on_mouseup.as_ref().unchecked_ref(), None);
    on_mouseup.forget();
}

/// Bind document keydown to the configured keys.
///
/// Ignored while a text field has focus or `busy` is set.
pub fn bind_global_keys<F>(bindings: KeyBindings, busy: Signal<bool>, on_intent: F)
where
    F: Fn(Intent) + Clone + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let focused_tag = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.active_element())
            .map(|el| el.tag_name());
        if focused_tag.as_deref().is_some_and(is_text_entry) {
            return;
        }
        if busy.get_untracked() {
            return;
        }

        let Some(intent) = bindings.intent_for(&ev.key()) else {
            return;
        };
        if intent == Intent::Flip {
            // Space would scroll the page
            ev.prevent_default();
        }
        on_intent(intent);
    });
    add_document_listener("keydown", on_keydown.as_ref().unchecked_ref(), None);
    on_keydown.forget();
}

/// Stop single-finger touchmove from scrolling the page (iOS overscroll)
pub fn bind_overscroll_guard() {
    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if ev.touches().length() > 1 {
            return;
        }
        ev.prevent_default();
    });
    add_document_listener("touchmove", on_touchmove.as_ref().unchecked_ref(), Some(false));
    on_touchmove.forget();
}
