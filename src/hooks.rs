#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
struct WindowListener {
    event: &'static str,
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

/// Attaches `handler` to a window event for the lifetime of the calling
/// component. The handler passed on later renders is ignored.
#[cfg(target_arch = "wasm32")]
pub fn use_window_listener(event: &'static str, handler: impl FnMut() + 'static) {
    let listener = use_hook(move || {
        let mut handler = handler;
        let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(_)>));
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback(event, closure.as_ref().as_ref().unchecked_ref());
        }
        tracing::debug!("hooks: listening for window {event}");
        WindowListener { event, closure }
    });

    use_drop(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().as_ref().unchecked_ref(),
            );
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_window_listener(_event: &'static str, _handler: impl FnMut() + 'static) {}

/// Resolves on the next `requestAnimationFrame` callback.
#[cfg(target_arch = "wasm32")]
pub async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_animation_frame() {}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_millis: u32) {}
