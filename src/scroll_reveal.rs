use std::collections::HashSet;

use dioxus::prelude::*;

use crate::hooks::use_window_listener;

pub const REVEAL_THRESHOLD: f64 = 0.85;
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

/// Revealed keys only ever accumulate; scrolling back up does not hide
/// anything again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: HashSet<String>,
}

impl RevealState {
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn observe(&mut self, key: &str, top: f64, viewport_height: f64) -> bool {
        if self.is_revealed(key) || !should_reveal(top, viewport_height) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }
}

/// Provides the reveal state and checks every `Reveal` wrapper once on
/// mount and again on each window scroll.
pub fn use_scroll_reveal() {
    let state = use_context_provider(|| Signal::new(RevealState::default()));
    use_window_listener("scroll", move || reveal_in_viewport(state));
    use_effect(move || reveal_in_viewport(state));
}

fn reveal_in_viewport(mut state: Signal<RevealState>) {
    let (positions, viewport_height) = measure_reveal_targets();
    let pending: Vec<_> = {
        let current = state.peek();
        positions
            .into_iter()
            .filter(|(key, top)| !current.is_revealed(key) && should_reveal(*top, viewport_height))
            .collect()
    };
    if pending.is_empty() {
        return;
    }
    let mut current = state.write();
    for (key, top) in pending {
        current.observe(&key, top, viewport_height);
    }
}

/// `data-reveal` key and bounding-rect top of every `fade-in` wrapper, plus
/// the viewport height.
#[cfg(target_arch = "wasm32")]
fn measure_reveal_targets() -> (Vec<(String, f64)>, f64) {
    let Some(window) = web_sys::window() else {
        return (Vec::new(), 0.0);
    };
    let Some(document) = window.document() else {
        return (Vec::new(), 0.0);
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let elements = document.get_elements_by_class_name(FADE_IN_CLASS);
    let mut positions = Vec::new();
    for index in 0..elements.length() {
        let Some(element) = elements.item(index) else {
            continue;
        };
        let Some(key) = element.get_attribute("data-reveal") else {
            continue;
        };
        positions.push((key, element.get_bounding_client_rect().top()));
    }
    (positions, viewport_height)
}

#[cfg(not(target_arch = "wasm32"))]
fn measure_reveal_targets() -> (Vec<(String, f64)>, f64) {
    (Vec::new(), 0.0)
}

#[component]
pub fn Reveal(key_name: String, children: Element) -> Element {
    let state = use_context::<Signal<RevealState>>();
    let class = if state.read().is_revealed(&key_name) {
        format!("{FADE_IN_CLASS} {VISIBLE_CLASS}")
    } else {
        FADE_IN_CLASS.to_string()
    };

    rsx! {
        div { class: "{class}", "data-reveal": "{key_name}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_eighty_five_percent() {
        assert!(should_reveal(849.0, 1000.0));
        assert!(!should_reveal(850.0, 1000.0));
        assert!(should_reveal(-200.0, 1000.0));
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut state = RevealState::default();
        assert!(!state.observe("about", 900.0, 1000.0));
        assert!(state.observe("about", 100.0, 1000.0));
        assert!(!state.observe("about", 5000.0, 1000.0));
        assert!(state.is_revealed("about"));
        assert!(!state.is_revealed("contact"));
    }
}
