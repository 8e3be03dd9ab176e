use dioxus::prelude::*;

pub const FLIPPED_CLASS: &str = "flipped";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipEvent {
    OpenButton,
    CloseButton,
    /// A click on the card surface. Button clicks never get here; the
    /// buttons stop propagation.
    CardClick,
    Key(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipOutcome {
    pub flipped: bool,
    pub prevent_default: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipCardState {
    flipped: bool,
}

impl FlipCardState {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn apply(&mut self, event: &FlipEvent) -> FlipOutcome {
        let mut prevent_default = false;
        match event {
            FlipEvent::OpenButton => self.flipped = true,
            FlipEvent::CloseButton => self.flipped = false,
            FlipEvent::CardClick => self.flipped = !self.flipped,
            FlipEvent::Key(key) => match key.as_str() {
                "Enter" | " " => {
                    prevent_default = true;
                    self.flipped = !self.flipped;
                }
                "Escape" => self.flipped = false,
                _ => {}
            },
        }
        FlipOutcome {
            flipped: self.flipped,
            prevent_default,
        }
    }
}

/// A two-faced project card. Buttons on either face stop propagation, so
/// the card's own click handler only sees clicks on the card surface.
#[component]
pub fn FlipCard(title: String, front: Element, back: Element) -> Element {
    let mut state = use_signal(FlipCardState::default);
    let class = if state.read().is_flipped() {
        format!("card-3d {FLIPPED_CLASS}")
    } else {
        "card-3d".to_string()
    };

    rsx! {
        div {
            class: "{class}",
            tabindex: "0",
            role: "button",
            aria_label: "{title}",
            onclick: move |_| {
                state.write().apply(&FlipEvent::CardClick);
            },
            onkeydown: move |event: KeyboardEvent| {
                let outcome = state.write().apply(&FlipEvent::Key(event.key().to_string()));
                if outcome.prevent_default {
                    event.prevent_default();
                    tracing::debug!("flip card: keyboard toggle, flipped {}", outcome.flipped);
                }
            },
            div { class: "card-face card-front",
                {front}
                button {
                    r#type: "button",
                    class: "flip-btn",
                    onclick: move |event| {
                        event.stop_propagation();
                        state.write().apply(&FlipEvent::OpenButton);
                    },
                    "Details"
                }
            }
            div { class: "card-face card-back",
                {back}
                button {
                    r#type: "button",
                    class: "flip-btn flip-back",
                    onclick: move |event| {
                        event.stop_propagation();
                        state.write().apply(&FlipEvent::CloseButton);
                    },
                    "Back"
                }
            }
        }
    }
}
