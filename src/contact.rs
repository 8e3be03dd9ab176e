use dioxus::prelude::*;
use thiserror::Error;

use crate::hooks::{next_animation_frame, sleep_ms};

pub const STATUS_VISIBLE_MS: u32 = 4000;
pub const SUCCESS_TEXT: &str = "✅ Message sent successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
}

impl ContactForm {
    /// All three fields are required once trimmed. The email address is not
    /// checked beyond being present.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [&self.name, &self.email, &self.message];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    kind: Option<StatusKind>,
    text: String,
    shown: bool,
}

impl FormStatus {
    /// The banner for one submission, starting hidden so the `show` class
    /// lands in a later frame and the transition replays.
    pub fn for_result(result: &Result<(), FormError>) -> Self {
        match result {
            Ok(()) => Self {
                kind: Some(StatusKind::Success),
                text: SUCCESS_TEXT.to_string(),
                shown: false,
            },
            Err(err) => Self {
                kind: Some(StatusKind::Error),
                text: format!("⚠️ {err}"),
                shown: false,
            },
        }
    }

    pub fn kind(&self) -> Option<StatusKind> {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn show(&mut self) {
        self.shown = true;
    }

    pub fn hide(&mut self) {
        self.shown = false;
    }

    pub fn class(&self) -> String {
        let mut class = String::from("form-status");
        if let Some(kind) = self.kind {
            class.push(' ');
            class.push_str(kind.class());
        }
        if self.shown {
            class.push_str(" show");
        }
        class
    }
}

/// Validates, swaps in the new banner, resets the fields on success, and
/// returns the banner to display.
pub fn submit(form: &mut ContactForm) -> FormStatus {
    let result = form.validate();
    if result.is_ok() {
        *form = ContactForm::default();
    }
    FormStatus::for_result(&result)
}

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(FormStatus::default);

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form",
            novalidate: true,
            onsubmit: move |event| {
                event.prevent_default();
                let next = submit(&mut form.write());
                tracing::debug!("contact: submitted, outcome {:?}", next.kind());
                status.set(next);
                spawn(async move {
                    next_animation_frame().await;
                    next_animation_frame().await;
                    status.write().show();
                });
                spawn(async move {
                    sleep_ms(STATUS_VISIBLE_MS).await;
                    status.write().hide();
                });
            },
            div { class: "form-field",
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    r#type: "text",
                    value: "{form.read().name}",
                    oninput: move |event| form.write().name = event.value(),
                }
            }
            div { class: "form-field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{form.read().email}",
                    oninput: move |event| form.write().email = event.value(),
                }
            }
            div { class: "form-field",
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    rows: "5",
                    value: "{form.read().message}",
                    oninput: move |event| form.write().message = event.value(),
                }
            }
            button { r#type: "submit", class: "submit-btn", "Send" }
            p {
                id: "form-status",
                class: "{status.read().class()}",
                role: "status",
                aria_hidden: if status.read().is_shown() { "false" } else { "true" },
                "{status.read().text()}"
            }
        }
    }
}
