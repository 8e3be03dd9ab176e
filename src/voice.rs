use dioxus::prelude::*;
use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::sections::{reveal_and_scroll, use_sections, SectionId};

pub const VOICE_PROMPT: &str = "Try: \"Show me projects\", \"Tell me about Ibrahim\", \"Show me contact\", \"Show quotes\", or \"Show navigation\".";
pub const LISTENING: &str = "Listening...";
pub const UNSUPPORTED: &str = "Voice navigation not supported in this browser.";
pub const NO_SPEECH: &str = "No speech detected. Try again.";
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const MAX_ALTERNATIVES: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoiceCommand {
    pub target: SectionId,
    pub status: &'static str,
    pub keywords: &'static [&'static str],
}

/// Matched top to bottom; the first command with any keyword in the
/// transcript wins.
pub const VOICE_COMMANDS: &[VoiceCommand] = &[
    VoiceCommand {
        target: SectionId::Projects,
        status: "Opening projects...",
        keywords: &["project"],
    },
    VoiceCommand {
        target: SectionId::About,
        status: "Showing About Ibrahim...",
        keywords: &["ibrahim", "about"],
    },
    VoiceCommand {
        target: SectionId::Contact,
        status: "Opening contact...",
        keywords: &["contact"],
    },
    VoiceCommand {
        target: SectionId::Quote,
        status: "Showing quotes...",
        keywords: &["quote", "quotes", "inspiration"],
    },
    VoiceCommand {
        target: SectionId::Header,
        status: "Opening navigation...",
        keywords: &["navigation", "nav", "menu", "top"],
    },
];

pub fn match_command(transcript: &str) -> Option<&'static VoiceCommand> {
    let phrase = transcript.to_lowercase();
    VOICE_COMMANDS.iter().find(|command| {
        command
            .keywords
            .iter()
            .any(|keyword| phrase.contains(keyword))
    })
}

/// Top alternative of every finalized result, space separated.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn join_transcripts<I, S>(results: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    results
        .into_iter()
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum SpeechError {
    #[error("speech recognition is not available")]
    Unsupported,
    #[error("window unavailable")]
    NoWindow,
    #[error("speech recognition setup failed: {0}")]
    Setup(String),
    #[error("speech recognition start failed: {0}")]
    Start(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoicePhase {
    #[default]
    Idle,
    Listening,
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceNavigator {
    phase: VoicePhase,
    status: String,
}

impl Default for VoiceNavigator {
    fn default() -> Self {
        Self {
            phase: VoicePhase::Idle,
            status: VOICE_PROMPT.to_string(),
        }
    }
}

impl VoiceNavigator {
    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_unsupported(&self) -> bool {
        self.phase == VoicePhase::Unsupported
    }

    pub fn mark_unsupported(&mut self) {
        self.phase = VoicePhase::Unsupported;
        self.status = UNSUPPORTED.to_string();
    }

    /// Returns true when the recognizer should actually be started.
    pub fn start(&mut self) -> bool {
        if self.phase != VoicePhase::Idle {
            return false;
        }
        self.phase = VoicePhase::Listening;
        self.status = LISTENING.to_string();
        true
    }

    pub fn on_result(&mut self, transcript: &str) -> Option<SectionId> {
        match match_command(transcript) {
            Some(command) => {
                self.status = command.status.to_string();
                Some(command.target)
            }
            None => {
                self.status = VOICE_PROMPT.to_string();
                None
            }
        }
    }

    pub fn on_error(&mut self, code: &str) {
        self.status = match code {
            "no-speech" => NO_SPEECH.to_string(),
            "" => "Voice error: please try again.".to_string(),
            other => format!("Voice error: {other}"),
        };
    }

    pub fn on_end(&mut self) {
        if self.phase == VoicePhase::Unsupported {
            return;
        }
        self.phase = VoicePhase::Idle;
        if self.status == LISTENING {
            self.status = VOICE_PROMPT.to_string();
        }
    }
}

#[component]
pub fn VoiceNavigatorPanel() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut navigator = use_signal(VoiceNavigator::default);
    let sections = use_sections();
    let mut recognizer = use_signal(|| None::<speech::SpeechRecognizer>);

    use_effect(move || {
        if recognizer.peek().is_some() || navigator.peek().is_unsupported() {
            return;
        }
        let built = speech::SpeechRecognizer::new(
            &config.speech_lang,
            move |transcript| {
                let target = navigator.write().on_result(&transcript);
                tracing::debug!("voice: heard {transcript:?}, target {target:?}");
                if let Some(target) = target {
                    reveal_and_scroll(sections, target);
                }
            },
            move |code| navigator.write().on_error(&code),
            move || navigator.write().on_end(),
        );
        match built {
            Ok(built) => recognizer.set(Some(built)),
            Err(SpeechError::Unsupported) => navigator.write().mark_unsupported(),
            Err(err) => {
                tracing::warn!("voice: {err}");
                navigator.write().mark_unsupported();
            }
        }
    });

    let status = navigator.read().status().to_string();
    let listening = navigator.read().phase() == VoicePhase::Listening;

    rsx! {
        div { class: "voice-nav",
            button {
                id: "voice-btn",
                r#type: "button",
                class: if listening { "voice-btn active" } else { "voice-btn" },
                disabled: navigator.read().is_unsupported(),
                onclick: move |_| {
                    if !navigator.write().start() {
                        return;
                    }
                    let started = match &*recognizer.peek() {
                        Some(active) => active.start(),
                        None => Err(SpeechError::Unsupported),
                    };
                    if let Err(err) = started {
                        tracing::warn!("voice: {err}");
                        navigator.write().on_error(&err.to_string());
                        navigator.write().on_end();
                    }
                },
                "🎤 Voice navigation"
            }
            p { id: "voice-status", class: "voice-status", aria_live: "polite", "{status}" }
        }
    }
}

/// Speech recognition only exists in the browser; elsewhere the panel
/// settles on the unsupported message.
#[cfg(not(target_arch = "wasm32"))]
mod speech {
    use super::SpeechError;

    pub struct SpeechRecognizer;

    impl SpeechRecognizer {
        pub fn new(
            _lang: &str,
            _on_result: impl FnMut(String) + 'static,
            _on_error: impl FnMut(String) + 'static,
            _on_end: impl FnMut() + 'static,
        ) -> Result<Self, SpeechError> {
            Err(SpeechError::Unsupported)
        }

        pub fn start(&self) -> Result<(), SpeechError> {
            Err(SpeechError::Unsupported)
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod speech {
    use js_sys::Reflect;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{join_transcripts, SpeechError, MAX_ALTERNATIVES};

    type Listener = Closure<dyn FnMut(web_sys::Event)>;

    pub struct SpeechRecognizer {
        recognition: JsValue,
        _listeners: Vec<Listener>,
    }

    impl SpeechRecognizer {
        pub fn new(
            lang: &str,
            mut on_result: impl FnMut(String) + 'static,
            mut on_error: impl FnMut(String) + 'static,
            mut on_end: impl FnMut() + 'static,
        ) -> Result<Self, SpeechError> {
            let window = web_sys::window().ok_or(SpeechError::NoWindow)?;
            let constructor = ["SpeechRecognition", "webkitSpeechRecognition"]
                .into_iter()
                .filter_map(|name| Reflect::get(&window, &JsValue::from_str(name)).ok())
                .find(|value| value.is_function())
                .ok_or(SpeechError::Unsupported)?;
            let constructor: js_sys::Function = constructor.unchecked_into();
            let recognition = Reflect::construct(&constructor, &js_sys::Array::new())
                .map_err(|err| SpeechError::Setup(format!("{err:?}")))?;

            set_property(&recognition, "lang", &JsValue::from_str(lang))?;
            set_property(&recognition, "interimResults", &JsValue::FALSE)?;
            set_property(
                &recognition,
                "maxAlternatives",
                &JsValue::from(MAX_ALTERNATIVES),
            )?;

            let result = Closure::wrap(Box::new(move |event: web_sys::Event| {
                on_result(read_transcript(event.as_ref()));
            }) as Box<dyn FnMut(_)>);
            let error = Closure::wrap(Box::new(move |event: web_sys::Event| {
                let code = Reflect::get(event.as_ref(), &JsValue::from_str("error"))
                    .ok()
                    .and_then(|value| value.as_string())
                    .unwrap_or_default();
                on_error(code);
            }) as Box<dyn FnMut(_)>);
            let end = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                on_end();
            }) as Box<dyn FnMut(_)>);

            let target: &web_sys::EventTarget = recognition.unchecked_ref();
            for (name, listener) in [("result", &result), ("error", &error), ("end", &end)] {
                target
                    .add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
                    .map_err(|err| SpeechError::Setup(format!("{err:?}")))?;
            }

            Ok(Self {
                recognition,
                _listeners: vec![result, error, end],
            })
        }

        pub fn start(&self) -> Result<(), SpeechError> {
            let start = Reflect::get(&self.recognition, &JsValue::from_str("start"))
                .map_err(|err| SpeechError::Start(format!("{err:?}")))?
                .dyn_into::<js_sys::Function>()
                .map_err(|_| SpeechError::Start("start is not callable".to_string()))?;
            start
                .call0(&self.recognition)
                .map(|_| ())
                .map_err(|err| SpeechError::Start(format!("{err:?}")))
        }
    }

    fn set_property(target: &JsValue, key: &str, value: &JsValue) -> Result<(), SpeechError> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|err| SpeechError::Setup(format!("{key}: {err:?}")))
    }

    fn read_transcript(event: &JsValue) -> String {
        let Ok(results) = Reflect::get(event, &JsValue::from_str("results")) else {
            return String::new();
        };
        let length = Reflect::get(&results, &JsValue::from_str("length"))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0) as u32;
        let parts = (0..length).filter_map(|index| {
            let result = Reflect::get_u32(&results, index).ok()?;
            let best = Reflect::get_u32(&result, 0).ok()?;
            Reflect::get(&best, &JsValue::from_str("transcript"))
                .ok()?
                .as_string()
        });
        join_transcripts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matching_ignores_case() {
        let command = match_command("please show me PROJECTS now").map(|c| c.target);
        assert_eq!(command, Some(SectionId::Projects));
    }

    #[test]
    fn list_order_breaks_ties() {
        let command = match_command("contact me about the project").map(|c| c.target);
        assert_eq!(command, Some(SectionId::Projects));
        let command = match_command("scroll to the top for contact").map(|c| c.target);
        assert_eq!(command, Some(SectionId::Contact));
    }

    #[test]
    fn substring_match_inside_words() {
        let command = match_command("give me some inspirational words").map(|c| c.target);
        assert_eq!(command, Some(SectionId::Quote));
        assert!(match_command("hello there").is_none());
    }

    #[test]
    fn joins_results_with_spaces() {
        assert_eq!(join_transcripts(["show me", "contact "]), "show me contact");
        assert_eq!(join_transcripts(Vec::<String>::new()), "");
    }

    #[test]
    fn start_is_ignored_while_listening() {
        let mut navigator = VoiceNavigator::default();
        assert!(navigator.start());
        assert_eq!(navigator.status(), LISTENING);
        assert!(!navigator.start());
        assert_eq!(navigator.phase(), VoicePhase::Listening);
    }

    #[test]
    fn match_sets_status_and_returns_target() {
        let mut navigator = VoiceNavigator::default();
        navigator.start();
        assert_eq!(navigator.on_result("tell me about ibrahim"), Some(SectionId::About));
        assert_eq!(navigator.status(), "Showing About Ibrahim...");
        navigator.on_end();
        assert_eq!(navigator.phase(), VoicePhase::Idle);
        assert_eq!(navigator.status(), "Showing About Ibrahim...");
    }

    #[test]
    fn no_match_resets_to_prompt() {
        let mut navigator = VoiceNavigator::default();
        navigator.start();
        assert_eq!(navigator.on_result("what's the weather"), None);
        assert_eq!(navigator.status(), VOICE_PROMPT);
    }

    #[test]
    fn end_without_result_restores_prompt() {
        let mut navigator = VoiceNavigator::default();
        navigator.start();
        navigator.on_end();
        assert_eq!(navigator.status(), VOICE_PROMPT);
        assert!(navigator.start());
    }

    #[test]
    fn error_codes_map_to_messages() {
        let mut navigator = VoiceNavigator::default();
        navigator.start();
        navigator.on_error("no-speech");
        assert_eq!(navigator.status(), NO_SPEECH);
        navigator.on_error("network");
        assert_eq!(navigator.status(), "Voice error: network");
        navigator.on_end();
        assert_eq!(navigator.status(), "Voice error: network");
    }

    #[test]
    fn unsupported_is_permanent() {
        let mut navigator = VoiceNavigator::default();
        navigator.mark_unsupported();
        assert!(!navigator.start());
        navigator.on_end();
        assert_eq!(navigator.status(), UNSUPPORTED);
        assert!(navigator.is_unsupported());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn recognizer_outside_browser_is_unsupported() {
        let built = speech::SpeechRecognizer::new("en-US", |_| {}, |_| {}, || {});
        assert!(matches!(built, Err(SpeechError::Unsupported)));

        let mut navigator = VoiceNavigator::default();
        navigator.mark_unsupported();
        assert!(!navigator.start());
        assert_eq!(navigator.status(), UNSUPPORTED);
    }
}
