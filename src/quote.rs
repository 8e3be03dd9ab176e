use dioxus::prelude::*;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::hooks::sleep_ms;

const REVEAL_DELAY_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub author: String,
    pub quote: String,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Request(String),
    #[error("quote request failed: status {0}")]
    Status(u16),
    #[error("quote decode failed: {0}")]
    Decode(String),
    #[error("quote response missing {0}")]
    MissingField(&'static str),
}

#[derive(Deserialize)]
struct QuotePayload {
    quote: Option<String>,
    author: Option<String>,
}

pub fn parse_quote(body: &str) -> Result<Quote, QuoteError> {
    let payload: QuotePayload =
        serde_json::from_str(body).map_err(|err| QuoteError::Decode(err.to_string()))?;
    let quote = payload
        .quote
        .filter(|value| !value.is_empty())
        .ok_or(QuoteError::MissingField("quote"))?;
    let author = payload
        .author
        .filter(|value| !value.is_empty())
        .ok_or(QuoteError::MissingField("author"))?;
    Ok(Quote { author, quote })
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_quote_html(quote: &Quote) -> String {
    format!(
        "<strong>{}</strong><br><br>{}",
        escape_html(&quote.author),
        escape_html(&quote.quote)
    )
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuotePanel {
    /// Both panels hidden while a request is in flight.
    #[default]
    Hidden,
    Content(String),
    Error,
}

async fn request_quote(url: &str) -> Result<Quote, QuoteError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| QuoteError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(QuoteError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| QuoteError::Decode(err.to_string()))?;
    parse_quote(&body)
}

/// Every call issues its own request; a retry does not cancel one that is
/// still in flight.
async fn load_quote(url: String, mut panel: Signal<QuotePanel>) {
    panel.set(QuotePanel::Hidden);
    match request_quote(&url).await {
        Ok(quote) => {
            sleep_ms(REVEAL_DELAY_MS).await;
            panel.set(QuotePanel::Content(render_quote_html(&quote)));
        }
        Err(err) => {
            tracing::error!("Error fetching quote: {err}");
            panel.set(QuotePanel::Error);
        }
    }
}

#[component]
pub fn QuoteSection() -> Element {
    let config = use_context::<RuntimeConfig>();
    let panel = use_signal(QuotePanel::default);
    let url = config.quote_api_url.clone();

    use_effect({
        let url = url.clone();
        move || {
            spawn(load_quote(url.clone(), panel));
        }
    });

    let current = panel.read().clone();
    rsx! {
        div { class: "quote-box",
            {match current {
                QuotePanel::Hidden => rsx! {
                    p { class: "quote-loading", "Loading quote..." }
                },
                QuotePanel::Content(html) => rsx! {
                    div { id: "quote-content", class: "quote-content",
                        p { id: "quote-text", dangerous_inner_html: "{html}" }
                    }
                },
                QuotePanel::Error => rsx! {
                    div { id: "quote-error", class: "quote-error",
                        p { "Could not load a quote right now." }
                    }
                },
            }}
            button {
                id: "retry-quote",
                r#type: "button",
                class: "retry-btn",
                onclick: move |_| {
                    spawn(load_quote(url.clone(), panel));
                },
                "New quote"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_author_then_quote() {
        let quote = parse_quote(r#"{"id":7,"quote":"x","author":"y"}"#).unwrap();
        assert_eq!(render_quote_html(&quote), "<strong>y</strong><br><br>x");
    }

    #[test]
    fn missing_author_is_an_error() {
        let err = parse_quote(r#"{"quote":"x"}"#).unwrap_err();
        assert!(matches!(err, QuoteError::MissingField("author")));
    }

    #[test]
    fn empty_fields_are_errors() {
        let err = parse_quote(r#"{"quote":"","author":"y"}"#).unwrap_err();
        assert!(matches!(err, QuoteError::MissingField("quote")));
    }

    #[test]
    fn non_json_is_a_decode_error() {
        let err = parse_quote("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, QuoteError::Decode(_)));
    }

    #[test]
    fn markup_in_quote_is_escaped() {
        let quote = Quote {
            author: "A & B".into(),
            quote: "<script>".into(),
        };
        assert_eq!(
            render_quote_html(&quote),
            "<strong>A &amp; B</strong><br><br>&lt;script&gt;"
        );
    }
}
