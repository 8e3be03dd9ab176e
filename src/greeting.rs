use dioxus::prelude::*;

use crate::storage::{BrowserStore, KeyValueStore, VISITOR_NAME_KEY};

pub const LOGGED_IN: &str = "Logged In";
pub const LOGGED_OUT: &str = "Logged Out";
pub const FAREWELL: &str = "goodbye!";

pub fn welcome(name: &str) -> String {
    let name = if name.is_empty() { "no name" } else { name };
    format!("Welcome back, {name}!")
}

/// Mock login. Only the name survives a reload; every page load starts
/// logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visitor {
    pub name: String,
    pub logged_in: bool,
    pub greeting: String,
}

impl Visitor {
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(VISITOR_NAME_KEY).filter(|name| !name.is_empty()) {
            Some(name) => Self {
                greeting: welcome(&name),
                name,
                logged_in: false,
            },
            None => Self::default(),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.logged_in {
            LOGGED_IN
        } else {
            LOGGED_OUT
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.logged_in {
            "Logout"
        } else {
            "Login"
        }
    }

    pub fn toggle_login(&mut self, store: &impl KeyValueStore) {
        if self.logged_in {
            self.logged_in = false;
            self.greeting = FAREWELL.to_string();
            return;
        }
        self.logged_in = true;
        self.greeting = welcome(&self.name);
        store.set(VISITOR_NAME_KEY, &self.name);
    }
}

#[component]
pub fn GreetingPanel() -> Element {
    let mut visitor = use_signal(|| Visitor::load(&BrowserStore));

    rsx! {
        div { class: "greeting-panel",
            input {
                id: "visitor-name",
                r#type: "text",
                placeholder: "Your name",
                value: "{visitor.read().name}",
                oninput: move |event| visitor.write().name = event.value(),
            }
            button {
                id: "login-btn",
                r#type: "button",
                onclick: move |_| {
                    visitor.write().toggle_login(&BrowserStore);
                    tracing::debug!("greeting: {}", visitor.read().status());
                },
                "{visitor.read().button_label()}"
            }
            span { id: "login-status", class: "login-status", "{visitor.read().status()}" }
            p { id: "greeting", class: "greeting", "{visitor.read().greeting}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn saved_name_greets_on_load_but_stays_logged_out() {
        let store = MemoryStore::with(&[(VISITOR_NAME_KEY, "Sam")]);
        let visitor = Visitor::load(&store);
        assert_eq!(visitor.name, "Sam");
        assert_eq!(visitor.greeting, "Welcome back, Sam!");
        assert_eq!(visitor.status(), LOGGED_OUT);
    }

    #[test]
    fn login_persists_name_and_logout_says_goodbye() {
        let store = MemoryStore::default();
        let mut visitor = Visitor::load(&store);
        visitor.name = "Noor".into();
        visitor.toggle_login(&store);
        assert_eq!(visitor.status(), LOGGED_IN);
        assert_eq!(visitor.button_label(), "Logout");
        assert_eq!(visitor.greeting, "Welcome back, Noor!");
        assert_eq!(store.get(VISITOR_NAME_KEY).as_deref(), Some("Noor"));

        visitor.toggle_login(&store);
        assert_eq!(visitor.status(), LOGGED_OUT);
        assert_eq!(visitor.button_label(), "Login");
        assert_eq!(visitor.greeting, FAREWELL);
    }

    #[test]
    fn blank_name_logs_in_as_no_name() {
        let store = MemoryStore::default();
        let mut visitor = Visitor::load(&store);
        visitor.toggle_login(&store);
        assert_eq!(visitor.greeting, "Welcome back, no name!");
        assert_eq!(store.get(VISITOR_NAME_KEY).as_deref(), Some(""));
    }
}
