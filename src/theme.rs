use dioxus::prelude::*;

use crate::storage::{BrowserStore, KeyValueStore, THEME_KEY};

pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than the exact stored string `dark` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str());
        self.theme
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut controller = use_signal(|| ThemeController::load(BrowserStore));

    use_effect(move || {
        let theme = controller.read().theme();
        apply_root_theme(theme);
    });

    let label = match controller.read().theme() {
        Theme::Light => "🌙 Dark mode",
        Theme::Dark => "☀️ Light mode",
    };

    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            class: "theme-toggle",
            onclick: move |_| {
                let theme = controller.write().toggle();
                tracing::debug!("theme: switched to {}", theme.as_str());
            },
            "{label}"
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_root_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let _ = root
        .class_list()
        .toggle_with_force(DARK_THEME_CLASS, theme == Theme::Dark);
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_root_theme(_theme: Theme) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_or_unknown_value_is_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn toggle_persists_result() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(&store);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_persisted_value() {
        let store = MemoryStore::with(&[(THEME_KEY, "dark")]);
        let mut controller = ThemeController::load(&store);
        assert_eq!(controller.theme(), Theme::Dark);
        controller.toggle();
        controller.toggle();

        let reloaded = ThemeController::load(&store);
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
