use dioxus::prelude::*;

use crate::hooks::next_animation_frame;

pub const COLLAPSED_CLASS: &str = "collapsed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Header,
    About,
    Projects,
    Contact,
    Quote,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Header,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Quote,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Header => "header-section",
            SectionId::About => "about-section",
            SectionId::Projects => "projects-section",
            SectionId::Contact => "contact-section",
            SectionId::Quote => "quote-section",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One flag per section. The toggle button's `collapsed` class and the
/// section's `display: none` are both derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    collapsed: [bool; SectionId::ALL.len()],
}

impl SectionVisibility {
    pub fn is_collapsed(&self, id: SectionId) -> bool {
        self.collapsed[id.index()]
    }

    pub fn toggle(&mut self, id: SectionId) {
        let slot = &mut self.collapsed[id.index()];
        *slot = !*slot;
    }

    /// Opens the section and returns the element id to scroll to once the
    /// open state has reached the DOM.
    pub fn reveal(&mut self, id: SectionId) -> &'static str {
        self.collapsed[id.index()] = false;
        id.dom_id()
    }
}

pub fn use_sections() -> Signal<SectionVisibility> {
    use_context::<Signal<SectionVisibility>>()
}

/// Forces the section open and brings it into view. A collapsed section has
/// no layout box until the re-render lands, so the scroll waits two frames.
pub fn reveal_and_scroll(mut sections: Signal<SectionVisibility>, id: SectionId) {
    let dom_id = sections.write().reveal(id);
    schedule(async move {
        next_animation_frame().await;
        next_animation_frame().await;
        scroll_into_view(dom_id);
    });
}

// Voice results arrive from browser callbacks outside the Dioxus runtime,
// so the scroll is queued on the wasm executor directly.
#[cfg(target_arch = "wasm32")]
fn schedule(task: impl std::future::Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(task);
}

// Nothing to scroll outside the browser.
#[cfg(not(target_arch = "wasm32"))]
fn schedule(_task: impl std::future::Future<Output = ()> + 'static) {}

#[cfg(target_arch = "wasm32")]
fn scroll_into_view(dom_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(dom_id))
    else {
        tracing::debug!("sections: no element for {dom_id}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_into_view(_dom_id: &str) {}

#[component]
pub fn SectionToggle(target: SectionId, label: String) -> Element {
    let mut sections = use_sections();
    let collapsed = sections.read().is_collapsed(target);
    let class = if collapsed {
        format!("section-toggle {COLLAPSED_CLASS}")
    } else {
        "section-toggle".to_string()
    };
    let arrow = if collapsed { "▸" } else { "▾" };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-target": target.dom_id(),
            aria_expanded: if collapsed { "false" } else { "true" },
            onclick: move |_| sections.write().toggle(target),
            "{arrow} {label}"
        }
    }
}

#[component]
pub fn CollapsibleSection(id: SectionId, title: String, children: Element) -> Element {
    let sections = use_sections();
    let collapsed = sections.read().is_collapsed(id);
    let style = if collapsed { "display: none;" } else { "" };
    let toggle_label = if collapsed { "Show" } else { "Hide" };

    rsx! {
        div { class: "section-heading",
            h2 { "{title}" }
            SectionToggle { target: id, label: toggle_label.to_string() }
        }
        section { id: id.dom_id(), class: "page-section", style: "{style}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_flips_only_its_section() {
        let mut sections = SectionVisibility::default();
        sections.toggle(SectionId::Projects);
        assert!(sections.is_collapsed(SectionId::Projects));
        assert!(!sections.is_collapsed(SectionId::Contact));
        sections.toggle(SectionId::Projects);
        assert!(!sections.is_collapsed(SectionId::Projects));
    }

    #[test]
    fn reveal_forces_visible() {
        let mut sections = SectionVisibility::default();
        sections.toggle(SectionId::Quote);
        sections.reveal(SectionId::Quote);
        assert!(!sections.is_collapsed(SectionId::Quote));
        sections.reveal(SectionId::Quote);
        assert!(!sections.is_collapsed(SectionId::Quote));
    }

    #[test]
    fn collapsed_section_is_open_before_scroll_target_is_handed_out() {
        let mut sections = SectionVisibility::default();
        sections.toggle(SectionId::Projects);
        assert!(sections.is_collapsed(SectionId::Projects));

        let target = sections.reveal(SectionId::Projects);
        assert_eq!(target, "projects-section");
        assert!(!sections.is_collapsed(SectionId::Projects));
        assert!(!sections.is_collapsed(SectionId::Contact));
    }

    #[test]
    fn dom_ids_are_distinct() {
        let mut ids: Vec<&str> = SectionId::ALL.iter().map(|id| id.dom_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }
}
