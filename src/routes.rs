use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::use_runtime_config;
use crate::contact::ContactSection;
use crate::greeting::GreetingPanel;
use crate::projects::ProjectsSection;
use crate::quote::QuoteSection;
use crate::scroll_reveal::{use_scroll_reveal, Reveal};
use crate::sections::{
    reveal_and_scroll, use_sections, CollapsibleSection, SectionId, SectionVisibility,
};
use crate::session_timer::SessionCounter;
use crate::theme::ThemeToggle;
use crate::voice::VoiceNavigatorPanel;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SectionVisibility::default()));
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Ibrahim | Portfolio" }
            div { class: "page loading",
                h1 { "Loading..." }
            }
        };
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Ibrahim | Portfolio" }
        document::Meta { name: "description", content: "Projects, quotes and contact details for Ibrahim." }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    use_scroll_reveal();
    let sections = use_sections();

    rsx! {
        header { class: "site-header",
            div { class: "header-bar",
                h1 { class: "site-title", "Ibrahim" }
                ThemeToggle {}
            }
            CollapsibleSection { id: SectionId::Header, title: "Navigation".to_string(),
                nav { class: "site-nav", aria_label: "Sections",
                    for section in [SectionId::About, SectionId::Projects, SectionId::Quote, SectionId::Contact] {
                        a {
                            href: format!("#{}", section.dom_id()),
                            onclick: move |event: MouseEvent| {
                                event.prevent_default();
                                reveal_and_scroll(sections, section);
                            },
                            {nav_label(section)}
                        }
                    }
                }
            }
            VoiceNavigatorPanel {}
            GreetingPanel {}
            SessionCounter {}
        }
        main { class: "site-main",
            CollapsibleSection { id: SectionId::About, title: "About Ibrahim".to_string(),
                Reveal { key_name: "about".to_string(),
                    p {
                        "I'm Ibrahim, a developer who likes small tools, fast pages and "
                        "software that explains itself. This page collects a few things I've built."
                    }
                }
            }
            CollapsibleSection { id: SectionId::Projects, title: "Projects".to_string(),
                Reveal { key_name: "projects".to_string(), ProjectsSection {} }
            }
            CollapsibleSection { id: SectionId::Quote, title: "Inspiration".to_string(),
                Reveal { key_name: "quote".to_string(), QuoteSection {} }
            }
            CollapsibleSection { id: SectionId::Contact, title: "Contact".to_string(),
                Reveal { key_name: "contact".to_string(), ContactSection {} }
            }
        }
        footer { class: "site-footer",
            p { "© Ibrahim" }
        }
    }
}

fn nav_label(section: SectionId) -> &'static str {
    match section {
        SectionId::Header => "Top",
        SectionId::About => "About",
        SectionId::Projects => "Projects",
        SectionId::Contact => "Contact",
        SectionId::Quote => "Quotes",
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not found | Ibrahim" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "back-link", "Back to the portfolio" }
        }
    }
}
