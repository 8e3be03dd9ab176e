use std::cmp::Ordering;

use dioxus::prelude::*;

use crate::date::{format_month_year, parse_iso_date};
use crate::flip_card::FlipCard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl LevelFilter {
    pub const CHOICES: [LevelFilter; 4] = [
        LevelFilter::All,
        LevelFilter::Only(Level::Beginner),
        LevelFilter::Only(Level::Intermediate),
        LevelFilter::Only(Level::Advanced),
    ];

    fn label(self) -> &'static str {
        match self {
            LevelFilter::All => "All",
            LevelFilter::Only(Level::Beginner) => "Beginner",
            LevelFilter::Only(Level::Intermediate) => "Intermediate",
            LevelFilter::Only(Level::Advanced) => "Advanced",
        }
    }

    fn data_value(self) -> &'static str {
        match self {
            LevelFilter::All => "all",
            LevelFilter::Only(level) => level.as_str(),
        }
    }
}

pub fn level_message(filter: LevelFilter) -> &'static str {
    match filter {
        LevelFilter::All => {
            "Showing all projects. Select a skill level to see tailored recommendations!"
        }
        LevelFilter::Only(Level::Beginner) => {
            "🌱 Great choice! These beginner projects will help you build a strong foundation."
        }
        LevelFilter::Only(Level::Intermediate) => {
            "🚀 Perfect! These intermediate projects will level up your skills."
        }
        LevelFilter::Only(Level::Advanced) => {
            "⭐ Excellent! These advanced projects will challenge and refine your expertise."
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date-desc" => Some(SortOrder::DateDesc),
            "date-asc" => Some(SortOrder::DateAsc),
            "name-asc" => Some(SortOrder::NameAsc),
            "name-desc" => Some(SortOrder::NameDesc),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub level: Level,
    pub category: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Portfolio Website",
        level: Level::Beginner,
        category: "web",
        date: "2024-01-15",
        summary: "This page: theming, voice navigation and a few small widgets.",
        details: "Built with Rust and Dioxus, compiled to WebAssembly.",
    },
    Project {
        name: "Weather Dashboard",
        level: Level::Intermediate,
        category: "web",
        date: "2024-05-20",
        summary: "Forecasts for saved cities with hourly charts.",
        details: "Consumes a public forecast API and caches responses per city.",
    },
    Project {
        name: "Task Tracker CLI",
        level: Level::Beginner,
        category: "tool",
        date: "2023-09-10",
        summary: "A to-do list that lives in the terminal.",
        details: "Stores tasks in a plain text file and supports tags and due dates.",
    },
    Project {
        name: "Snake",
        level: Level::Intermediate,
        category: "game",
        date: "2023-12-01",
        summary: "The classic, playable with keyboard or touch.",
        details: "Fixed-step game loop with a canvas renderer.",
    },
    Project {
        name: "Markdown Previewer",
        level: Level::Advanced,
        category: "web",
        date: "2025-02-11",
        summary: "Live preview editor with syntax highlighting.",
        details: "Incremental parsing keeps large documents responsive.",
    },
    Project {
        name: "Log Analyzer",
        level: Level::Advanced,
        category: "tool",
        date: "2024-10-03",
        summary: "Summarizes error spikes from server logs.",
        details: "Streams files line by line and groups messages by fingerprint.",
    },
];

pub fn all_projects() -> Vec<Project> {
    PROJECTS.to_vec()
}

fn compare_dates(left: &str, right: &str) -> Ordering {
    parse_iso_date(left).cmp(&parse_iso_date(right))
}

#[cfg(target_arch = "wasm32")]
fn compare_names(left: &str, right: &str) -> Ordering {
    let collated = js_sys::JsString::from(left).locale_compare(
        right,
        &js_sys::Array::new(),
        &js_sys::Object::new(),
    );
    collated.cmp(&0)
}

#[cfg(not(target_arch = "wasm32"))]
fn compare_names(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

pub fn compare_projects(left: &Project, right: &Project, order: SortOrder) -> Ordering {
    match order {
        SortOrder::DateDesc => compare_dates(right.date, left.date),
        SortOrder::DateAsc => compare_dates(left.date, right.date),
        SortOrder::NameAsc => compare_names(left.name, right.name),
        SortOrder::NameDesc => compare_names(right.name, left.name),
    }
}

/// The project list is fixed at load; filters and sorting only change
/// which entries are shown and in what order.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectBoard {
    projects: Vec<Project>,
    order: Vec<usize>,
    level: LevelFilter,
    category: CategoryFilter,
    show_empty_state: bool,
}

impl ProjectBoard {
    pub fn new(projects: Vec<Project>) -> Self {
        let order = (0..projects.len()).collect();
        // Decided once from the initial count, never after filtering.
        let show_empty_state = projects.is_empty();
        Self {
            projects,
            order,
            level: LevelFilter::All,
            category: CategoryFilter::All,
            show_empty_state,
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn show_empty_state(&self) -> bool {
        self.show_empty_state
    }

    pub fn select_level(&mut self, level: LevelFilter) -> &'static str {
        self.level = level;
        level_message(level)
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn is_visible(&self, project: &Project) -> bool {
        let level_ok = match self.level {
            LevelFilter::All => true,
            LevelFilter::Only(level) => project.level == level,
        };
        let category_ok = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category.as_str(),
        };
        level_ok && category_ok
    }

    pub fn sort(&mut self, order: SortOrder) {
        let projects = &self.projects;
        self.order
            .sort_by(|a, b| compare_projects(&projects[*a], &projects[*b], order));
    }

    /// Every project in display order, paired with its visibility.
    pub fn rows(&self) -> impl Iterator<Item = (&Project, bool)> + '_ {
        self.order.iter().map(move |index| {
            let project = &self.projects[*index];
            (project, self.is_visible(project))
        })
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for project in &self.projects {
            if !categories.contains(&project.category) {
                categories.push(project.category);
            }
        }
        categories
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    let mut board = use_signal(|| ProjectBoard::new(all_projects()));
    let mut message = use_signal(|| level_message(LevelFilter::All));

    let current_level = board.read().level();
    let current_category = board.read().category().clone();
    let categories = board.read().categories();
    let rows: Vec<(Project, bool)> = board
        .read()
        .rows()
        .map(|(project, visible)| (project.clone(), visible))
        .collect();

    rsx! {
        div { class: "project-controls",
            div { class: "level-buttons",
                for choice in LevelFilter::CHOICES {
                    button {
                        r#type: "button",
                        class: if choice == current_level { "level-btn active" } else { "level-btn" },
                        "data-level": choice.data_value(),
                        onclick: move |_| {
                            let text = board.write().select_level(choice);
                            message.set(text);
                        },
                        "{choice.label()}"
                    }
                }
            }
            div { id: "levelMessage", class: "level-message",
                p { class: "message-text", "{message}" }
            }
            div { class: "filter-buttons",
                button {
                    r#type: "button",
                    class: if current_category == CategoryFilter::All { "filter-btn active" } else { "filter-btn" },
                    "data-filter": "all",
                    onclick: move |_| board.write().select_category(CategoryFilter::All),
                    "All"
                }
                for category in categories {
                    button {
                        r#type: "button",
                        class: if current_category == CategoryFilter::Only(category.to_string()) { "filter-btn active" } else { "filter-btn" },
                        "data-filter": category,
                        onclick: move |_| board.write().select_category(CategoryFilter::Only(category.to_string())),
                        "{category}"
                    }
                }
            }
            label { r#for: "sortSelect", "Sort by " }
            select {
                id: "sortSelect",
                onchange: move |event| {
                    match SortOrder::parse(&event.value()) {
                        Some(order) => board.write().sort(order),
                        None => tracing::debug!("projects: ignoring sort value {}", event.value()),
                    }
                },
                option { value: "", "Default" }
                option { value: "date-desc", "Newest first" }
                option { value: "date-asc", "Oldest first" }
                option { value: "name-asc", "Name A-Z" }
                option { value: "name-desc", "Name Z-A" }
            }
        }
        div { id: "projects-container", class: "projects-grid",
            for (project, visible) in rows {
                div {
                    key: "{project.name}",
                    class: if visible { "project" } else { "project hidden" },
                    "data-level": project.level.as_str(),
                    "data-category": project.category,
                    "data-date": project.date,
                    "data-name": project.name,
                    FlipCard {
                        title: project.name.to_string(),
                        front: rsx! {
                            h3 { "{project.name}" }
                            p { class: "project-meta", "{project.level.as_str()} · {project.category} · {format_month_year(project.date)}" }
                            p { "{project.summary}" }
                        },
                        back: rsx! {
                            p { "{project.details}" }
                        },
                    }
                }
            }
        }
        if board.read().show_empty_state() {
            p { id: "empty-projects", class: "empty-state", "No projects to show yet. Check back soon!" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(name: &'static str, level: Level, category: &'static str, date: &'static str) -> Project {
        Project {
            name,
            level,
            category,
            date,
            summary: "",
            details: "",
        }
    }

    fn sample() -> ProjectBoard {
        ProjectBoard::new(vec![
            project("Banana", Level::Beginner, "web", "2024-02-01"),
            project("Apple", Level::Advanced, "tool", "2023-06-15"),
            project("Cherry", Level::Beginner, "tool", "2025-01-20"),
            project("Date", Level::Advanced, "web", "2024-11-30"),
        ])
    }

    fn names(board: &ProjectBoard) -> Vec<&'static str> {
        board
            .rows()
            .filter_map(|(project, visible)| visible.then_some(project.name))
            .collect()
    }

    #[test]
    fn level_filter_ignores_category_when_all() {
        let mut board = sample();
        board.select_level(LevelFilter::Only(Level::Beginner));
        assert_eq!(names(&board), vec!["Banana", "Cherry"]);
    }

    #[test]
    fn both_filters_must_match() {
        let mut board = sample();
        board.select_level(LevelFilter::Only(Level::Advanced));
        board.select_category(CategoryFilter::Only("web".into()));
        assert_eq!(names(&board), vec!["Date"]);
        board.select_level(LevelFilter::All);
        assert_eq!(names(&board), vec!["Banana", "Date"]);
    }

    #[test]
    fn selecting_level_returns_its_message() {
        let mut board = sample();
        let text = board.select_level(LevelFilter::Only(Level::Intermediate));
        assert_eq!(
            text,
            "🚀 Perfect! These intermediate projects will level up your skills."
        );
        assert!(names(&board).is_empty());
    }

    #[test]
    fn sorts_by_name_descending() {
        let mut board = ProjectBoard::new(vec![
            project("Banana", Level::Beginner, "web", "2024-01-01"),
            project("Apple", Level::Beginner, "web", "2024-01-01"),
            project("Cherry", Level::Beginner, "web", "2024-01-01"),
        ]);
        board.sort(SortOrder::NameDesc);
        assert_eq!(names(&board), vec!["Cherry", "Banana", "Apple"]);
        board.sort(SortOrder::NameAsc);
        assert_eq!(names(&board), vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn sorts_by_date_both_ways() {
        let mut board = sample();
        board.sort(SortOrder::DateDesc);
        assert_eq!(names(&board), vec!["Cherry", "Date", "Banana", "Apple"]);
        board.sort(SortOrder::DateAsc);
        assert_eq!(names(&board), vec!["Apple", "Banana", "Date", "Cherry"]);
    }

    #[test]
    fn sorting_keeps_hidden_projects_hidden() {
        let mut board = sample();
        board.select_category(CategoryFilter::Only("tool".into()));
        board.sort(SortOrder::NameAsc);
        assert_eq!(names(&board), vec!["Apple", "Cherry"]);
        assert_eq!(board.rows().count(), 4);
    }

    #[test]
    fn unknown_sort_value_is_rejected() {
        assert_eq!(SortOrder::parse("name-desc"), Some(SortOrder::NameDesc));
        assert_eq!(SortOrder::parse("popularity"), None);
    }

    #[test]
    fn empty_state_is_not_recomputed_after_filtering() {
        let mut board = sample();
        assert!(!board.show_empty_state());
        board.select_level(LevelFilter::Only(Level::Intermediate));
        assert!(names(&board).is_empty());
        assert!(!board.show_empty_state());

        assert!(ProjectBoard::new(Vec::new()).show_empty_state());
    }

    #[test]
    fn categories_are_distinct_in_order() {
        assert_eq!(sample().categories(), vec!["web", "tool"]);
    }
}
