mod config;
mod contact;
mod date;
mod flip_card;
mod greeting;
mod hooks;
mod projects;
mod quote;
mod routes;
mod scroll_reveal;
mod sections;
mod session_timer;
mod storage;
mod theme;
mod voice;

fn main() {
    dioxus::launch(routes::App);
}
