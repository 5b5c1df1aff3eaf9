mod app;
mod chart;
mod commands;
mod components;
mod pages;
mod patient;
mod provider;
mod state;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
