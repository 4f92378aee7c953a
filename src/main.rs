//! Flashcards Frontend Entry Point

mod models;
mod error;
mod deck;
mod starfield;
mod commands;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init_logger("Flashcards", log::LevelFilter::Debug)
        .expect("failed to init console logger");
    leptos_gestures::bind_overscroll_guard();
    mount_to_body(App);
}

/// Recent log lines, oldest first. Call `wasmBindings.recent_logs()` from the
/// devtools console to see what happened before it was opened.
#[wasm_bindgen]
pub fn recent_logs() -> String {
    console_logger::recent_lines().join("\n")
}
