//! Flashcards Frontend App
//!
//! Starfield background with the card view or creation panel on top.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_gestures::{GestureConfig, KeyBindings};

use crate::commands;
use crate::components::{CreationPanel, DeckToolbar, FlashcardView, PanelState, StarfieldCanvas, PANEL_FADE_MS};
use crate::context::DeckContext;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (panel, set_panel) = signal(PanelState::Closed);

    // Provide context to all children
    provide_context(DeckContext::new());

    // Title click swaps card and creation panel, one after the other
    let toggle_panel = move |_| {
        let Some((now, after)) = panel.get_untracked().begin_toggle() else {
            return;
        };
        set_panel.set(now);
        spawn_local(async move {
            TimeoutFuture::new(PANEL_FADE_MS).await;
            set_panel.set(after);
            let Some(next) = after.after_reflow() else {
                return;
            };
            // Let the class change render, then lay it out before fading in
            TimeoutFuture::new(0).await;
            if let Err(err) = commands::force_reflow("creationPanel") {
                log::error!("[PANEL] {}", err);
            }
            set_panel.set(next);
        });
    };

    view! {
        <StarfieldCanvas />

        <div class="app-layout">
            <h1 id="appTitle" class="app-title" title="Add flashcards" on:click=toggle_panel>
                "Flashcards"
            </h1>

            <CreationPanel panel=panel />

            <FlashcardView
                hidden=Signal::derive(move || panel.get().card_hidden())
                gesture_config=GestureConfig::default()
                key_bindings=KeyBindings::default()
            />

            <DeckToolbar />
        </div>
    }
}
