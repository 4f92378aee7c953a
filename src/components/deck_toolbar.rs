//! Deck Toolbar Component
//!
//! Shuffle, export and import buttons plus the card counter.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::DeckContext;

#[component]
pub fn DeckToolbar() -> impl IntoView {
    let ctx = use_context::<DeckContext>().expect("DeckContext should be provided");
    let file_input = NodeRef::<leptos::html::Input>::new();

    // The file input stays hidden; the Import button opens its picker
    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = commands::take_selected_file(&input) {
            ctx.import_file(file);
        }
    };

    let count_label = move || match ctx.position() {
        Some((index, total)) => format!("{} / {}", index, total),
        None => "0 cards".to_string(),
    };

    view! {
        <div class="deck-toolbar">
            <button id="shuffleFlashcards" on:click=move |_| ctx.shuffle()>"Shuffle"</button>
            <button id="exportFlashcards" on:click=move |_| ctx.export()>"Export"</button>
            <button id="importButton" on:click=open_picker>"Import"</button>
            <input
                id="importFlashcards"
                type="file"
                accept=".json,application/json"
                style="display: none"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
        <p class="card-count">{count_label}</p>
    }
}
