//! UI Components
//!
//! Leptos components for the card, the creation form and the background.

mod creation_panel;
mod deck_toolbar;
mod flashcard_view;
mod starfield_canvas;

pub use creation_panel::{CreationPanel, PanelState, PANEL_FADE_MS};
pub use deck_toolbar::DeckToolbar;
pub use flashcard_view::FlashcardView;
pub use starfield_canvas::StarfieldCanvas;
