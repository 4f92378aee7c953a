//! Deck Context
//!
//! The deck controller, provided to components via Leptos Context API.
//! Wraps the pure `Deck` model with timers, logging and browser calls.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_gestures::{Direction, Intent};

use crate::commands;
use crate::deck::{CardDisplay, CardFace, Deck, Transition, TRANSITION_MS};
use crate::error::AppResult;

pub const EXPORT_FILE_NAME: &str = "flashcards_export.json";
pub const IMPORT_ERROR_MESSAGE: &str = "Error importing flashcards. Please check the file format.";
pub const READ_ERROR_MESSAGE: &str = "Could not read the selected file.";

/// Deck state shared by the card, form and toolbar
#[derive(Clone, Copy)]
pub struct DeckContext {
    deck: RwSignal<Deck>,
}

impl DeckContext {
    pub fn new() -> Self {
        Self {
            deck: RwSignal::new(Deck::new()),
        }
    }

    pub fn display(&self) -> CardDisplay {
        self.deck.with(Deck::display)
    }

    pub fn face(&self) -> CardFace {
        self.deck.with(Deck::face)
    }

    pub fn transition(&self) -> Transition {
        self.deck.with(Deck::transition)
    }

    /// True while a swipe-out is playing; gestures are suppressed
    pub fn busy(&self) -> Signal<bool> {
        let deck = self.deck;
        Signal::derive(move || deck.with(Deck::is_transitioning))
    }

    /// (1-based position, total), None when empty
    pub fn position(&self) -> Option<(usize, usize)> {
        self.deck.with(|deck| deck.cursor().map(|c| (c + 1, deck.len())))
    }

    /// Add a card. Returns false when question or answer is empty.
    pub fn add(&self, question: &str, answer: &str) -> bool {
        let added = self
            .deck
            .try_update(|deck| deck.add(question, answer, &mut rand::thread_rng()))
            .flatten();
        match added {
            Some(id) => {
                log::info!("[DECK] Added card {}", id);
                true
            }
            None => false,
        }
    }

    pub fn shuffle(&self) {
        self.deck.update(|deck| deck.shuffle(&mut rand::thread_rng()));
        log::debug!("[DECK] Shuffled");
    }

    pub fn flip(&self) {
        self.deck.update(Deck::flip);
    }

    /// Play the swipe-out, then move the cursor once it has finished.
    /// Dropped while another transition is running or the deck is empty.
    pub fn navigate(&self, direction: Direction) {
        let started = self
            .deck
            .try_update(|deck| deck.begin_navigate(direction))
            .unwrap_or(false);
        if !started {
            return;
        }
        log::debug!("[DECK] Navigating {:?}", direction);

        let deck = self.deck;
        spawn_local(async move {
            TimeoutFuture::new(TRANSITION_MS).await;
            deck.update(|deck| {
                deck.finish_navigate();
            });
        });
    }

    pub fn apply(&self, intent: Intent) {
        match intent {
            Intent::Flip => self.flip(),
            Intent::Navigate(direction) => self.navigate(direction),
        }
    }

    /// Download every card as `flashcards_export.json`
    pub fn export(&self) {
        let result = self
            .deck
            .with_untracked(Deck::to_json)
            .and_then(|json| commands::download_text(EXPORT_FILE_NAME, "application/json", &json));
        match result {
            Ok(()) => log::info!("[DECK] Exported {} cards", self.deck.with_untracked(Deck::len)),
            Err(err) => log::error!("[DECK] Export failed: {}", err),
        }
    }

    /// Replace the deck with the contents of `file`.
    /// A malformed file is reported with an alert and changes nothing.
    pub fn import_file(&self, file: web_sys::File) {
        let deck = self.deck;
        spawn_local(async move {
            match import_into(deck, &file).await {
                Ok(count) => log::info!("[DECK] Imported {} cards from {}", count, file.name()),
                Err(err) => {
                    log::error!("[DECK] Import of {} failed: {}", file.name(), err);
                    if err.is_bad_import() {
                        commands::alert(IMPORT_ERROR_MESSAGE);
                    } else {
                        commands::alert(READ_ERROR_MESSAGE);
                    }
                }
            }
        });
    }
}

async fn import_into(deck: RwSignal<Deck>, file: &web_sys::File) -> AppResult<usize> {
    let contents = commands::read_file_text(file).await?;
    deck.try_update(|deck| deck.import_json(&contents, &mut rand::thread_rng()))
        .unwrap_or(Ok(0))
}
