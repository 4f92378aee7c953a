//! Deck Model
//!
//! Ordered flashcards, the cursor, the visible face and the
//! navigation state machine. No DOM access; see `context.rs` for the
//! timers and browser calls that drive it.

use chrono::{DateTime, Utc};
use leptos_gestures::Direction;
use rand::Rng;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::Flashcard;

/// Length of the swipe-out animation (matches styles.css)
pub const TRANSITION_MS: u32 = 600;

pub const EMPTY_QUESTION: &str = "No flashcards yet";
pub const EMPTY_ANSWER: &str = "Create your first flashcard!";

/// Which side of the current card is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Question,
    Answer,
}

/// Navigation state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    Idle,
    /// Card is flying out; further navigation is dropped
    Transitioning(Direction),
}

/// Text shown on the card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDisplay {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Flashcard>,
    cursor: usize,
    face: CardFace,
    transition: Transition,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck with the given cards in the given order, cursor on the first
    #[cfg(test)]
    pub fn from_cards(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Index of the displayed card, None when the deck is empty
    pub fn cursor(&self) -> Option<usize> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.cursor)
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition != Transition::Idle
    }

    /// Add a card created now. See [`Deck::add_at`].
    pub fn add<R: Rng + ?Sized>(&mut self, question: &str, answer: &str, rng: &mut R) -> Option<u64> {
        self.add_at(question, answer, Utc::now(), rng)
    }

    /// Append a card and reshuffle.
    ///
    /// Returns the new card's id, or None if either text is empty.
    pub fn add_at<R: Rng + ?Sized>(&mut self, question: &str, answer: &str, now: DateTime<Utc>, rng: &mut R) -> Option<u64> {
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        let id = self.next_id(now.timestamp_millis().max(0) as u64);
        self.cards.push(Flashcard::new(id, question.to_string(), answer.to_string(), now));
        self.shuffle(rng);
        Some(id)
    }

    /// First id at or after `candidate` not already used in the deck
    fn next_id(&self, candidate: u64) -> u64 {
        let mut id = candidate;
        while self.cards.iter().any(|card| card.id == id) {
            id += 1;
        }
        id
    }

    /// Fisher-Yates shuffle, cursor back to the first card
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
        self.cursor = 0;
        self.refresh();
    }

    /// Show the question side of the current card
    pub fn refresh(&mut self) {
        self.face = CardFace::Question;
    }

    pub fn display(&self) -> CardDisplay {
        match self.current() {
            Some(card) => CardDisplay {
                question: card.question.clone(),
                answer: card.answer.clone(),
            },
            None => CardDisplay {
                question: EMPTY_QUESTION.to_string(),
                answer: EMPTY_ANSWER.to_string(),
            },
        }
    }

    pub fn flip(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.face = match self.face {
            CardFace::Question => CardFace::Answer,
            CardFace::Answer => CardFace::Question,
        };
    }

    /// Idle -> Transitioning. Returns false if the request was dropped.
    pub fn begin_navigate(&mut self, direction: Direction) -> bool {
        if self.is_transitioning() || self.cards.is_empty() {
            return false;
        }
        self.transition = Transition::Transitioning(direction);
        true
    }

    /// Transitioning -> Idle, moving the cursor one card with wraparound
    pub fn finish_navigate(&mut self) -> Option<Direction> {
        let Transition::Transitioning(direction) = self.transition else {
            return None;
        };
        self.transition = Transition::Idle;

        let len = self.cards.len();
        if len > 0 {
            self.cursor = match direction {
                Direction::Forward => (self.cursor + 1) % len,
                Direction::Backward => (self.cursor + len - 1) % len,
            };
        }
        self.refresh();
        Some(direction)
    }

    /// Pretty-printed JSON array of all cards
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.cards)?)
    }

    /// Replace every card with the parsed contents and reshuffle.
    ///
    /// On error the deck is left untouched.
    pub fn import_json<R: Rng + ?Sized>(&mut self, contents: &str, rng: &mut R) -> AppResult<usize> {
        let value: Value = serde_json::from_str(contents)?;
        let Value::Array(elements) = value else {
            return Err(AppError::NotAnArray);
        };
        self.cards = elements.iter().map(Flashcard::from_json_lenient).collect();
        self.shuffle(rng);
        Ok(self.cards.len())
    }
}
