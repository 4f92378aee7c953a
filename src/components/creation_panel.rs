//! Creation Panel Component
//!
//! Question/answer form, shown in place of the card when the title is clicked.

use leptos::prelude::*;

use crate::context::DeckContext;

/// Delay between hiding one view and showing the other (matches styles.css)
pub const PANEL_FADE_MS: u32 = 300;

/// Card view <-> creation panel toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Card shown, panel hidden
    #[default]
    Closed,
    /// Card hidden, panel not yet shown
    Opening,
    /// Panel laid out but still transparent, one reflow before `Open`
    Showing,
    Open,
    /// Panel fading out, card still hidden
    Closing,
}

impl PanelState {
    /// State to enter now and the state to settle in after the fade.
    /// None while a toggle is already in flight.
    pub fn begin_toggle(self) -> Option<(PanelState, PanelState)> {
        match self {
            PanelState::Closed => Some((PanelState::Opening, PanelState::Showing)),
            PanelState::Open => Some((PanelState::Closing, PanelState::Closed)),
            PanelState::Opening | PanelState::Showing | PanelState::Closing => None,
        }
    }

    /// State to move to once the current one has been rendered and laid out
    pub fn after_reflow(self) -> Option<PanelState> {
        match self {
            PanelState::Showing => Some(PanelState::Open),
            _ => None,
        }
    }

    pub fn card_hidden(self) -> bool {
        self != PanelState::Closed
    }

    pub fn panel_class(self) -> &'static str {
        match self {
            PanelState::Closed | PanelState::Opening => "creation-panel",
            PanelState::Open => "creation-panel displayed visible",
            PanelState::Showing | PanelState::Closing => "creation-panel displayed",
        }
    }
}

/// Form for creating new flashcards
#[component]
pub fn CreationPanel(panel: ReadSignal<PanelState>) -> impl IntoView {
    let ctx = use_context::<DeckContext>().expect("DeckContext should be provided");

    let (question, set_question) = signal(String::new());
    let (answer, set_answer) = signal(String::new());

    let add_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&question.get(), &answer.get()) {
            set_question.set(String::new());
            set_answer.set(String::new());
        }
    };

    view! {
        <form id="creationPanel" class=move || panel.get().panel_class() on:submit=add_card>
            <input
                id="question"
                type="text"
                placeholder="Question"
                prop:value=move || question.get()
                on:input=move |ev| set_question.set(event_target_value(&ev))
            />
            <textarea
                id="answer"
                placeholder="Answer"
                prop:value=move || answer.get()
                on:input=move |ev| set_answer.set(event_target_value(&ev))
            ></textarea>
            <button id="addFlashcard" type="submit">"Add Flashcard"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let (now, after) = PanelState::Closed.begin_toggle().unwrap();
        assert_eq!((now, after), (PanelState::Opening, PanelState::Showing));
        assert!(now.card_hidden());

        let open = after.after_reflow().unwrap();
        assert_eq!(open, PanelState::Open);
        assert_eq!(open.after_reflow(), None);

        let (now, after) = open.begin_toggle().unwrap();
        assert_eq!((now, after), (PanelState::Closing, PanelState::Closed));
        assert!(!after.card_hidden());
    }

    #[test]
    fn test_toggle_ignored_mid_fade() {
        assert_eq!(PanelState::Opening.begin_toggle(), None);
        assert_eq!(PanelState::Showing.begin_toggle(), None);
        assert_eq!(PanelState::Closing.begin_toggle(), None);
    }

    #[test]
    fn test_panel_displayed_before_it_turns_visible() {
        let (_, after) = PanelState::Closed.begin_toggle().unwrap();
        assert!(after.panel_class().contains("displayed"));
        assert!(!after.panel_class().contains("visible"));
        assert!(after.after_reflow().unwrap().panel_class().contains("visible"));
    }

    #[test]
    fn test_panel_only_visible_when_open() {
        assert_eq!(PanelState::Opening.panel_class(), "creation-panel");
        assert_eq!(PanelState::Showing.panel_class(), "creation-panel displayed");
        assert_eq!(PanelState::Open.panel_class(), "creation-panel displayed visible");
        assert_eq!(PanelState::Closing.panel_class(), "creation-panel displayed");
    }
}
