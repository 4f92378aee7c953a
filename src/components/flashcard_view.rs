//! Flashcard View Component
//!
//! The current card, with tap-to-flip, swipe and keyboard navigation.

use leptos::prelude::*;
use leptos_gestures::{
    bind_global_keys, bind_global_mouse, create_gesture_signals, make_on_mousedown, make_on_touchend,
    make_on_touchmove, make_on_touchstart, GestureConfig, Intent, KeyBindings,
};

use crate::context::DeckContext;
use crate::deck::{CardFace, Transition};

#[component]
pub fn FlashcardView(
    /// Hide the card while the creation panel is in use
    #[prop(into)]
    hidden: Signal<bool>,
    gesture_config: GestureConfig,
    key_bindings: KeyBindings,
) -> impl IntoView {
    let ctx = use_context::<DeckContext>().expect("DeckContext should be provided");
    let gestures = create_gesture_signals();
    let busy = ctx.busy();
    let on_intent = move |intent: Intent| ctx.apply(intent);

    bind_global_mouse(gestures, gesture_config, busy, on_intent);
    bind_global_keys(key_bindings, busy, on_intent);

    let card_class = move || {
        let mut c = "flashcard".to_string();
        if ctx.face() == CardFace::Answer {
            c.push_str(" flipped");
        }
        if gestures.is_dragging() {
            c.push_str(" dragging");
        }
        if let Transition::Transitioning(direction) = ctx.transition() {
            c.push(' ');
            c.push_str(direction.swipe_class());
        }
        c
    };

    view! {
        <div class=move || if hidden.get() { "flashcard-container hidden" } else { "flashcard-container" }>
            <div
                class=card_class
                style:transform=move || gestures.transform_css()
                on:mousedown=make_on_mousedown(gestures, gesture_config, busy)
                on:touchstart=make_on_touchstart(gestures, busy)
                on:touchmove=make_on_touchmove(gestures, gesture_config)
                on:touchend=make_on_touchend(gestures, gesture_config, busy, on_intent)
            >
                <div class="flashcard-inner">
                    <div class="flashcard-front">
                        <p id="flashcard-question">{move || ctx.display().question}</p>
                    </div>
                    <div class="flashcard-back">
                        <p id="flashcard-answer">{move || ctx.display().answer}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
