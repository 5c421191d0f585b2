//! Text Effects
//!
//! Typewriter role cycling and word-by-word reveal.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::motion::{reveal_words, typewriter_frame, TypewriterTiming};

/// Clock tick for the typewriter, finer than the per-character step
const TYPEWRITER_TICK_MS: u32 = 50;

/// Types, holds and deletes each text in turn, forever
#[component]
pub fn TypewriterText(
    texts: Vec<String>,
    #[prop(optional)] timing: TypewriterTiming,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let texts = StoredValue::new(texts);
    let (elapsed_ms, set_elapsed_ms) = signal(0u64);

    let started = js_sys::Date::now();
    Interval::new(TYPEWRITER_TICK_MS, move || {
        set_elapsed_ms.set((js_sys::Date::now() - started).max(0.0) as u64);
    })
    .forget();

    view! {
        <span class=format!("typewriter {}", class)>
            {move || texts.with_value(|t| typewriter_frame(t, timing, elapsed_ms.get()))}
            <span class="typewriter-caret">"|"</span>
        </span>
    }
}

/// Splits text into words that fade in one after another
#[component]
pub fn TextReveal(
    #[prop(into)] text: String,
    /// Seconds before the first word
    #[prop(optional)]
    delay: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <span class=format!("text-reveal {}", class)>
            {reveal_words(&text, delay).into_iter().map(|(word, word_delay)| view! {
                <span class="reveal-word" style=format!("animation-delay: {:.2}s;", word_delay)>
                    {word}
                </span>
            }).collect_view()}
        </span>
    }
}
