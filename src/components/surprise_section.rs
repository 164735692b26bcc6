//! Surprise envelopes: the brothers' poems and the memory album.

use dioxus::prelude::*;
use rakhi_core::surprise::{ALBUM_CAPTIONS, POEMS};
use rakhi_core::Surprise;

use super::Confetti;
use crate::context::{config, use_achievements};

const REVEAL_PIECES: usize = 40;

#[component]
pub fn SurpriseSection(recipient: String) -> Element {
    let mut achievements = use_achievements();
    let mut surprise = use_signal(Surprise::new);
    let mut confetti = use_signal(|| 0u32);

    // Each reveal gets its own burst
    let mut burst = move || {
        let generation = confetti() + 1;
        confetti.set(generation);
        spawn(async move {
            tokio::time::sleep(config().confetti).await;
            if confetti() == generation {
                confetti.set(0);
            }
        });
    };

    let state = surprise.read().clone();
    let poem = state.poem();
    let number = state.poem_number();
    let total = POEMS.len();

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "A Surprise for {recipient}" }
            p { class: "section-subtitle", "We've prepared something special just for you..." }

            div { class: "grid-2",
                div { class: "glass-card",
                    h3 { "💌 Poems From Your Brothers" }
                    if !state.is_letter_open() {
                        button {
                            class: "btn btn-primary",
                            style: "margin-top: 1rem;",
                            onclick: move |_| {
                                surprise.write().open_letter(&mut *achievements.write());
                                burst();
                            },
                            "Read Our Letters 💕"
                        }
                    } else {
                        div { class: "notice", style: "margin-top: 1rem;",
                            strong { "{poem.author}" }
                            p { class: "entry-meta", "A heartfelt message from your brother" }
                            p { class: "poem-text", "{poem.text}" }
                            div { class: "row", style: "justify-content: center;",
                                button { class: "btn-icon", onclick: move |_| surprise.write().prev_poem(), "←" }
                                span { "{number} / {total}" }
                                button { class: "btn-icon", onclick: move |_| surprise.write().next_poem(), "→" }
                            }
                        }
                    }
                }

                div { class: "glass-card",
                    h3 { "📸 Our Virtual Memory Album" }
                    if !state.is_album_open() {
                        button {
                            class: "btn btn-primary",
                            style: "margin-top: 1rem;",
                            onclick: move |_| {
                                surprise.write().open_album(&mut *achievements.write());
                                burst();
                            },
                            "See Our Memories 📷"
                        }
                    } else {
                        div { class: "album-grid", style: "margin-top: 1rem;",
                            for (emoji, caption) in ALBUM_CAPTIONS.iter().copied() {
                                div { key: "{caption}", class: "album-tile",
                                    "{emoji}"
                                    span { "{caption}" }
                                }
                            }
                        }
                    }
                }
            }

            if confetti() > 0 {
                Confetti { key: "{confetti}", pieces: REVEAL_PIECES }
            }
        }
    }
}
