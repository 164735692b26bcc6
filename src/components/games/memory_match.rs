use dioxus::prelude::*;
use rakhi_core::games::{FlipOutcome, MemoryMatch, PAIR_REVEAL};
use rakhi_core::GamePhase;

use crate::context::config;

fn card_class(game: &MemoryMatch, index: usize) -> &'static str {
    if game.is_matched(index) {
        "memory-card matched"
    } else if game.is_face_up(index) {
        "memory-card flipped"
    } else {
        "memory-card"
    }
}

#[component]
pub fn MemoryMatchGame(on_score: EventHandler<u32>) -> Element {
    let mut game = use_signal(|| MemoryMatch::new(&mut rand::rng()));

    use_future(move || async move {
        let tick = config().game_tick;
        loop {
            tokio::time::sleep(tick).await;
            if game.peek().phase() == GamePhase::Active {
                game.write().tick();
            }
        }
    });

    let mut flip = move |index: usize| {
        if game.write().flip(index) != FlipOutcome::Pair {
            return;
        }
        spawn(async move {
            tokio::time::sleep(PAIR_REVEAL).await;
            let finished = game.write().resolve();
            if let Some(score) = finished {
                on_score.call(score);
            }
        });
    };

    let state = game.read().clone();

    rsx! {
        div { class: "score-board",
            span { "⏱ {state.seconds_left()}s" }
            span { "Moves: {state.moves()}" }
        }
        div { class: "memory-grid",
            for (index, card) in state.cards().iter().copied().enumerate() {
                button {
                    key: "{card.id}",
                    class: card_class(&state, index),
                    onclick: move |_| flip(index),
                    if state.is_face_up(index) { "{card.emoji}" } else { "❓" }
                }
            }
        }
        if state.phase() == GamePhase::Complete {
            div { class: "notice", style: "margin-top: 1rem;",
                match state.score() {
                    Some(score) => rsx! { p { "🎉 All pairs found! Score: {score}" } },
                    None => rsx! { p { "⏰ Time's up! Try again?" } },
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| game.write().restart(&mut rand::rng()),
                    "Play Again"
                }
            }
        }
    }
}
