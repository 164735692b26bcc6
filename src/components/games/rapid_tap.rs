use dioxus::prelude::*;
use rakhi_core::games::RapidTap;
use rakhi_core::GamePhase;

use crate::context::config;

#[component]
pub fn RapidTapGame(on_score: EventHandler<u32>) -> Element {
    let mut game = use_signal(RapidTap::new);

    use_future(move || async move {
        let tick = config().game_tick;
        loop {
            tokio::time::sleep(tick).await;
            if game.peek().phase() != GamePhase::Active {
                continue;
            }
            let finished = game.write().tick();
            if let Some(score) = finished {
                on_score.call(score);
            }
        }
    });

    let state = game.read().clone();

    rsx! {
        div { class: "score-board",
            span { "⏱ {state.seconds_left()}s" }
            span { "Taps: {state.taps()}" }
        }
        match state.phase() {
            GamePhase::Complete => rsx! {
                div { class: "notice",
                    h3 { "You tapped {state.taps()} times!" }
                    button { class: "btn btn-primary", onclick: move |_| game.write().restart(), "Play Again" }
                }
            },
            phase => rsx! {
                p { class: "section-subtitle",
                    if phase == GamePhase::Idle { "Tap the heart to start!" } else { "Keep tapping!" }
                }
                button { class: "tap-target", onclick: move |_| game.write().tap(), "💖" }
            },
        }
    }
}
