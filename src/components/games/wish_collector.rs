use dioxus::prelude::*;
use rakhi_core::games::{WishCollector, WISH_SPAWN_INTERVAL};
use rakhi_core::GamePhase;

use crate::context::config;

/// Spread wishes over the field by slot so they do not stack
fn wish_position(slot: usize) -> (usize, usize) {
    (5 + slot * 37 % 75, 5 + slot * 53 % 80)
}

#[component]
pub fn WishCollectorGame(on_score: EventHandler<u32>) -> Element {
    let mut game = use_signal(WishCollector::new);

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

    use_future(move || async move {
        loop {
            tokio::time::sleep(WISH_SPAWN_INTERVAL).await;
            if game.peek().phase() == GamePhase::Active {
                game.write().spawn(&mut rand::rng());
            }
        }
    });

    let state = game.read().clone();
    let score = state.collected() * 10;
    let wishes: Vec<(usize, &'static str, (usize, usize))> = state
        .wishes()
        .iter()
        .copied()
        .enumerate()
        .map(|(index, wish)| (index, wish, wish_position(index)))
        .collect();

    rsx! {
        div { class: "score-board",
            span { "⏱ {state.seconds_left()}s" }
            span { "Wishes: {state.collected()}" }
        }
        match state.phase() {
            GamePhase::Idle => rsx! {
                p { class: "section-subtitle", "Catch the blessings before time runs out!" }
                button { class: "btn btn-primary", onclick: move |_| game.write().start(), "Start" }
            },
            GamePhase::Active => rsx! {
                div { class: "wish-field",
                    for (index, wish, (x, y)) in wishes {
                        button {
                            key: "{index}-{wish}",
                            class: "wish",
                            style: "left: {x}%; top: {y}%;",
                            onclick: move |_| {
                                game.write().collect(index);
                            },
                            "{wish}"
                        }
                    }
                }
            },
            GamePhase::Complete => rsx! {
                div { class: "notice",
                    h3 { "You collected {state.collected()} wishes! Score: {score}" }
                    button { class: "btn btn-primary", onclick: move |_| game.write().start(), "Play Again" }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wish_positions_stay_on_field() {
        for slot in 0..rakhi_core::games::MAX_VISIBLE_WISHES {
            let (x, y) = wish_position(slot);
            assert!(x < 85 && y < 90);
        }
    }
}
