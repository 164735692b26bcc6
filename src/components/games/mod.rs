//! Mini-games: a picker, the active game and the high score table.
//!
//! Each game component owns its state machine and drives it with a
//! per-second tick task that dies with the component. Final scores are
//! reported upward through `on_score`.

mod memory_match;
mod family_quiz;
mod rapid_tap;
mod wish_collector;

use dioxus::prelude::*;
use rakhi_core::{GameId, HighScores};

use crate::context::{persistence, use_achievements};

use family_quiz::FamilyQuizGame;
use memory_match::MemoryMatchGame;
use rapid_tap::RapidTapGame;
use wish_collector::WishCollectorGame;

#[component]
pub fn GamesSection() -> Element {
    let mut achievements = use_achievements();
    let mut scores = use_signal(|| HighScores::mount(persistence()));
    let mut active = use_signal(|| None::<GameId>);

    let mut open = move |game: GameId| {
        scores.read().open(game, &mut *achievements.write());
        active.set(Some(game));
    };

    let mut report = move |(game, score): (GameId, u32)| {
        let improved = scores.write().report(game, score, &mut *achievements.write());
        tracing::info!(game = game.as_str(), score, improved, "Game finished");
    };

    let table = scores.read();
    let played = table.games_played();
    let total = table.total_score();

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Fun Games" }
            p { class: "section-subtitle", "Play, score and beat your best" }

            div { class: "grid-3",
                for game in GameId::all().iter().copied() {
                    button {
                        key: "{game.as_str()}",
                        class: "glass-card game-card",
                        onclick: move |_| open(game),
                        span { class: "emoji", "{game.emoji()}" }
                        strong { "{game.name()}" }
                        span { class: "entry-meta", "{game.description()}" }
                        if let Some(best) = table.best(game) {
                            span { class: "entry-meta", "Best: {best}" }
                        }
                    }
                }
            }

            div { class: "glass-card score-board", style: "margin-top: 1rem;",
                span { "🎮 Games played: {played}" }
                span { "⭐ Total score: {total}" }
            }

            if let Some(game) = active() {
                div { class: "glass-card game-stage",
                    div { class: "row spread",
                        h3 { "{game.emoji()} {game.name()}" }
                        button { class: "btn btn-small", onclick: move |_| active.set(None), "Close" }
                    }
                    match game {
                        GameId::Memory => rsx! { MemoryMatchGame { on_score: move |s| report((GameId::Memory, s)) } },
                        GameId::Quiz => rsx! { FamilyQuizGame { on_score: move |s| report((GameId::Quiz, s)) } },
                        GameId::RapidTap => rsx! { RapidTapGame { on_score: move |s| report((GameId::RapidTap, s)) } },
                        GameId::WishCollector => rsx! { WishCollectorGame { on_score: move |s| report((GameId::WishCollector, s)) } },
                    }
                }
            }
        }
    }
}
