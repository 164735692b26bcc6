//! Decorative layers: drifting stars and hearts, confetti and the cursor sparkle.

use dioxus::prelude::*;
use rand::Rng;

use crate::theme::colors::CONFETTI;

/// A decoration placed once at mount
#[derive(Clone, PartialEq)]
struct Floater {
    symbol: &'static str,
    x: f64,
    y: f64,
    delay: f64,
    duration: f64,
    size: f64,
}

fn scatter(rng: &mut impl Rng, symbol: &'static str, count: usize, min_duration: f64) -> Vec<Floater> {
    (0..count)
        .map(|_| Floater {
            symbol,
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..5.0),
            duration: min_duration + rng.random_range(0.0..4.0),
            size: rng.random_range(8.0..18.0),
        })
        .collect()
}

/// Background stars and hearts
#[component]
pub fn FloatingElements() -> Element {
    let floaters = use_hook(|| {
        let mut rng = rand::rng();
        let mut items = scatter(&mut rng, "⭐", 50, 2.0);
        items.extend(scatter(&mut rng, "💖", 15, 3.0));
        items
    });

    rsx! {
        div { class: "floating-layer",
            for (i, f) in floaters.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "floating-item",
                    style: "left: {f.x}%; top: {f.y}%; font-size: {f.size}px; animation-delay: {f.delay}s; animation-duration: {f.duration}s;",
                    "{f.symbol}"
                }
            }
        }
    }
}

/// Falling confetti; `pieces` scales with the celebration's intensity.
#[component]
pub fn Confetti(pieces: usize) -> Element {
    let drops = use_hook(move || {
        let mut rng = rand::rng();
        (0..pieces)
            .map(|i| {
                (
                    rng.random_range(0.0..100.0),
                    rng.random_range(0.0..1.5),
                    CONFETTI[i % CONFETTI.len()],
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "confetti-layer",
            for (i, (x, delay, color)) in drops.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "confetti-piece",
                    style: "left: {x}%; animation-delay: {delay}s; background: {color};",
                }
            }
        }
    }
}

/// Sparkle that trails the mouse; the root tracks the position.
#[component]
pub fn CursorFollower(position: Option<(f64, f64)>) -> Element {
    let Some((x, y)) = position else {
        return rsx! {};
    };

    rsx! {
        div { class: "cursor-follower", style: "left: {x}px; top: {y}px;", "✨" }
    }
}
