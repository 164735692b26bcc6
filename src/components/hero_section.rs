//! Hero: rotating greeting over the memory carousel.

use dioxus::prelude::*;
use rakhi_core::carousel::{AUTO_ADVANCE, MESSAGE_ROTATION};
use rakhi_core::photos::photo_data_url;
use rakhi_core::{Achievement, AchievementSink, Carousel};

use super::Confetti;
use crate::context::{config, use_achievements};

/// Confetti pieces per intensity level
const PIECES_PER_LEVEL: usize = 12;

/// Load `imageN.jpg` from the photos directory as a data URL
async fn load_memory(file_name: String) -> Option<String> {
    let path = config().photos_dir()?.join(file_name);
    tokio::task::spawn_blocking(move || {
        let bytes = std::fs::read(&path).ok()?;
        match photo_data_url(&bytes) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable memory");
                None
            }
        }
    })
    .await
    .ok()
    .flatten()
}

#[component]
pub fn HeroSection() -> Element {
    let mut achievements = use_achievements();
    let mut carousel = use_signal(Carousel::default);
    let mut drag_start = use_signal(|| None::<f64>);
    let mut burst = use_signal(|| None::<(u32, usize)>);

    use_future(move || async move {
        loop {
            tokio::time::sleep(AUTO_ADVANCE).await;
            if carousel.peek().is_playing() {
                carousel.write().next();
            }
        }
    });

    use_future(move || async move {
        loop {
            tokio::time::sleep(MESSAGE_ROTATION).await;
            carousel.write().rotate_message();
        }
    });

    // Greeting rotation must not reload the photo
    let file_name = use_memo(move || carousel.read().current().file_name);
    let photo = use_resource(move || async move { load_memory(file_name()).await });

    let celebrate = move |_| {
        let level = carousel.write().celebrate();
        achievements.write().unlock(Achievement::CelebrationMaster);
        let generation = burst.peek().map(|(g, _)| g + 1).unwrap_or(0);
        burst.set(Some((generation, usize::from(level) * PIECES_PER_LEVEL)));
        spawn(async move {
            tokio::time::sleep(config().confetti).await;
            if burst.peek().map(|(g, _)| g) == Some(generation) {
                burst.set(None);
            }
        });
    };

    let state = carousel.read().clone();
    let memory = state.current();
    let progress = state.progress();
    let total = state.len();

    rsx! {
        section { class: "section hero",
            h1 { class: "hero-title", "Happy Raksha Bandhan" }
            p { class: "hero-message", "{state.message()}" }

            div {
                class: "carousel",
                onmousedown: move |evt: MouseEvent| drag_start.set(Some(evt.client_coordinates().x)),
                onmouseup: move |evt: MouseEvent| {
                    if let Some(start) = drag_start.take() {
                        carousel.write().swipe(start, evt.client_coordinates().x);
                    }
                },
                onmouseleave: move |_| drag_start.set(None),

                match photo() {
                    Some(Some(url)) => rsx! {
                        img { class: "carousel-slide", src: "{url}", alt: "{memory.caption}", draggable: false }
                    },
                    _ => rsx! {
                        div { class: "carousel-placeholder", "💞" }
                    },
                }
                div { class: "carousel-caption",
                    strong { "{memory.caption}" }
                    p { class: "entry-meta", "{memory.year}" }
                }
                button {
                    class: "btn-icon carousel-nav prev",
                    "aria-label": "Previous memory",
                    onclick: move |_| carousel.write().prev(),
                    "‹"
                }
                button {
                    class: "btn-icon carousel-nav next",
                    "aria-label": "Next memory",
                    onclick: move |_| carousel.write().next(),
                    "›"
                }
            }

            div { class: "carousel-controls",
                button {
                    class: "btn",
                    onclick: move |_| {
                        carousel.write().toggle_playing();
                    },
                    if state.is_playing() { "⏸ Pause" } else { "▶ Play" }
                }
                span { "{memory.number} / {total}" }
                button { class: "btn btn-primary", onclick: celebrate, "🎉 Celebrate" }
            }
            div { class: "progress-track", style: "margin: 0 auto;",
                div { class: "progress-fill", style: "width: {progress}%;" }
            }

            if let Some((generation, pieces)) = burst() {
                Confetti { key: "{generation}", pieces }
            }
        }
    }
}
