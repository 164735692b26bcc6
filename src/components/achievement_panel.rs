//! Trophy button, badge panel and the unlock celebration.

use std::time::Duration;

use dioxus::prelude::*;
use rakhi_core::Badge;

use crate::context::use_achievements;

/// How often the overlay checks for a fresh unlock
const CELEBRATION_POLL: Duration = Duration::from_millis(250);

/// Header trophy with the unlocked count; toggles the badge panel.
#[component]
pub fn AchievementButton() -> Element {
    let achievements = use_achievements();
    let mut open = use_signal(|| false);
    let count = achievements.read().unlocked_badges();

    rsx! {
        button {
            class: "btn-icon trophy-btn",
            title: "Achievements",
            onclick: move |_| open.toggle(),
            "🏆"
            if count > 0 {
                span { class: "trophy-count", "{count}" }
            }
        }
        if open() {
            AchievementPanel { on_close: move |_| open.set(false) }
        }
    }
}

/// Badge catalog with progress
#[component]
fn AchievementPanel(on_close: EventHandler<()>) -> Element {
    let achievements = use_achievements();
    let tracker = achievements.read();
    let badges = tracker.badges();
    let unlocked = tracker.unlocked_badges();
    let total = badges.len();
    let percent = tracker.progress_percent().round();

    rsx! {
        div { class: "glass-card achievement-panel",
            div { class: "row spread",
                h3 { "🏆 Achievements" }
                button { class: "btn-delete", onclick: move |_| on_close.call(()), "×" }
            }
            p { class: "todo-meta", "{unlocked} of {total} unlocked" }
            div { class: "progress-track", style: "width: 100%; margin-top: 0.5rem;",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }
            div { class: "badge-grid",
                for (badge, is_unlocked) in badges {
                    div {
                        key: "{badge.id}",
                        class: if is_unlocked { "badge" } else { "badge locked" },
                        title: "{badge.description}",
                        span { class: "emoji", "{badge.emoji}" }
                        strong { "{badge.name}" }
                        p { class: "entry-meta", "{badge.description}" }
                    }
                }
            }
        }
    }
}

/// Shows each newly unlocked badge for `duration`, one at a time.
#[component]
pub fn CelebrationOverlay(duration: Duration) -> Element {
    let mut achievements = use_achievements();
    let mut showing: Signal<Option<Badge>> = use_signal(|| None);

    use_future(move || async move {
        loop {
            tokio::time::sleep(CELEBRATION_POLL).await;
            if !achievements.peek().has_celebration() {
                continue;
            }
            let badge = achievements.write().take_celebration();
            if let Some(badge) = badge {
                showing.set(Some(badge));
                tokio::time::sleep(duration).await;
                showing.set(None);
            }
        }
    });

    let Some(badge) = showing() else {
        return rsx! {};
    };

    rsx! {
        div { class: "celebration-overlay",
            div { class: "celebration-card",
                span { class: "emoji", "{badge.emoji}" }
                h3 { "Achievement Unlocked!" }
                strong { "{badge.name}" }
                p { "{badge.description}" }
            }
        }
    }
}
