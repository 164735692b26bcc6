use dioxus::prelude::*;
use rakhi_core::storage::keys;
use rakhi_core::{Achievement, AchievementSink, AchievementTracker, ThemeCycle};

use crate::components::{
    AchievementButton, CelebrationOverlay, CursorFollower, DiarySection, FloatingElements,
    GamesSection, GiftHeader, HeroSection, JournalSection, LoadingScreen, MessageWallSection,
    MoodSection, PhotoShapeSection, StickyNotesSection, SurpriseSection, TodoSection,
};
use crate::context::{config, persistence};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the shared achievement and theme signals,
/// shows the loading screen, then the gift itself.
#[component]
pub fn App() -> Element {
    let settings = config();
    let achievements: Signal<AchievementTracker> = use_signal(mount_achievements);
    let theme: Signal<ThemeCycle> = use_signal(|| ThemeCycle::new(settings.theme_animation));
    let mut loaded = use_signal(|| false);
    let mut cursor = use_signal(|| None::<(f64, f64)>);

    use_context_provider(|| achievements);
    use_context_provider(|| theme);

    if !loaded() {
        return rsx! {
            style { {GLOBAL_STYLES} }
            LoadingScreen {
                step: settings.loading_step,
                on_done: move |_| loaded.set(true),
            }
        };
    }

    let current = theme.read().current();
    let background = current.background_css();
    let root_class = if theme.read().is_animating() {
        "gift-root theme-changing"
    } else {
        "gift-root"
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "{root_class}",
            style: "background: {background}; --accent: {current.accent}; --secondary: {current.secondary};",
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                cursor.set(Some((point.x, point.y)));
            },
            onmouseleave: move |_| cursor.set(None),
            FloatingElements {}
            CursorFollower { position: cursor() }
            GiftHeader {
                AchievementButton {}
            }
            main { class: "gift-main",
                HeroSection {}
                SurpriseSection { recipient: settings.recipient.clone() }
                PhotoShapeSection {}
                GamesSection {}
                MoodSection {}
                TodoSection {}
                JournalSection {}
                DiarySection {}
                StickyNotesSection {}
                MessageWallSection {}
            }
            CelebrationOverlay { duration: settings.celebration }
        }
    }
}

/// Load the achievement set, marking the first visit once per store
fn mount_achievements() -> AchievementTracker {
    let store = persistence();
    let mut tracker = AchievementTracker::mount(store.clone());
    if !store.contains(keys::VISITED) {
        store.save_value(keys::VISITED, &true);
        tracker.unlock(Achievement::FirstVisit);
        tracing::info!("First visit");
    }
    tracker
}
