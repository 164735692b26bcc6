//! Sticky header with the theme switcher.

use dioxus::prelude::*;

use crate::context::{use_achievements, use_theme};

/// Page header. `children` render next to the theme button.
#[component]
pub fn GiftHeader(children: Element) -> Element {
    let mut theme = use_theme();
    let mut achievements = use_achievements();

    // Every click restarts the animation; only the last one switches
    let change_theme = move |_| {
        let ticket = theme.write().begin_change(&mut *achievements.write());
        spawn(async move {
            if ticket.wait().await {
                theme.write().finish_change();
            }
        });
    };

    use_drop(move || theme.write().close());

    let spinning = theme.read().is_animating();
    let name = theme.read().current().name;

    rsx! {
        header { class: "gift-header",
            span { class: "header-title", "Happy Raksha Bandhan" }
            div { class: "header-actions",
                {children}
                button {
                    class: if spinning { "btn-icon theme-btn spinning" } else { "btn-icon theme-btn" },
                    title: "Change Theme ({name})",
                    "aria-label": "Change Rakhi Theme",
                    onclick: change_theme,
                    "🎀"
                }
            }
        }
    }
}
