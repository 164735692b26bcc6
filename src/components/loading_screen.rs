//! Progress screen shown before the gift opens.

use std::time::Duration;

use dioxus::prelude::*;

/// Progress added per step, out of 100
const STEP_PERCENT: u32 = 10;

/// Loading screen that fills its bar one step at a time, then calls `on_done`.
#[component]
pub fn LoadingScreen(step: Duration, on_done: EventHandler<()>) -> Element {
    let mut progress = use_signal(|| 0u32);

    use_future(move || async move {
        while *progress.peek() < 100 {
            tokio::time::sleep(step).await;
            let next = (*progress.peek() + STEP_PERCENT).min(100);
            progress.set(next);
        }
        on_done.call(());
    });

    rsx! {
        div { class: "loading-screen",
            div { class: "loading-heart", "🪢" }
            h2 { class: "loading-title", "राखी" }
            h3 { "RAKSHA BANDHAN" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {progress}%;" }
            }
            p { class: "section-subtitle", "Loading Festival of Love..." }
        }
    }
}
