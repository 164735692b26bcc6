//! Mood trackers: quick intensity check-in and the mood journal.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use rakhi_core::mood::{
    MoodResponse, MoodWindow, DEFAULT_INTENSITY, ENHANCED_MOOD_OPTIONS, MOOD_OPTIONS,
};
use rakhi_core::{EnhancedMoodTracker, MoodTracker};

use crate::context::{persistence, use_achievements};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn window_label(window: MoodWindow) -> &'static str {
    match window {
        MoodWindow::Today => "Today",
        MoodWindow::Week => "This Week",
        MoodWindow::Month => "This Month",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoodTab {
    CheckIn,
    Journal,
}

#[component]
pub fn MoodSection() -> Element {
    let mut tab = use_signal(|| MoodTab::CheckIn);

    let chip = move |t: MoodTab| if tab() == t { "chip active" } else { "chip" };

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Mood Tracker" }
            p { class: "section-subtitle", "How are you feeling today?" }

            div { class: "row", style: "justify-content: center; margin-bottom: 1rem;",
                button { class: chip(MoodTab::CheckIn), onclick: move |_| tab.set(MoodTab::CheckIn), "🌡️ Check-in" }
                button { class: chip(MoodTab::Journal), onclick: move |_| tab.set(MoodTab::Journal), "📔 Mood Journal" }
            }

            match tab() {
                MoodTab::CheckIn => rsx! { MoodCheckIn {} },
                MoodTab::Journal => rsx! { MoodJournal {} },
            }
        }
    }
}

#[component]
fn MoodCheckIn() -> Element {
    let mut achievements = use_achievements();
    let mut tracker = use_signal(|| MoodTracker::mount(persistence()));
    let mut selected = use_signal(|| None::<usize>);
    let mut intensity = use_signal(|| DEFAULT_INTENSITY);
    let mut window = use_signal(|| MoodWindow::Week);

    let mut record = move |_: MouseEvent| {
        let Some(index) = selected() else {
            return;
        };
        let option = &MOOD_OPTIONS[index];
        tracker
            .write()
            .record(option, intensity(), today(), &mut *achievements.write());
        selected.set(None);
        intensity.set(DEFAULT_INTENSITY);
    };

    let day = today();
    let state = tracker.read();
    let current = state.on(day).cloned();
    let summary = state.summary(window(), day);
    let history: Vec<_> = state.window(MoodWindow::Month, day).into_iter().cloned().collect();
    drop(state);

    rsx! {
        div { class: "grid-2",
            div { class: "glass-card stack",
                if let Some(entry) = current {
                    div { class: "mood-response",
                        span { style: "font-size: 2rem;", "{entry.emoji}" }
                        p { "Today you're feeling {entry.mood}" }
                        p { class: "entry-meta", "{entry.message}" }
                    }
                }
                div { class: "mood-grid",
                    for (index, option) in MOOD_OPTIONS.iter().enumerate() {
                        button {
                            key: "{option.name}",
                            class: if selected() == Some(index) { "mood-card emoji-option selected" } else { "mood-card emoji-option" },
                            style: "border-color: {option.color};",
                            onclick: move |_| selected.set(Some(index)),
                            span { style: "font-size: 1.75rem;", "{option.emoji}" }
                            span { "{option.name}" }
                        }
                    }
                }
                label { class: "stack",
                    "Intensity: {intensity}"
                    input {
                        r#type: "range",
                        min: "1",
                        max: "10",
                        value: "{intensity}",
                        oninput: move |e| {
                            if let Ok(level) = e.value().parse::<u8>() {
                                intensity.set(level);
                            }
                        },
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: selected().is_none(),
                    onclick: move |e| record(e),
                    "Record Mood"
                }
            }

            div { class: "glass-card stack",
                div { class: "row",
                    for w in MoodWindow::all().iter().copied() {
                        button {
                            key: "{w.as_str()}",
                            class: if window() == w { "chip active" } else { "chip" },
                            onclick: move |_| window.set(w),
                            "{window_label(w)}"
                        }
                    }
                }
                match summary {
                    Some(summary) => rsx! {
                        div { class: "notice",
                            span { style: "font-size: 1.5rem;", "{summary.emoji}" }
                            p { "{summary.message}" }
                            p { class: "entry-meta",
                                "{summary.entries} entries, average score {summary.average:.1}"
                            }
                        }
                    },
                    None => rsx! {
                        p { class: "empty-state", "No moods recorded yet" }
                    },
                }
                div { class: "mood-history",
                    for entry in history {
                        div { key: "{entry.id}", class: "mood-history-item",
                            span { "{entry.emoji}" }
                            span { "{entry.mood}" }
                            span { class: "entry-meta", "{entry.date}" }
                            button {
                                class: "note-delete",
                                "aria-label": "Delete mood",
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| {
                                        tracker.write().delete(&id);
                                    }
                                },
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MoodJournal() -> Element {
    let mut achievements = use_achievements();
    let mut tracker = use_signal(|| EnhancedMoodTracker::mount(persistence()));
    let mut selected = use_signal(|| None::<usize>);
    let mut note = use_signal(String::new);
    let mut response = use_signal(|| None::<MoodResponse>);

    let mut log = move |_: MouseEvent| {
        let Some(index) = selected() else {
            return;
        };
        let option = &ENHANCED_MOOD_OPTIONS[index];
        let reply = tracker.write().record(
            option,
            &note(),
            today(),
            &mut rand::rng(),
            &mut *achievements.write(),
        );
        response.set(Some(reply));
        note.set(String::new());
        selected.set(None);
    };

    let day = today();
    let state = tracker.read();
    let feedback = state.weekly_feedback(day);
    let mut entries = state.entries().to_vec();
    drop(state);
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    rsx! {
        div { class: "grid-2",
            div { class: "glass-card stack",
                div { class: "mood-grid",
                    for (index, option) in ENHANCED_MOOD_OPTIONS.iter().enumerate() {
                        button {
                            key: "{option.name}",
                            class: if selected() == Some(index) { "mood-card emoji-option selected" } else { "mood-card emoji-option" },
                            style: "border-color: {option.color};",
                            onclick: move |_| selected.set(Some(index)),
                            span { style: "font-size: 1.75rem;", "{option.emoji}" }
                            span { "{option.name}" }
                        }
                    }
                }
                textarea {
                    class: "textarea-field",
                    placeholder: "Anything you'd like to remember about today?",
                    value: "{note}",
                    oninput: move |e| note.set(e.value()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: selected().is_none(),
                    onclick: move |e| log(e),
                    "Log My Mood"
                }
                if let Some(reply) = response() {
                    div { class: "mood-response",
                        p { "{reply.message}" }
                        p { class: "entry-meta", "{reply.encouragement}" }
                        if let Some(joke) = reply.joke {
                            p { class: "notice", "😄 {joke}" }
                        }
                        button { class: "btn btn-small", onclick: move |_| response.set(None), "Thanks!" }
                    }
                }
            }

            div { class: "glass-card stack",
                h3 { "Your Week" }
                match feedback {
                    Some(feedback) => rsx! {
                        p { class: "notice", "{feedback.message}" }
                    },
                    None => rsx! {
                        p { class: "empty-state", "Log a mood to see your weekly feedback" }
                    },
                }
                div { class: "mood-history",
                    for entry in entries {
                        div { key: "{entry.id}", class: "mood-history-item",
                            span { "{entry.emoji}" }
                            div { class: "stack",
                                strong { "{entry.mood}" }
                                if !entry.note.is_empty() {
                                    span { class: "entry-meta", "{entry.note}" }
                                }
                            }
                            span { class: "entry-meta", "{entry.date}" }
                            button {
                                class: "note-delete",
                                "aria-label": "Delete mood",
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| {
                                        tracker.write().delete(&id);
                                    }
                                },
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
