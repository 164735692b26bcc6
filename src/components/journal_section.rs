//! Daily journal with auto-save.

use dioxus::prelude::*;
use rakhi_core::journal::JOURNAL_MOODS;
use rakhi_core::{DebounceTicket, FormPhase, Journal};

use crate::context::{config, persistence, use_achievements};

fn entry_class(active: bool) -> &'static str {
    if active {
        "entry-item active"
    } else {
        "entry-item"
    }
}

#[component]
pub fn JournalSection() -> Element {
    let mut achievements = use_achievements();
    let mut journal = use_signal(|| Journal::mount(persistence(), config().autosave_delay));
    let mut pending = use_signal(|| false);

    // Keystrokes arm a ticket; only the last one in a quiet period saves
    let mut schedule = move |ticket: Option<DebounceTicket>| {
        let Some(ticket) = ticket else {
            pending.set(false);
            return;
        };
        pending.set(true);
        spawn(async move {
            if ticket.wait().await {
                journal.write().auto_save(&mut *achievements.write());
                pending.set(false);
            }
        });
    };

    use_drop(move || journal.write().close());

    let state = journal.read();
    let editing = state.phase().is_editing();
    let saved_once = matches!(state.phase(), FormPhase::Editing { target: Some(_) });
    let target = state.phase().target().cloned();
    let draft = state.draft().clone();
    let mut entries = state.entries().to_vec();
    drop(state);
    entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let status = if pending() {
        "Saving..."
    } else if saved_once {
        "✓ Saved"
    } else {
        ""
    };

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "My Journal" }
            p { class: "section-subtitle", "Write your thoughts, they save themselves" }

            div { class: "grid-2",
                div { class: "glass-card stack",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            journal.write().start_new_entry(&mut *achievements.write());
                            pending.set(false);
                        },
                        "✏️ New Entry"
                    }
                    if entries.is_empty() {
                        p { class: "empty-state", "No entries yet" }
                    }
                    div { class: "entry-list",
                        for entry in entries {
                            div {
                                key: "{entry.id}",
                                class: entry_class(target.as_ref() == Some(&entry.id)),
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| {
                                        journal.write().edit_entry(&id);
                                        pending.set(false);
                                    }
                                },
                                div { class: "row spread",
                                    strong { "{entry.mood} {entry.title}" }
                                    button {
                                        class: "btn-delete",
                                        "aria-label": "Delete entry",
                                        onclick: {
                                            let id = entry.id.clone();
                                            move |e: MouseEvent| {
                                                e.stop_propagation();
                                                journal.write().delete_entry(&id);
                                            }
                                        },
                                        "×"
                                    }
                                }
                                span { class: "entry-meta", "{entry.date}" }
                            }
                        }
                    }
                }

                div { class: "glass-card stack",
                    if editing {
                        div { class: "row",
                            for mood in JOURNAL_MOODS.iter().copied() {
                                button {
                                    key: "{mood}",
                                    class: if draft.mood == mood { "emoji-option selected" } else { "emoji-option" },
                                    onclick: move |_| journal.write().set_mood(mood),
                                    "{mood}"
                                }
                            }
                        }
                        input {
                            class: "input-field",
                            placeholder: "Title",
                            value: "{draft.title}",
                            oninput: move |e| {
                                let ticket = journal.write().set_title(e.value());
                                schedule(ticket);
                            },
                        }
                        textarea {
                            class: "textarea-field",
                            placeholder: "Dear journal...",
                            rows: "10",
                            value: "{draft.content}",
                            oninput: move |e| {
                                let ticket = journal.write().set_content(e.value());
                                schedule(ticket);
                            },
                        }
                        div { class: "row spread",
                            span { class: "autosave-status", "{status}" }
                            button {
                                class: "btn",
                                onclick: move |_| {
                                    journal.write().finish_editing(&mut *achievements.write());
                                    pending.set(false);
                                },
                                "Done"
                            }
                        }
                    } else {
                        p { class: "empty-state", "Pick an entry or start a new one" }
                    }
                }
            }
        }
    }
}
