//! Personal diary with mood, weather and tags per page.

use chrono::Local;
use dioxus::prelude::*;
use rakhi_core::diary::{DIARY_MOODS, DIARY_WEATHERS};
use rakhi_core::Diary;

use crate::context::persistence;

fn option_class(selected: bool) -> &'static str {
    if selected {
        "emoji-option selected"
    } else {
        "emoji-option"
    }
}

#[component]
pub fn DiarySection() -> Element {
    let mut diary = use_signal(|| Diary::mount(persistence()));
    let mut renaming = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<&'static str>);

    let mut save = move |_: MouseEvent| {
        let today = Local::now().date_naive();
        if diary.write().save_entry(today).is_some() {
            notice.set(None);
        } else {
            notice.set(Some("Write a title or a few words first"));
        }
    };

    let mut commit_name = move || {
        if let Some(name) = renaming.take() {
            let name = name.trim().to_string();
            if !name.is_empty() {
                diary.write().rename(name);
            }
        }
    };

    let state = diary.read();
    let name = state.name().to_string();
    let editing = state.phase().is_editing();
    let page = state.page().clone();
    let entries: Vec<_> = state.entries_by_recent().into_iter().cloned().collect();
    drop(state);

    rsx! {
        section { class: "section",
            match renaming() {
                Some(draft) => rsx! {
                    div { class: "row", style: "justify-content: center;",
                        input {
                            class: "input-field",
                            value: "{draft}",
                            autofocus: true,
                            oninput: move |e| renaming.set(Some(e.value())),
                            onkeydown: move |e: KeyboardEvent| {
                                if e.key() == Key::Enter {
                                    commit_name();
                                }
                            },
                        }
                        button { class: "btn btn-small", onclick: move |_| commit_name(), "Save" }
                    }
                },
                None => rsx! {
                    h2 {
                        class: "section-title",
                        title: "Click to rename",
                        onclick: {
                            let name = name.clone();
                            move |_| renaming.set(Some(name.clone()))
                        },
                        "📖 {name}"
                    }
                },
            }
            p { class: "section-subtitle", "Your private pages" }

            div { class: "grid-2",
                div { class: "glass-card stack",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| diary.write().start_new_entry(),
                        "📝 New Page"
                    }
                    if entries.is_empty() {
                        p { class: "empty-state", "Your diary is waiting" }
                    }
                    div { class: "entry-list",
                        for entry in entries {
                            div {
                                key: "{entry.id}",
                                class: "entry-item",
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| {
                                        diary.write().edit_entry(&id);
                                    }
                                },
                                div { class: "row spread",
                                    strong { "{entry.mood} {entry.title}" }
                                    button {
                                        class: "btn-delete",
                                        "aria-label": "Delete page",
                                        onclick: {
                                            let id = entry.id.clone();
                                            move |e: MouseEvent| {
                                                e.stop_propagation();
                                                diary.write().delete_entry(&id);
                                            }
                                        },
                                        "×"
                                    }
                                }
                                span { class: "entry-meta", "{entry.weather} {entry.date}" }
                                div { class: "row",
                                    for tag in entry.tags.iter() {
                                        span { key: "{tag}", class: "tag", "#{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "glass-card diary-page stack",
                    if editing {
                        input {
                            class: "input-field",
                            placeholder: "Title",
                            value: "{page.title}",
                            oninput: move |e| diary.write().page_mut().title = e.value(),
                        }
                        div { class: "row",
                            for mood in DIARY_MOODS.iter().copied() {
                                button {
                                    key: "{mood}",
                                    class: option_class(page.mood == mood),
                                    onclick: move |_| diary.write().page_mut().mood = mood.to_string(),
                                    "{mood}"
                                }
                            }
                        }
                        div { class: "row",
                            for weather in DIARY_WEATHERS.iter().copied() {
                                button {
                                    key: "{weather}",
                                    class: option_class(page.weather == weather),
                                    onclick: move |_| diary.write().page_mut().weather = weather.to_string(),
                                    "{weather}"
                                }
                            }
                        }
                        textarea {
                            class: "textarea-field",
                            placeholder: "Dear diary...",
                            rows: "10",
                            value: "{page.content}",
                            oninput: move |e| diary.write().page_mut().content = e.value(),
                        }
                        input {
                            class: "input-field",
                            placeholder: "Tags, separated by commas",
                            value: "{page.tags}",
                            oninput: move |e| diary.write().page_mut().tags = e.value(),
                        }
                        if let Some(message) = notice() {
                            p { class: "notice", "{message}" }
                        }
                        div { class: "row",
                            button { class: "btn btn-primary", onclick: move |e| save(e), "Save Page" }
                            button {
                                class: "btn",
                                onclick: move |_| {
                                    diary.write().cancel();
                                    notice.set(None);
                                },
                                "Cancel"
                            }
                        }
                    } else {
                        p { class: "empty-state", "Open a page to start writing" }
                    }
                }
            }
        }
    }
}
