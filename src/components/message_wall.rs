//! Family message wall: love notes from everyone, shareable as text.

use std::rc::Rc;

use dioxus::prelude::*;
use rakhi_core::messages::{family, message_color_hex};
use rakhi_core::MessageWall;

use super::board::{finish_drag, Drag};
use crate::context::{config, copy_to_clipboard, persistence, use_achievements};

#[component]
pub fn MessageWallSection() -> Element {
    let mut achievements = use_achievements();
    let mut wall = use_signal(|| MessageWall::mount(persistence(), &mut rand::rng()));
    let mut text = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut drag = use_signal(|| None::<Drag>);
    let mut board = use_signal(|| None::<Rc<MountedData>>);
    let mut shared = use_signal(|| None::<&'static str>);

    let add = move |_: MouseEvent| {
        let added = wall.write().add(
            &text(),
            &author(),
            &mut rand::rng(),
            &mut *achievements.write(),
        );
        if added.is_some() {
            text.set(String::new());
        }
    };

    let share = move |_: MouseEvent| {
        let message = if copy_to_clipboard(&wall.read().share_text()) {
            "Copied! 💖"
        } else {
            "Could not reach the clipboard"
        };
        shared.set(Some(message));
        spawn(async move {
            tokio::time::sleep(config().notice).await;
            shared.set(None);
        });
    };

    let release = move |evt: MouseEvent| {
        let Some(current) = drag.take() else {
            return;
        };
        let point = evt.client_coordinates();
        spawn(async move {
            if let Some((id, x, y)) = finish_drag(current, board(), (point.x, point.y)).await {
                wall.write().move_to(&id, x, y);
            }
        });
    };

    let messages = wall.read().messages().to_vec();

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Family Message Wall" }
            p { class: "section-subtitle", "Love notes from the whole family" }

            div { class: "glass-card stack",
                textarea {
                    class: "textarea-field",
                    placeholder: "Write something sweet...",
                    rows: "2",
                    value: "{text}",
                    oninput: move |e| text.set(e.value()),
                }
                div { class: "row",
                    select {
                        class: "select-field",
                        value: "{author}",
                        onchange: move |e| author.set(e.value()),
                        option { value: "", "Who's writing?" }
                        for name in family() {
                            option { key: "{name}", value: name, "{name}" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: author().is_empty(),
                        onclick: add,
                        "💌 Pin Message"
                    }
                    button { class: "btn", onclick: share, "📤 Share" }
                    if let Some(message) = shared() {
                        span { class: "notice", "{message}" }
                    }
                }
            }

            div {
                class: "board",
                style: "margin-top: 1rem;",
                onmounted: move |e| board.set(Some(e.data())),
                onmouseup: release,
                onmouseleave: move |_| drag.set(None),
                for message in messages {
                    div {
                        key: "{message.id}",
                        class: "wall-message",
                        style: "left: {message.x}%; top: {message.y}%; background: {message_color_hex(&message.color)}; transform: rotate({message.rotation}deg);",
                        onmousedown: {
                            let id = message.id.clone();
                            let origin = (message.x, message.y);
                            move |e: MouseEvent| drag.set(Some(Drag::begin(id.clone(), &e, origin)))
                        },
                        button {
                            class: "note-delete",
                            "aria-label": "Delete message",
                            onmousedown: move |e: MouseEvent| e.stop_propagation(),
                            onclick: {
                                let id = message.id.clone();
                                move |_| {
                                    wall.write().delete(&id);
                                }
                            },
                            "×"
                        }
                        p { "{message.text}" }
                        p { class: "wall-author", "- {message.author}" }
                    }
                }
            }
        }
    }
}
