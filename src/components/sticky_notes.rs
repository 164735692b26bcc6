//! Sticky notes pinned to a corkboard.

use std::rc::Rc;

use dioxus::prelude::*;
use rakhi_core::notes::{note_color_hex, NoteSize, NOTE_COLORS};
use rakhi_core::StickyNotes;

use super::board::{finish_drag, Drag};
use crate::context::{persistence, use_achievements};

fn parse_size(raw: &str) -> NoteSize {
    NoteSize::all()
        .iter()
        .copied()
        .find(|size| size.label() == raw)
        .unwrap_or_default()
}

#[component]
pub fn StickyNotesSection() -> Element {
    let mut achievements = use_achievements();
    let mut notes = use_signal(|| StickyNotes::mount(persistence()));
    let mut text = use_signal(String::new);
    let mut color = use_signal(|| NOTE_COLORS[0].0);
    let mut size = use_signal(NoteSize::default);
    let mut drag = use_signal(|| None::<Drag>);
    let mut board = use_signal(|| None::<Rc<MountedData>>);

    let create = move |_: MouseEvent| {
        let created = notes.write().create(
            &text(),
            color(),
            size(),
            &mut rand::rng(),
            &mut *achievements.write(),
        );
        if created.is_some() {
            text.set(String::new());
        }
    };

    let release = move |evt: MouseEvent| {
        let Some(current) = drag.take() else {
            return;
        };
        let point = evt.client_coordinates();
        spawn(async move {
            if let Some((id, x, y)) = finish_drag(current, board(), (point.x, point.y)).await {
                notes.write().move_to(&id, x, y);
            }
        });
    };

    let items = notes.read().notes().to_vec();

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Sticky Notes" }
            p { class: "section-subtitle", "Little reminders, big smiles. Drag them around!" }

            div { class: "glass-card stack",
                textarea {
                    class: "textarea-field",
                    placeholder: "Write a note...",
                    rows: "2",
                    value: "{text}",
                    oninput: move |e| text.set(e.value()),
                }
                div { class: "row",
                    for (name, hex) in NOTE_COLORS.iter().copied() {
                        button {
                            key: "{name}",
                            class: if color() == name { "emoji-option selected" } else { "emoji-option" },
                            title: name,
                            style: "background: {hex}; width: 1.75rem; height: 1.75rem;",
                            onclick: move |_| color.set(name),
                        }
                    }
                }
                div { class: "row",
                    select {
                        class: "select-field",
                        value: size().label(),
                        onchange: move |e| size.set(parse_size(&e.value())),
                        for s in NoteSize::all().iter().copied() {
                            option { key: "{s.label()}", value: s.label(), "{s.label()}" }
                        }
                    }
                    button { class: "btn btn-primary", onclick: create, "📌 Pin Note" }
                }
            }

            div {
                class: "board",
                style: "margin-top: 1rem;",
                onmounted: move |e| board.set(Some(e.data())),
                onmouseup: release,
                onmouseleave: move |_| drag.set(None),
                if items.is_empty() {
                    p { class: "empty-state", "No notes yet" }
                }
                for note in items {
                    div {
                        key: "{note.id}",
                        class: "sticky-note",
                        style: "left: {note.x}%; top: {note.y}%; width: {note.size.pixels()}px; height: {note.size.pixels()}px; background: {note_color_hex(&note.color)}; transform: rotate({note.rotation}deg);",
                        onmousedown: {
                            let id = note.id.clone();
                            let origin = (note.x, note.y);
                            move |e: MouseEvent| drag.set(Some(Drag::begin(id.clone(), &e, origin)))
                        },
                        button {
                            class: "note-delete",
                            "aria-label": "Delete note",
                            onmousedown: move |e: MouseEvent| e.stop_propagation(),
                            onclick: {
                                let id = note.id.clone();
                                move |_| {
                                    notes.write().delete(&id);
                                }
                            },
                            "×"
                        }
                        p { "{note.text}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_defaults_to_medium() {
        assert_eq!(parse_size("Large"), NoteSize::Large);
        assert_eq!(parse_size("huge"), NoteSize::Medium);
    }
}
