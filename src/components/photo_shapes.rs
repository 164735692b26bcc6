//! Photo shape creator: pick photos, then arrange them into a shape.

use std::path::PathBuf;

use dioxus::prelude::*;
use rakhi_core::{PhotoBoard, Shape};
use rfd::FileDialog;

use crate::context::use_achievements;

/// Read the picked files off the UI thread. Unreadable files are skipped.
async fn pick_photos() -> Vec<(String, Vec<u8>)> {
    let picked = tokio::task::spawn_blocking(|| {
        FileDialog::new()
            .add_filter("images", &["png", "jpg", "jpeg", "webp"])
            .set_title("Select Photos")
            .pick_files()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|path: PathBuf| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                match std::fs::read(&path) {
                    Ok(bytes) => Some((name, bytes)),
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable file");
                        None
                    }
                }
            })
            .collect::<Vec<_>>()
    })
    .await;

    picked.unwrap_or_default()
}

#[component]
pub fn PhotoShapeSection() -> Element {
    let mut achievements = use_achievements();
    let mut board = use_signal(PhotoBoard::new);
    let mut orbit = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let upload = move |_| {
        busy.set(true);
        error.set(None);
        spawn(async move {
            let files = pick_photos().await;
            let mut rng = rand::rng();
            let mut failed = Vec::new();
            for (name, bytes) in files {
                let added = board
                    .write()
                    .add_image_bytes(name.clone(), &bytes, &mut rng, &mut *achievements.write());
                if let Err(e) = added {
                    tracing::debug!(%name, error = %e, "Photo could not be decoded");
                    failed.push(name);
                }
            }
            if !failed.is_empty() {
                error.set(Some(format!("Could not read: {}", failed.join(", "))));
            }
            busy.set(false);
        });
    };

    let arrange = move |_| {
        let orbit = orbit();
        board
            .write()
            .arrange(orbit, &mut rand::rng(), &mut *achievements.write());
    };

    let selected = board.read().shape();
    let photos = board.read().photos().to_vec();

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Photo Shape Creator" }
            p { class: "section-subtitle", "Arrange your favourite photos into beautiful shapes" }

            div { class: "glass-card stack",
                div { class: "row",
                    for shape in Shape::all().iter().copied() {
                        button {
                            key: "{shape.name()}",
                            class: if shape == selected { "chip active" } else { "chip" },
                            onclick: move |_| board.write().select_shape(shape),
                            "{shape.emoji()} {shape.name()}"
                        }
                    }
                }
                div { class: "row",
                    button { class: "btn btn-primary", disabled: busy(), onclick: upload,
                        if busy() { "Loading..." } else { "📷 Add Photos" }
                    }
                    button { class: "btn", disabled: photos.is_empty(), onclick: arrange, "✨ Arrange" }
                    label { class: "row",
                        input {
                            r#type: "checkbox",
                            checked: orbit(),
                            onchange: move |e| orbit.set(e.checked()),
                        }
                        "Orbit"
                    }
                    button {
                        class: "btn btn-small",
                        disabled: photos.is_empty(),
                        onclick: move |_| board.write().clear(),
                        "Clear"
                    }
                }
                if let Some(message) = error() {
                    p { class: "notice", "{message}" }
                }

                div { class: "shape-canvas",
                    if photos.is_empty() {
                        p { class: "empty-state", "Add some photos to begin" }
                    }
                    for photo in photos {
                        img {
                            key: "{photo.id}",
                            class: "shape-photo",
                            src: "{photo.url}",
                            alt: "{photo.name}",
                            title: "{photo.name} (double-click to remove)",
                            style: "left: calc({photo.x}% - 2rem); top: calc({photo.y}% - 2rem); transform: rotate({photo.rotation}deg) scale({photo.scale});",
                            ondoubleclick: {
                                let id = photo.id.clone();
                                move |_| {
                                    board.write().remove(&id);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
