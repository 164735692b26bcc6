//! Tasks and goals with priorities, deadlines, reminders and proof.

use chrono::{Local, NaiveDate, NaiveTime};
use dioxus::prelude::*;
use rakhi_core::todo::{Priority, TodoFilter, TodoItem, TodoKind};
use rakhi_core::{ItemId, TodoManager};
use rfd::FileDialog;

use crate::context::{config, persistence, use_achievements};
use crate::theme::colors::priority_color;

fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_reminder(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

fn parse_priority(raw: &str) -> Priority {
    Priority::all()
        .iter()
        .copied()
        .find(|p| p.label() == raw)
        .unwrap_or_default()
}

fn item_class(item: &TodoItem) -> &'static str {
    if item.completed {
        "todo-item completed"
    } else {
        "todo-item"
    }
}

fn reminder_label(item: &TodoItem) -> Option<String> {
    item.reminder_time.map(|time| time.format("%H:%M").to_string())
}

/// File names picked as proof of completion
async fn pick_proof() -> Vec<String> {
    tokio::task::spawn_blocking(|| {
        FileDialog::new()
            .set_title("Attach Proof")
            .pick_files()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|path| Some(path.file_name()?.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
    })
    .await
    .unwrap_or_default()
}

#[component]
pub fn TodoSection() -> Element {
    let mut kind = use_signal(|| TodoKind::Basic);

    let chip = move |k: TodoKind| if kind() == k { "chip active" } else { "chip" };

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "To-Do & Goals" }
            p { class: "section-subtitle", "Small steps, big dreams" }

            div { class: "row", style: "justify-content: center; margin-bottom: 1rem;",
                button { class: chip(TodoKind::Basic), onclick: move |_| kind.set(TodoKind::Basic), "✅ Tasks" }
                button { class: chip(TodoKind::Goals), onclick: move |_| kind.set(TodoKind::Goals), "🎯 Goals" }
            }

            // Keyed so each list mounts its own manager
            match kind() {
                TodoKind::Basic => rsx! { TodoList { key: "basic", kind: TodoKind::Basic } },
                TodoKind::Goals => rsx! { TodoList { key: "goals", kind: TodoKind::Goals } },
            }
        }
    }
}

#[component]
fn TodoList(kind: TodoKind) -> Element {
    let mut achievements = use_achievements();
    let mut todos = use_signal(|| TodoManager::mount(persistence(), kind));
    let mut text = use_signal(String::new);
    let mut priority = use_signal(Priority::default);
    let mut deadline = use_signal(String::new);
    let mut reminder = use_signal(String::new);
    let mut filter = use_signal(TodoFilter::default);
    let mut appreciation = use_signal(|| None::<&'static str>);
    let mut due = use_signal(Vec::<String>::new);

    use_future(move || async move {
        let poll = config().reminder_poll;
        loop {
            tokio::time::sleep(poll).await;
            let now = Local::now().time();
            let reminders: Vec<String> = todos
                .peek()
                .due_reminders(now)
                .into_iter()
                .map(|item| item.text.clone())
                .collect();
            for text in &reminders {
                tracing::info!(task = %text, "Task reminder");
            }
            if !reminders.is_empty() {
                due.set(reminders);
            }
        }
    });

    let mut add = move || {
        let added = todos.write().add(
            &text(),
            priority(),
            parse_deadline(&deadline()),
            parse_reminder(&reminder()),
            &mut *achievements.write(),
        );
        if added.is_some() {
            text.set(String::new());
            deadline.set(String::new());
            reminder.set(String::new());
        }
    };

    let mut toggle = move |id: ItemId| {
        let toggled = todos.write().toggle(&id, &mut *achievements.write());
        if let Some(message) = toggled.and_then(|t| t.appreciation) {
            appreciation.set(Some(message));
            spawn(async move {
                tokio::time::sleep(config().notice).await;
                if appreciation.peek().is_some_and(|shown| *shown == message) {
                    appreciation.set(None);
                }
            });
        }
    };

    let attach = move |id: ItemId| {
        spawn(async move {
            let files = pick_proof().await;
            todos.write().attach_proof(&id, files);
        });
    };

    let state = todos.read();
    let stats = state.stats();
    let items: Vec<TodoItem> = state.filtered(filter()).into_iter().cloned().collect();
    drop(state);

    let due_text = due().join(", ");
    let placeholder = match kind {
        TodoKind::Basic => "What needs doing?",
        TodoKind::Goals => "What's your next goal?",
    };

    rsx! {
        div { class: "glass-card stack",
            if !due_text.is_empty() {
                div { class: "notice row spread",
                    span { "⏰ Reminder: {due_text}" }
                    button { class: "btn btn-small", onclick: move |_| due.set(Vec::new()), "Dismiss" }
                }
            }
            if let Some(message) = appreciation() {
                div { class: "notice", "{message}" }
            }

            div { class: "row",
                input {
                    class: "input-field",
                    style: "flex: 1;",
                    placeholder: placeholder,
                    value: "{text}",
                    oninput: move |e| text.set(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            add();
                        }
                    },
                }
                select {
                    class: "select-field",
                    value: priority().label(),
                    onchange: move |e| priority.set(parse_priority(&e.value())),
                    for p in Priority::all().iter().copied() {
                        option { key: "{p.label()}", value: p.label(), "{p.emoji()} {p.label()}" }
                    }
                }
            }
            div { class: "row",
                label { class: "row",
                    "Deadline"
                    input {
                        class: "input-field",
                        r#type: "date",
                        value: "{deadline}",
                        oninput: move |e| deadline.set(e.value()),
                    }
                }
                label { class: "row",
                    "Reminder"
                    input {
                        class: "input-field",
                        r#type: "time",
                        value: "{reminder}",
                        oninput: move |e| reminder.set(e.value()),
                    }
                }
                button { class: "btn btn-primary", onclick: move |_| add(), "Add" }
            }

            div { class: "row spread",
                div { class: "row",
                    for f in TodoFilter::all().iter().copied() {
                        button {
                            key: "{f.label()}",
                            class: if filter() == f { "chip active" } else { "chip" },
                            onclick: move |_| filter.set(f),
                            "{f.label()}"
                        }
                    }
                }
                span { class: "entry-meta", "{stats.completed} / {stats.total} done" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {stats.percent}%;" }
            }

            if items.is_empty() {
                p { class: "empty-state", "Nothing here yet" }
            }
            for item in items {
                div { key: "{item.id}", class: item_class(&item),
                    input {
                        class: "todo-check",
                        r#type: "checkbox",
                        checked: item.completed,
                        onchange: {
                            let id = item.id.clone();
                            move |_| toggle(id.clone())
                        },
                    }
                    div { class: "stack", style: "flex: 1;",
                        span { class: "todo-text", "{item.text}" }
                        div { class: "todo-meta row",
                            span {
                                class: "priority-badge",
                                style: "background: {priority_color(item.priority)};",
                                "{item.priority.emoji()} {item.priority.label()}"
                            }
                            if let Some(date) = item.deadline {
                                span { "📅 {date}" }
                            }
                            if let Some(time) = reminder_label(&item) {
                                span { "⏰ {time}" }
                            }
                            if !item.proof.is_empty() {
                                span { title: item.proof.join(", "), "📎 {item.proof.len()}" }
                            }
                        }
                    }
                    button {
                        class: "btn btn-small",
                        title: "Attach proof",
                        onclick: {
                            let id = item.id.clone();
                            move |_| attach(id.clone())
                        },
                        "📎"
                    }
                    button {
                        class: "btn-delete",
                        "aria-label": "Delete task",
                        onclick: {
                            let id = item.id.clone();
                            move |_| {
                                todos.write().delete(&id);
                            }
                        },
                        "×"
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
    fn test_form_parsing() {
        assert_eq!(parse_deadline("2025-08-09"), NaiveDate::from_ymd_opt(2025, 8, 9));
        assert_eq!(parse_deadline(""), None);
        assert_eq!(parse_reminder("07:30"), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(parse_reminder("later"), None);
        assert_eq!(parse_priority("High"), Priority::High);
        assert_eq!(parse_priority("??"), Priority::Medium);
    }
}
