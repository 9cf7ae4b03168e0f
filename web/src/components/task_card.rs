use dioxus::prelude::*;
use taskr_core::Task;

/// One task row: completion toggle, title, badge, description, and controls
#[component]
pub fn TaskCard(
    task: Task,
    on_toggle: EventHandler<Task>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<Task>,
) -> Element {
    let badge_color = if task.is_completed {
        "bg-green-100 text-green-800"
    } else {
        "bg-orange-100 text-orange-800"
    };
    let badge_text = if task.is_completed { "Done" } else { "Pending" };
    let title_style = if task.is_completed {
        "text-gray-500 line-through"
    } else {
        "text-gray-800"
    };
    let toggle_icon = if task.is_completed { "✅" } else { "⭕" };

    let created = task.created_at.format("%b %d, %Y").to_string();
    let updated = task.updated_at.format("%b %d, %Y").to_string();

    let toggle_task = task.clone();
    let edit_task = task.clone();
    let delete_task = task.clone();

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-6 hover:shadow-lg transition-shadow",
            div { class: "flex items-start gap-4",
                button {
                    class: "mt-1 text-xl hover:scale-110 transition-transform",
                    onclick: move |_| on_toggle.call(toggle_task.clone()),
                    "{toggle_icon}"
                }

                div { class: "flex-1 min-w-0",
                    div { class: "flex items-center gap-2 mb-2",
                        h3 { class: "font-medium text-lg {title_style}", "{task.title}" }
                        span { class: "px-2 py-1 rounded-full text-xs font-medium {badge_color}",
                            "{badge_text}"
                        }
                    }

                    if let Some(description) = &task.description {
                        p { class: "text-sm text-gray-600 mb-3", "{description}" }
                    }

                    p { class: "text-xs text-gray-400",
                        "Created: {created} • Updated: {updated}"
                    }
                }

                div { class: "flex gap-2",
                    button {
                        class: "px-3 py-1 text-sm text-blue-600 border border-blue-200 rounded-lg hover:bg-blue-50 transition-colors",
                        onclick: move |_| on_edit.call(edit_task.clone()),
                        "Edit"
                    }
                    button {
                        class: "px-3 py-1 text-sm text-red-600 border border-red-200 rounded-lg hover:bg-red-50 transition-colors",
                        onclick: move |_| on_delete.call(delete_task.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
