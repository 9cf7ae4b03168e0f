use dioxus::prelude::*;
use taskr_core::{FieldUpdate, Task, TaskPatch};

/// Modal dialog for editing an existing task. Submits a full patch with
/// title, description, and completion so the form mirrors the stored row.
#[component]
pub fn EditTaskModal(
    task: Task,
    on_save: EventHandler<(u32, TaskPatch)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let task_id = task.id;
    let mut title = use_signal(|| task.title.clone());
    let mut description = use_signal(|| task.description.clone().unwrap_or_default());
    let mut is_completed = use_signal(|| task.is_completed);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let title_value = title().trim().to_string();

        if title_value.is_empty() {
            error.set(Some("Please enter a task title".to_string()));
            return;
        }

        error.set(None);
        let description_value = description().trim().to_string();
        let description_value = if description_value.is_empty() {
            None
        } else {
            Some(description_value)
        };
        on_save.call((
            task_id,
            TaskPatch {
                title: FieldUpdate::Set(title_value),
                description: FieldUpdate::Set(description_value),
                is_completed: FieldUpdate::Set(is_completed()),
            },
        ));
    };

    let handle_title_input = move |evt: FormEvent| {
        title.set(evt.value());
        if error().is_some() {
            error.set(None);
        }
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-2xl font-bold text-gray-900 mb-4 text-center",
                    "✏️ Edit Task"
                }

                form { onsubmit: handle_submit,
                    div { class: "mb-4",
                        label { class: "text-sm font-medium text-gray-700 mb-1 block", "Title" }
                        input {
                            r#type: "text",
                            value: "{title}",
                            oninput: handle_title_input,
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                            autofocus: true,
                        }
                    }

                    div { class: "mb-4",
                        label { class: "text-sm font-medium text-gray-700 mb-1 block", "Description" }
                        textarea {
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                            rows: 3,
                        }
                    }

                    div { class: "mb-4 flex items-center space-x-2",
                        input {
                            r#type: "checkbox",
                            id: "edit-completed",
                            checked: is_completed(),
                            onchange: move |evt| is_completed.set(evt.checked()),
                        }
                        label {
                            r#for: "edit-completed",
                            class: "text-sm font-medium text-gray-700",
                            "Mark as completed"
                        }
                    }

                    if let Some(error_msg) = error() {
                        div { class: "mb-4 text-red-600 text-sm", "{error_msg}" }
                    }

                    div { class: "flex space-x-3",
                        button {
                            r#type: "submit",
                            class: "flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                            "Save Changes"
                        }
                        button {
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            class: "flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
