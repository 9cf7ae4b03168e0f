use dioxus::prelude::*;
use taskr_core::NewTask;

/// Modal dialog for creating a new task
#[component]
pub fn CreateTaskModal(
    show: bool,
    on_create: EventHandler<NewTask>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut is_completed = use_signal(|| false);
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
        on_create.call(NewTask {
            title: title_value,
            description: description_value,
            is_completed: is_completed(),
        });
        title.set(String::new());
        description.set(String::new());
        is_completed.set(false);
    };

    let handle_title_input = move |evt: FormEvent| {
        title.set(evt.value());
        if error().is_some() {
            error.set(None);
        }
    };

    if !show {
        return rsx! { div {} };
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-2xl font-bold text-gray-900 mb-4 text-center",
                    "✨ Add New Task"
                }

                form { onsubmit: handle_submit,
                    div { class: "mb-4",
                        label { class: "text-sm font-medium text-gray-700 mb-1 block", "Title" }
                        input {
                            r#type: "text",
                            placeholder: "What needs doing?",
                            value: "{title}",
                            oninput: handle_title_input,
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                            autofocus: true,
                        }
                    }

                    div { class: "mb-4",
                        label { class: "text-sm font-medium text-gray-700 mb-1 block",
                            "Description (optional)"
                        }
                        textarea {
                            placeholder: "Add some detail...",
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                            rows: 3,
                        }
                    }

                    div { class: "mb-4 flex items-center space-x-2",
                        input {
                            r#type: "checkbox",
                            id: "create-completed",
                            checked: is_completed(),
                            onchange: move |evt| is_completed.set(evt.checked()),
                        }
                        label {
                            r#for: "create-completed",
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
                            "Save Task"
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
