use dioxus::prelude::*;
use taskr_core::Task;

/// Confirmation dialog shown before a task is permanently deleted
#[component]
pub fn DeleteTaskModal(
    task: Task,
    on_confirm: EventHandler<Task>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_task = task.clone();

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-2xl font-bold text-gray-900 mb-4 text-center",
                    "🗑️ Delete Task"
                }

                p { class: "text-gray-600 mb-6 text-center",
                    "Are you sure you want to delete \"{task.title}\"? "
                    "This cannot be undone."
                }

                div { class: "flex space-x-3",
                    button {
                        onclick: move |_| on_confirm.call(confirm_task.clone()),
                        class: "flex-1 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors font-medium",
                        "Yes, Delete"
                    }
                    button {
                        onclick: move |_| on_cancel.call(()),
                        class: "flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                        "Cancel"
                    }
                }
            }
        }
    }
}
