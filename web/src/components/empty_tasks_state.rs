use dioxus::prelude::*;

/// Component displayed when no tasks exist yet
#[component]
pub fn EmptyTasksState(on_create_task: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-6xl mb-4", "📝" }
            h2 { class: "text-2xl font-semibold text-gray-900 mb-2", "No Tasks Yet" }
            p { class: "text-gray-600 mb-6", "Start by adding your first task!" }
            button {
                class: "bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors",
                onclick: move |_| on_create_task.call(()),
                "Add New Task"
            }
        }
    }
}
