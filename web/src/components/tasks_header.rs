use dioxus::prelude::*;

/// Header section for the tasks page with title and description
#[component]
pub fn TasksHeader() -> Element {
    rsx! {
        div { class: "text-center mb-8",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "My Tasks" }
            p { class: "text-lg text-gray-600",
                "Keep track of what needs doing and check things off as you finish them."
            }
        }
    }
}
