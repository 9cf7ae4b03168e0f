use dioxus::prelude::*;

/// Summary cards with total, pending, and completed task counts
#[component]
pub fn TaskStats(total: usize, pending: usize, completed: usize) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-6",
            div { class: "bg-white rounded-lg shadow-md p-4 text-center",
                div { class: "text-2xl font-bold text-blue-600", "{total}" }
                div { class: "text-sm text-gray-600", "Total Tasks" }
            }
            div { class: "bg-white rounded-lg shadow-md p-4 text-center",
                div { class: "text-2xl font-bold text-orange-600", "{pending}" }
                div { class: "text-sm text-gray-600", "Pending" }
            }
            div { class: "bg-white rounded-lg shadow-md p-4 text-center",
                div { class: "text-2xl font-bold text-green-600", "{completed}" }
                div { class: "text-sm text-gray-600", "Completed" }
            }
        }
    }
}
