use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm",
            div { class: "max-w-4xl mx-auto px-6 py-4 flex justify-between items-center",
                h1 {
                    class: "text-3xl font-bold text-gray-800",
                    "📝 Taskr"
                }
                nav { class: "space-x-4",
                    Link {
                        to: "/",
                        class: "text-gray-600 hover:text-blue-600 transition-colors",
                        "Home"
                    }
                    Link {
                        to: "/tasks",
                        class: "text-gray-600 hover:text-blue-600 transition-colors",
                        "Tasks"
                    }
                }
            }
        }
    }
}
