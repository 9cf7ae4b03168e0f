use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "bg-gradient-to-br from-blue-600 to-indigo-600 text-white py-16 px-6",
            div { class: "max-w-4xl mx-auto text-center",
                h2 { class: "text-5xl font-bold mb-6", "Welcome to Taskr" }
                p { class: "text-xl mb-8 leading-relaxed",
                    "Taskr keeps your day on track. Jot down what needs doing, "
                    "tick things off as you go, and always know what's left."
                }
                p { class: "text-lg opacity-90 mb-8",
                    "Simple tasks, done simply."
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    Link {
                        to: "/tasks",
                        class: "bg-white text-blue-600 px-8 py-3 rounded-lg font-semibold text-lg hover:bg-gray-100 transition-colors",
                        "View My Tasks"
                    }
                }
            }
        }
    }
}
