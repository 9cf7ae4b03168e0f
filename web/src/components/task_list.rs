use crate::components::TaskCard;
use dioxus::prelude::*;
use taskr_core::Task;

/// Renders the held task list as a column of cards
#[component]
pub fn TaskList(
    tasks: Vec<Task>,
    on_toggle: EventHandler<Task>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<Task>,
) -> Element {
    rsx! {
        div { class: "space-y-4",
            {tasks.iter().map(|task| rsx! {
                TaskCard {
                    key: "{task.id}",
                    task: task.clone(),
                    on_toggle: move |t| on_toggle.call(t),
                    on_edit: move |t| on_edit.call(t),
                    on_delete: move |t| on_delete.call(t),
                }
            })}
        }
    }
}
