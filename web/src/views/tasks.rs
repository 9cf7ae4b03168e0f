use crate::components::{
    CreateTaskModal, DeleteTaskModal, EditTaskModal, EmptyTasksState, Header, LoadingSpinner,
    TaskList, TaskStats, TasksHeader,
};
use dioxus::prelude::*;
use taskr_core::{NewTask, Task, TaskPatch};

#[cfg(feature = "server")]
mod backend;

#[component]
pub fn Tasks() -> Element {
    let mut tasks = use_signal(Vec::<Task>::new);
    let mut loading = use_signal(|| true);
    let mut show_create_modal = use_signal(|| false);
    let mut editing_task = use_signal(|| None::<Task>);
    let mut deleting_task = use_signal(|| None::<Task>);

    // Load tasks on component mount
    use_effect(move || {
        spawn(async move {
            match get_tasks().await {
                Ok(stored_tasks) => {
                    tasks.set(stored_tasks);
                    loading.set(false);
                }
                Err(e) => {
                    tracing::error!("Failed to load tasks: {}", e);
                    loading.set(false);
                }
            }
        });
    });

    let handle_create = move |draft: NewTask| {
        spawn(async move {
            match create_task(draft).await {
                Ok(created) => {
                    tasks.write().push(created);
                    show_create_modal.set(false);
                }
                Err(e) => tracing::error!("Failed to create task: {}", e),
            }
        });
    };

    let handle_toggle = move |task: Task| {
        spawn(async move {
            match update_task(task.id, TaskPatch::completion(!task.is_completed)).await {
                Ok(Some(updated)) => replace_task(tasks, updated),
                Ok(None) => tracing::warn!("Task {} no longer exists", task.id),
                Err(e) => tracing::error!("Failed to toggle task {}: {}", task.id, e),
            }
        });
    };

    let handle_save = move |(id, patch): (u32, TaskPatch)| {
        spawn(async move {
            match update_task(id, patch).await {
                Ok(Some(updated)) => {
                    replace_task(tasks, updated);
                    editing_task.set(None);
                }
                Ok(None) => {
                    tracing::warn!("Task {} no longer exists", id);
                    editing_task.set(None);
                }
                Err(e) => tracing::error!("Failed to update task {}: {}", id, e),
            }
        });
    };

    let handle_delete = move |task: Task| {
        spawn(async move {
            match delete_task(task.id).await {
                Ok(true) => {
                    tasks.write().retain(|t| t.id != task.id);
                    deleting_task.set(None);
                }
                Ok(false) => {
                    tracing::warn!("Task {} was already deleted", task.id);
                    deleting_task.set(None);
                }
                Err(e) => tracing::error!("Failed to delete task {}: {}", task.id, e),
            }
        });
    };

    // Pending and completed are derived views, recomputed on every render
    let pending_count = tasks().iter().filter(|t| t.is_pending()).count();
    let completed_count = tasks().iter().filter(|t| t.is_completed).count();

    rsx! {
        Header {}
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-4xl mx-auto px-6",
                TasksHeader {}
                TaskStats {
                    total: tasks().len(),
                    pending: pending_count,
                    completed: completed_count,
                }

                div { class: "mb-6",
                    button {
                        class: "w-full md:w-auto bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors shadow-md",
                        onclick: move |_| show_create_modal.set(true),
                        "+ Add New Task"
                    }
                }

                if loading() {
                    LoadingSpinner { message: "Loading tasks...".to_string() }
                } else if tasks().is_empty() {
                    EmptyTasksState { on_create_task: move |_| show_create_modal.set(true) }
                } else {
                    TaskList {
                        tasks: tasks(),
                        on_toggle: handle_toggle,
                        on_edit: move |task: Task| editing_task.set(Some(task)),
                        on_delete: move |task: Task| deleting_task.set(Some(task)),
                    }
                }
            }
        }

        CreateTaskModal {
            show: show_create_modal(),
            on_create: handle_create,
            on_cancel: move |_| show_create_modal.set(false),
        }

        if let Some(task) = editing_task() {
            EditTaskModal {
                task: task.clone(),
                on_save: handle_save,
                on_cancel: move |_| editing_task.set(None),
            }
        }

        if let Some(task) = deleting_task() {
            DeleteTaskModal {
                task: task.clone(),
                on_confirm: handle_delete,
                on_cancel: move |_| deleting_task.set(None),
            }
        }
    }
}

/// Swaps the held copy of a task for the version the server returned.
fn replace_task(mut tasks: Signal<Vec<Task>>, updated: Task) {
    if let Some(slot) = tasks.write().iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

#[server]
pub async fn get_tasks() -> Result<Vec<Task>, ServerFnError> {
    use crate::server::get_db_pool;

    let db = get_db_pool().await;
    let tasks = backend::TaskService::new(db).get_all_tasks().await?;
    Ok(tasks)
}

#[server]
pub async fn get_task(id: u32) -> Result<Option<Task>, ServerFnError> {
    use crate::server::get_db_pool;

    let db = get_db_pool().await;
    let task = backend::TaskService::new(db).get_task(id).await?;
    Ok(task)
}

#[server]
pub async fn create_task(draft: NewTask) -> Result<Task, ServerFnError> {
    use crate::server::get_db_pool;

    let db = get_db_pool().await;
    let task = backend::TaskService::new(db).create_task(draft).await?;
    Ok(task)
}

#[server]
pub async fn update_task(id: u32, patch: TaskPatch) -> Result<Option<Task>, ServerFnError> {
    use crate::server::get_db_pool;

    let db = get_db_pool().await;
    let task = backend::TaskService::new(db).update_task(id, patch).await?;
    Ok(task)
}

#[server]
pub async fn delete_task(id: u32) -> Result<bool, ServerFnError> {
    use crate::server::get_db_pool;

    let db = get_db_pool().await;
    let deleted = backend::TaskService::new(db).delete_task(id).await?;
    Ok(deleted)
}
