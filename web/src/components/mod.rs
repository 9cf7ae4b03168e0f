mod create_task_modal;
mod delete_task_modal;
mod edit_task_modal;
mod empty_tasks_state;
mod header;
mod hero;
mod loading_spinner;
mod task_card;
mod task_list;
mod task_stats;
mod tasks_header;

pub use create_task_modal::CreateTaskModal;
pub use delete_task_modal::DeleteTaskModal;
pub use edit_task_modal::EditTaskModal;
pub use empty_tasks_state::EmptyTasksState;
pub use header::Header;
pub use hero::Hero;
pub use loading_spinner::LoadingSpinner;
pub use task_card::TaskCard;
pub use task_list::TaskList;
pub use task_stats::TaskStats;
pub use tasks_header::TasksHeader;
