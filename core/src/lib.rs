//! Core domain models for Taskr.
pub mod task;

pub use task::{FieldUpdate, NewTask, Task, TaskError, TaskPatch};
