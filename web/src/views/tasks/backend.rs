//! Server-side persistence for tasks: maps the typed RPC surface onto single
//! SQL statements against the `tasks` table.
use crate::server::entities::tasks;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};
use taskr_core::{FieldUpdate, NewTask, Task, TaskError, TaskPatch};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid task: {0}")]
    InvalidTask(#[from] TaskError),
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Task {
            id: model.id as u32,
            title: model.title,
            description: model.description,
            is_completed: model.is_completed,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl TaskService<'_> {
    pub fn new(db: &DatabaseConnection) -> TaskService {
        TaskService { db }
    }

    /// Inserts a new task. The database assigns `id` and both timestamps,
    /// which are equal at creation.
    ///
    /// # Returns
    ///
    /// A `Result` containing the stored `Task` if successful, or an error
    /// otherwise. An empty title is rejected before the store is touched.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(&self, draft: NewTask) -> Result<Task, Error> {
        draft.validate()?;

        let active_model = tasks::ActiveModel {
            title: ActiveValue::Set(draft.title),
            description: ActiveValue::Set(draft.description),
            is_completed: ActiveValue::Set(draft.is_completed),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Task::from(created_model))
    }

    /// Retrieves a single task by its ID. A missing row is `None`, not an
    /// error.
    #[tracing::instrument(skip(self))]
    pub async fn get_task(&self, id: u32) -> Result<Option<Task>, Error> {
        let model = tasks::Entity::find_by_id(id as i32).one(self.db).await?;
        Ok(model.map(Task::from))
    }

    /// Retrieves every task, most recently created first.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, Error> {
        let all_tasks = tasks::Entity::find()
            .order_by_desc(tasks::Column::CreatedAt)
            .order_by_desc(tasks::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from)
            .collect();
        Ok(all_tasks)
    }

    /// Applies a partial update: only fields carried as `Set` are assigned,
    /// everything else keeps its stored value. `updated_at` is refreshed on
    /// every successful update, even when the patch changes nothing.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no task with the given ID exists.
    #[tracing::instrument(skip(self))]
    pub async fn update_task(&self, id: u32, patch: TaskPatch) -> Result<Option<Task>, Error> {
        patch.validate()?;

        let Some(task_to_update) = tasks::Entity::find_by_id(id as i32).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: tasks::ActiveModel = task_to_update.into();
        if let FieldUpdate::Set(title) = patch.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let FieldUpdate::Set(description) = patch.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let FieldUpdate::Set(is_completed) = patch.is_completed {
            active_model.is_completed = ActiveValue::Set(is_completed);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now().fixed_offset());
        let updated_model = active_model.update(self.db).await?;

        Ok(Some(Task::from(updated_model)))
    }

    /// Deletes a task by its ID.
    ///
    /// # Returns
    ///
    /// Whether a row was actually removed. Deleting an ID that does not
    /// exist returns `Ok(false)`.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task(&self, id: u32) -> Result<bool, Error> {
        let result = tasks::Entity::delete_by_id(id as i32).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use sea_orm::Database;
    use std::time::Duration;
    use testcontainers_modules::testcontainers::runners::AsyncRunner;
    use testcontainers_modules::{postgres, testcontainers};

    struct TestContext {
        #[allow(dead_code)] // container is kept to ensure it's not dropped
        container: testcontainers::ContainerAsync<postgres::Postgres>,
        db: DatabaseConnection,
    }

    async fn setup() -> anyhow::Result<TestContext> {
        // Allow multiple calls to init for tests.
        let _ = tracing_subscriber::fmt().try_init();
        let container = postgres::Postgres::default().start().await?;
        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(5432).await?;
        let db_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);
        let db = Database::connect(&db_url).await?;
        migration::Migrator::up(&db, None).await?;
        Ok(TestContext { container, db })
    }

    fn draft(title: &str, description: Option<&str>) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            is_completed: false,
        }
    }

    #[tokio::test]
    async fn create_task_assigns_id_and_equal_timestamps() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Test Task", Some("A task for testing")))
            .await
            .expect("Failed to create task");

        assert_eq!(created.title, "Test Task");
        assert_eq!(created.description, Some("A task for testing".to_string()));
        assert!(!created.is_completed);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn create_task_honors_the_completed_flag() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(NewTask {
                title: "Already done".to_string(),
                description: None,
                is_completed: true,
            })
            .await
            .expect("Failed to create task");

        assert!(created.is_completed);
        assert_eq!(created.description, None);
    }

    #[tokio::test]
    async fn create_task_rejects_empty_title() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let result = service.create_task(draft("   ", None)).await;

        assert!(matches!(
            result,
            Err(Error::InvalidTask(TaskError::EmptyTitle))
        ));
        let all_tasks = service.get_all_tasks().await.expect("Failed to get tasks");
        assert!(all_tasks.is_empty());
    }

    #[tokio::test]
    async fn get_task_returns_the_stored_task() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Findable", Some("with a description")))
            .await
            .expect("Failed to create task");

        let found = service
            .get_task(created.id)
            .await
            .expect("Failed to get task");
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn get_task_returns_none_for_unknown_id() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Only task", None))
            .await
            .expect("Failed to create task");

        let found = service
            .get_task(created.id + 1)
            .await
            .expect("Failed to get task");
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn get_all_tasks_returns_empty_list_for_empty_store() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let all_tasks = service.get_all_tasks().await.expect("Failed to get tasks");

        assert!(all_tasks.is_empty());
    }

    #[tokio::test]
    async fn get_all_tasks_orders_newest_first() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        for title in ["Oldest", "Middle", "Newest"] {
            service
                .create_task(draft(title, None))
                .await
                .expect("Failed to create task");
        }

        let all_tasks = service.get_all_tasks().await.expect("Failed to get tasks");
        let titles: Vec<&str> = all_tasks.iter().map(|t| t.title.as_str()).collect();

        assert_eq!(titles, ["Newest", "Middle", "Oldest"]);
    }

    #[tokio::test]
    async fn update_task_changes_only_supplied_fields() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Original Title", Some("Original description")))
            .await
            .expect("Failed to create task");

        // Ensure the refreshed updated_at is strictly greater
        tokio::time::sleep(Duration::from_millis(10)).await;

        let updated = service
            .update_task(
                created.id,
                TaskPatch {
                    title: FieldUpdate::Set("Updated Title".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to update task")
            .expect("Task should exist");

        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.description, Some("Original description".to_string()));
        assert!(!updated.is_completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn update_task_clears_the_description() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Test Task", Some("Some description")))
            .await
            .expect("Failed to create task");

        let updated = service
            .update_task(
                created.id,
                TaskPatch {
                    description: FieldUpdate::Set(None),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to update task")
            .expect("Task should exist");

        assert_eq!(updated.description, None);
        assert_eq!(updated.title, "Test Task");
    }

    #[tokio::test]
    async fn update_task_applies_multiple_fields_at_once() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Original Title", Some("Original description")))
            .await
            .expect("Failed to create task");

        let updated = service
            .update_task(
                created.id,
                TaskPatch {
                    title: FieldUpdate::Set("Updated Title".to_string()),
                    description: FieldUpdate::Set(Some("Updated description".to_string())),
                    is_completed: FieldUpdate::Set(true),
                },
            )
            .await
            .expect("Failed to update task")
            .expect("Task should exist");

        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.description, Some("Updated description".to_string()));
        assert!(updated.is_completed);

        // The change is visible through a fresh read as well
        let reloaded = service
            .get_task(created.id)
            .await
            .expect("Failed to get task");
        assert_eq!(reloaded, Some(updated));
    }

    #[tokio::test]
    async fn update_task_returns_none_for_unknown_id() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let result = service
            .update_task(999, TaskPatch::completion(true))
            .await
            .expect("Update of a missing task should not error");

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn update_task_bumps_updated_at_even_without_field_changes() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Test Task", Some("Test description")))
            .await
            .expect("Failed to create task");

        tokio::time::sleep(Duration::from_millis(10)).await;

        let updated = service
            .update_task(created.id, TaskPatch::default())
            .await
            .expect("Failed to update task")
            .expect("Task should exist");

        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.is_completed, created.is_completed);
    }

    #[tokio::test]
    async fn update_task_rejects_empty_title() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Valid Title", None))
            .await
            .expect("Failed to create task");

        let result = service
            .update_task(
                created.id,
                TaskPatch {
                    title: FieldUpdate::Set(String::new()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::InvalidTask(TaskError::EmptyTitle))
        ));
        let reloaded = service
            .get_task(created.id)
            .await
            .expect("Failed to get task");
        assert_eq!(reloaded.map(|t| t.title), Some("Valid Title".to_string()));
    }

    #[tokio::test]
    async fn delete_task_removes_the_row_and_is_idempotent() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let created = service
            .create_task(draft("Doomed", None))
            .await
            .expect("Failed to create task");

        let deleted = service
            .delete_task(created.id)
            .await
            .expect("Failed to delete task");
        assert!(deleted);

        let all_tasks = service.get_all_tasks().await.expect("Failed to get tasks");
        assert!(all_tasks.is_empty());

        let deleted_again = service
            .delete_task(created.id)
            .await
            .expect("Failed to delete task");
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn deleting_one_task_leaves_the_others_intact() {
        let state = setup().await.expect("Failed to setup test context");
        let service = TaskService::new(&state.db);

        let first = service
            .create_task(draft("One", None))
            .await
            .expect("Failed to create task");
        let second = service
            .create_task(draft("Two", None))
            .await
            .expect("Failed to create task");
        let third = service
            .create_task(draft("Three", None))
            .await
            .expect("Failed to create task");

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert_ne!(first.id, third.id);
        assert_eq!(
            service
                .get_all_tasks()
                .await
                .expect("Failed to get tasks")
                .len(),
            3
        );

        let deleted = service
            .delete_task(second.id)
            .await
            .expect("Failed to delete task");
        assert!(deleted);

        let remaining = service.get_all_tasks().await.expect("Failed to get tasks");
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().any(|t| t.id == first.id && t.title == "One"));
        assert!(remaining
            .iter()
            .any(|t| t.id == third.id && t.title == "Three"));
        assert!(!remaining.iter().any(|t| t.id == second.id));
    }
}
