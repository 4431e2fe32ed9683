//! End-to-end flows through the services over in-memory stores.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskdeck::error::ErrorKind;
use taskdeck::logging::Logger;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskService, UpdateTaskRequest},
};
use taskdeck::task_list::{
    adapters::memory::InMemoryTaskListRepository,
    services::{TaskListProgressService, TaskListService, UpdateTaskListRequest},
};

struct App {
    tasks: Arc<TaskService<InMemoryTaskRepository, DefaultClock>>,
    lists: TaskListService<InMemoryTaskListRepository, DefaultClock>,
    progress: TaskListProgressService<InMemoryTaskRepository, DefaultClock>,
}

#[fixture]
fn app() -> App {
    let logger = Logger::disabled();
    let tasks = Arc::new(
        TaskService::new(
            Arc::new(InMemoryTaskRepository::with_logger(logger.clone())),
            Arc::new(DefaultClock),
        )
        .with_logger(logger.clone()),
    );
    let lists = TaskListService::new(
        Arc::new(InMemoryTaskListRepository::with_logger(logger.clone())),
        Arc::new(DefaultClock),
    )
    .with_logger(logger.clone());
    let progress = TaskListProgressService::new(Arc::clone(&tasks)).with_logger(logger);
    App {
        tasks,
        lists,
        progress,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buy_milk_is_created_pending_and_listed(app: App) -> eyre::Result<()> {
    let created = app
        .tasks
        .create(CreateTaskRequest::new("Buy milk"))
        .await?;

    eyre::ensure!(created.status() == TaskStatus::Pending, "not pending");
    eyre::ensure!(created.priority() == TaskPriority::Medium, "not medium");
    eyre::ensure!(!created.id().as_str().is_empty(), "no identity");
    eyre::ensure!(
        created.created_at() == created.updated_at(),
        "timestamps differ on creation"
    );
    eyre::ensure!(app.tasks.get_all().await? == vec![created], "not listed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_never_reaches_storage(app: App) -> eyre::Result<()> {
    let Err(err) = app.tasks.create(CreateTaskRequest::new("  ")).await else {
        eyre::bail!("blank title accepted");
    };

    eyre::ensure!(err.kind() == ErrorKind::InvalidArgument, "wrong kind");
    eyre::ensure!(app.tasks.get_all().await?.is_empty(), "task was stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_progress_tracks_task_completion(app: App) -> eyre::Result<()> {
    let list = app.lists.create("Chores", "around the house").await?;
    let mut created = Vec::new();
    for title in ["Dishes", "Laundry", "Vacuum", "Bins"] {
        created.push(
            app.tasks
                .create(CreateTaskRequest::new(title).with_list_id(list.id().as_str()))
                .await?,
        );
    }
    let Some(first) = created.first() else {
        eyre::bail!("no tasks created");
    };

    let initial = app.progress.get_with_progress(&app.lists, list.id()).await?;
    app.tasks
        .update(
            first.id(),
            UpdateTaskRequest::new(list.id().as_str(), "Dishes", "", "completed", "medium"),
        )
        .await?;
    let after = app.progress.get_with_progress(&app.lists, list.id()).await?;

    eyre::ensure!(initial.completion_percentage == 0.0, "expected 0%");
    eyre::ensure!(after.completion_percentage == 25.0, "expected 25%");
    eyre::ensure!(after.list == list, "list changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renaming_a_list_keeps_its_tasks(app: App) -> eyre::Result<()> {
    let list = app.lists.create("Groceries", "").await?;
    app.tasks
        .create(CreateTaskRequest::new("Buy milk").with_list_id(list.id().as_str()))
        .await?;

    let renamed = app
        .lists
        .update(list.id(), UpdateTaskListRequest::new("Shopping", ""))
        .await?;
    let in_list = app
        .tasks
        .get_all()
        .await?
        .into_iter()
        .filter(|task| task.belongs_to(renamed.id().as_str()))
        .count();

    eyre::ensure!(renamed.name().as_str() == "Shopping", "not renamed");
    eyre::ensure!(in_list == 1, "task detached from list");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_update_replaces_description_status_and_priority(app: App) -> eyre::Result<()> {
    let created = app
        .tasks
        .create(
            CreateTaskRequest::new("Buy milk")
                .with_list_id("list-1")
                .with_description("")
                .with_priority(""),
        )
        .await?;

    app.tasks
        .update(
            created.id(),
            UpdateTaskRequest::new("list-1", "Buy milk", "2%", "completed", "high"),
        )
        .await?;
    let fetched = app.tasks.get_by_id(created.id()).await?;

    eyre::ensure!(fetched.description() == "2%", "description not replaced");
    eyre::ensure!(fetched.status() == TaskStatus::Completed, "not completed");
    eyre::ensure!(fetched.priority() == TaskPriority::High, "not high");
    eyre::ensure!(fetched.title().as_str() == "Buy milk", "title changed");
    eyre::ensure!(fetched.list_id() == "list-1", "list changed");
    eyre::ensure!(fetched.created_at() == created.created_at(), "creation time changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn long_list_references_are_kept_whole(app: App) -> eyre::Result<()> {
    let list_id = "l".repeat(300);
    let created = app
        .tasks
        .create(CreateTaskRequest::new("Archive").with_list_id(list_id.as_str()))
        .await?;

    let fetched = app.tasks.get_by_id(created.id()).await?;

    eyre::ensure!(fetched.list_id() == list_id, "list reference truncated");
    Ok(())
}
