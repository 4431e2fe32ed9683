//! In-memory integration tests for task storage.

use super::helpers::{TickingClock, clock, task, task_repo};
use rstest::rstest;
use taskdeck::error::ErrorKind;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{CompletionTally, TaskFilter, TaskId, TaskPriority, TaskRevision, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

fn revision_of(
    stored: &taskdeck::task::domain::Task,
    status: TaskStatus,
    priority: TaskPriority,
) -> TaskRevision {
    TaskRevision {
        list_id: stored.list_id().to_owned(),
        title: stored.title().clone(),
        description: stored.description().to_owned(),
        status,
        priority,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_returns_an_equal_copy(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let original = task("t-1", "list-a", TaskPriority::High, &clock)?;
    task_repo.create(&original).await?;

    let fetched = task_repo.get_by_id(original.id()).await?;

    eyre::ensure!(fetched == original, "stored task differs from the original");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn returned_copies_do_not_alias_storage(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let original = task("t-1", "list-a", TaskPriority::Low, &clock)?;
    task_repo.create(&original).await?;

    let mut copy = task_repo.get_by_id(original.id()).await?;
    let revision = revision_of(&copy, TaskStatus::Completed, TaskPriority::High);
    copy.revise(revision, &clock);

    let fetched = task_repo.get_by_id(original.id()).await?;
    eyre::ensure!(fetched == original, "mutating a copy changed storage");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_create_is_rejected_without_mutation(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let original = task("t-1", "list-a", TaskPriority::Low, &clock)?;
    task_repo.create(&original).await?;
    let impostor = task("t-1", "list-b", TaskPriority::High, &clock)?;

    let result = task_repo.create(&impostor).await;

    let Err(err) = result else {
        eyre::bail!("duplicate create should fail");
    };
    eyre::ensure!(
        matches!(err, TaskRepositoryError::DuplicateTask(_)),
        "unexpected error: {err}"
    );
    eyre::ensure!(err.kind() == ErrorKind::AlreadyExists, "wrong kind");
    eyre::ensure!(
        task_repo.get_by_id(original.id()).await? == original,
        "duplicate create changed storage"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_update_and_delete_leave_storage_untouched(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let kept = task("t-1", "list-a", TaskPriority::Low, &clock)?;
    task_repo.create(&kept).await?;
    let ghost = task("ghost", "list-a", TaskPriority::Low, &clock)?;

    let update = task_repo.update(&ghost).await;
    let delete = task_repo.delete(&TaskId::new("ghost")).await;

    eyre::ensure!(
        matches!(update, Err(TaskRepositoryError::NotFound(_))),
        "update of a missing task should be NotFound"
    );
    eyre::ensure!(
        matches!(delete, Err(TaskRepositoryError::NotFound(_))),
        "delete of a missing task should be NotFound"
    );
    eyre::ensure!(task_repo.get_all().await? == vec![kept], "storage changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeps_the_stored_creation_time(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let original = task("t-1", "list-a", TaskPriority::Low, &clock)?;
    task_repo.create(&original).await?;
    let replacement = task("t-1", "list-b", TaskPriority::High, &clock)?;

    task_repo.update(&replacement).await?;

    let fetched = task_repo.get_by_id(original.id()).await?;
    eyre::ensure!(fetched.list_id() == "list-b", "list id not replaced");
    eyre::ensure!(
        fetched.created_at() == original.created_at(),
        "creation time changed"
    );
    eyre::ensure!(
        fetched.updated_at() == replacement.updated_at(),
        "update time not taken from the update"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_newest_first(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    for id in ["first", "second", "third"] {
        task_repo
            .create(&task(id, "", TaskPriority::Medium, &clock)?)
            .await?;
    }

    let ids: Vec<String> = task_repo
        .get_all()
        .await?
        .iter()
        .map(|stored| stored.id().as_str().to_owned())
        .collect();

    eyre::ensure!(ids == ["third", "second", "first"], "unexpected order: {ids:?}");
    Ok(())
}

#[rstest]
#[case(TaskFilter::any(), &["t-4", "t-3", "t-2", "t-1"])]
#[case(TaskFilter::any().with_status(TaskStatus::Completed), &["t-3", "t-1"])]
#[case(TaskFilter::any().with_priority(TaskPriority::High), &["t-4", "t-1"])]
#[case(
    TaskFilter::any()
        .with_status(TaskStatus::Completed)
        .with_priority(TaskPriority::High),
    &["t-1"]
)]
#[case(
    TaskFilter::any()
        .with_status(TaskStatus::InProgress)
        .with_priority(TaskPriority::Low),
    &[]
)]
#[tokio::test(flavor = "multi_thread")]
async fn filters_combine_with_and(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
    #[case] filter: TaskFilter,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    let fixtures = [
        ("t-1", TaskPriority::High, TaskStatus::Completed),
        ("t-2", TaskPriority::Low, TaskStatus::Pending),
        ("t-3", TaskPriority::Low, TaskStatus::Completed),
        ("t-4", TaskPriority::High, TaskStatus::Pending),
    ];
    for (id, priority, status) in fixtures {
        let mut stored = task(id, "list-a", priority, &clock)?;
        let revision = revision_of(&stored, status, priority);
        stored.revise(revision, &clock);
        task_repo.create(&stored).await?;
    }

    let ids: Vec<String> = task_repo
        .get_by_filters(&filter)
        .await?
        .iter()
        .map(|stored| stored.id().as_str().to_owned())
        .collect();

    eyre::ensure!(ids == expected, "unexpected matches: {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn counts_agree_with_client_side_tally(
    task_repo: InMemoryTaskRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let fixtures = [
        ("a-1", "list-a", TaskStatus::Completed),
        ("a-2", "list-a", TaskStatus::Pending),
        ("a-3", "list-a", TaskStatus::InProgress),
        ("a-4", "list-a", TaskStatus::Pending),
        ("b-1", "list-b", TaskStatus::Completed),
    ];
    for (id, list_id, status) in fixtures {
        let mut stored = task(id, list_id, TaskPriority::Medium, &clock)?;
        let revision = revision_of(&stored, status, TaskPriority::Medium);
        stored.revise(revision, &clock);
        task_repo.create(&stored).await?;
    }

    let mut counted_total = 0;
    for status in [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ] {
        counted_total += task_repo
            .count_by_list_id_and_status("list-a", status)
            .await?;
    }
    let completed = task_repo
        .count_by_list_id_and_status("list-a", TaskStatus::Completed)
        .await?;
    let from_counts = CompletionTally::new(completed, counted_total);
    let from_tasks = CompletionTally::from_tasks(&task_repo.get_all().await?, "list-a");

    eyre::ensure!(from_counts == from_tasks, "tallies disagree");
    eyre::ensure!(from_counts.percentage() == 25.0, "expected 25%");
    Ok(())
}
