//! In-memory integration tests for task list storage.

use super::helpers::{TickingClock, clock, list_repo, task_list};
use rstest::rstest;
use taskdeck::error::ErrorKind;
use taskdeck::task_list::{
    adapters::memory::InMemoryTaskListRepository,
    domain::{TaskListId, TaskListName},
    ports::{TaskListRepository, TaskListRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_lists_round_trip_and_list_newest_first(
    list_repo: InMemoryTaskListRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let older = task_list("l-1", "Work", &clock)?;
    let newer = task_list("l-2", "Home", &clock)?;
    list_repo.create(&older).await?;
    list_repo.create(&newer).await?;

    eyre::ensure!(list_repo.get_by_id(older.id()).await? == older, "lookup differs");
    eyre::ensure!(
        list_repo.get_all().await? == vec![newer, older],
        "lists not newest first"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_list_is_already_exists(
    list_repo: InMemoryTaskListRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let list = task_list("l-1", "Work", &clock)?;
    list_repo.create(&list).await?;

    let Err(err) = list_repo.create(&list).await else {
        eyre::bail!("duplicate create should fail");
    };

    eyre::ensure!(
        matches!(err, TaskListRepositoryError::DuplicateTaskList(_)),
        "unexpected error: {err}"
    );
    eyre::ensure!(err.kind() == ErrorKind::AlreadyExists, "wrong kind");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeps_creation_time_and_delete_removes(
    list_repo: InMemoryTaskListRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let list = task_list("l-1", "Work", &clock)?;
    list_repo.create(&list).await?;
    let mut renamed = list.clone();
    renamed.amend(Some(TaskListName::new("Office")?), None, &clock);

    list_repo.update(&renamed).await?;
    let fetched = list_repo.get_by_id(list.id()).await?;
    eyre::ensure!(fetched.name().as_str() == "Office", "name not replaced");
    eyre::ensure!(fetched.created_at() == list.created_at(), "creation time changed");

    list_repo.delete(list.id()).await?;
    let Err(err) = list_repo.get_by_id(list.id()).await else {
        eyre::bail!("deleted list is still stored");
    };
    eyre::ensure!(err.kind() == ErrorKind::NotFound, "wrong kind");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_list_update_and_delete_are_not_found(
    list_repo: InMemoryTaskListRepository,
    clock: TickingClock,
) -> eyre::Result<()> {
    let ghost = task_list("ghost", "Nowhere", &clock)?;

    let update = list_repo.update(&ghost).await;
    let delete = list_repo.delete(&TaskListId::new("ghost")).await;

    eyre::ensure!(
        matches!(update, Err(TaskListRepositoryError::NotFound(_))),
        "update should be NotFound"
    );
    eyre::ensure!(
        matches!(delete, Err(TaskListRepositoryError::NotFound(_))),
        "delete should be NotFound"
    );
    eyre::ensure!(list_repo.get_all().await?.is_empty(), "storage changed");
    Ok(())
}
