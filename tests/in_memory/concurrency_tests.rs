//! Parallel callers sharing one in-memory store.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use taskdeck::logging::Logger;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskService},
};
use tokio::task::JoinSet;

const CALLERS: usize = 64;

fn shared_service() -> Arc<TaskService<InMemoryTaskRepository, DefaultClock>> {
    Arc::new(
        TaskService::new(
            Arc::new(InMemoryTaskRepository::with_logger(Logger::disabled())),
            Arc::new(DefaultClock),
        )
        .with_logger(Logger::disabled()),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_stored() -> eyre::Result<()> {
    let service = shared_service();
    let mut callers = JoinSet::new();
    for index in 0..CALLERS {
        let caller = Arc::clone(&service);
        callers.spawn(async move {
            caller
                .create(CreateTaskRequest::new(format!("task {index}")).with_list_id("shared"))
                .await
        });
    }
    while let Some(joined) = callers.join_next().await {
        joined??;
    }

    let all = service.get_all().await?;
    eyre::ensure!(all.len() == CALLERS, "expected {CALLERS}, got {}", all.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_and_writers_interleave_safely() -> eyre::Result<()> {
    let repository = Arc::new(InMemoryTaskRepository::with_logger(Logger::disabled()));
    let service = Arc::new(
        TaskService::new(Arc::clone(&repository), Arc::new(DefaultClock))
            .with_logger(Logger::disabled()),
    );
    let mut callers = JoinSet::new();
    for index in 0..CALLERS {
        let writer = Arc::clone(&service);
        let reader = Arc::clone(&repository);
        callers.spawn(async move {
            writer
                .create(CreateTaskRequest::new(format!("task {index}")))
                .await?;
            let seen = reader.get_all().await?;
            eyre::ensure!(!seen.is_empty(), "reader saw an empty store after a write");
            Ok::<(), eyre::Report>(())
        });
    }
    while let Some(joined) = callers.join_next().await {
        joined??;
    }

    eyre::ensure!(repository.get_all().await?.len() == CALLERS, "lost writes");
    Ok(())
}
