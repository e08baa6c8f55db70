//! Correlation-scope propagation under real concurrency.

use std::sync::Arc;
use std::time::Duration;
use tests::CaptureSink;
use tracelog_core::{context, Logger};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_scopes_never_leak_into_each_other() {
    let mut handles = Vec::new();

    for n in 0..8 {
        let id = format!("work-{n}");
        handles.push(tokio::spawn(context::scope(id.clone(), async move {
            for _ in 0..25 {
                assert_eq!(context::current().as_deref(), Some(id.as_str()));
                // Force suspension so tasks interleave across worker threads.
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })));
    }

    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(context::current(), None);
}

#[tokio::test]
async fn id_survives_deep_async_call_chains() {
    async fn innermost() -> Option<String> {
        tokio::task::yield_now().await;
        context::current()
    }

    async fn middle() -> Option<String> {
        tokio::time::sleep(Duration::from_millis(1)).await;
        innermost().await
    }

    let seen = context::scope("deep-1", middle()).await;
    assert_eq!(seen.as_deref(), Some("deep-1"));
}

#[tokio::test]
async fn nested_scopes_shadow_then_restore() {
    context::scope("outer", async {
        assert_eq!(context::current().as_deref(), Some("outer"));

        let inner_seen = context::scope("inner", async {
            tokio::task::yield_now().await;
            context::current()
        })
        .await;
        assert_eq!(inner_seen.as_deref(), Some("inner"));

        assert_eq!(context::current().as_deref(), Some("outer"));
    })
    .await;
}

#[tokio::test]
async fn scope_is_torn_down_on_error_paths() {
    async fn failing() -> Result<(), &'static str> {
        tokio::task::yield_now().await;
        Err("worker failed")
    }

    let result = context::scope("doomed", failing()).await;
    assert!(result.is_err());
    assert_eq!(context::current(), None);
}

#[tokio::test]
async fn scope_is_torn_down_when_task_is_cancelled() {
    let handle = tokio::spawn(context::scope("cancelled", async {
        tokio::time::sleep(Duration::from_secs(60)).await;
    }));

    tokio::task::yield_now().await;
    handle.abort();
    assert!(handle.await.is_err());

    // The aborting task's scope never existed here to begin with, and no
    // global slot was left holding its id.
    assert_eq!(context::current(), None);
}

#[tokio::test]
async fn shared_logger_stamps_each_chain_with_its_own_id() {
    let sink = CaptureSink::shared();
    let logger = Arc::new(Logger::with_sink("worker", sink.clone()));

    let mut handles = Vec::new();
    for n in 0..4 {
        let logger = logger.clone();
        let id = format!("chain-{n}");
        handles.push(tokio::spawn(context::scope(id, async move {
            for step in 0..5 {
                logger.info(&format!("step {step}"), &[]).await;
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 20);
    for n in 0..4 {
        let id = format!("[chain-{n}]");
        let count = lines.iter().filter(|line| line.contains(&id)).count();
        assert_eq!(count, 5, "every chain logs under exactly its own id");
    }
}
