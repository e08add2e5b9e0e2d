//! Hand-off between the async main task and blocking client calls

use anyhow::Context;

/// Run `work` on tokio's blocking pool and await its result
///
/// The client blocks its calling thread, so it must never run directly on an
/// async worker thread.
pub async fn on_worker<T, F>(work: F) -> anyhow::Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .context("worker task did not complete")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_worker_result() {
        let value = on_worker(|| Ok(21 * 2)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_propagates_worker_error() {
        let err = on_worker::<(), _>(|| Err(anyhow::anyhow!("boom"))).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn test_runs_off_the_async_thread() {
        let caller = std::thread::current().id();
        let worker = on_worker(|| Ok(std::thread::current().id())).await.unwrap();
        assert_ne!(caller, worker);
    }
}
