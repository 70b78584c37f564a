use anyhow::{Context, Result};

/// Runs short local work (SQLite, dialogs) inline on the UI thread.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}

/// Runs network-bound work on the runtime's blocking pool so the UI keeps rendering.
pub async fn run_off_ui_thread<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .context("background task failed")
}
