use once_cell::sync::Lazy;
use std::future::Future;
use tokio::task::JoinError;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

/// Run `fut` on the shared runtime and wait for it from any executor.
pub async fn offload<T, F>(fut: F) -> Result<T, JoinError>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    RUNTIME.spawn(fut).await
}

/// Spawn a handler on the GTK main context.
pub fn spawn_local<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    glib::MainContext::default().spawn_local(fut);
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
