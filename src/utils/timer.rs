/// Suspends the calling task for `ms` milliseconds on whichever runtime the
/// current renderer drives.
#[cfg(feature = "web")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(all(not(feature = "web"), any(feature = "server", feature = "desktop")))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

// No timer source without a renderer; resolve immediately.
#[cfg(not(any(feature = "web", feature = "server", feature = "desktop")))]
pub async fn sleep_ms(_ms: u32) {}
