//! Deferred UI work (simulated submit latency, toast auto-dismiss).

/// Run `f` after `ms` milliseconds in the browser. Outside a browser build
/// there is no event loop to wait on, so `f` runs immediately.
pub fn run_after(ms: u64, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        f();
    }
}
